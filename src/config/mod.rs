//! Configuration handling for the application.
//!
//! Everything is read from environment variables with development defaults,
//! so the binaries run out of the box against the public inference API.
//! Numeric knobs (chunk size, truncation windows) are validated at load time
//! because a zero chunk size would make the analyzer loop forever.

use thiserror::Error;

use std::env;

use crate::analyzer::AnalysisLimits;

/// Environment variable names. Public so tests and deployment tooling can
/// refer to them.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_INFERENCE_API_URL: &str = "INFERENCE_API_URL";
pub const ENV_INFERENCE_API_TOKEN: &str = "INFERENCE_API_TOKEN";
pub const ENV_CHUNK_SIZE: &str = "CHUNK_SIZE";
pub const ENV_SUMMARY_WINDOW: &str = "SUMMARY_WINDOW";
pub const ENV_ENTITY_WINDOW: &str = "ENTITY_WINDOW";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_INFERENCE_API_URL: &str = "https://api-inference.huggingface.co";

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    inference_api_url: String,
    inference_api_token: Option<String>,
    limits: AnalysisLimits,
}

impl Config {
    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let inference_api_url = env::var(ENV_INFERENCE_API_URL)
            .unwrap_or_else(|_| DEFAULT_INFERENCE_API_URL.to_string());
        let inference_api_token = env::var(ENV_INFERENCE_API_TOKEN).ok();

        let defaults = AnalysisLimits::default();
        let limits = AnalysisLimits {
            chunk_size: read_size(ENV_CHUNK_SIZE, defaults.chunk_size)?,
            summary_window: read_size(ENV_SUMMARY_WINDOW, defaults.summary_window)?,
            entity_window: read_size(ENV_ENTITY_WINDOW, defaults.entity_window)?,
        };

        Ok(Self {
            bind_addr,
            inference_api_url,
            inference_api_token,
            limits,
        })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    /// Base URL of the hosted inference API.
    pub fn inference_api_url(&self) -> &str {
        &self.inference_api_url
    }

    /// Optional bearer token for the inference API.
    pub fn inference_api_token(&self) -> Option<&str> {
        self.inference_api_token.as_deref()
    }

    /// Chunking and truncation windows for the analyzer.
    pub fn limits(&self) -> AnalysisLimits {
        self.limits
    }
}

fn read_size(key: &'static str, default: usize) -> Result<usize, ConfigError> {
    let Ok(raw) = env::var(key) else {
        return Ok(default);
    };
    let value: usize = raw.parse().map_err(|_| ConfigError::InvalidValue {
        field: key,
        reason: format!("expected a positive integer, got '{raw}'"),
    })?;
    if value == 0 {
        return Err(ConfigError::InvalidValue {
            field: key,
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(value)
}

/// Errors that can occur while building a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Ensure environment-variable manipulating tests run serially.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for key in [
            ENV_BIND_ADDR,
            ENV_INFERENCE_API_URL,
            ENV_INFERENCE_API_TOKEN,
            ENV_CHUNK_SIZE,
            ENV_SUMMARY_WINDOW,
            ENV_ENTITY_WINDOW,
        ] {
            unsafe {
                env::remove_var(key);
            }
        }
    }

    #[test]
    fn defaults_when_env_missing() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.bind_addr(), DEFAULT_BIND_ADDR);
        assert_eq!(cfg.inference_api_url(), DEFAULT_INFERENCE_API_URL);
        assert_eq!(cfg.inference_api_token(), None);
        assert_eq!(cfg.limits(), AnalysisLimits::default());
    }

    #[test]
    fn overrides_when_env_present() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        unsafe {
            env::set_var(ENV_BIND_ADDR, "0.0.0.0:9000");
            env::set_var(ENV_INFERENCE_API_URL, "http://localhost:8089");
            env::set_var(ENV_INFERENCE_API_TOKEN, "hf_test");
            env::set_var(ENV_CHUNK_SIZE, "256");
            env::set_var(ENV_SUMMARY_WINDOW, "2048");
        }
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.bind_addr(), "0.0.0.0:9000");
        assert_eq!(cfg.inference_api_url(), "http://localhost:8089");
        assert_eq!(cfg.inference_api_token(), Some("hf_test"));
        assert_eq!(cfg.limits().chunk_size, 256);
        assert_eq!(cfg.limits().summary_window, 2048);
        assert_eq!(
            cfg.limits().entity_window,
            AnalysisLimits::default().entity_window
        );
        clear_env();
    }

    #[test]
    fn rejects_zero_chunk_size() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        unsafe {
            env::set_var(ENV_CHUNK_SIZE, "0");
        }
        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: ENV_CHUNK_SIZE,
                ..
            }
        ));
        clear_env();
    }

    #[test]
    fn rejects_non_numeric_window() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        unsafe {
            env::set_var(ENV_SUMMARY_WINDOW, "lots");
        }
        assert!(Config::from_env().is_err());
        clear_env();
    }
}
