//! External model capabilities.
//!
//! The pipeline treats sentiment, summarization and entity recognition as
//! black boxes behind these traits. Implementations are constructed once at
//! process start and injected everywhere as a [`ModelSet`]; nothing in the
//! pipeline reaches for ambient global model state.

pub mod hosted;
pub mod types;

pub use hosted::HostedInference;
pub use types::{EntityMention, SentimentLabel, SentimentVote};

use async_trait::async_trait;

use std::sync::Arc;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Classify one bounded-length chunk of text.
    async fn classify(&self, text: &str) -> anyhow::Result<SentimentVote>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize a text prefix into a short abstract.
    async fn summarize(&self, text: &str) -> anyhow::Result<String>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntityRecognizer: Send + Sync {
    /// Recognize named-entity spans in a text prefix, in document order.
    async fn recognize(&self, text: &str) -> anyhow::Result<Vec<EntityMention>>;
}

/// The process-wide set of loaded models, cheap to clone and safe to reuse
/// across sequential requests.
#[derive(Clone)]
pub struct ModelSet {
    pub sentiment: Arc<dyn SentimentClassifier>,
    pub summarizer: Arc<dyn Summarizer>,
    pub entities: Arc<dyn EntityRecognizer>,
}

impl ModelSet {
    pub fn new(
        sentiment: Arc<dyn SentimentClassifier>,
        summarizer: Arc<dyn Summarizer>,
        entities: Arc<dyn EntityRecognizer>,
    ) -> Self {
        Self {
            sentiment,
            summarizer,
            entities,
        }
    }

    /// All three capabilities backed by the hosted inference API.
    pub fn hosted(base_url: &str, token: Option<&str>) -> Self {
        let api = Arc::new(HostedInference::new(base_url, token));
        Self {
            sentiment: api.clone(),
            summarizer: api.clone(),
            entities: api,
        }
    }
}
