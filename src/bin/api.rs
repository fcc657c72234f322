use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use gist::{analyzer::handlers, app_state::AppState, config::Config, health, models::ModelSet};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let state = AppState::new(
        ModelSet::hosted(config.inference_api_url(), config.inference_api_token()),
        config.limits(),
    );

    let app = Router::new()
        .route("/healthz", get(health::health_check))
        .route("/analyze", post(handlers::analyze))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = config.bind_addr(), "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
