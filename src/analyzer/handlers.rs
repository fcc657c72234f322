use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::analyzer::analyze_url;
use crate::app_state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    pub url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "analysis",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Full analysis record as JSON"),
        (status = 422, description = "Content unavailable or empty for this URL"),
        (status = 502, description = "A model invocation failed")
    )
)]
pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Response {
    match analyze_url(&payload.url, &state.models, &state.limits).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(err) if err.is_recoverable() => {
            warn!(url = %payload.url, %err, "no result for url");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
        Err(err) => {
            error!(url = %payload.url, %err, "analysis failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::AnalysisLimits;
    use crate::models::{
        MockEntityRecognizer, MockSentimentClassifier, MockSummarizer, ModelSet,
    };
    use axum::{Router, body::Body, http::Request, routing::post};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn create_test_app() -> Router {
        // No model may be touched on the failure paths these tests drive.
        let state = AppState::new(
            ModelSet::new(
                Arc::new(MockSentimentClassifier::new()),
                Arc::new(MockSummarizer::new()),
                Arc::new(MockEntityRecognizer::new()),
            ),
            AnalysisLimits::default(),
        );

        Router::new()
            .route("/analyze", post(analyze))
            .with_state(state)
    }

    #[tokio::test]
    async fn invalid_url_is_unprocessable_not_a_crash() {
        let app = create_test_app();

        let request = Request::builder()
            .method("POST")
            .uri("/analyze")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::json!({ "url": "not-a-valid-url" }).to_string(),
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn unreachable_host_is_unprocessable() {
        let app = create_test_app();

        // Nothing listens on port 1.
        let request = Request::builder()
            .method("POST")
            .uri("/analyze")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::json!({ "url": "http://127.0.0.1:1/article" }).to_string(),
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn missing_body_is_rejected_by_extractor_layer() {
        let app = create_test_app();

        let request = Request::builder()
            .method("POST")
            .uri("/analyze")
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
