use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;

/// Configuration of all application routes
pub fn configure_routes(dist_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(handlers::health::health))
        // UseCase u101: classify a message
        .route("/check_spam", post(handlers::u101_check_spam::check_spam))
        .fallback_service(ServeDir::new(dist_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}

/// Per-request access log: method, path, status, duration
async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    tracing::info!(
        %method,
        path,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        "request"
    );

    response
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use contracts::system::health::HealthStatus;
    use contracts::usecases::u101_check_spam::{ApiError, CheckVerdict};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::configure_routes;
    use crate::domain::u101_spam_filter;

    fn app() -> axum::Router {
        u101_spam_filter::initialize_model().expect("seed corpus must train");
        configure_routes("dist")
    }

    fn post_check_spam(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/check_spam")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request must build")
    }

    #[tokio::test]
    async fn test_check_spam_classifies_spam() {
        let response = app()
            .oneshot(post_check_spam(
                r#"{"message": "Congratulations, you won free prize money! Click now!"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let verdict: CheckVerdict = serde_json::from_slice(&bytes).unwrap();
        assert!(verdict.is_spam);
        assert_eq!(verdict.prediction, "spam");
        assert!(verdict.probability >= 0.0 && verdict.probability <= 1.0);
    }

    #[tokio::test]
    async fn test_check_spam_classifies_ham() {
        let response = app()
            .oneshot(post_check_spam(
                r#"{"message": "are we still meeting for lunch tomorrow?"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let verdict: CheckVerdict = serde_json::from_slice(&bytes).unwrap();
        assert!(!verdict.is_spam);
        assert_eq!(verdict.prediction, "ham");
    }

    #[tokio::test]
    async fn test_empty_message_returns_400_with_error_body() {
        let response = app()
            .oneshot(post_check_spam(r#"{"message": "   "}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.error, "No message provided");
    }

    #[tokio::test]
    async fn test_health_reports_trained_model() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let health: HealthStatus = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(health.status, "ok");
        assert!(health.model_trained);
    }
}
