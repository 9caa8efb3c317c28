use axum::{http::StatusCode, Json};
use contracts::usecases::u101_check_spam::{ApiError, CheckRequest, CheckVerdict};

use crate::domain::u101_spam_filter;

/// POST /check_spam
///
/// Classifies one message. Whitespace-only input is rejected with 400 even
/// though the client validates too, so the service is safe to call directly.
pub async fn check_spam(
    Json(request): Json<CheckRequest>,
) -> Result<Json<CheckVerdict>, (StatusCode, Json<ApiError>)> {
    let message = request.message.trim();

    if message.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::new("No message provided")),
        ));
    }

    let prediction = u101_spam_filter::model().predict(message);

    tracing::info!(
        is_spam = prediction.is_spam(),
        probability = prediction.probability,
        "message classified"
    );

    Ok(Json(CheckVerdict {
        prediction: prediction.label.as_str().to_string(),
        is_spam: prediction.is_spam(),
        probability: prediction.probability,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_message_is_rejected() {
        let request = CheckRequest {
            message: "   \n\t ".to_string(),
        };
        let result = check_spam(Json(request)).await;
        let (status, Json(body)) = result.expect_err("whitespace-only message must be a 400");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "No message provided");
    }

    #[tokio::test]
    async fn test_valid_message_is_classified() {
        crate::domain::u101_spam_filter::initialize_model().unwrap();

        let request = CheckRequest {
            message: "free money click here now".to_string(),
        };
        let Json(verdict) = check_spam(Json(request))
            .await
            .expect("spammy message must classify");
        assert!(verdict.is_spam);
        assert_eq!(verdict.prediction, "spam");
        assert!(verdict.probability > 0.5 && verdict.probability <= 1.0);
    }
}
