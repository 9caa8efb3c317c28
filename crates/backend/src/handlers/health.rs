use axum::Json;
use contracts::system::health::HealthStatus;

use crate::domain::u101_spam_filter;

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok(u101_spam_filter::is_model_ready()))
}
