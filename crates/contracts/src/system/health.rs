use serde::{Deserialize, Serialize};

/// Body of GET /health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub model_trained: bool,
}

impl HealthStatus {
    pub fn ok(model_trained: bool) -> Self {
        Self {
            status: "ok".to_string(),
            model_trained,
        }
    }
}
