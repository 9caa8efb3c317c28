use serde::{Deserialize, Serialize};

/// Request to classify a single message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRequest {
    /// Message text, trimmed of surrounding whitespace by the client
    pub message: String,
}
