use serde::{Deserialize, Serialize};

/// Classification verdict for one message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckVerdict {
    /// Class label, "spam" or "ham"
    pub prediction: String,

    pub is_spam: bool,

    /// Confidence of the winning class, 0.0..=1.0
    pub probability: f64,
}

/// Error body returned with a non-2xx status.
///
/// The `error` field is optional on the wire; an absent or empty message
/// means the client falls back to its generic error text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub error: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
