use contracts::usecases::u101_check_spam::CheckVerdict;

/// Validation text shown when the input is empty after trimming.
pub const EMPTY_MESSAGE_TEXT: &str = "Please enter a message";

/// Generic text shown when the service gives no usable error detail.
pub const FALLBACK_ERROR_TEXT: &str = "Something went wrong";

/// Control state of one classification cycle.
///
/// Each cycle moves `Idle -> Checking -> Success | Error`. The trigger is
/// usable again in every state except `Checking`, so the button label and
/// disabled flag derive from this value alone.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckState {
    Idle,
    Checking,
    Success(CheckVerdict),
    Error(String),
}

impl CheckState {
    pub fn is_checking(&self) -> bool {
        matches!(self, CheckState::Checking)
    }
}

/// Why a cycle produced no verdict.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckError {
    /// Input was empty after trimming; nothing was sent.
    EmptyMessage,
    /// Service answered non-2xx. Carries the server's `error` text when the
    /// body had one.
    Service(Option<String>),
    /// Request never completed or the body was unreadable.
    Transport,
}

impl CheckError {
    /// Text shown to the user. Server-provided detail is surfaced verbatim;
    /// everything else maps to a fixed string.
    pub fn user_message(&self) -> String {
        match self {
            CheckError::EmptyMessage => EMPTY_MESSAGE_TEXT.to_string(),
            CheckError::Service(Some(detail)) => detail.clone(),
            CheckError::Service(None) | CheckError::Transport => FALLBACK_ERROR_TEXT.to_string(),
        }
    }
}

/// Trim the raw textarea value and reject whitespace-only input.
pub fn validate_message(raw: &str) -> Result<String, CheckError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(CheckError::EmptyMessage)
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_trims_before_sending() {
        let message = validate_message("  hello there \n").expect("non-empty input must pass");
        assert_eq!(message, "hello there");
    }

    #[test]
    fn test_whitespace_only_input_is_rejected() {
        assert_eq!(validate_message("   \t\n"), Err(CheckError::EmptyMessage));
        assert_eq!(validate_message(""), Err(CheckError::EmptyMessage));
    }

    #[test]
    fn test_empty_message_maps_to_validation_text() {
        assert_eq!(
            CheckError::EmptyMessage.user_message(),
            "Please enter a message"
        );
    }

    #[test]
    fn test_service_detail_is_surfaced_verbatim() {
        let error = CheckError::Service(Some("rate limited".to_string()));
        assert_eq!(error.user_message(), "rate limited");
    }

    #[test]
    fn test_missing_detail_falls_back_to_generic_text() {
        assert_eq!(
            CheckError::Service(None).user_message(),
            "Something went wrong"
        );
        assert_eq!(CheckError::Transport.user_message(), "Something went wrong");
    }

    #[test]
    fn test_only_checking_blocks_the_trigger() {
        assert!(CheckState::Checking.is_checking());
        assert!(!CheckState::Idle.is_checking());
        assert!(!CheckState::Error("boom".to_string()).is_checking());
        assert!(!CheckState::Success(CheckVerdict {
            prediction: "ham".to_string(),
            is_spam: false,
            probability: 0.5,
        })
        .is_checking());
    }
}
