pub mod request;
pub mod response;

pub use request::CheckRequest;
pub use response::{ApiError, CheckVerdict};

use crate::usecases::common::UseCaseMetadata;

pub struct CheckSpam;

impl UseCaseMetadata for CheckSpam {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "check_spam"
    }

    fn display_name() -> &'static str {
        "Spam Check"
    }

    fn description() -> &'static str {
        "Classify a text message as spam or legitimate via the detection service"
    }
}
