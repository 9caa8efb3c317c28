pub mod common;
pub mod u101_check_spam;
