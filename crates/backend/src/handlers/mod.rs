pub mod health;
pub mod u101_check_spam;
