pub mod u101_spam_filter;
