//! Stop words and the labelled seed corpus the model is trained on.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Common English stop words, excluded from the vocabulary
pub static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
        "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
        "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
        "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
        "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
        "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
        "for", "with", "through", "during", "before", "after", "above", "below", "up", "down",
        "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    ]
    .into_iter()
    .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Spam,
    Ham,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Spam => "spam",
            Label::Ham => "ham",
        }
    }
}

/// Labelled training phrases for the two classes
pub const SEED_CORPUS: &[(&str, Label)] = &[
    ("free money now click here urgent", Label::Spam),
    ("congratulations you won million dollars", Label::Spam),
    ("limited time offer click now", Label::Spam),
    ("urgent your account will be closed", Label::Spam),
    ("winner notification click claim prize", Label::Spam),
    ("call now free consultation", Label::Spam),
    ("credit card has been charged", Label::Spam),
    ("act now limited time", Label::Spam),
    ("earn money fast", Label::Spam),
    ("guarantee profit investment", Label::Spam),
    ("hello how are you today", Label::Ham),
    ("meeting tomorrow afternoon", Label::Ham),
    ("can you send report", Label::Ham),
    ("thanks for help yesterday", Label::Ham),
    ("looking forward weekend", Label::Ham),
    ("see you conference", Label::Ham),
    ("happy birthday great day", Label::Ham),
    ("project deadline next week", Label::Ham),
    ("lunch plans today", Label::Ham),
    ("good morning everyone", Label::Ham),
];
