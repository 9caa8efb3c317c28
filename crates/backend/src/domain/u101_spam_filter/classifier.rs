use std::collections::{HashMap, HashSet};
use thiserror::Error;

use super::lexicon::{Label, SEED_CORPUS, STOP_WORDS};

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("training corpus is empty")]
    EmptyCorpus,

    #[error("training corpus has no {0} examples")]
    MissingClass(&'static str),
}

/// Prediction for a single message
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: Label,
    /// Confidence of the winning class, 0.0..=1.0
    pub probability: f64,
}

impl Prediction {
    pub fn is_spam(&self) -> bool {
        self.label == Label::Spam
    }
}

/// Multinomial naive Bayes over word counts with Laplace smoothing.
pub struct SpamFilter {
    spam_words: HashMap<String, usize>,
    ham_words: HashMap<String, usize>,
    spam_count: usize,
    ham_count: usize,
    total_spam_words: usize,
    total_ham_words: usize,
    vocabulary: HashSet<String>,
}

impl SpamFilter {
    /// Train on the built-in seed corpus
    pub fn train() -> Result<Self, ModelError> {
        Self::train_on(SEED_CORPUS)
    }

    fn train_on(corpus: &[(&str, Label)]) -> Result<Self, ModelError> {
        if corpus.is_empty() {
            return Err(ModelError::EmptyCorpus);
        }

        let mut filter = Self {
            spam_words: HashMap::new(),
            ham_words: HashMap::new(),
            spam_count: 0,
            ham_count: 0,
            total_spam_words: 0,
            total_ham_words: 0,
            vocabulary: HashSet::new(),
        };

        for (text, label) in corpus {
            let words = preprocess(text);
            filter.vocabulary.extend(words.iter().cloned());

            let (counts, messages, words_total) = match label {
                Label::Spam => (
                    &mut filter.spam_words,
                    &mut filter.spam_count,
                    &mut filter.total_spam_words,
                ),
                Label::Ham => (
                    &mut filter.ham_words,
                    &mut filter.ham_count,
                    &mut filter.total_ham_words,
                ),
            };

            *messages += 1;
            *words_total += words.len();
            for word in words {
                *counts.entry(word).or_insert(0) += 1;
            }
        }

        if filter.spam_count == 0 {
            return Err(ModelError::MissingClass("spam"));
        }
        if filter.ham_count == 0 {
            return Err(ModelError::MissingClass("ham"));
        }

        Ok(filter)
    }

    /// Classify a message and report the winning class with its probability.
    pub fn predict(&self, text: &str) -> Prediction {
        let words = preprocess(text);

        let total_messages = (self.spam_count + self.ham_count) as f64;
        let mut spam_score = (self.spam_count as f64 / total_messages).ln();
        let mut ham_score = (self.ham_count as f64 / total_messages).ln();

        let vocab_size = self.vocabulary.len();
        let spam_denominator = (self.total_spam_words + vocab_size) as f64;
        let ham_denominator = (self.total_ham_words + vocab_size) as f64;

        for word in &words {
            let spam_word_count = self.spam_words.get(word).copied().unwrap_or(0);
            let ham_word_count = self.ham_words.get(word).copied().unwrap_or(0);

            // Laplace smoothing keeps unseen words from zeroing a class out
            spam_score += ((spam_word_count + 1) as f64 / spam_denominator).ln();
            ham_score += ((ham_word_count + 1) as f64 / ham_denominator).ln();
        }

        let label = if spam_score > ham_score {
            Label::Spam
        } else {
            Label::Ham
        };

        // exp-normalized posterior of the winning class, computed as a
        // sigmoid of the score gap so long messages cannot underflow
        let (winner, loser) = if label == Label::Spam {
            (spam_score, ham_score)
        } else {
            (ham_score, spam_score)
        };
        let probability = 1.0 / (1.0 + (loser - winner).exp());

        Prediction { label, probability }
    }
}

/// Lowercase, strip punctuation and digits, drop stop words and short tokens
fn preprocess(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation() && !c.is_ascii_digit())
        .collect();

    cleaned
        .split_whitespace()
        .filter(|word| word.len() > 2 && !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preprocess_drops_noise() {
        assert_eq!(
            preprocess("FREE!!! money 2024, for you"),
            vec!["free".to_string(), "money".to_string()]
        );
        assert_eq!(preprocess("is it on?"), Vec::<String>::new());
    }

    #[test]
    fn test_spammy_text_is_flagged() {
        let filter = SpamFilter::train().unwrap();
        let prediction = filter.predict("Click here to claim your free prize money now!");
        assert_eq!(prediction.label, Label::Spam);
        assert!(prediction.is_spam());
        assert!(prediction.probability > 0.5);
        assert!(prediction.probability <= 1.0);
    }

    #[test]
    fn test_plain_text_is_ham() {
        let filter = SpamFilter::train().unwrap();
        let prediction = filter.predict("hello, are you coming to the meeting tomorrow?");
        assert_eq!(prediction.label, Label::Ham);
        assert!(!prediction.is_spam());
        assert!(prediction.probability > 0.5);
    }

    #[test]
    fn test_no_signal_falls_back_to_priors() {
        let filter = SpamFilter::train().unwrap();
        // Every token is filtered out, leaving only the equal class priors
        let prediction = filter.predict("it is on");
        assert_eq!(prediction.label, Label::Ham);
        assert!((prediction.probability - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_single_class_corpus_is_rejected() {
        let corpus = [("free money now", Label::Spam)];
        assert!(matches!(
            SpamFilter::train_on(&corpus),
            Err(ModelError::MissingClass("ham"))
        ));
    }
}
