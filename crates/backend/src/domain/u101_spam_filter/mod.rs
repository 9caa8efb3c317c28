//! Naive Bayes spam filter trained on a built-in seed corpus.

pub mod classifier;
pub mod lexicon;

pub use classifier::{ModelError, Prediction, SpamFilter};

use once_cell::sync::OnceCell;

static MODEL: OnceCell<SpamFilter> = OnceCell::new();

/// Train the model and install it as the process-wide singleton.
/// Called once at startup, before the server accepts requests.
pub fn initialize_model() -> Result<(), ModelError> {
    let filter = SpamFilter::train()?;
    // A second initialization is a no-op; the first trained model wins
    let _ = MODEL.set(filter);
    Ok(())
}

pub fn model() -> &'static SpamFilter {
    MODEL.get().expect("Spam filter model has not been trained")
}

pub fn is_model_ready() -> bool {
    MODEL.get().is_some()
}
