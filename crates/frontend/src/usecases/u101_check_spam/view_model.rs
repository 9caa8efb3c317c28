use leptos::prelude::*;

use super::api;
use super::state::{validate_message, CheckState};

/// ViewModel for the spam check form
///
/// Both fields are signals, so the struct is `Copy` and can move into the
/// view's event closures without cloning.
#[derive(Clone, Copy)]
pub struct CheckViewModel {
    pub message: RwSignal<String>,
    pub state: RwSignal<CheckState>,
}

impl CheckViewModel {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(String::new()),
            state: RwSignal::new(CheckState::Idle),
        }
    }

    /// Run one classification cycle.
    ///
    /// Validates locally before touching the network, and is a no-op while
    /// a cycle is already in flight. Whatever the outcome, the resulting
    /// state is never `Checking`, which re-enables the trigger.
    pub fn check_command(&self) {
        if self.state.get().is_checking() {
            return;
        }

        let message = match validate_message(&self.message.get()) {
            Ok(trimmed) => trimmed,
            Err(e) => {
                self.state.set(CheckState::Error(e.user_message()));
                return;
            }
        };

        let state = self.state;
        state.set(CheckState::Checking);

        wasm_bindgen_futures::spawn_local(async move {
            match api::check_spam(message).await {
                Ok(verdict) => state.set(CheckState::Success(verdict)),
                Err(e) => state.set(CheckState::Error(e.user_message())),
            }
        });
    }
}

impl Default for CheckViewModel {
    fn default() -> Self {
        Self::new()
    }
}
