//! Word-reveal feedback: one letter per slice

use super::SliceFeedback;
use crate::sim::{RevealState, SliceEvent};

/// Word overlay data handed to the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    /// Target word with hidden letters as `_`
    pub masked: String,
    pub complete: bool,
}

/// Hangman-style reveal driven by slices
pub struct WordFeedback {
    reveal: RevealState,
}

impl WordFeedback {
    pub fn new(target: &str) -> Self {
        Self {
            reveal: RevealState::new(target),
        }
    }

    pub fn reveal(&self) -> &RevealState {
        &self.reveal
    }
}

impl SliceFeedback for WordFeedback {
    fn on_slice(&mut self, _event: &SliceEvent) {
        self.reveal.reveal_next();
    }

    fn overlay(&self) -> Option<Overlay> {
        Some(Overlay {
            masked: self.reveal.masked_string('_'),
            complete: self.reveal.is_complete(),
        })
    }
}
