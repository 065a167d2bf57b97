//! Pluggable on-slice feedback
//!
//! A slice can trigger a sound effect, a word reveal, or both. Handlers
//! live behind one trait so the shell can install any mix of them without
//! duplicating the game loop.

use crate::sim::SliceEvent;

mod word;
pub use word::{Overlay, WordFeedback};

#[cfg(target_arch = "wasm32")]
mod sound;
#[cfg(target_arch = "wasm32")]
pub use sound::SoundFeedback;

/// A handler invoked for every successful slice
pub trait SliceFeedback {
    /// A WHOLE fruit was just cut
    fn on_slice(&mut self, event: &SliceEvent);

    /// The reveal word finished this frame (broadcast once to every handler)
    fn on_word_complete(&mut self) {}

    /// Renderable feedback state, if this handler has any
    fn overlay(&self) -> Option<Overlay> {
        None
    }
}
