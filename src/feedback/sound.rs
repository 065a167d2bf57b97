//! Sound-effect feedback

use super::SliceFeedback;
use crate::audio::{AudioManager, SoundEffect};
use crate::sim::SliceEvent;

/// Plays the slice sound; a re-trigger restarts it from the beginning
pub struct SoundFeedback {
    audio: AudioManager,
}

impl SoundFeedback {
    pub fn new(audio: AudioManager) -> Self {
        Self { audio }
    }
}

impl SliceFeedback for SoundFeedback {
    fn on_slice(&mut self, _event: &SliceEvent) {
        self.audio.play(SoundEffect::Slice);
    }

    fn on_word_complete(&mut self) {
        self.audio.play(SoundEffect::WordComplete);
    }
}
