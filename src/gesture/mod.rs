//! Camera-tracked hand input
//!
//! `landmarks` holds the pure parsing/mirroring logic; `tracker` is the
//! wasm-side bridge that polls the external hand-pose estimator without
//! blocking the frame loop.

pub mod landmarks;

pub use landmarks::{GestureSample, INDEX_TIP, Landmark, parse_hand, sample_from_flat};

#[cfg(target_arch = "wasm32")]
pub mod tracker;

#[cfg(target_arch = "wasm32")]
pub use tracker::HandTracker;
