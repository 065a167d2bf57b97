//! Hand landmark parsing
//!
//! The estimator reports 21 landmarks per hand as a flat float array.
//! Only hand 0 crosses the JS boundary and only the index fingertip
//! (landmark 8) is consumed by the game.

use glam::Vec2;

use crate::mirror_x;

pub const LANDMARKS_PER_HAND: usize = 21;
pub const COORDS_PER_LANDMARK: usize = 3;

pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_TIP: usize = 12;
pub const RING_TIP: usize = 16;
pub const PINKY_TIP: usize = 20;

/// A single landmark point in video pixel space
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Per-frame estimator output consumed by the game
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    /// Index fingertip, mirrored into screen space
    pub fingertip: Vec2,
}

/// Parse the flat payload (21 landmarks x 3 coordinates) for the first
/// detected hand. An empty or short payload means no hand this frame.
pub fn parse_hand(flat: &[f32]) -> Option<[Landmark; LANDMARKS_PER_HAND]> {
    if flat.len() < LANDMARKS_PER_HAND * COORDS_PER_LANDMARK {
        return None;
    }

    let mut landmarks = [Landmark::default(); LANDMARKS_PER_HAND];
    for (i, landmark) in landmarks.iter_mut().enumerate() {
        let base = i * COORDS_PER_LANDMARK;
        *landmark = Landmark {
            x: flat[base],
            y: flat[base + 1],
            z: flat[base + 2],
        };
    }
    Some(landmarks)
}

/// Extract the mirrored fingertip sample used for slicing and the trail
pub fn sample_from_flat(flat: &[f32], screen_width: f32) -> Option<GestureSample> {
    let landmarks = parse_hand(flat)?;
    let tip = landmarks[INDEX_TIP];
    Some(GestureSample {
        fingertip: Vec2::new(mirror_x(tip.x, screen_width), tip.y),
    })
}
