//! Data-driven game balance
//!
//! Numbers that shape gameplay live here so an embedding page can retune
//! them without a rebuild (see `FRUIT_SLASH_CONFIG` in `settings`).

use serde::{Deserialize, Serialize};

/// Gameplay balance knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tuning {
    /// Frames between fruit spawns
    pub spawn_interval: u32,
    /// Horizontal inset from both screen edges for spawn positions
    pub spawn_inset: f32,
    /// Spawn height (above the visible area)
    pub spawn_y: f32,
    /// Horizontal launch velocity magnitude (uniform in +/- this)
    pub spawn_vx: f32,
    /// Upward launch velocity magnitude (uniform in [-this, 0))
    pub spawn_vy: f32,
    /// Downward acceleration per frame
    pub gravity: f32,
    /// Sprite edge length; the hitbox radius is half of this
    pub fruit_size: f32,
    /// Per-frame growth of the half separation once cut
    pub split_speed: f32,
    /// Frames a trail point stays visible
    pub trail_lifetime: u32,
    /// Fruits below screen height + this margin are pruned
    pub prune_margin: f32,
    /// Hard cap on concurrently live fruits
    pub max_fruits: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            spawn_interval: 40,
            spawn_inset: 100.0,
            spawn_y: -50.0,
            spawn_vx: 1.0,
            spawn_vy: 2.0,
            gravity: 0.3,
            fruit_size: 120.0,
            split_speed: 4.0,
            trail_lifetime: 90,
            prune_margin: 150.0,
            max_fruits: 64,
        }
    }
}
