//! Simulation state and entity types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// The fruit palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FruitKind {
    Orange,
    Strawberry,
    Apple,
    Watermelon,
}

impl FruitKind {
    pub const ALL: [FruitKind; 4] = [
        FruitKind::Orange,
        FruitKind::Strawberry,
        FruitKind::Apple,
        FruitKind::Watermelon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FruitKind::Orange => "orange",
            FruitKind::Strawberry => "strawberry",
            FruitKind::Apple => "apple",
            FruitKind::Watermelon => "watermelon",
        }
    }
}

/// A falling fruit entity
///
/// Two lifecycle phases: WHOLE (single sprite, full physics) and CUT
/// (two diverging halves, half-damped physics). The transition is one-way.
#[derive(Debug, Clone)]
pub struct Fruit {
    pub id: u32,
    pub kind: FruitKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub gravity: f32,
    /// One-way WHOLE -> CUT flag
    pub cut: bool,
    /// Sprite edge length; hitbox radius is half of this
    pub size: f32,
    /// Half separation of the cut halves (x grows every frame once cut)
    pub split: Vec2,
    pub split_speed: f32,
}

impl Fruit {
    /// Advance one frame of explicit Euler integration
    pub fn update(&mut self) {
        if !self.cut {
            self.pos += self.vel;
            self.vel.y += self.gravity;
        } else {
            self.split.x += self.split_speed;
            self.pos.x += self.vel.x * 0.5;
            self.pos.y += self.vel.y;
            self.vel.y += self.gravity * 0.5;
        }
    }

    /// Circular hitbox over the square sprite. Never hits once CUT.
    pub fn is_hit(&self, point: Vec2) -> bool {
        !self.cut && self.pos.distance(point) < self.size / 2.0
    }

    /// Transition WHOLE -> CUT; the halves start together and drift apart
    pub fn slice(&mut self) {
        self.cut = true;
        self.split = Vec2::ZERO;
    }
}

/// Short-lived marker left behind the tracked fingertip
#[derive(Debug, Clone, Copy)]
pub struct TrailPoint {
    pub pos: Vec2,
    /// Remaining frames; the point is dropped when this reaches zero
    pub lifetime: u32,
}

/// Emitted when a WHOLE fruit is sliced
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceEvent {
    pub fruit_id: u32,
    pub kind: FruitKind,
    pub pos: Vec2,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation frame counter
    pub frame: u64,
    /// Frames since the last spawn
    pub spawn_timer: u32,
    /// Screen size in canvas pixels
    pub bounds: Vec2,
    /// Active fruits
    pub fruits: Vec<Fruit>,
    /// Fingertip trail points
    pub trails: Vec<TrailPoint>,
    /// Slice events since the last drain
    pub events: Vec<SliceEvent>,
    /// Seeded RNG driving the spawner
    pub rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed and screen size
    pub fn new(seed: u64, bounds: Vec2) -> Self {
        Self {
            seed,
            frame: 0,
            spawn_timer: 0,
            bounds,
            fruits: Vec::new(),
            trails: Vec::new(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Update the screen size (window resize)
    pub fn resize(&mut self, bounds: Vec2) {
        self.bounds = bounds;
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Take the slice events accumulated since the last call
    pub fn drain_events(&mut self) -> Vec<SliceEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_fruit() -> Fruit {
        Fruit {
            id: 1,
            kind: FruitKind::Apple,
            pos: Vec2::new(500.0, 300.0),
            vel: Vec2::new(0.5, -2.0),
            gravity: 0.3,
            cut: false,
            size: 120.0,
            split: Vec2::ZERO,
            split_speed: 4.0,
        }
    }

    #[test]
    fn test_hit_inside_radius() {
        let fruit = test_fruit();
        assert!(fruit.is_hit(Vec2::new(500.0, 300.0)));
        assert!(fruit.is_hit(Vec2::new(559.0, 300.0)));
    }

    #[test]
    fn test_hit_boundary_is_miss() {
        // strict less-than: distance exactly size/2 does not hit
        let fruit = test_fruit();
        assert!(!fruit.is_hit(Vec2::new(560.0, 300.0)));
        assert!(!fruit.is_hit(Vec2::new(500.0, 360.0)));
    }

    #[test]
    fn test_cut_fruit_never_hit() {
        let mut fruit = test_fruit();
        fruit.slice();
        assert!(!fruit.is_hit(fruit.pos));
    }

    #[test]
    fn test_slice_is_one_way() {
        let mut fruit = test_fruit();
        assert!(!fruit.cut);
        fruit.slice();
        assert!(fruit.cut);
        // further updates never revert the phase
        for _ in 0..100 {
            fruit.update();
            assert!(fruit.cut);
        }
    }

    #[test]
    fn test_cut_halves_drift_apart() {
        let mut fruit = test_fruit();
        fruit.slice();
        fruit.update();
        assert!((fruit.split.x - 4.0).abs() < f32::EPSILON);
        fruit.update();
        assert!((fruit.split.x - 8.0).abs() < f32::EPSILON);
        assert_eq!(fruit.split.y, 0.0);
    }

    #[test]
    fn test_cut_physics_damping() {
        let mut whole = test_fruit();
        let mut cut = test_fruit();
        cut.slice();

        whole.update();
        cut.update();

        // cut halves keep full vertical motion but half horizontal drift
        assert!((cut.pos.x - 500.25).abs() < 1e-4);
        assert!((whole.pos.x - 500.5).abs() < 1e-4);
        assert!((cut.vel.y - (-2.0 + 0.15)).abs() < 1e-4);
        assert!((whole.vel.y - (-2.0 + 0.3)).abs() < 1e-4);
    }
}
