//! Per-frame simulation tick
//!
//! Advances the spawner, integrates fruit physics, ages the trail,
//! hit-tests the fingertip and prunes off-screen fruits. One call per
//! simulated frame at 30 Hz.

use glam::Vec2;
use rand::Rng;

use super::state::{Fruit, FruitKind, GameState, SliceEvent, TrailPoint};
use crate::tuning::Tuning;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Mirrored screen-space fingertip, when a hand was detected this frame
    pub pointer: Option<Vec2>,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, tuning: &Tuning) {
    state.frame += 1;

    // Physics
    for fruit in &mut state.fruits {
        fruit.update();
    }

    // Spawner; a fruit inserted here takes its first physics step next frame
    state.spawn_timer += 1;
    if state.spawn_timer > tuning.spawn_interval {
        spawn_fruit(state, tuning);
        state.spawn_timer = 0;
    }

    // Trail: age out, then record this frame's sample
    for point in &mut state.trails {
        point.lifetime = point.lifetime.saturating_sub(1);
    }
    state.trails.retain(|p| p.lifetime > 0);
    if let Some(pos) = input.pointer {
        state.trails.push(TrailPoint {
            pos,
            lifetime: tuning.trail_lifetime,
        });
    }

    // Slicing: only WHOLE fruits can be hit
    if let Some(pointer) = input.pointer {
        let mut sliced = Vec::new();
        for fruit in &mut state.fruits {
            if fruit.is_hit(pointer) {
                fruit.slice();
                sliced.push(SliceEvent {
                    fruit_id: fruit.id,
                    kind: fruit.kind,
                    pos: fruit.pos,
                });
            }
        }
        state.events.extend(sliced);
    }

    // Pruning: the only deletion path for fruits
    let cutoff = state.bounds.y + tuning.prune_margin;
    state.fruits.retain(|f| f.pos.y < cutoff);
}

/// Insert one fruit with randomized position and launch velocity.
/// Skipped (timer still resets) when the hard cap is reached.
pub fn spawn_fruit(state: &mut GameState, tuning: &Tuning) {
    if state.fruits.len() >= tuning.max_fruits {
        log::warn!("fruit cap reached ({}), spawn skipped", tuning.max_fruits);
        return;
    }

    let kind = FruitKind::ALL[state.rng.random_range(0..FruitKind::ALL.len())];
    let x = state
        .rng
        .random_range(tuning.spawn_inset..state.bounds.x - tuning.spawn_inset);
    let vx = state.rng.random_range(-tuning.spawn_vx..tuning.spawn_vx);
    let vy = state.rng.random_range(-tuning.spawn_vy..0.0);

    let id = state.next_entity_id();
    state.fruits.push(Fruit {
        id,
        kind,
        pos: Vec2::new(x, tuning.spawn_y),
        vel: Vec2::new(vx, vy),
        gravity: tuning.gravity,
        cut: false,
        size: tuning.fruit_size,
        split: Vec2::ZERO,
        split_speed: tuning.split_speed,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn setup() -> (GameState, Tuning) {
        (
            GameState::new(12345, Vec2::new(1280.0, 720.0)),
            Tuning::default(),
        )
    }

    #[test]
    fn test_first_spawn_on_frame_41() {
        let (mut state, tuning) = setup();
        let input = TickInput::default();

        for _ in 0..40 {
            tick(&mut state, &input, &tuning);
        }
        assert!(state.fruits.is_empty());

        tick(&mut state, &input, &tuning);
        assert_eq!(state.fruits.len(), 1);
        assert_eq!(state.fruits[0].pos.y, -50.0);
        assert_eq!(state.spawn_timer, 0);
    }

    #[test]
    fn test_spawned_fruit_within_bounds() {
        let (mut state, tuning) = setup();
        let input = TickInput::default();
        for _ in 0..200 {
            tick(&mut state, &input, &tuning);
        }
        for fruit in &state.fruits {
            let x0 = fruit.pos.x;
            // spawn x is inset from both edges; a fruit drifts at most
            // spawn_vx per frame so a loose bound suffices here
            assert!(x0 > 0.0 && x0 < state.bounds.x);
            assert!(fruit.vel.x.abs() <= tuning.spawn_vx);
        }
    }

    #[test]
    fn test_whole_physics_closed_form() {
        // spawned at (500, -50) with vy=-2, gravity 0.3: after 10 steps
        // vy = -2 + 10*0.3 = 1.0 and y = -50 + sum(vy_i) = -56.5
        let mut fruit = Fruit {
            id: 1,
            kind: FruitKind::Orange,
            pos: Vec2::new(500.0, -50.0),
            vel: Vec2::new(0.0, -2.0),
            gravity: 0.3,
            cut: false,
            size: 120.0,
            split: Vec2::ZERO,
            split_speed: 4.0,
        };
        for _ in 0..10 {
            fruit.update();
        }
        assert!((fruit.vel.y - 1.0).abs() < 1e-4);
        assert!((fruit.pos.y - (-56.5)).abs() < 1e-3);
    }

    #[test]
    fn test_slice_emits_one_event() {
        let (mut state, tuning) = setup();
        spawn_fruit(&mut state, &tuning);
        let target = state.fruits[0].pos + Vec2::new(state.fruits[0].vel.x, state.fruits[0].vel.y);

        // pointer parked on the fruit's next position
        let input = TickInput {
            pointer: Some(target),
        };
        tick(&mut state, &input, &tuning);

        let events = state.drain_events();
        assert_eq!(events.len(), 1);
        assert!(state.fruits[0].cut);

        // a CUT fruit cannot be sliced again
        tick(&mut state, &input, &tuning);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_prune_below_screen() {
        let (mut state, tuning) = setup();
        spawn_fruit(&mut state, &tuning);
        state.fruits[0].pos.y = state.bounds.y + tuning.prune_margin + 1.0;
        state.fruits[0].vel = Vec2::ZERO;
        state.fruits[0].gravity = 0.0;

        tick(&mut state, &TickInput::default(), &tuning);
        assert!(state.fruits.is_empty());
    }

    #[test]
    fn test_prune_keeps_visible_fruits() {
        let (mut state, tuning) = setup();
        spawn_fruit(&mut state, &tuning);
        state.fruits[0].pos.y = state.bounds.y + tuning.prune_margin - 10.0;
        state.fruits[0].vel = Vec2::ZERO;
        state.fruits[0].gravity = 0.0;

        tick(&mut state, &TickInput::default(), &tuning);
        assert_eq!(state.fruits.len(), 1);
    }

    #[test]
    fn test_trail_lifetime_countdown() {
        let (mut state, tuning) = setup();
        let input = TickInput {
            pointer: Some(Vec2::new(200.0, 200.0)),
        };
        tick(&mut state, &input, &tuning);
        assert_eq!(state.trails.len(), 1);
        assert_eq!(state.trails[0].lifetime, tuning.trail_lifetime);

        // stop feeding samples; the point decays by exactly 1 per frame
        let idle = TickInput::default();
        for expected in (1..tuning.trail_lifetime).rev() {
            tick(&mut state, &idle, &tuning);
            assert_eq!(state.trails.len(), 1);
            assert_eq!(state.trails[0].lifetime, expected);
        }
        // removed exactly when the counter reaches zero
        tick(&mut state, &idle, &tuning);
        assert!(state.trails.is_empty());
    }

    #[test]
    fn test_fruit_hard_cap() {
        let (mut state, mut tuning) = setup();
        // spawn every frame, no gravity so nothing ever falls out
        tuning.spawn_interval = 0;
        tuning.gravity = 0.0;
        tuning.spawn_vy = f32::EPSILON;
        tuning.max_fruits = 5;

        let input = TickInput::default();
        for _ in 0..100 {
            tick(&mut state, &input, &tuning);
            assert!(state.fruits.len() <= tuning.max_fruits);
        }
        assert_eq!(state.fruits.len(), tuning.max_fruits);
    }

    #[test]
    fn test_determinism() {
        // Two states with the same seed and input sequence agree
        let tuning = Tuning::default();
        let mut state1 = GameState::new(99999, Vec2::new(1280.0, 720.0));
        let mut state2 = GameState::new(99999, Vec2::new(1280.0, 720.0));

        for frame in 0..300u64 {
            let pointer = if frame % 3 == 0 {
                Some(Vec2::new(640.0, 100.0 + frame as f32))
            } else {
                None
            };
            let input = TickInput { pointer };
            tick(&mut state1, &input, &tuning);
            tick(&mut state2, &input, &tuning);
        }

        assert_eq!(state1.frame, state2.frame);
        assert_eq!(state1.fruits.len(), state2.fruits.len());
        for (a, b) in state1.fruits.iter().zip(&state2.fruits) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.pos, b.pos);
            assert_eq!(a.cut, b.cut);
        }
    }

    proptest! {
        #[test]
        fn prop_hit_iff_inside_radius(px in -200.0f32..1500.0, py in -200.0f32..1500.0) {
            let fruit = Fruit {
                id: 1,
                kind: FruitKind::Watermelon,
                pos: Vec2::new(640.0, 360.0),
                vel: Vec2::ZERO,
                gravity: 0.3,
                cut: false,
                size: 120.0,
                split: Vec2::ZERO,
                split_speed: 4.0,
            };
            let point = Vec2::new(px, py);
            let inside = fruit.pos.distance(point) < fruit.size / 2.0;
            prop_assert_eq!(fruit.is_hit(point), inside);
        }
    }
}
