//! Order Rush - a falling-ingredient order-stacking arcade game
//!
//! Core modules:
//! - `game`: The tick orchestrator (spawning, updates, input, scoring)
//! - `state`: Authoritative score/lives/combo/power-up store
//! - `entity`: Ingredients, orders, power-ups, particles
//! - `physics`: Stateless motion and collision math
//! - `pool`: Object pooling to avoid per-frame allocation churn
//! - `perf`: Adaptive performance-quality controller
//! - `events`: Typed change notifications with isolated subscribers

pub mod audio;
pub mod entity;
pub mod events;
pub mod game;
pub mod highscores;
pub mod perf;
pub mod physics;
pub mod pool;
pub mod state;

pub use events::{EventBus, GameEvent};
pub use game::{ClickEvent, Game, PointerKind};
pub use perf::{PerformanceLevel, PerformanceMonitor, QualitySettings};
pub use state::GameState;

/// Game configuration constants
pub mod consts {
    /// Nominal frame duration the simulation is scaled against (60 Hz)
    pub const FRAME_MS: f32 = 1000.0 / 60.0;
    /// Target frame rate for performance classification
    pub const TARGET_FPS: f32 = 60.0;

    /// Default playfield dimensions (CSS pixels)
    pub const CANVAS_WIDTH: f32 = 480.0;
    pub const CANVAS_HEIGHT: f32 = 640.0;

    /// Entity collection caps - overflow evicts the oldest entry
    pub const MAX_INGREDIENTS: usize = 25;
    pub const MAX_PARTICLES: usize = 20;
    pub const MAX_POWER_UPS: usize = 2;
    pub const MAX_ORDERS: usize = 3;

    /// Scoring
    pub const BASE_POINTS: u64 = 10;
    pub const ORDER_BONUS: u64 = 50;
    pub const COMBO_STEP: u32 = 1;
    /// Larger combo step awarded on order completion
    pub const ORDER_COMBO_STEP: u32 = 2;
    pub const COMBO_MIN: u32 = 1;
    pub const COMBO_MAX: u32 = 10;
    /// Score needed per derived level
    pub const POINTS_PER_LEVEL: u64 = 1000;

    pub const STARTING_LIVES: u8 = 3;

    /// Spawn pacing
    pub const INGREDIENT_SPAWN_INTERVAL: u64 = 45; // frames
    /// Per-frame chance of a new order while below the cap
    pub const ORDER_SPAWN_CHANCE: f64 = 0.004;
    /// Minimum gap between power-up spawns
    pub const POWER_UP_MIN_INTERVAL_MS: f32 = 15_000.0;

    /// Ingredient fall ramp: frames until full fall speed
    pub const FALL_RAMP_FRAMES: f32 = 90.0;
    /// Trail ring length and sub-sampling interval (frames)
    pub const TRAIL_LENGTH: usize = 8;
    pub const TRAIL_SAMPLE_INTERVAL: u64 = 3;

    /// Particle lifetime window (randomized per spawn)
    pub const PARTICLE_LIFE_MIN_MS: f32 = 1000.0;
    pub const PARTICLE_LIFE_MAX_MS: f32 = 2000.0;
}

/// Quadratic ease-in: slow start, full speed at t = 1
#[inline]
pub fn ease_in_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Cubic ease-out: fast start, gentle settle at t = 1
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_in_quad(0.0), 0.0);
        assert_eq!(ease_in_quad(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        // Out-of-range input clamps rather than extrapolating
        assert_eq!(ease_in_quad(2.0), 1.0);
        assert_eq!(ease_out_cubic(-1.0), 0.0);
    }

    #[test]
    fn test_ease_shapes() {
        // Ease-in stays below linear, ease-out above
        assert!(ease_in_quad(0.5) < 0.5);
        assert!(ease_out_cubic(0.5) > 0.5);
    }
}
