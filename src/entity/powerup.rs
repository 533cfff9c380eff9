//! Collectible power-ups granting temporary global effects.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::physics::{self, Bounds, HitShape};

/// Fall speed, pixels per frame
pub const POWER_UP_FALL_SPEED: f32 = 2.0;
/// Circular hit radius
pub const POWER_UP_RADIUS: f32 = 22.0;

/// The three power-up effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Ingredients fall at half speed
    SpeedBoost,
    /// Order countdowns halt (ingredient fall speed is unaffected)
    TimeFreeze,
    /// Points are doubled
    ScoreMultiplier,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [
        PowerUpKind::SpeedBoost,
        PowerUpKind::TimeFreeze,
        PowerUpKind::ScoreMultiplier,
    ];

    /// Effect duration, fixed per kind
    pub fn duration_ms(self) -> f32 {
        match self {
            PowerUpKind::SpeedBoost => 8_000.0,
            PowerUpKind::TimeFreeze => 5_000.0,
            PowerUpKind::ScoreMultiplier => 10_000.0,
        }
    }

    /// Ingredient fall-speed factor while active
    pub fn speed_factor(self) -> f32 {
        match self {
            PowerUpKind::SpeedBoost => 0.5,
            _ => 1.0,
        }
    }

    /// Score factor while active
    pub fn score_factor(self) -> u64 {
        match self {
            PowerUpKind::ScoreMultiplier => 2,
            _ => 1,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            PowerUpKind::SpeedBoost => "speed_boost",
            PowerUpKind::TimeFreeze => "time_freeze",
            PowerUpKind::ScoreMultiplier => "score_multiplier",
        }
    }

    pub fn from_key(key: &str) -> Result<Self, ConfigError> {
        Self::ALL
            .into_iter()
            .find(|k| k.key() == key)
            .ok_or_else(|| ConfigError::UnknownPowerUp(key.to_string()))
    }
}

/// A falling power-up pickup
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub pos: Vec2,
    pub collected: bool,
}

impl PowerUp {
    pub fn new(kind: PowerUpKind, x: f32) -> Self {
        Self {
            kind,
            pos: Vec2::new(x, -POWER_UP_RADIUS),
            collected: false,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.pos.y += POWER_UP_FALL_SPEED * dt;
    }

    pub fn is_clicked(&self, x: f32, y: f32) -> bool {
        physics::is_clicked(
            x,
            y,
            self.pos,
            HitShape::Circle {
                radius: POWER_UP_RADIUS,
            },
        )
    }

    pub fn is_off_screen(&self, bounds: &Bounds) -> bool {
        self.pos.y > bounds.height + POWER_UP_RADIUS
    }
}
