//! Falling ingredients and their fixed type registry.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::consts::{FALL_RAMP_FRAMES, TRAIL_LENGTH, TRAIL_SAMPLE_INTERVAL};
use crate::ease_in_quad;
use crate::physics::{self, Bounds, HitShape};

/// The ten fixed ingredient types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IngredientKind {
    BunBottom,
    Patty,
    Cheese,
    Lettuce,
    Tomato,
    Onion,
    Pickle,
    Bacon,
    Egg,
    BunTop,
}

/// Per-kind tuning, looked up from the immutable registry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IngredientConfig {
    pub name: &'static str,
    /// Clickable square footprint (pixels)
    pub size: f32,
    /// Full fall speed (pixels per frame)
    pub base_speed: f32,
    /// Display hue, degrees
    pub hue: f32,
}

impl IngredientKind {
    pub const ALL: [IngredientKind; 10] = [
        IngredientKind::BunBottom,
        IngredientKind::Patty,
        IngredientKind::Cheese,
        IngredientKind::Lettuce,
        IngredientKind::Tomato,
        IngredientKind::Onion,
        IngredientKind::Pickle,
        IngredientKind::Bacon,
        IngredientKind::Egg,
        IngredientKind::BunTop,
    ];

    pub fn config(self) -> &'static IngredientConfig {
        match self {
            IngredientKind::BunBottom => &IngredientConfig {
                name: "bun_bottom",
                size: 48.0,
                base_speed: 2.2,
                hue: 36.0,
            },
            IngredientKind::Patty => &IngredientConfig {
                name: "patty",
                size: 46.0,
                base_speed: 2.6,
                hue: 20.0,
            },
            IngredientKind::Cheese => &IngredientConfig {
                name: "cheese",
                size: 42.0,
                base_speed: 2.4,
                hue: 50.0,
            },
            IngredientKind::Lettuce => &IngredientConfig {
                name: "lettuce",
                size: 44.0,
                base_speed: 1.8,
                hue: 110.0,
            },
            IngredientKind::Tomato => &IngredientConfig {
                name: "tomato",
                size: 40.0,
                base_speed: 2.8,
                hue: 4.0,
            },
            IngredientKind::Onion => &IngredientConfig {
                name: "onion",
                size: 38.0,
                base_speed: 2.5,
                hue: 290.0,
            },
            IngredientKind::Pickle => &IngredientConfig {
                name: "pickle",
                size: 34.0,
                base_speed: 3.0,
                hue: 85.0,
            },
            IngredientKind::Bacon => &IngredientConfig {
                name: "bacon",
                size: 44.0,
                base_speed: 2.9,
                hue: 12.0,
            },
            IngredientKind::Egg => &IngredientConfig {
                name: "egg",
                size: 40.0,
                base_speed: 2.3,
                hue: 46.0,
            },
            IngredientKind::BunTop => &IngredientConfig {
                name: "bun_top",
                size: 48.0,
                base_speed: 2.2,
                hue: 36.0,
            },
        }
    }

    pub fn key(self) -> &'static str {
        self.config().name
    }

    pub fn from_key(key: &str) -> Result<Self, ConfigError> {
        Self::ALL
            .into_iter()
            .find(|k| k.key() == key)
            .ok_or_else(|| ConfigError::UnknownIngredient(key.to_string()))
    }
}

/// A falling ingredient
#[derive(Debug, Clone)]
pub struct Ingredient {
    pub kind: IngredientKind,
    pub pos: Vec2,
    pub rotation: f32,
    rot_speed: f32,
    /// Base x the sway oscillates around
    sway_origin: f32,
    /// Phase offset so neighbors do not sway in lockstep
    sway_factor: f32,
    /// Frames since spawn, drives the fall ramp
    age_frames: f32,
    /// Recent positions for the visual trail, newest first
    pub trail: Vec<Vec2>,
}

impl Ingredient {
    pub fn new(kind: IngredientKind, x: f32, rot_speed: f32, sway_factor: f32) -> Self {
        let size = kind.config().size;
        Self {
            kind,
            pos: Vec2::new(x, -size),
            rotation: 0.0,
            rot_speed,
            sway_origin: x,
            sway_factor,
            age_frames: 0.0,
            trail: Vec::with_capacity(TRAIL_LENGTH),
        }
    }

    pub fn size(&self) -> f32 {
        self.kind.config().size
    }

    /// Advance the fall. `speed_multiplier` comes from the active speed-boost
    /// power-up (1.0 when none). `dt` is in nominal frames.
    pub fn update(&mut self, frame: u64, speed_multiplier: f32, dt: f32) {
        self.age_frames += dt;

        // Ease into full speed over the ramp window
        let ramp = ease_in_quad(self.age_frames / FALL_RAMP_FRAMES);
        let vy = self.kind.config().base_speed * ramp * speed_multiplier;
        self.pos.y += vy * dt;

        let t = self.age_frames / 60.0;
        self.pos.x = physics::apply_sway(self.sway_origin, t, self.sway_factor);

        self.rotation += self.rot_speed * dt;

        if frame % TRAIL_SAMPLE_INTERVAL == 0 {
            self.trail.insert(0, self.pos);
            self.trail.truncate(TRAIL_LENGTH);
        }
    }

    pub fn is_off_screen(&self, bounds: &Bounds) -> bool {
        self.pos.y > bounds.height + self.size()
    }

    pub fn is_clicked(&self, x: f32, y: f32) -> bool {
        physics::is_clicked(x, y, self.pos, HitShape::Square { size: self.size() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::SWAY_AMPLITUDE;

    #[test]
    fn test_key_round_trip() {
        for kind in IngredientKind::ALL {
            assert_eq!(IngredientKind::from_key(kind.key()).unwrap(), kind);
        }
        assert!(matches!(
            IngredientKind::from_key("ketchup"),
            Err(ConfigError::UnknownIngredient(_))
        ));
    }

    #[test]
    fn test_fall_ramps_up_to_full_speed() {
        let mut ing = Ingredient::new(IngredientKind::Patty, 100.0, 0.0, 0.0);
        let start_y = ing.pos.y;
        ing.update(1, 1.0, 1.0);
        let early_step = ing.pos.y - start_y;

        // Run past the ramp window
        for f in 2..200u64 {
            ing.update(f, 1.0, 1.0);
        }
        let before = ing.pos.y;
        ing.update(200, 1.0, 1.0);
        let late_step = ing.pos.y - before;

        assert!(early_step < late_step);
        assert!((late_step - IngredientKind::Patty.config().base_speed).abs() < 1e-3);
    }

    #[test]
    fn test_speed_boost_halves_fall() {
        let mut fast = Ingredient::new(IngredientKind::Tomato, 100.0, 0.0, 0.0);
        let mut slow = fast.clone();
        for f in 1..=120u64 {
            fast.update(f, 1.0, 1.0);
            slow.update(f, 0.5, 1.0);
        }
        assert!(slow.pos.y < fast.pos.y);
    }

    #[test]
    fn test_trail_is_bounded_and_newest_first() {
        let mut ing = Ingredient::new(IngredientKind::Cheese, 100.0, 0.0, 0.0);
        for f in 1..200u64 {
            ing.update(f, 1.0, 1.0);
        }
        assert_eq!(ing.trail.len(), TRAIL_LENGTH);
        // Newest sample sits at the front and is the lowest point
        assert!(ing.trail[0].y > ing.trail[TRAIL_LENGTH - 1].y);
    }

    #[test]
    fn test_sway_stays_near_origin() {
        let mut ing = Ingredient::new(IngredientKind::Onion, 200.0, 0.0, 0.3);
        for f in 1..600u64 {
            ing.update(f, 1.0, 1.0);
            assert!((ing.pos.x - 200.0).abs() <= SWAY_AMPLITUDE + 1e-3);
        }
    }

    #[test]
    fn test_off_screen_threshold() {
        let bounds = Bounds::new(480.0, 640.0);
        let mut ing = Ingredient::new(IngredientKind::Patty, 100.0, 0.0, 0.0);
        ing.pos.y = 640.0 + ing.size();
        assert!(!ing.is_off_screen(&bounds));
        ing.pos.y += 0.1;
        assert!(ing.is_off_screen(&bounds));
    }
}
