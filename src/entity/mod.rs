//! Game entities: ingredients, orders, power-ups, particles.
//!
//! Entities are plain values; they live in the orchestrator's collections
//! and hold no references to each other. Type registries are immutable
//! statics looked up by enum key; an unknown key parsed from external input
//! is a programming error and fails fast.

pub mod ingredient;
pub mod order;
pub mod particle;
pub mod powerup;

pub use ingredient::{Ingredient, IngredientKind};
pub use order::{IngredientCheck, Order, OrderTemplate, ORDER_TEMPLATES};
pub use particle::Particle;
pub use powerup::{PowerUp, PowerUpKind};

use thiserror::Error;

/// Unknown registry keys - indicates a programming error, not runtime data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown ingredient kind '{0}'")]
    UnknownIngredient(String),
    #[error("unknown power-up kind '{0}'")]
    UnknownPowerUp(String),
    #[error("unknown order template '{0}'")]
    UnknownOrder(String),
}
