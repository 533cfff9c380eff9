//! Customer orders: an ordered ingredient sequence against a countdown.

use super::ConfigError;
use super::ingredient::IngredientKind;

use IngredientKind::*;

/// Immutable order recipe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderTemplate {
    pub name: &'static str,
    pub ingredients: &'static [IngredientKind],
    /// Time budget, seconds
    pub time_secs: f32,
}

pub const ORDER_TEMPLATES: [OrderTemplate; 6] = [
    OrderTemplate {
        name: "Plain Burger",
        ingredients: &[BunBottom, Patty, BunTop],
        time_secs: 20.0,
    },
    OrderTemplate {
        name: "Cheeseburger",
        ingredients: &[BunBottom, Patty, Cheese, BunTop],
        time_secs: 25.0,
    },
    OrderTemplate {
        name: "Veggie Stack",
        ingredients: &[BunBottom, Lettuce, Tomato, Onion, BunTop],
        time_secs: 30.0,
    },
    OrderTemplate {
        name: "Bacon Deluxe",
        ingredients: &[BunBottom, Patty, Bacon, Cheese, BunTop],
        time_secs: 30.0,
    },
    OrderTemplate {
        name: "Breakfast Burger",
        ingredients: &[BunBottom, Patty, Egg, Bacon, BunTop],
        time_secs: 32.0,
    },
    OrderTemplate {
        name: "The Works",
        ingredients: &[BunBottom, Patty, Cheese, Lettuce, Tomato, Pickle, BunTop],
        time_secs: 40.0,
    },
];

pub fn template_by_name(name: &str) -> Result<&'static OrderTemplate, ConfigError> {
    ORDER_TEMPLATES
        .iter()
        .find(|t| t.name == name)
        .ok_or_else(|| ConfigError::UnknownOrder(name.to_string()))
}

/// Outcome of presenting one ingredient to an order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientCheck {
    /// Matched the next required ingredient
    Correct,
    /// Matched and finished the sequence
    Completed,
    /// Mismatch, or the order is already terminal; no state changed
    Wrong,
}

/// An active order working through its template
#[derive(Debug, Clone)]
pub struct Order {
    pub template: &'static OrderTemplate,
    /// Progress pointer into the template sequence
    pub current_index: usize,
    pub time_left_ms: f32,
    pub completed: bool,
    pub expired: bool,
}

impl Order {
    pub fn new(template: &'static OrderTemplate) -> Self {
        Self {
            template,
            current_index: 0,
            time_left_ms: template.time_secs * 1000.0,
            completed: false,
            expired: false,
        }
    }

    pub fn name(&self) -> &'static str {
        self.template.name
    }

    pub fn next_required(&self) -> Option<IngredientKind> {
        self.template.ingredients.get(self.current_index).copied()
    }

    pub fn seconds_remaining(&self) -> f32 {
        self.time_left_ms / 1000.0
    }

    pub fn is_terminal(&self) -> bool {
        self.completed || self.expired
    }

    /// Count down unless completed or frozen. Returns false exactly once, on
    /// the tick the order expires; the caller must charge a life for it.
    pub fn update(&mut self, dt_ms: f32, freeze_active: bool) -> bool {
        if self.completed || self.expired {
            return !self.expired;
        }
        if !freeze_active {
            self.time_left_ms -= dt_ms;
        }
        if self.time_left_ms <= 0.0 {
            self.time_left_ms = 0.0;
            self.expired = true;
            return false;
        }
        true
    }

    /// Advance the progress pointer when `kind` is the next required
    /// ingredient; mismatches leave the order untouched.
    pub fn check_ingredient(&mut self, kind: IngredientKind) -> IngredientCheck {
        if self.is_terminal() {
            return IngredientCheck::Wrong;
        }
        if self.next_required() == Some(kind) {
            self.current_index += 1;
            if self.current_index == self.template.ingredients.len() {
                self.completed = true;
                IngredientCheck::Completed
            } else {
                IngredientCheck::Correct
            }
        } else {
            IngredientCheck::Wrong
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc_order() -> Order {
        // Plain Burger: bun_bottom, patty, bun_top
        Order::new(&ORDER_TEMPLATES[0])
    }

    #[test]
    fn test_check_sequence_progression() {
        let mut order = abc_order();

        assert_eq!(order.check_ingredient(BunBottom), IngredientCheck::Correct);
        assert_eq!(order.current_index, 1);

        // Out-of-order ingredient: rejected, pointer unchanged
        assert_eq!(order.check_ingredient(BunTop), IngredientCheck::Wrong);
        assert_eq!(order.current_index, 1);

        assert_eq!(order.check_ingredient(Patty), IngredientCheck::Correct);
        assert_eq!(order.check_ingredient(BunTop), IngredientCheck::Completed);
        assert!(order.completed);

        // Terminal orders reject everything
        assert_eq!(order.check_ingredient(BunBottom), IngredientCheck::Wrong);
        assert_eq!(order.current_index, 3);
    }

    #[test]
    fn test_expiry_fires_exactly_once() {
        let mut order = abc_order();
        assert!(order.update(19_999.0, false));
        // Crossing zero: the one false return
        assert!(!order.update(2.0, false));
        assert!(order.expired);
        assert_eq!(order.time_left_ms, 0.0);
        // Subsequent updates keep reporting invalid without re-expiring
        assert!(!order.update(16.7, false));
    }

    #[test]
    fn test_freeze_halts_countdown() {
        let mut order = abc_order();
        let before = order.time_left_ms;
        assert!(order.update(5_000.0, true));
        assert_eq!(order.time_left_ms, before);
    }

    #[test]
    fn test_completed_order_never_expires() {
        let mut order = abc_order();
        order.check_ingredient(BunBottom);
        order.check_ingredient(Patty);
        order.check_ingredient(BunTop);
        assert!(order.completed);
        assert!(order.update(60_000.0, false));
        assert!(!order.expired);
    }

    #[test]
    fn test_template_lookup() {
        assert_eq!(template_by_name("The Works").unwrap().ingredients.len(), 7);
        assert!(matches!(
            template_by_name("Mystery Meal"),
            Err(ConfigError::UnknownOrder(_))
        ));
    }
}
