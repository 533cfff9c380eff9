//! Typed change notifications and the subscriber bus.
//!
//! State mutators queue events; the orchestrator publishes them once per
//! tick. A failing subscriber is logged and skipped so one bad listener
//! cannot break the remaining notifications or game state consistency.

use thiserror::Error;

use crate::entity::powerup::PowerUpKind;
use crate::perf::{PerformanceLevel, QualitySettings};

/// Everything observable about a session, as discrete notifications
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    ScoreChanged { score: u64, delta: u64 },
    HighScoreChanged { high_score: u64 },
    ComboChanged { combo: u32 },
    LivesChanged { lives: u8 },
    LevelChanged { level: u32 },
    PowerUpActivated { kind: PowerUpKind },
    PowerUpExpired { kind: PowerUpKind },
    OrderCompleted { name: &'static str, bonus: u64 },
    OrderExpired { name: &'static str },
    PerformanceLevelChanged {
        old: PerformanceLevel,
        new: PerformanceLevel,
        settings: QualitySettings,
    },
    GameOver { score: u64, high_score: u64 },
}

/// Error a subscriber may report; isolated per subscriber by the bus
#[derive(Debug, Error)]
#[error("{0}")]
pub struct SubscriberError(pub String);

type Callback = Box<dyn FnMut(&GameEvent) -> Result<(), SubscriberError>>;

struct Subscriber {
    name: &'static str,
    callback: Callback,
}

/// Ordered list of named subscribers; notification order = subscription order
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Subscriber>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber. The name is used only for log attribution.
    pub fn subscribe(
        &mut self,
        name: &'static str,
        callback: impl FnMut(&GameEvent) -> Result<(), SubscriberError> + 'static,
    ) {
        self.subscribers.push(Subscriber {
            name,
            callback: Box::new(callback),
        });
    }

    /// Notify every subscriber in order, continuing past failures.
    pub fn publish(&mut self, event: &GameEvent) {
        for sub in &mut self.subscribers {
            if let Err(e) = (sub.callback)(event) {
                log::warn!("event subscriber '{}' failed on {:?}: {}", sub.name, event, e);
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_publish_reaches_all_subscribers() {
        let mut bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        for tag in ["a", "b"] {
            let seen = seen.clone();
            bus.subscribe("test", move |ev| {
                if let GameEvent::ScoreChanged { score, .. } = ev {
                    seen.borrow_mut().push((tag, *score));
                }
                Ok(())
            });
        }

        bus.publish(&GameEvent::ScoreChanged { score: 42, delta: 42 });
        assert_eq!(&*seen.borrow(), &[("a", 42), ("b", 42)]);
    }

    #[test]
    fn test_failing_subscriber_does_not_block_later_ones() {
        let mut bus = EventBus::new();
        let reached = Rc::new(RefCell::new(false));

        bus.subscribe("bad", |_| Err(SubscriberError("boom".into())));
        {
            let reached = reached.clone();
            bus.subscribe("good", move |_| {
                *reached.borrow_mut() = true;
                Ok(())
            });
        }

        bus.publish(&GameEvent::ComboChanged { combo: 3 });
        assert!(*reached.borrow());
    }
}
