//! Authoritative session state: score, lives, combo, power-up timers.
//!
//! Mutation happens only through the named operations below; each queues a
//! change notification the orchestrator drains and publishes once per tick.
//! Rendering never reaches in here.

use crate::consts::*;
use crate::entity::powerup::PowerUpKind;
use crate::events::GameEvent;

/// One temporary effect countdown. `time_left_ms` is positive whenever
/// `active` is true.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PowerUpTimer {
    pub active: bool,
    pub time_left_ms: f32,
}

#[derive(Debug, Clone)]
pub struct GameState {
    score: u64,
    lives: u8,
    combo: u32,
    high_score: u64,
    pub frame_count: u64,
    speed_boost: PowerUpTimer,
    time_freeze: PowerUpTimer,
    score_multiplier: PowerUpTimer,
    /// Notifications queued by mutators, drained once per tick
    pending: Vec<GameEvent>,
}

impl GameState {
    pub fn new(high_score: u64) -> Self {
        Self {
            score: 0,
            lives: STARTING_LIVES,
            combo: COMBO_MIN,
            high_score,
            frame_count: 0,
            speed_boost: PowerUpTimer::default(),
            time_freeze: PowerUpTimer::default(),
            score_multiplier: PowerUpTimer::default(),
            pending: Vec::new(),
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    /// Derived difficulty level
    pub fn level(&self) -> u32 {
        (self.score / POINTS_PER_LEVEL) as u32 + 1
    }

    pub fn is_game_over(&self) -> bool {
        self.lives == 0
    }

    /// Add points (already combo/multiplier-scaled by the caller). Keeps
    /// `high_score >= score` and reports level crossings.
    pub fn add_score(&mut self, points: u64) {
        if points == 0 {
            return;
        }
        let old_level = self.level();
        self.score += points;
        self.pending.push(GameEvent::ScoreChanged {
            score: self.score,
            delta: points,
        });
        if self.score > self.high_score {
            self.high_score = self.score;
            self.pending.push(GameEvent::HighScoreChanged {
                high_score: self.high_score,
            });
        }
        let level = self.level();
        if level != old_level {
            self.pending.push(GameEvent::LevelChanged { level });
        }
    }

    /// Set the combo directly; any input clamps into [COMBO_MIN, COMBO_MAX]
    pub fn set_combo(&mut self, combo: i64) {
        let clamped = combo.clamp(COMBO_MIN as i64, COMBO_MAX as i64) as u32;
        if clamped != self.combo {
            self.combo = clamped;
            self.pending.push(GameEvent::ComboChanged { combo: clamped });
        }
    }

    pub fn increment_combo(&mut self, step: u32) {
        self.set_combo(self.combo as i64 + step as i64);
    }

    pub fn reset_combo(&mut self) {
        self.set_combo(COMBO_MIN as i64);
    }

    /// Charge one life. Returns the lives remaining.
    pub fn lose_life(&mut self) -> u8 {
        if self.lives > 0 {
            self.lives -= 1;
            self.pending.push(GameEvent::LivesChanged { lives: self.lives });
        }
        self.lives
    }

    pub fn advance_frame(&mut self) {
        self.frame_count += 1;
    }

    pub fn power_up(&self, kind: PowerUpKind) -> &PowerUpTimer {
        match kind {
            PowerUpKind::SpeedBoost => &self.speed_boost,
            PowerUpKind::TimeFreeze => &self.time_freeze,
            PowerUpKind::ScoreMultiplier => &self.score_multiplier,
        }
    }

    fn power_up_mut(&mut self, kind: PowerUpKind) -> &mut PowerUpTimer {
        match kind {
            PowerUpKind::SpeedBoost => &mut self.speed_boost,
            PowerUpKind::TimeFreeze => &mut self.time_freeze,
            PowerUpKind::ScoreMultiplier => &mut self.score_multiplier,
        }
    }

    /// Start (or restart) a power-up at its full per-kind duration
    pub fn activate_power_up(&mut self, kind: PowerUpKind) {
        let timer = self.power_up_mut(kind);
        timer.active = true;
        timer.time_left_ms = kind.duration_ms();
        self.pending.push(GameEvent::PowerUpActivated { kind });
    }

    /// Count down active power-ups, deactivating any that run out
    pub fn tick_power_ups(&mut self, dt_ms: f32) {
        for kind in PowerUpKind::ALL {
            let timer = self.power_up_mut(kind);
            if !timer.active {
                continue;
            }
            timer.time_left_ms -= dt_ms;
            if timer.time_left_ms <= 0.0 {
                timer.active = false;
                timer.time_left_ms = 0.0;
                self.pending.push(GameEvent::PowerUpExpired { kind });
            }
        }
    }

    /// Ingredient fall-speed factor from the active speed boost (if any).
    /// Time freeze deliberately does not touch this.
    pub fn speed_multiplier(&self) -> f32 {
        if self.speed_boost.active {
            PowerUpKind::SpeedBoost.speed_factor()
        } else {
            1.0
        }
    }

    pub fn score_factor(&self) -> u64 {
        if self.score_multiplier.active {
            PowerUpKind::ScoreMultiplier.score_factor()
        } else {
            1
        }
    }

    pub fn freeze_active(&self) -> bool {
        self.time_freeze.active
    }

    /// Queue an event that does not originate from a state mutator
    pub fn push_event(&mut self, event: GameEvent) {
        self.pending.push(event);
    }

    /// Take the queued notifications for publishing
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending)
    }
}
