//! Adaptive performance-quality controller.
//!
//! Samples frame durations into a bounded ring, classifies one of four
//! quality levels from average FPS and dropped-frame rate, and commits a
//! level change only after a majority vote over the trailing samples so the
//! level cannot thrash frame to frame.

use serde::{Deserialize, Serialize};

use crate::consts::TARGET_FPS;

/// Frame duration samples kept for FPS statistics
pub const SAMPLE_WINDOW: usize = 60;
/// Classification samples kept for hysteresis
pub const HYSTERESIS_WINDOW: usize = 120;
/// Trailing samples that vote on a level change
pub const VOTE_WINDOW: usize = 30;
/// A frame longer than this multiple of the target frame time is "dropped"
pub const DROP_FACTOR: f32 = 1.5;

pub const LOW_FPS_THRESHOLD: f32 = 45.0;
pub const CRITICAL_FPS_THRESHOLD: f32 = 30.0;

/// Discrete quality tiers, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PerformanceLevel {
    High,
    Medium,
    Low,
    Critical,
}

impl PerformanceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceLevel::High => "high",
            PerformanceLevel::Medium => "medium",
            PerformanceLevel::Low => "low",
            PerformanceLevel::Critical => "critical",
        }
    }

    /// Rendering/particle budget bundle for this tier
    pub fn settings(&self) -> QualitySettings {
        match self {
            PerformanceLevel::High => QualitySettings {
                max_particles: 20,
                shadows: true,
                textures: true,
                effects: true,
                render_scale: 1.0,
            },
            PerformanceLevel::Medium => QualitySettings {
                max_particles: 15,
                shadows: false,
                textures: true,
                effects: true,
                render_scale: 1.0,
            },
            PerformanceLevel::Low => QualitySettings {
                max_particles: 8,
                shadows: false,
                textures: false,
                effects: true,
                render_scale: 0.75,
            },
            PerformanceLevel::Critical => QualitySettings {
                max_particles: 4,
                shadows: false,
                textures: false,
                effects: false,
                render_scale: 0.5,
            },
        }
    }
}

/// Quality-settings bundle consumed by the renderer and particle budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualitySettings {
    pub max_particles: usize,
    pub shadows: bool,
    pub textures: bool,
    pub effects: bool,
    pub render_scale: f32,
}

/// A committed level transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelChange {
    pub old: PerformanceLevel,
    pub new: PerformanceLevel,
    pub settings: QualitySettings,
}

pub struct PerformanceMonitor {
    enabled: bool,
    target_fps: f32,
    frame_ms: [f32; SAMPLE_WINDOW],
    frame_index: usize,
    frame_filled: usize,
    votes: [PerformanceLevel; HYSTERESIS_WINDOW],
    vote_index: usize,
    vote_filled: usize,
    current_level: PerformanceLevel,
}

impl Default for PerformanceMonitor {
    fn default() -> Self {
        Self::new(TARGET_FPS)
    }
}

impl PerformanceMonitor {
    pub fn new(target_fps: f32) -> Self {
        Self {
            enabled: true,
            target_fps,
            frame_ms: [0.0; SAMPLE_WINDOW],
            frame_index: 0,
            frame_filled: 0,
            votes: [PerformanceLevel::High; HYSTERESIS_WINDOW],
            vote_index: 0,
            vote_filled: 0,
            current_level: PerformanceLevel::High,
        }
    }

    pub fn level(&self) -> PerformanceLevel {
        self.current_level
    }

    pub fn settings(&self) -> QualitySettings {
        self.current_level.settings()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Record one frame duration. Returns a committed level change when the
    /// trailing-window majority disagrees with the current level.
    pub fn record_frame(&mut self, frame_ms: f32) -> Option<LevelChange> {
        if !self.enabled || frame_ms <= 0.0 {
            return None;
        }

        self.frame_ms[self.frame_index] = frame_ms;
        self.frame_index = (self.frame_index + 1) % SAMPLE_WINDOW;
        self.frame_filled = (self.frame_filled + 1).min(SAMPLE_WINDOW);

        let classified = self.classify();
        self.votes[self.vote_index] = classified;
        self.vote_index = (self.vote_index + 1) % HYSTERESIS_WINDOW;
        self.vote_filled = (self.vote_filled + 1).min(HYSTERESIS_WINDOW);

        if self.vote_filled < VOTE_WINDOW {
            return None;
        }

        let majority = self.trailing_majority(VOTE_WINDOW);
        if majority == self.current_level {
            return None;
        }

        let old = self.current_level;
        self.current_level = majority;
        let settings = majority.settings();
        log::info!(
            "performance level {} -> {} (avg {:.1} fps, {:.0}% dropped)",
            old.as_str(),
            majority.as_str(),
            self.average_fps(),
            self.drop_rate() * 100.0
        );
        Some(LevelChange {
            old,
            new: majority,
            settings,
        })
    }

    /// Force a level, pre-filling the vote ring so it does not immediately
    /// revert on the next few frames.
    pub fn set_level(&mut self, level: PerformanceLevel) {
        self.current_level = level;
        self.votes = [level; HYSTERESIS_WINDOW];
        self.vote_filled = HYSTERESIS_WINDOW;
    }

    /// FPS implied by the most recent frame
    pub fn current_fps(&self) -> f32 {
        if self.frame_filled == 0 {
            return self.target_fps;
        }
        let last = (self.frame_index + SAMPLE_WINDOW - 1) % SAMPLE_WINDOW;
        1000.0 / self.frame_ms[last].max(1e-3)
    }

    pub fn average_fps(&self) -> f32 {
        if self.frame_filled == 0 {
            return self.target_fps;
        }
        let sum: f32 = self.frame_ms[..self.frame_filled].iter().sum();
        1000.0 / (sum / self.frame_filled as f32).max(1e-3)
    }

    pub fn min_fps(&self) -> f32 {
        self.frame_ms[..self.frame_filled]
            .iter()
            .fold(f32::INFINITY, |m, &ms| m.min(1000.0 / ms.max(1e-3)))
    }

    pub fn max_fps(&self) -> f32 {
        self.frame_ms[..self.frame_filled]
            .iter()
            .fold(0.0, |m: f32, &ms| m.max(1000.0 / ms.max(1e-3)))
    }

    /// Frames in the sample window exceeding the drop threshold
    pub fn dropped_frames(&self) -> usize {
        let threshold = DROP_FACTOR * 1000.0 / self.target_fps;
        self.frame_ms[..self.frame_filled]
            .iter()
            .filter(|&&ms| ms > threshold)
            .count()
    }

    pub fn drop_rate(&self) -> f32 {
        if self.frame_filled == 0 {
            return 0.0;
        }
        self.dropped_frames() as f32 / self.frame_filled as f32
    }

    fn classify(&self) -> PerformanceLevel {
        let avg = self.average_fps();
        let drops = self.drop_rate();
        if avg >= 0.9 * self.target_fps && drops < 0.10 {
            PerformanceLevel::High
        } else if avg >= LOW_FPS_THRESHOLD && drops < 0.20 {
            PerformanceLevel::Medium
        } else if avg >= CRITICAL_FPS_THRESHOLD && drops < 0.40 {
            PerformanceLevel::Low
        } else {
            PerformanceLevel::Critical
        }
    }

    /// O(n) majority scan over the most recent `n` votes
    fn trailing_majority(&self, n: usize) -> PerformanceLevel {
        let n = n.min(self.vote_filled);
        let mut counts = [0usize; 4];
        for i in 0..n {
            let idx = (self.vote_index + HYSTERESIS_WINDOW - 1 - i) % HYSTERESIS_WINDOW;
            counts[self.votes[idx] as usize] += 1;
        }
        let mut best = PerformanceLevel::High;
        let mut best_count = 0;
        for level in [
            PerformanceLevel::High,
            PerformanceLevel::Medium,
            PerformanceLevel::Low,
            PerformanceLevel::Critical,
        ] {
            if counts[level as usize] > best_count {
                best = level;
                best_count = counts[level as usize];
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steady_60fps_stays_high() {
        let mut monitor = PerformanceMonitor::new(60.0);
        for _ in 0..240 {
            assert!(monitor.record_frame(16.7).is_none());
        }
        assert_eq!(monitor.level(), PerformanceLevel::High);
    }

    #[test]
    fn test_constant_33ms_commits_low_or_worse_without_oscillation() {
        let mut monitor = PerformanceMonitor::new(60.0);
        let mut changes = Vec::new();
        for _ in 0..240 {
            if let Some(change) = monitor.record_frame(33.0) {
                changes.push(change);
            }
        }
        assert!(matches!(
            monitor.level(),
            PerformanceLevel::Low | PerformanceLevel::Critical
        ));
        // Constant input must commit exactly once, never back toward High
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].old, PerformanceLevel::High);
    }

    #[test]
    fn test_recovery_climbs_back_up() {
        let mut monitor = PerformanceMonitor::new(60.0);
        for _ in 0..240 {
            monitor.record_frame(33.0);
        }
        let degraded = monitor.level();
        assert_ne!(degraded, PerformanceLevel::High);
        for _ in 0..240 {
            monitor.record_frame(16.7);
        }
        assert_eq!(monitor.level(), PerformanceLevel::High);
    }

    #[test]
    fn test_set_level_prefills_votes() {
        let mut monitor = PerformanceMonitor::new(60.0);
        monitor.set_level(PerformanceLevel::Low);
        // A handful of fast frames must not immediately revert the forced level
        for _ in 0..10 {
            assert!(monitor.record_frame(16.7).is_none());
        }
        assert_eq!(monitor.level(), PerformanceLevel::Low);
    }

    #[test]
    fn test_disabled_monitor_is_inert() {
        let mut monitor = PerformanceMonitor::new(60.0);
        monitor.set_enabled(false);
        for _ in 0..240 {
            assert!(monitor.record_frame(50.0).is_none());
        }
        assert_eq!(monitor.level(), PerformanceLevel::High);
        assert_eq!(monitor.dropped_frames(), 0);
    }

    #[test]
    fn test_dropped_frame_accounting() {
        let mut monitor = PerformanceMonitor::new(60.0);
        for _ in 0..10 {
            monitor.record_frame(16.7);
        }
        for _ in 0..5 {
            monitor.record_frame(30.0); // > 25 ms threshold
        }
        assert_eq!(monitor.dropped_frames(), 5);
        assert!((monitor.drop_rate() - 5.0 / 15.0).abs() < 1e-6);
    }

    #[test]
    fn test_settings_budgets_shrink_with_level() {
        let high = PerformanceLevel::High.settings();
        let critical = PerformanceLevel::Critical.settings();
        assert!(high.max_particles > critical.max_particles);
        assert!(high.effects && !critical.effects);
        assert!(high.render_scale > critical.render_scale);
    }
}
