//! Pooled visual particles. No gameplay effect.

use glam::Vec2;

use crate::ease_out_cubic;
use crate::physics::{self, Bounds};

/// Half extent used for floor bouncing
const PARTICLE_HALF: f32 = 3.0;

/// A short-lived spark. Owners must release a particle back to its pool as
/// soon as `is_alive` reports false; a dead particle is never reused in
/// place.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub rotation: f32,
    rot_speed: f32,
    /// 0..1, eased down over the lifetime window
    pub life: f32,
    age_ms: f32,
    duration_ms: f32,
    /// Display hue, degrees
    pub hue: f32,
    pub size: f32,
    // TODO: decay is set at spawn but the eased lifetime above drives life
    // instead; remove once confirmed vestigial.
    #[allow(dead_code)]
    decay: f32,
}

impl Particle {
    /// Inert value for pool pre-allocation
    pub fn idle() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            rotation: 0.0,
            rot_speed: 0.0,
            life: 0.0,
            age_ms: 0.0,
            duration_ms: 1.0,
            hue: 0.0,
            size: 0.0,
            decay: 0.0,
        }
    }

    /// In-place reinitialization, applied by the pool on `get`
    pub fn reset(
        &mut self,
        pos: Vec2,
        vel: Vec2,
        hue: f32,
        size: f32,
        duration_ms: f32,
        rot_speed: f32,
    ) {
        self.pos = pos;
        self.vel = vel;
        self.rotation = 0.0;
        self.rot_speed = rot_speed;
        self.life = 1.0;
        self.age_ms = 0.0;
        self.duration_ms = duration_ms.max(1.0);
        self.hue = hue;
        self.size = size;
        self.decay = 1000.0 / self.duration_ms;
    }

    /// Ballistic step with gravity and a damped floor bounce
    pub fn update(&mut self, dt: f32, dt_ms: f32, bounds: &Bounds) {
        self.vel.y = physics::apply_gravity(self.vel.y, 1.0);
        self.pos = physics::update_position(self.pos, self.vel, dt);
        physics::apply_boundary_collision(&mut self.pos, &mut self.vel, PARTICLE_HALF, bounds, true);

        self.rotation += self.rot_speed * dt;

        self.age_ms += dt_ms;
        self.life = 1.0 - ease_out_cubic(self.age_ms / self.duration_ms);
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.01
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds::new(480.0, 640.0)
    }

    fn spawn(duration_ms: f32) -> Particle {
        let mut p = Particle::idle();
        p.reset(
            Vec2::new(100.0, 100.0),
            Vec2::new(1.0, -2.0),
            40.0,
            4.0,
            duration_ms,
            0.1,
        );
        p
    }

    #[test]
    fn test_life_decays_to_dead_within_duration() {
        let mut p = spawn(1000.0);
        assert!(p.is_alive());
        for _ in 0..70 {
            p.update(1.0, 16.7, &bounds());
        }
        assert!(!p.is_alive());
        assert!(p.life <= 0.01);
    }

    #[test]
    fn test_ease_out_decays_fast_early() {
        let mut p = spawn(1000.0);
        p.update(1.0, 100.0, &bounds());
        let early_loss = 1.0 - p.life;
        // Ease-out loses more than the linear share up front
        assert!(early_loss > 0.1);
    }

    #[test]
    fn test_floor_bounce_keeps_particle_in_bounds() {
        let mut p = spawn(5000.0);
        p.pos = Vec2::new(100.0, 635.0);
        p.vel = Vec2::new(0.0, 8.0);
        for _ in 0..120 {
            p.update(1.0, 16.7, &bounds());
            assert!(p.pos.y <= 640.0 - PARTICLE_HALF + 1e-3);
        }
    }

    #[test]
    fn test_reset_revives_a_dead_particle() {
        let mut p = spawn(1000.0);
        for _ in 0..100 {
            p.update(1.0, 16.7, &bounds());
        }
        assert!(!p.is_alive());
        p.reset(Vec2::ZERO, Vec2::ZERO, 0.0, 2.0, 1500.0, 0.0);
        assert!(p.is_alive());
        assert_eq!(p.life, 1.0);
    }
}
