//! Stateless motion and collision math.
//!
//! Velocities are in pixels per nominal 60 Hz frame; `dt` is a frame-scale
//! factor (1.0 = one nominal frame), so a 33 ms real frame passes dt = 2.0.

use glam::Vec2;

/// Downward acceleration per frame
pub const GRAVITY: f32 = 0.15;
/// Fall speed cap
pub const TERMINAL_VELOCITY: f32 = 12.0;
/// Velocity retained on bounce
pub const BOUNCE_DAMPING: f32 = 0.7;
/// Horizontal velocity retained on floor contact
pub const FRICTION: f32 = 0.9;
/// Below this magnitude a bounced vertical velocity snaps to zero
pub const MIN_VELOCITY: f32 = 0.5;
/// Cosmetic sway oscillation
pub const SWAY_FREQUENCY: f32 = 2.0;
pub const SWAY_AMPLITUDE: f32 = 14.0;

/// Playfield rectangle, origin at the top-left
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Independent edge overlap flags for one entity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeReport {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
    /// Entirely above the playfield
    pub off_top: bool,
    /// Entirely below the playfield
    pub off_bottom: bool,
}

/// Gravity-accelerated vertical velocity, capped at terminal velocity
#[inline]
pub fn apply_gravity(vy: f32, multiplier: f32) -> f32 {
    (vy + GRAVITY * multiplier).min(TERMINAL_VELOCITY)
}

/// Euler position step
#[inline]
pub fn update_position(pos: Vec2, vel: Vec2, dt: f32) -> Vec2 {
    pos + vel * dt
}

/// Cosmetic horizontal oscillation around a base x. `factor` offsets the
/// phase so entities spawned together do not sway in lockstep.
#[inline]
pub fn apply_sway(x: f32, t: f32, factor: f32) -> f32 {
    x + (t * SWAY_FREQUENCY + factor * std::f32::consts::PI).sin() * SWAY_AMPLITUDE
}

/// Edge overlap report for a centered entity with the given half extent
pub fn check_bounds(pos: Vec2, half: f32, bounds: &Bounds) -> EdgeReport {
    EdgeReport {
        left: pos.x - half < 0.0,
        right: pos.x + half > bounds.width,
        top: pos.y - half < 0.0,
        bottom: pos.y + half > bounds.height,
        off_top: pos.y + half < 0.0,
        off_bottom: pos.y - half > bounds.height,
    }
}

/// Clamp-and-reflect against the playfield edges.
///
/// Left/right overflow clamps position and reflects vx scaled by bounce
/// damping (zeroed when bouncing is disabled). Bottom overflow with downward
/// velocity clamps to the floor, reflects vy scaled by damping, applies
/// friction to vx, and snaps near-zero vy to exactly zero so entities cannot
/// micro-bounce forever.
pub fn apply_boundary_collision(
    pos: &mut Vec2,
    vel: &mut Vec2,
    half: f32,
    bounds: &Bounds,
    bounce: bool,
) {
    if pos.x - half < 0.0 {
        pos.x = half;
        vel.x = if bounce { -vel.x * BOUNCE_DAMPING } else { 0.0 };
    } else if pos.x + half > bounds.width {
        pos.x = bounds.width - half;
        vel.x = if bounce { -vel.x * BOUNCE_DAMPING } else { 0.0 };
    }

    if pos.y + half > bounds.height && vel.y > 0.0 {
        pos.y = bounds.height - half;
        if bounce {
            vel.y = -vel.y * BOUNCE_DAMPING;
            vel.x *= FRICTION;
            if vel.y.abs() < MIN_VELOCITY {
                vel.y = 0.0;
            }
        } else {
            vel.y = 0.0;
        }
    }
}

#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) < ra + rb
}

#[inline]
pub fn point_in_circle(p: Vec2, center: Vec2, radius: f32) -> bool {
    p.distance(center) < radius
}

/// Axis-aligned overlap test; rects given by top-left corner and extent
#[inline]
pub fn rects_overlap(a_min: Vec2, aw: f32, ah: f32, b_min: Vec2, bw: f32, bh: f32) -> bool {
    a_min.x < b_min.x + bw && a_min.x + aw > b_min.x && a_min.y < b_min.y + bh && a_min.y + ah > b_min.y
}

/// Half-open containment: the min edges are inside, the max edges are not
#[inline]
pub fn point_in_rect(p: Vec2, min: Vec2, w: f32, h: f32) -> bool {
    p.x >= min.x && p.x < min.x + w && p.y >= min.y && p.y < min.y + h
}

/// Clickable footprint of an entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitShape {
    Circle { radius: f32 },
    Rect { width: f32, height: f32 },
    /// Uniform size treated as a square
    Square { size: f32 },
}

/// Dispatch a click test against an entity centered at `center`
pub fn is_clicked(x: f32, y: f32, center: Vec2, shape: HitShape) -> bool {
    let p = Vec2::new(x, y);
    match shape {
        HitShape::Circle { radius } => point_in_circle(p, center, radius),
        HitShape::Rect { width, height } => {
            point_in_rect(p, center - Vec2::new(width / 2.0, height / 2.0), width, height)
        }
        HitShape::Square { size } => {
            point_in_rect(p, center - Vec2::splat(size / 2.0), size, size)
        }
    }
}

/// Earliest intercept of a constant-velocity target by a projectile of fixed
/// speed fired from `shooter`. Returns the intercept point and time, or
/// `None` when no non-negative-time solution exists.
pub fn calculate_intercept(
    target_pos: Vec2,
    target_vel: Vec2,
    shooter: Vec2,
    projectile_speed: f32,
) -> Option<(Vec2, f32)> {
    let d = target_pos - shooter;
    let a = target_vel.length_squared() - projectile_speed * projectile_speed;
    let b = 2.0 * d.dot(target_vel);
    let c = d.length_squared();

    let t = if a.abs() < 1e-6 {
        // Degenerate: projectile speed matches target speed
        if b.abs() < 1e-6 {
            return None;
        }
        let t = -c / b;
        if t < 0.0 {
            return None;
        }
        t
    } else {
        let disc = b * b - 4.0 * a * c;
        if disc < 0.0 {
            return None;
        }
        let sqrt_disc = disc.sqrt();
        let t1 = (-b - sqrt_disc) / (2.0 * a);
        let t2 = (-b + sqrt_disc) / (2.0 * a);
        // Earliest non-negative root
        match (t1 >= 0.0, t2 >= 0.0) {
            (true, true) => t1.min(t2),
            (true, false) => t1,
            (false, true) => t2,
            (false, false) => return None,
        }
    };

    Some((target_pos + target_vel * t, t))
}
