//! Floating letter entity
//!
//! A letter is an equal-sized disk drifting at constant speed. Its identity is
//! the `LetterId`: two 'E' letters are unrelated instances.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Unique letter identifier within an arena (assigned in spawn order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LetterId(pub u32);

/// Upper bound of the safe range along one axis (never negative)
#[inline]
pub fn safe_extent(bound: f32, size: f32) -> f32 {
    (bound - size).max(0.0)
}

/// A letter entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Letter {
    pub id: LetterId,
    /// Uppercase symbol
    pub ch: char,
    /// Top-left corner, inside `[0, bounds - size]`
    pub pos: Vec2,
    /// Units per tick
    pub vel: Vec2,
    /// Diameter
    pub size: f32,
    /// Consumed; excluded from motion and matching from now on
    pub removed: bool,
}

impl Letter {
    /// Create a letter at a random position with a random heading.
    ///
    /// `bounds` must already be resolved (positive extents); the speed is
    /// `BASE_SPEED * speed_multiplier`.
    pub fn new<R: Rng + ?Sized>(
        id: LetterId,
        ch: char,
        bounds: Vec2,
        speed_multiplier: f32,
        rng: &mut R,
    ) -> Self {
        let safe = Vec2::new(
            safe_extent(bounds.x, LETTER_SIZE),
            safe_extent(bounds.y, LETTER_SIZE),
        );
        let pos = Vec2::new(rng.random::<f32>() * safe.x, rng.random::<f32>() * safe.y);

        let speed = BASE_SPEED * speed_multiplier;
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let vel = Vec2::new(angle.cos() * speed, angle.sin() * speed);

        Self {
            id,
            ch,
            pos,
            vel,
            size: LETTER_SIZE,
            removed: false,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        !self.removed
    }

    /// Euler step, one unit of time
    pub fn advance(&mut self) {
        if self.removed {
            return;
        }
        self.pos += self.vel;
    }

    /// Bounce off the arena walls, clamping back into the safe range
    pub fn reflect(&mut self, bounds: Vec2) {
        if self.removed {
            return;
        }
        let max_x = safe_extent(bounds.x, self.size);
        let max_y = safe_extent(bounds.y, self.size);

        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
            self.vel.x = -self.vel.x;
        } else if self.pos.x > max_x {
            self.pos.x = max_x;
            self.vel.x = -self.vel.x;
        }

        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vel.y = -self.vel.y;
        } else if self.pos.y > max_y {
            self.pos.y = max_y;
            self.vel.y = -self.vel.y;
        }
    }

    /// Clamp position into the safe range without touching velocity
    pub fn contain(&mut self, bounds: Vec2) {
        if self.removed {
            return;
        }
        self.pos.x = self.pos.x.clamp(0.0, safe_extent(bounds.x, self.size));
        self.pos.y = self.pos.y.clamp(0.0, safe_extent(bounds.y, self.size));
    }

    pub fn mark_removed(&mut self) {
        self.removed = true;
    }
}
