//! Simulation arena
//!
//! Owns every letter instance. Callers go through spawn/consume/tick/resize;
//! nothing outside `sim` mutates letters directly.

use std::collections::HashSet;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::consume::{Resolution, normalize_char, resolve};
use super::letter::{Letter, LetterId};
use crate::consts::*;

/// Replace unknown (non-positive or non-finite) extents with the nominal size
fn resolve_bounds(width: f32, height: f32) -> Vec2 {
    let pick = |v: f32, fallback: f32| if v.is_finite() && v > 0.0 { v } else { fallback };
    Vec2::new(
        pick(width, DEFAULT_ARENA_WIDTH),
        pick(height, DEFAULT_ARENA_HEIGHT),
    )
}

/// The bounded box letters float in
#[derive(Debug, Clone)]
pub struct Arena {
    pub(super) bounds: Vec2,
    pub(super) speed_multiplier: f32,
    /// Spawn order; tie-break for consumption
    pub(super) letters: Vec<Letter>,
    pub(super) tick_count: u64,
    next_id: u32,
    rng: Pcg32,
}

impl Arena {
    /// Create an empty arena. Unknown extents fall back to 600 x 400.
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self {
            bounds: resolve_bounds(width, height),
            speed_multiplier: 1.0,
            letters: Vec::new(),
            tick_count: 0,
            next_id: 1,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// All letters still stored, including removed ones awaiting the next prune
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn active(&self) -> impl Iterator<Item = &Letter> {
        self.letters.iter().filter(|l| l.is_active())
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    pub fn get(&self, id: LetterId) -> Option<&Letter> {
        self.letters.iter().find(|l| l.id == id)
    }

    /// Add a letter with the current bounds and speed multiplier
    pub fn spawn(&mut self, ch: char) -> LetterId {
        let ch = normalize_char(ch);
        let id = LetterId(self.next_id);
        self.next_id += 1;

        let letter = Letter::new(id, ch, self.bounds, self.speed_multiplier, &mut self.rng);
        log::debug!("Spawned {} as {:?} at {:?}", ch, id, letter.pos);
        self.letters.push(letter);
        id
    }

    /// Speed applied to future spawns only
    pub fn set_speed_multiplier(&mut self, multiplier: f32) {
        if !multiplier.is_finite() || multiplier < 0.0 {
            log::warn!("Ignoring invalid speed multiplier {}", multiplier);
            return;
        }
        self.speed_multiplier = multiplier;
    }

    /// Change the arena extent and pull active letters back inside it
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = resolve_bounds(width, height);
        let bounds = self.bounds;
        for letter in &mut self.letters {
            letter.contain(bounds);
        }
        log::debug!("Arena resized to {}x{}", bounds.x, bounds.y);
    }

    /// Drop every letter (new game)
    pub fn clear(&mut self) {
        self.letters.clear();
    }

    /// Advance one step; returns the letters pruned this tick
    pub fn tick(&mut self) -> Vec<Letter> {
        super::tick::tick(self)
    }

    /// Consume the letters of `word` if all of them are available
    pub fn consume(&mut self, word: &str) -> bool {
        self.try_consume(word).is_feasible()
    }

    /// Like `consume`, but reports what was selected or missing.
    ///
    /// Infeasible words leave the arena untouched. An empty word is reported
    /// as missing nothing and consumes nothing.
    pub fn try_consume(&mut self, word: &str) -> Resolution {
        if word.is_empty() {
            return Resolution::Infeasible {
                missing: Vec::new(),
            };
        }

        let resolution = resolve(word, &self.letters);
        if let Resolution::Feasible(ids) = &resolution {
            let selected: HashSet<LetterId> = ids.iter().copied().collect();
            for letter in &mut self.letters {
                if selected.contains(&letter.id) {
                    letter.mark_removed();
                }
            }
            log::debug!("Consumed {} letters for {:?}", ids.len(), word);
        }
        resolution
    }
}
