//! Exit animation queue
//!
//! Consumed letters leave the arena on the next tick; this queue keeps a copy
//! around for the pop-out animation. It is cosmetic only and never feeds back
//! into the arena.

use super::letter::Letter;

/// A letter playing its exit animation
#[derive(Debug, Clone)]
pub struct Exiting {
    pub letter: Letter,
    pub ticks_left: u32,
}

impl Exiting {
    /// Animation progress, 0 at removal and 1 when done
    pub fn progress(&self, delay_ticks: u32) -> f32 {
        if delay_ticks == 0 {
            return 1.0;
        }
        1.0 - self.ticks_left as f32 / delay_ticks as f32
    }
}

#[derive(Debug, Clone)]
pub struct ExitQueue {
    delay_ticks: u32,
    entries: Vec<Exiting>,
}

impl ExitQueue {
    pub fn new(delay_ticks: u32) -> Self {
        Self {
            delay_ticks,
            entries: Vec::new(),
        }
    }

    pub fn delay_ticks(&self) -> u32 {
        self.delay_ticks
    }

    pub fn push(&mut self, letters: impl IntoIterator<Item = Letter>) {
        let delay = self.delay_ticks;
        self.entries.extend(letters.into_iter().map(|letter| Exiting {
            letter,
            ticks_left: delay,
        }));
    }

    /// Count down; returns letters whose animation finished
    pub fn tick(&mut self) -> Vec<Letter> {
        for entry in &mut self.entries {
            entry.ticks_left = entry.ticks_left.saturating_sub(1);
        }
        let (done, pending): (Vec<Exiting>, Vec<Exiting>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|e| e.ticks_left == 0);
        self.entries = pending;
        done.into_iter().map(|e| e.letter).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Exiting> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
