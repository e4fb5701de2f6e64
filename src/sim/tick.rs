//! Fixed step simulation tick
//!
//! Order within one tick: integrate all, reflect all, resolve collisions once,
//! contain, prune. One unit of time per tick.

use super::arena::Arena;
use super::collision::resolve_collisions;
use super::letter::Letter;
use crate::consts::LETTER_SIZE;

/// Advance the arena by one step
///
/// Returns the removed letters dropped from storage this tick so a
/// presentation layer can play their exit animation.
pub fn tick(arena: &mut Arena) -> Vec<Letter> {
    arena.tick_count += 1;
    let bounds = arena.bounds;

    for letter in &mut arena.letters {
        letter.advance();
    }

    for letter in &mut arena.letters {
        letter.reflect(bounds);
    }

    let hits = resolve_collisions(&mut arena.letters, LETTER_SIZE);
    if hits > 0 {
        log::trace!("Tick {}: {} overlapping pairs", arena.tick_count, hits);
    }

    // Collision pushes may cross a wall; velocity is left for the next reflect
    for letter in &mut arena.letters {
        letter.contain(bounds);
    }

    let (pruned, kept): (Vec<Letter>, Vec<Letter>) =
        std::mem::take(&mut arena.letters).into_iter().partition(|l| l.removed);
    arena.letters = kept;
    pruned
}
