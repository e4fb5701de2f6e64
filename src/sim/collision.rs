//! Letter-letter collision detection and response
//!
//! Letters are equal-mass, equal-radius disks. Overlaps are split evenly and
//! the normal component of the relative velocity is exchanged. One pass per
//! tick in ascending index order; dense clusters may stay slightly
//! interpenetrated until a later tick.

use glam::Vec2;

use super::letter::Letter;

/// Result of resolving one pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Whether the disks overlapped
    pub hit: bool,
    /// Unit normal pointing from the first letter to the second
    pub normal: Vec2,
    /// Overlap depth before correction
    pub penetration: f32,
    /// Whether velocities were exchanged (letters were approaching)
    pub bounced: bool,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
            bounced: false,
        }
    }
}

/// Resolve a single pair of letters
///
/// Coincident centers have no defined normal and are left alone.
pub fn resolve_pair(a: &mut Letter, b: &mut Letter, min_distance: f32) -> CollisionResult {
    let delta = b.pos - a.pos;
    let distance = delta.length();

    if distance <= 0.0 || distance >= min_distance {
        if distance <= 0.0 {
            log::trace!("Skipping coincident letters {:?} and {:?}", a.id, b.id);
        }
        return CollisionResult::miss();
    }

    let normal = delta / distance;
    let penetration = min_distance - distance;

    // Push apart, half each
    let push = normal * (penetration * 0.5);
    a.pos -= push;
    b.pos += push;

    // Exchange the normal component only when approaching
    let p = (a.vel - b.vel).dot(normal);
    let bounced = p > 0.0;
    if bounced {
        a.vel -= normal * p;
        b.vel += normal * p;
    }

    CollisionResult {
        hit: true,
        normal,
        penetration,
        bounced,
    }
}

/// Resolve every unordered pair of active letters once, in arena order
///
/// Returns the number of overlapping pairs found.
pub fn resolve_collisions(letters: &mut [Letter], min_distance: f32) -> usize {
    let active: Vec<usize> = letters
        .iter()
        .enumerate()
        .filter(|(_, l)| l.is_active())
        .map(|(i, _)| i)
        .collect();

    let mut hits = 0;
    for (k, &i) in active.iter().enumerate() {
        for &j in &active[k + 1..] {
            // i < j, so the split keeps both borrows disjoint
            let (head, tail) = letters.split_at_mut(j);
            if resolve_pair(&mut head[i], &mut tail[0], min_distance).hit {
                hits += 1;
            }
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::LETTER_SIZE;
    use crate::sim::letter::LetterId;

    fn letter(id: u32, pos: Vec2, vel: Vec2) -> Letter {
        Letter {
            id: LetterId(id),
            ch: 'A',
            pos,
            vel,
            size: LETTER_SIZE,
            removed: false,
        }
    }

    #[test]
    fn test_head_on_swap() {
        let mut a = letter(1, Vec2::new(100.0, 100.0), Vec2::new(1.0, 0.0));
        let mut b = letter(2, Vec2::new(140.0, 100.0), Vec2::new(-1.0, 0.0));

        let result = resolve_pair(&mut a, &mut b, LETTER_SIZE);
        assert!(result.hit);
        assert!(result.bounced);
        assert_eq!(result.normal, Vec2::new(1.0, 0.0));
        assert_eq!(result.penetration, 10.0);

        // Velocities swapped along the normal
        assert_eq!(a.vel, Vec2::new(-1.0, 0.0));
        assert_eq!(b.vel, Vec2::new(1.0, 0.0));

        // Overlap split evenly, separation restored
        assert_eq!(a.pos, Vec2::new(95.0, 100.0));
        assert_eq!(b.pos, Vec2::new(145.0, 100.0));
        assert!((b.pos - a.pos).length() >= LETTER_SIZE);
    }

    #[test]
    fn test_separating_pair_keeps_velocity() {
        let mut a = letter(1, Vec2::new(100.0, 100.0), Vec2::new(-1.0, 0.0));
        let mut b = letter(2, Vec2::new(130.0, 100.0), Vec2::new(1.0, 0.0));

        let result = resolve_pair(&mut a, &mut b, LETTER_SIZE);
        assert!(result.hit);
        assert!(!result.bounced);
        assert_eq!(a.vel, Vec2::new(-1.0, 0.0));
        assert_eq!(b.vel, Vec2::new(1.0, 0.0));
        // Still pushed apart
        assert_eq!(a.pos.x, 90.0);
        assert_eq!(b.pos.x, 140.0);
    }

    #[test]
    fn test_tangential_component_untouched() {
        let mut a = letter(1, Vec2::new(100.0, 100.0), Vec2::new(2.0, 3.0));
        let mut b = letter(2, Vec2::new(140.0, 100.0), Vec2::new(0.0, -1.0));

        resolve_pair(&mut a, &mut b, LETTER_SIZE);
        // Normal is +x: x components exchanged, y components kept
        assert_eq!(a.vel, Vec2::new(0.0, 3.0));
        assert_eq!(b.vel, Vec2::new(2.0, -1.0));
    }

    #[test]
    fn test_momentum_conserved() {
        let mut a = letter(1, Vec2::new(100.0, 100.0), Vec2::new(1.5, 0.5));
        let mut b = letter(2, Vec2::new(130.0, 120.0), Vec2::new(-0.5, -1.0));
        let before = a.vel + b.vel;

        resolve_pair(&mut a, &mut b, LETTER_SIZE);
        let after = a.vel + b.vel;
        assert!((before - after).length() < 1e-5);
    }

    #[test]
    fn test_coincident_is_noop() {
        let mut a = letter(1, Vec2::new(100.0, 100.0), Vec2::new(1.0, 0.0));
        let mut b = letter(2, Vec2::new(100.0, 100.0), Vec2::new(-1.0, 0.0));

        let result = resolve_pair(&mut a, &mut b, LETTER_SIZE);
        assert!(!result.hit);
        assert_eq!(a.pos, b.pos);
        assert_eq!(a.vel, Vec2::new(1.0, 0.0));
        assert!(a.pos.x.is_finite());
    }

    #[test]
    fn test_touching_is_not_a_hit() {
        let mut a = letter(1, Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
        let mut b = letter(2, Vec2::new(50.0, 0.0), Vec2::new(-1.0, 0.0));
        assert!(!resolve_pair(&mut a, &mut b, LETTER_SIZE).hit);
    }

    #[test]
    fn test_resolve_collisions_skips_removed() {
        let mut letters = vec![
            letter(1, Vec2::new(100.0, 100.0), Vec2::new(1.0, 0.0)),
            letter(2, Vec2::new(120.0, 100.0), Vec2::new(-1.0, 0.0)),
            letter(3, Vec2::new(400.0, 300.0), Vec2::ZERO),
        ];
        letters[1].mark_removed();

        assert_eq!(resolve_collisions(&mut letters, LETTER_SIZE), 0);
        assert_eq!(letters[0].pos, Vec2::new(100.0, 100.0));
        assert_eq!(letters[1].pos, Vec2::new(120.0, 100.0));
    }

    #[test]
    fn test_resolve_collisions_counts_pairs() {
        let mut letters = vec![
            letter(1, Vec2::new(100.0, 100.0), Vec2::ZERO),
            letter(2, Vec2::new(140.0, 100.0), Vec2::ZERO),
            letter(3, Vec2::new(400.0, 300.0), Vec2::ZERO),
        ];
        assert_eq!(resolve_collisions(&mut letters, LETTER_SIZE), 1);
        assert_eq!(letters[2].pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_single_pass_leaves_cluster_overlap() {
        // Three at rest in a row: A-B is pushed apart first, then B-C moves B
        // back toward A. No second pass corrects it.
        let mut letters = vec![
            letter(1, Vec2::new(100.0, 100.0), Vec2::ZERO),
            letter(2, Vec2::new(130.0, 100.0), Vec2::ZERO),
            letter(3, Vec2::new(160.0, 100.0), Vec2::ZERO),
        ];

        assert_eq!(resolve_collisions(&mut letters, LETTER_SIZE), 2);
        assert_eq!(letters[0].pos.x, 90.0);
        assert_eq!(letters[1].pos.x, 125.0);
        assert_eq!(letters[2].pos.x, 175.0);

        let ab = letters[0].pos.distance(letters[1].pos);
        let bc = letters[1].pos.distance(letters[2].pos);
        assert_eq!(ab, 35.0);
        assert_eq!(bc, 50.0);
        assert!(ab < LETTER_SIZE);
    }
}
