//! Deterministic letter simulation
//!
//! Physics and word consumption live here. This module must stay pure:
//! - Unit timestep per tick
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod arena;
pub mod collision;
pub mod consume;
pub mod exit;
pub mod letter;
pub mod tick;

pub use arena::Arena;
pub use collision::{CollisionResult, resolve_collisions, resolve_pair};
pub use consume::{Resolution, resolve};
pub use exit::{ExitQueue, Exiting};
pub use letter::{Letter, LetterId};
pub use tick::tick;
