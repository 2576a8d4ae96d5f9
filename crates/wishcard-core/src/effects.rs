//! Decorative effect models.
//!
//! Only state and geometry live here; the app draws them.

mod confetti;
mod particles;

pub use confetti::{ConfettiBurst, ConfettiPiece, CONFETTI_COLORS};
pub use particles::{FramePacer, Particle, ParticleField, PARTICLE_CORE, PARTICLE_GLOW};

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Cosmetic RNG seeded from a caller-supplied value (usually the clock).
pub fn effect_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}
