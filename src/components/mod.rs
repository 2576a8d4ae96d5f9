//! App-level components for Wishcard.
//!
//! These draw straight onto the DOM; reusable presentational pieces live in
//! `wishcard-ui`.

mod confetti;
mod particle_background;

pub use confetti::ConfettiLayer;
pub use particle_background::ParticleBackground;
