//! Ambient particle field: soft gold motes drifting upward.

use rand::Rng;

pub const PARTICLE_GLOW: &str = "#C49A6E";
pub const PARTICLE_CORE: &str = "#ffffff";

/// Particles that rise above this line re-enter at the bottom.
const WRAP_MARGIN: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    /// Core radius in px
    pub radius: f64,
    pub alpha: f64,
    /// Upward speed in px per frame
    pub rise: f64,
}

impl Particle {
    fn random(rng: &mut impl Rng, width: f64, height: f64) -> Self {
        Self {
            x: rng.random_range(0.0..width.max(1.0)),
            y: rng.random_range(0.0..height.max(1.0)),
            radius: rng.random_range(1.0..3.0),
            alpha: rng.random_range(0.2..0.8),
            rise: rng.random_range(0.1..0.4),
        }
    }

    /// Radius of the glow halo drawn under the core
    pub fn glow_radius(&self) -> f64 {
        self.radius + 1.2
    }

    /// Core opacity, brighter than the halo
    pub fn core_alpha(&self) -> f64 {
        (self.alpha * 1.5).min(1.0)
    }
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(count: usize, width: f64, height: f64, rng: &mut impl Rng) -> Self {
        let particles = (0..count)
            .map(|_| Particle::random(rng, width, height))
            .collect();
        Self {
            width,
            height,
            particles,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Advance one frame.
    pub fn step(&mut self, rng: &mut impl Rng) {
        let (width, height) = (self.width.max(1.0), self.height);
        for p in &mut self.particles {
            p.y -= p.rise;
            if p.y < -WRAP_MARGIN {
                p.y = height + WRAP_MARGIN;
                p.x = rng.random_range(0.0..width);
            }
        }
    }
}

/// Throttles animation-frame callbacks to a minimum interval.
///
/// Frames arrive at the display refresh rate; on displays faster than the
/// interval some frames are skipped.
#[derive(Debug, Clone)]
pub struct FramePacer {
    min_interval_ms: f64,
    last: Option<f64>,
}

impl FramePacer {
    pub fn new(min_interval_ms: f64) -> Self {
        Self {
            min_interval_ms,
            last: None,
        }
    }

    /// Whether the frame at `timestamp_ms` should be drawn. Records it if so.
    pub fn ready(&mut self, timestamp_ms: f64) -> bool {
        // Frames up to half an interval early still count
        let slack = self.min_interval_ms / 2.0;
        match self.last {
            Some(last) if timestamp_ms - last < self.min_interval_ms - slack => false,
            _ => {
                self.last = Some(timestamp_ms);
                true
            }
        }
    }
}
