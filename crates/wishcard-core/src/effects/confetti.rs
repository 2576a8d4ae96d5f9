//! Confetti burst fired once when a countdown expires.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;

/// Gold, cream and copper.
pub const CONFETTI_COLORS: [&str; 7] = [
    "#ffd700", "#f0e68c", "#daa520", "#b8860b", "#fffaf0", "#a52a2a", "#e3a860",
];

/// One falling piece; values feed straight into inline CSS.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    pub id: usize,
    pub color: &'static str,
    /// Horizontal start position in vw
    pub left_vw: f64,
    pub scale: f64,
    pub rotate_deg: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    /// Horizontal drift factor in -1..1
    pub drift: f64,
    /// Spin factor in 1..3
    pub spin: f64,
}

impl ConfettiPiece {
    /// Scatter `count` pieces around the top centre of the screen.
    pub fn scatter(count: usize, rng: &mut impl Rng) -> Vec<Self> {
        (0..count)
            .map(|id| Self {
                id,
                color: CONFETTI_COLORS[id % CONFETTI_COLORS.len()],
                left_vw: 50.0 + rng.random_range(-0.5..0.5) * 40.0,
                scale: rng.random_range(0.5..1.0),
                rotate_deg: rng.random_range(0.0..360.0),
                duration_s: rng.random_range(1.5..3.0),
                delay_s: rng.random_range(0.0..0.5),
                drift: rng.random_range(-1.0..1.0),
                spin: rng.random_range(1.0..3.0),
            })
            .collect()
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.2}vw; top: 0vh; background-color: {}; \
             transform: scale({:.2}) rotate({:.0}deg); animation-delay: {:.2}s; \
             --duration: {:.2}s; --rand-x: {:.3}; --rand-rot: {:.3};",
            self.left_vw,
            self.color,
            self.scale,
            self.rotate_deg,
            self.delay_s,
            self.duration_s,
            self.drift,
            self.spin
        )
    }
}

/// Burst lifecycle: idle, active until a deadline, idle again.
#[derive(Debug, Clone)]
pub struct ConfettiBurst {
    duration: Duration,
    active_until: Option<DateTime<Utc>>,
}

impl ConfettiBurst {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            active_until: None,
        }
    }

    /// Start a burst at `now`. Returns false if one is still running.
    pub fn trigger(&mut self, now: DateTime<Utc>) -> bool {
        if self.is_active(now) {
            return false;
        }
        let length = chrono::Duration::from_std(self.duration)
            .unwrap_or_else(|_| chrono::Duration::seconds(5));
        self.active_until = Some(now + length);
        true
    }

    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.active_until.is_some_and(|until| now < until)
    }

    pub fn clear(&mut self) {
        self.active_until = None;
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}
