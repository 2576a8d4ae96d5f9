//! Countdown engine.
//!
//! Pure millisecond arithmetic: no calendar months, no time zones. The view
//! calls [`CountdownTracker::tick`] once per second; the tracker latches
//! expiry and reports the transition exactly once.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to. For tests and previews.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.now.lock();
        *now += by;
    }

    pub fn set(&self, to: DateTime<Utc>) {
        *self.now.lock() = to;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

/// Whole time units left until the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    fn from_millis(ms: i64) -> Self {
        Self {
            days: ms / MS_PER_DAY,
            hours: (ms % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (ms % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (ms % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    /// Recombine the components into milliseconds.
    pub fn total_millis(&self) -> i64 {
        self.days * MS_PER_DAY
            + self.hours * MS_PER_HOUR
            + self.minutes * MS_PER_MINUTE
            + self.seconds * MS_PER_SECOND
    }

    /// Components in display order: days, hours, minutes, seconds.
    pub fn units(&self) -> [(&'static str, i64); 4] {
        [
            ("Days", self.days),
            ("Hours", self.hours),
            ("Minutes", self.minutes),
            ("Seconds", self.seconds),
        ]
    }
}

/// Countdown state at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Remaining(Remaining),
    Expired,
}

impl Countdown {
    /// Time left from `now` until `target`. `now >= target` is expired.
    pub fn between(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let distance = (target - now).num_milliseconds();
        if distance <= 0 {
            Countdown::Expired
        } else {
            Countdown::Remaining(Remaining::from_millis(distance))
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, Countdown::Expired)
    }

    /// Components to display; all zero once expired.
    pub fn remaining(&self) -> Remaining {
        match self {
            Countdown::Remaining(r) => *r,
            Countdown::Expired => Remaining::default(),
        }
    }
}

/// Result of one recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub countdown: Countdown,
    /// True only on the tick where expiry was first observed
    pub just_expired: bool,
}

/// Per-view countdown against a fixed target.
#[derive(Debug, Clone)]
pub struct CountdownTracker {
    target: DateTime<Utc>,
    expired: bool,
}

impl CountdownTracker {
    pub fn new(target: DateTime<Utc>) -> Self {
        Self {
            target,
            expired: false,
        }
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Recompute at `now`.
    ///
    /// Once expired the tracker stays expired even if `now` moves backwards.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Tick {
        if self.expired {
            return Tick {
                countdown: Countdown::Expired,
                just_expired: false,
            };
        }

        let countdown = Countdown::between(self.target, now);
        let just_expired = countdown.is_expired();
        if just_expired {
            self.expired = true;
            tracing::info!(target_at = %self.target, "countdown reached its target");
        }
        Tick {
            countdown,
            just_expired,
        }
    }

    pub fn tick_with(&mut self, clock: &impl Clock) -> Tick {
        self.tick(clock.now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_decomposition() {
        let target = t0()
            + Duration::days(2)
            + Duration::hours(3)
            + Duration::minutes(4)
            + Duration::seconds(5)
            + Duration::milliseconds(999);
        let countdown = Countdown::between(target, t0());
        assert_eq!(
            countdown,
            Countdown::Remaining(Remaining {
                days: 2,
                hours: 3,
                minutes: 4,
                seconds: 5
            })
        );
    }

    #[test]
    fn test_sub_second_remaining_is_not_expired() {
        let countdown = Countdown::between(t0() + Duration::milliseconds(400), t0());
        assert!(!countdown.is_expired());
        assert_eq!(countdown.remaining(), Remaining::default());
    }

    #[test]
    fn test_exact_target_is_expired() {
        assert!(Countdown::between(t0(), t0()).is_expired());
        assert!(Countdown::between(t0(), t0() + Duration::days(400)).is_expired());
    }

    #[test]
    fn test_tracker_fires_once() {
        let clock = ManualClock::new(t0());
        let mut tracker = CountdownTracker::new(t0() + Duration::seconds(2));

        let mut fired = 0;
        for _ in 0..6 {
            if tracker.tick_with(&clock).just_expired {
                fired += 1;
            }
            clock.advance(Duration::seconds(1));
        }
        assert_eq!(fired, 1);
        assert!(tracker.is_expired());
    }

    #[test]
    fn test_tracker_never_reverts() {
        let mut tracker = CountdownTracker::new(t0());
        assert!(tracker.tick(t0()).just_expired);

        let tick = tracker.tick(t0() - Duration::hours(1));
        assert!(tick.countdown.is_expired());
        assert!(!tick.just_expired);
    }

    #[test]
    fn test_clock_set_backwards_keeps_expiry() {
        let target = t0() + Duration::minutes(5);
        let clock = ManualClock::new(t0());
        let mut tracker = CountdownTracker::new(target);
        assert_eq!(tracker.target(), target);
        assert!(!tracker.tick_with(&clock).countdown.is_expired());

        clock.set(target);
        assert!(tracker.tick_with(&clock).just_expired);

        // Device clock corrected to before the target
        clock.set(t0());
        let tick = tracker.tick_with(&clock);
        assert!(tick.countdown.is_expired());
        assert!(!tick.just_expired);
        assert_eq!(clock.now(), t0());
    }

    #[test]
    fn test_units_order() {
        let r = Remaining {
            days: 1,
            hours: 2,
            minutes: 3,
            seconds: 4,
        };
        let labels: Vec<_> = r.units().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, ["Days", "Hours", "Minutes", "Seconds"]);
        assert_eq!(r.total_millis(), 93_784_000);
    }
}
