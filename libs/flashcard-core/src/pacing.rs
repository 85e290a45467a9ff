//! Pacing policies for rate-limited backends.

use std::time::Duration;
use tokio::time::Instant;

/// Pause the original tool kept between backend calls.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

/// Decides how long to wait before the next backend call.
pub trait RatePolicy: Send {
    /// Time to wait at `now` before issuing the next call.
    fn delay(&self, now: Instant) -> Duration;

    /// A call finished at `now`.
    fn record(&mut self, now: Instant);
}

/// Keeps at least `interval` between the end of one call and the start of
/// the next. The first call is never delayed.
#[derive(Debug, Clone)]
pub struct MinSpacing {
    interval: Duration,
    last: Option<Instant>,
}

impl MinSpacing {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for MinSpacing {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

impl RatePolicy for MinSpacing {
    fn delay(&self, now: Instant) -> Duration {
        match self.last {
            Some(last) => (last + self.interval).saturating_duration_since(now),
            None => Duration::ZERO,
        }
    }

    fn record(&mut self, now: Instant) {
        self.last = Some(now);
    }
}

/// Never waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unthrottled;

impl RatePolicy for Unthrottled {
    fn delay(&self, _now: Instant) -> Duration {
        Duration::ZERO
    }

    fn record(&mut self, _now: Instant) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_is_not_delayed() {
        let policy = MinSpacing::new(Duration::from_secs(1));
        assert_eq!(policy.delay(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn waits_out_the_remaining_interval() {
        let mut policy = MinSpacing::new(Duration::from_millis(1000));
        let start = Instant::now();
        policy.record(start);

        assert_eq!(policy.delay(start), Duration::from_millis(1000));
        assert_eq!(
            policy.delay(start + Duration::from_millis(400)),
            Duration::from_millis(600)
        );
        assert_eq!(policy.delay(start + Duration::from_secs(5)), Duration::ZERO);
    }

    #[test]
    fn default_interval_matches_one_second() {
        assert_eq!(MinSpacing::default().interval(), Duration::from_secs(1));
    }

    #[test]
    fn unthrottled_never_waits() {
        let mut policy = Unthrottled;
        let now = Instant::now();
        policy.record(now);
        assert_eq!(policy.delay(now), Duration::ZERO);
    }
}
