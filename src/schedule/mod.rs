//! Timer primitives for the single-threaded event loop
//!
//! Nothing here spawns threads or sleeps. Callers pass the current
//! [`Instant`] in and poll for due work, which keeps every timing rule
//! deterministic under test and lets the terminal UI size its event-poll
//! timeout from [`Debouncer::deadline`] and friends.
//!
//! - [`Debouncer`]: last write wins; each push cancels the pending value
//! - [`Delayed`]: one-shot work that cannot be cancelled
//! - [`Expiring`]: a value that disappears after a fixed lifetime

use std::time::{Duration, Instant};

/// Coalesces bursts of values into one, delivered after a quiet period
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    /// Schedule `value`, replacing whatever was pending
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((now + self.delay, value));
    }

    /// Take the pending value if its quiet period has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.pending {
            Some((deadline, _)) if now >= deadline => self.pending.take().map(|(_, v)| v),
            _ => None,
        }
    }

    /// Drop any pending value
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, v)| v)
    }

    /// When the pending value becomes due
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(d, _)| *d)
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref().map(|(_, v)| v)
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

/// One-shot work that fires once, a fixed time after it was started
///
/// Starting again while work is in flight is refused.
#[derive(Debug, Clone)]
pub struct Delayed<T> {
    delay: Duration,
    in_flight: Option<(Instant, T)>,
}

impl<T> Delayed<T> {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay, in_flight: None }
    }

    /// Start the work; returns `false` (and drops `value`) if already in flight
    pub fn start(&mut self, value: T, now: Instant) -> bool {
        if self.in_flight.is_some() {
            return false;
        }
        self.in_flight = Some((now + self.delay, value));
        true
    }

    /// Take the value once its delay has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.in_flight {
            Some((due, _)) if now >= due => self.in_flight.take().map(|(_, v)| v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.in_flight.as_ref().map(|(d, _)| *d)
    }
}

/// A value with a fixed lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expiring<T> {
    value: T,
    expires_at: Instant,
}

impl<T> Expiring<T> {
    #[must_use]
    pub fn new(value: T, now: Instant, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: now + ttl,
        }
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    /// The value, or `None` once expired
    #[must_use]
    pub fn get(&self, now: Instant) -> Option<&T> {
        (!self.is_expired(now)).then_some(&self.value)
    }

    #[must_use]
    pub const fn expires_at(&self) -> Instant {
        self.expires_at
    }
}

/// Earliest of several optional deadlines
#[must_use]
pub fn earliest(deadlines: impl IntoIterator<Item = Option<Instant>>) -> Option<Instant> {
    deadlines.into_iter().flatten().min()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_debouncer_fires_after_delay() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(300 * MS);

        debouncer.push("go", start);
        assert_eq!(debouncer.poll(start + 299 * MS), None);
        assert_eq!(debouncer.poll(start + 300 * MS), Some("go"));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_debouncer_last_write_wins() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(300 * MS);

        debouncer.push("g", start);
        debouncer.push("go", start + 100 * MS);
        debouncer.push("gol", start + 200 * MS);

        // First value's deadline passed, but it was superseded
        assert_eq!(debouncer.poll(start + 350 * MS), None);
        assert_eq!(debouncer.poll(start + 500 * MS), Some("gol"));
        assert_eq!(debouncer.poll(start + 900 * MS), None);
    }

    #[test]
    fn test_debouncer_cancel() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(300 * MS);

        debouncer.push(1, start);
        assert_eq!(debouncer.cancel(), Some(1));
        assert_eq!(debouncer.poll(start + 1000 * MS), None);
        assert_eq!(debouncer.deadline(), None);
    }

    #[test]
    fn test_delayed_refuses_restart() {
        let start = Instant::now();
        let mut delayed = Delayed::new(1000 * MS);

        assert!(delayed.start("first", start));
        assert!(!delayed.start("second", start + 10 * MS));
        assert_eq!(delayed.deadline(), Some(start + 1000 * MS));
        assert_eq!(delayed.poll(start + 999 * MS), None);
        assert_eq!(delayed.poll(start + 1000 * MS), Some("first"));
        assert!(!delayed.is_in_flight());
    }

    #[test]
    fn test_expiring() {
        let start = Instant::now();
        let message = Expiring::new("posted", start, 3000 * MS);

        assert_eq!(message.get(start + 2999 * MS), Some(&"posted"));
        assert_eq!(message.get(start + 3000 * MS), None);
        assert!(message.is_expired(start + 3001 * MS));
    }

    #[test]
    fn test_earliest() {
        let start = Instant::now();
        assert_eq!(earliest([None, Some(start + MS), Some(start)]), Some(start));
        assert_eq!(earliest([None, None]), None);
    }
}
