//! Cancelable single-shot timer.
//!
//! The debouncer holds at most one pending deadline. Re-arming replaces the
//! deadline instead of stacking a second one, and every arm bumps a
//! generation counter so callbacks scheduled for an older arm are ignored.

use std::time::{Duration, Instant};

/// Identifies one arming of a [`Debouncer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceToken(u64);

#[derive(Clone, Debug)]
pub struct Debouncer {
    window: Duration,
    generation: u64,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            generation: 0,
            deadline: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Start (or restart) the quiet period from `now`.
    pub fn arm(&mut self, now: Instant) -> DebounceToken {
        self.generation = self.generation.wrapping_add(1);
        self.deadline = Some(now + self.window);
        DebounceToken(self.generation)
    }

    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left until expiry, or `None` when nothing is pending.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Timer-callback expiry. Returns true only for the most recent arm and
    /// only once.
    pub fn fire(&mut self, token: DebounceToken) -> bool {
        if self.deadline.is_some() && token.0 == self.generation {
            self.deadline = None;
            true
        } else {
            false
        }
    }

    /// Frame-polling expiry. Returns true exactly once after the deadline
    /// has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(200);

    #[test]
    fn test_poll_fires_once_after_window() {
        let start = Instant::now();
        let mut d = Debouncer::new(WINDOW);
        d.arm(start);

        assert!(!d.poll(start + Duration::from_millis(199)));
        assert!(d.poll(start + WINDOW));
        assert!(!d.poll(start + Duration::from_secs(5)));
        assert!(!d.is_pending());
    }

    #[test]
    fn test_rearm_pushes_deadline_back() {
        let start = Instant::now();
        let mut d = Debouncer::new(WINDOW);
        d.arm(start);
        d.arm(start + Duration::from_millis(150));

        assert!(!d.poll(start + WINDOW));
        assert!(d.poll(start + Duration::from_millis(350)));
    }

    #[test]
    fn test_stale_token_is_ignored() {
        let start = Instant::now();
        let mut d = Debouncer::new(WINDOW);
        let first = d.arm(start);
        let second = d.arm(start + Duration::from_millis(10));

        assert!(!d.fire(first));
        assert!(d.is_pending());
        assert!(d.fire(second));
        assert!(!d.fire(second));
    }

    #[test]
    fn test_cancel_invalidates_token() {
        let start = Instant::now();
        let mut d = Debouncer::new(WINDOW);
        let token = d.arm(start);
        d.cancel();

        assert!(!d.fire(token));
        assert!(!d.poll(start + WINDOW));
        assert_eq!(d.remaining(start), None);
    }

    #[test]
    fn test_remaining_saturates_at_zero() {
        let start = Instant::now();
        let mut d = Debouncer::new(WINDOW);
        d.arm(start);

        assert_eq!(d.remaining(start), Some(WINDOW));
        assert_eq!(d.remaining(start + Duration::from_secs(1)), Some(Duration::ZERO));
    }
}
