use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time source measured from the clock's own origin.
pub trait Clock {
    fn now(&self) -> Duration;

    /// Called once per rendered frame. Wall clocks ignore it; frame-stepped
    /// clocks advance by exactly one frame.
    fn on_frame(&self, _frame_time: Duration) {}
}

pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

#[cfg(test)]
impl ManualClock {
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Jump to an absolute time. Never moves backwards.
    pub fn set(&self, to: Duration) {
        self.now.set(self.now.get().max(to));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }

    fn on_frame(&self, frame_time: Duration) {
        self.advance(frame_time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let other = clock.clone();
        clock.advance_ms(120);
        assert_eq!(other.now(), Duration::from_millis(120));
    }

    #[test]
    fn manual_clock_set_is_monotonic() {
        let clock = ManualClock::new();
        clock.set(Duration::from_secs(3));
        clock.set(Duration::from_secs(1));
        assert_eq!(clock.now(), Duration::from_secs(3));
    }

    #[test]
    fn frames_advance_manual_clock_only() {
        let manual = ManualClock::new();
        manual.on_frame(Duration::from_millis(16));
        manual.on_frame(Duration::from_millis(16));
        assert_eq!(manual.now(), Duration::from_millis(32));

        let system = SystemClock::new();
        let before = system.now();
        system.on_frame(Duration::from_secs(60));
        assert!(system.now() < before + Duration::from_secs(60));
    }
}
