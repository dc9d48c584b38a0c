use std::time::Instant;

pub const DEFAULT_WINDOW_MS: u64 = 800;
pub const DEFAULT_QUIET_MS: u64 = 400;

/// Millisecond clock, injectable so the throttle tests run without real
/// waiting.
pub trait TimeSource {
    fn now_ms(&self) -> u64;
}

/// Wall-clock time source measured from construction.
pub struct MonotonicTime {
    origin: Instant,
}

impl Default for MonotonicTime {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl TimeSource for MonotonicTime {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Leading + trailing throttle for camera-driven recomputation: at most one
/// immediate recompute per window, plus one deferred recompute once events
/// go quiet, so the settled camera state is always eventually reflected.
/// A new trailing deadline supersedes any pending one.
pub struct RecomputeThrottle<T: TimeSource> {
    window_ms: u64,
    quiet_ms: u64,
    time: T,
    last_fired_ms: Option<u64>,
    trailing_at_ms: Option<u64>,
}

impl Default for RecomputeThrottle<MonotonicTime> {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_MS, DEFAULT_QUIET_MS, MonotonicTime::default())
    }
}

impl<T: TimeSource> RecomputeThrottle<T> {
    pub fn new(window_ms: u64, quiet_ms: u64, time: T) -> Self {
        Self {
            window_ms,
            quiet_ms,
            time,
            last_fired_ms: None,
            trailing_at_ms: None,
        }
    }

    /// Register a camera event. Returns true when the caller should
    /// recompute immediately (leading edge); otherwise a trailing
    /// recompute is scheduled for after the quiescence period.
    pub fn on_event(&mut self) -> bool {
        let now = self.time.now_ms();
        let window_open = self
            .last_fired_ms
            .map(|fired| now.saturating_sub(fired) >= self.window_ms)
            .unwrap_or(true);

        if window_open {
            self.last_fired_ms = Some(now);
            self.trailing_at_ms = None;
            true
        } else {
            self.trailing_at_ms = Some(now + self.quiet_ms);
            false
        }
    }

    /// Returns true once a scheduled trailing recompute is due; the
    /// deadline is consumed and counts as a firing for the window.
    pub fn poll(&mut self) -> bool {
        let now = self.time.now_ms();
        match self.trailing_at_ms {
            Some(deadline) if now >= deadline => {
                self.last_fired_ms = Some(now);
                self.trailing_at_ms = None;
                true
            }
            _ => false,
        }
    }

    pub fn pending(&self) -> bool {
        self.trailing_at_ms.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeTime {
        now: Rc<Cell<u64>>,
    }

    impl FakeTime {
        fn advance(&self, ms: u64) {
            self.now.set(self.now.get() + ms);
        }
    }

    impl TimeSource for FakeTime {
        fn now_ms(&self) -> u64 {
            self.now.get()
        }
    }

    fn throttle(clock: &FakeTime) -> RecomputeThrottle<FakeTime> {
        RecomputeThrottle::new(800, 400, clock.clone())
    }

    #[test]
    fn first_event_fires_immediately() {
        let clock = FakeTime::default();
        let mut t = throttle(&clock);
        assert!(t.on_event());
        assert!(!t.pending());
    }

    #[test]
    fn events_inside_the_window_are_deferred() {
        let clock = FakeTime::default();
        let mut t = throttle(&clock);
        assert!(t.on_event());

        clock.advance(100);
        assert!(!t.on_event());
        assert!(t.pending());

        // Not due until the quiescence period has elapsed.
        clock.advance(399);
        assert!(!t.poll());
        clock.advance(1);
        assert!(t.poll());
        assert!(!t.pending());
    }

    #[test]
    fn trailing_fire_reflects_final_settled_state() {
        let clock = FakeTime::default();
        let mut t = throttle(&clock);
        assert!(t.on_event());

        // A burst of suppressed events; each reschedules the trailing fire.
        for _ in 0..5 {
            clock.advance(50);
            assert!(!t.on_event());
        }
        // Quiet deadline counts from the last event, not the first.
        clock.advance(399);
        assert!(!t.poll());
        clock.advance(1);
        assert!(t.poll());
        // Consumed: no second trailing fire.
        clock.advance(1000);
        assert!(!t.poll());
    }

    #[test]
    fn leading_edge_reopens_after_the_window() {
        let clock = FakeTime::default();
        let mut t = throttle(&clock);
        assert!(t.on_event());
        clock.advance(800);
        assert!(t.on_event());
    }

    #[test]
    fn leading_fire_cancels_pending_trailing() {
        let clock = FakeTime::default();
        let mut t = throttle(&clock);
        assert!(t.on_event());
        clock.advance(100);
        assert!(!t.on_event());
        assert!(t.pending());

        clock.advance(700); // window reopens; this event fires leading
        assert!(t.on_event());
        assert!(!t.pending());
        clock.advance(1000);
        assert!(!t.poll());
    }

    #[test]
    fn trailing_fire_counts_toward_the_window() {
        let clock = FakeTime::default();
        let mut t = throttle(&clock);
        assert!(t.on_event());
        clock.advance(100);
        assert!(!t.on_event());
        clock.advance(400);
        assert!(t.poll());

        // Window restarts at the trailing fire.
        clock.advance(100);
        assert!(!t.on_event());
    }
}
