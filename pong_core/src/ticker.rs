use std::time::Duration;

/// Periodic tick schedule owned by an arena
///
/// Turns elapsed wall-clock time into a count of due ticks. Dropping the
/// ticker cancels the schedule.
#[derive(Debug)]
pub struct Ticker {
    interval: Duration,
    pending: Duration,
    max_catch_up: u32,
}

impl Ticker {
    pub fn new(interval: Duration, max_catch_up: u32) -> Self {
        Self {
            // A zero interval would make every call due forever
            interval: interval.max(Duration::from_millis(1)),
            pending: Duration::ZERO,
            max_catch_up: max_catch_up.max(1),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Accumulate `elapsed` and return how many ticks are due now
    pub fn due(&mut self, elapsed: Duration) -> u32 {
        let cap = self.interval * self.max_catch_up;
        self.pending = (self.pending + elapsed).min(cap);

        let mut ticks = 0;
        while self.pending >= self.interval {
            self.pending -= self.interval;
            ticks += 1;
        }
        ticks
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        tracing::trace!(interval_ms = self.interval.as_millis() as u64, "tick schedule cancelled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_accumulates_partial_intervals() {
        let mut ticker = Ticker::new(Duration::from_millis(10), 10);
        assert_eq!(ticker.due(Duration::from_millis(4)), 0);
        assert_eq!(ticker.due(Duration::from_millis(7)), 1);
        assert_eq!(ticker.due(Duration::from_millis(9)), 1);
    }

    #[test]
    fn test_ticker_clamps_backlog() {
        let mut ticker = Ticker::new(Duration::from_millis(10), 5);
        assert_eq!(ticker.due(Duration::from_secs(3)), 5);
        assert_eq!(ticker.due(Duration::ZERO), 0);
    }

    #[test]
    fn test_ticker_zero_interval_is_bumped() {
        let ticker = Ticker::new(Duration::ZERO, 1);
        assert_eq!(ticker.interval(), Duration::from_millis(1));
    }
}
