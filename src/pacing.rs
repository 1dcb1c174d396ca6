use std::time::Duration;

/// Keeps ticks close to a fixed period when part of each tick is spent
/// blocked on input.
#[derive(Copy, Clone, Debug)]
pub struct TickPacer {
    period: Duration,
}

impl TickPacer {
    pub fn new(period: Duration) -> Self {
        TickPacer { period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// How long to sleep after an input read that took `read_elapsed`.
    /// `None` once the read has used up the whole period.
    pub fn post_read_delay(&self, read_elapsed: Duration) -> Option<Duration> {
        self.period.checked_sub(read_elapsed).filter(|d| !d.is_zero())
    }
}
