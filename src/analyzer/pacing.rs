use std::time::Duration;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Spacing between consecutive provider calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacingPolicy {
    Fixed(Duration),
    Immediate,
}

impl Default for PacingPolicy {
    fn default() -> Self {
        PacingPolicy::Fixed(DEFAULT_DELAY)
    }
}

impl PacingPolicy {
    pub fn from_millis(ms: u64) -> Self {
        if ms == 0 {
            PacingPolicy::Immediate
        } else {
            PacingPolicy::Fixed(Duration::from_millis(ms))
        }
    }

    pub fn interval(&self) -> Duration {
        match self {
            PacingPolicy::Fixed(d) => *d,
            PacingPolicy::Immediate => Duration::ZERO,
        }
    }

    pub async fn pause(&self) {
        let interval = self.interval();
        if !interval.is_zero() {
            tokio::time::sleep(interval).await;
        }
    }
}
