use std::fmt::Debug;
use std::time::Duration;

/// Gates how often the grid is stepped, independently of the frame rate
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SimulationClock {
    last_update: Option<Duration>,
    update_interval: Duration,
    ticks: u64,
}

impl Debug for SimulationClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationClock")
            .field("last_update", &self.last_update)
            .field("interval_ms", &self.update_interval.as_millis())
            .field("ticks", &self.ticks)
            .finish()
    }
}

impl SimulationClock {
    pub fn new(update_interval: Duration) -> Self {
        Self {
            last_update: None,
            update_interval,
            ticks: 0,
        }
    }

    pub fn update_interval(&self) -> Duration {
        self.update_interval
    }

    pub fn last_update(&self) -> Option<Duration> {
        self.last_update
    }

    /// Number of ticks applied so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Whether a tick at `now` is due. The first tick is always due.
    pub fn is_due(&self, now: Duration) -> bool {
        match self.last_update {
            None => true,
            Some(last) => now.saturating_sub(last) >= self.update_interval,
        }
    }

    /// Record a tick at `now` if one is due
    pub fn try_advance(&mut self, now: Duration) -> bool {
        if !self.is_due(now) {
            return false;
        }
        self.last_update = Some(now);
        self.ticks += 1;
        true
    }
}
