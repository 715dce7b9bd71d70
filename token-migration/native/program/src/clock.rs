use std::cell::Cell;

use solana_program::clock::{Clock, UnixTimestamp};

/// Source of the current time for unlock comparisons.
pub trait TimeSource {
    fn unix_timestamp(&self) -> UnixTimestamp;
}

impl TimeSource for Clock {
    fn unix_timestamp(&self) -> UnixTimestamp {
        self.unix_timestamp
    }
}

/// Clock driven by hand, for simulating the passage of time off-chain.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<UnixTimestamp>,
}

impl ManualClock {
    pub fn new(now: UnixTimestamp) -> Self {
        Self { now: Cell::new(now) }
    }

    pub fn advance(&self, seconds: UnixTimestamp) {
        self.now.set(self.now.get() + seconds);
    }

    pub fn set(&self, now: UnixTimestamp) {
        self.now.set(now);
    }
}

impl TimeSource for ManualClock {
    fn unix_timestamp(&self) -> UnixTimestamp {
        self.now.get()
    }
}
