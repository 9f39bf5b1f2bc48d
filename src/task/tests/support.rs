//! Shared fixtures for task unit tests.

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

/// Clock that advances one second on every reading.
///
/// Guarantees strictly increasing timestamps so update ordering can be
/// asserted without sleeping.
#[derive(Debug)]
pub struct SteppingClock {
    start: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    /// Creates a clock starting at 2024-05-22T12:00:00Z.
    pub fn new() -> Self {
        Self {
            start: Utc
                .with_ymd_and_hms(2024, 5, 22, 12, 0, 0)
                .single()
                .expect("valid start timestamp"),
            ticks: AtomicI64::new(0),
        }
    }

    /// Returns the first timestamp the clock reports.
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.start + TimeDelta::seconds(tick)
    }
}
