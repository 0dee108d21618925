//! Calendar date shown for the current simulation time.

use chrono::{DateTime, TimeDelta, Utc};
use orrery_core::time::days_to_milliseconds;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationCalendar {
    start: DateTime<Utc>,
}

impl SimulationCalendar {
    /// Calendar whose zero elapsed time is `start`.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { start }
    }

    /// Date at simulation start.
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Date reached after `elapsed_days`, at millisecond resolution.
    ///
    /// Saturates at chrono's representable range.
    pub fn date_at(&self, elapsed_days: f64) -> DateTime<Utc> {
        let millis = days_to_milliseconds(elapsed_days).round() as i64;
        TimeDelta::try_milliseconds(millis)
            .and_then(|delta| self.start.checked_add_signed(delta))
            .unwrap_or(if millis < 0 {
                DateTime::<Utc>::MIN_UTC
            } else {
                DateTime::<Utc>::MAX_UTC
            })
    }

    /// UTC string in the `Tue, 01 Jan 2030 00:00:00 GMT` style.
    pub fn display(&self, elapsed_days: f64) -> String {
        self.date_at(elapsed_days)
            .format("%a, %d %b %Y %H:%M:%S GMT")
            .to_string()
    }
}
