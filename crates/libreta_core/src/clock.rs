//! Creation-time source for notes.
//!
//! # Invariants
//! - Timestamps are rendered once at creation and stored as text.
//! - Format is `D/M/YYYY, HH:MM:SS` in local time.

use chrono::{Local, NaiveDateTime};

/// Human-readable timestamp layout stored on every note.
pub const TIMESTAMP_FORMAT: &str = "%-d/%-m/%Y, %H:%M:%S";

/// Time source injected into the note store.
pub trait Clock {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;

    /// Current time rendered with [`TIMESTAMP_FORMAT`].
    fn timestamp(&self) -> String {
        format_timestamp(self.now())
    }
}

/// System local-time clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to one instant. Used by tests and replay tooling.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::{format_timestamp, Clock, FixedClock};
    use chrono::NaiveDate;

    #[test]
    fn timestamp_uses_day_month_year_layout() {
        let at = NaiveDate::from_ymd_opt(2026, 10, 6)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        assert_eq!(format_timestamp(at), "6/10/2026, 09:05:00");
        assert_eq!(FixedClock(at).timestamp(), "6/10/2026, 09:05:00");
    }
}
