use chrono::{
    DateTime,
    Utc,
};

use crate::reference::ReferenceInstant;

/// Elapsed wall-clock time split into days, hours, minutes and seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ElapsedBreakdown {
    pub days: u64,
    /// Hours within the current day, `0..24`.
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    /// All elapsed hours, not wrapped at a day.
    pub total_hours: u64,
}

impl ElapsedBreakdown {
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        total_hours: 0,
    };

    /// Breaks down a signed millisecond difference. Negative differences are
    /// clamped to zero.
    pub fn from_millis(millis: i64) -> Self {
        let Ok(millis) = u64::try_from(millis)
        else {
            return Self::ZERO;
        };

        let seconds = millis / 1000;
        let minutes = seconds / 60;
        let hours = minutes / 60;
        let days = hours / 24;

        Self {
            days,
            hours: hours % 24,
            minutes: minutes % 60,
            seconds: seconds % 60,
            total_hours: hours,
        }
    }
}

/// Computes the time elapsed between `reference` and `now`.
///
/// A reference in the future yields [`ElapsedBreakdown::ZERO`].
pub fn compute_elapsed(reference: ReferenceInstant, now: DateTime<Utc>) -> ElapsedBreakdown {
    let millis = now
        .signed_duration_since(reference.as_datetime())
        .num_milliseconds();
    ElapsedBreakdown::from_millis(millis)
}
