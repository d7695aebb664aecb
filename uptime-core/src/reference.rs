use std::fmt::Display;

use chrono::{
    DateTime,
    Local,
    NaiveDateTime,
    Offset,
    TimeDelta,
    TimeZone,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};

/// Format of the start literal, e.g. `2025-12-29T20:00:00`.
pub const REFERENCE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// The instant the tracked process is believed to have started.
///
/// This is set before deployment and never derived from anything observed at
/// runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceInstant(DateTime<Utc>);

impl ReferenceInstant {
    pub fn from_datetime<Tz: TimeZone>(datetime: DateTime<Tz>) -> Self {
        Self(datetime.with_timezone(&Utc))
    }

    /// Parses a `YYYY-MM-DDTHH:MM:SS` literal as a local time in the host's
    /// timezone.
    pub fn parse_local(s: &str) -> Result<Self, ParseReferenceError> {
        Self::parse_in(s, &Local)
    }

    /// Parses a `YYYY-MM-DDTHH:MM:SS` literal as a local time in `timezone`.
    ///
    /// If the local time is ambiguous the earlier instant is used. If it was
    /// skipped by a forward transition, the offset in effect before the
    /// transition is applied, as the browser's `Date` does.
    pub fn parse_in<Tz: TimeZone>(s: &str, timezone: &Tz) -> Result<Self, ParseReferenceError> {
        let naive = NaiveDateTime::parse_from_str(s.trim(), REFERENCE_FORMAT)?;

        if let Some(datetime) = timezone.from_local_datetime(&naive).earliest() {
            return Ok(Self::from_datetime(datetime));
        }

        // transitions are shorter than this, so this is before the gap.
        let offset = naive
            .checked_sub_signed(TimeDelta::hours(3))
            .and_then(|before| timezone.offset_from_local_datetime(&before).earliest())
            .ok_or(ParseReferenceError::NonexistentLocalTime(naive))?;
        let utc = naive
            .checked_sub_signed(TimeDelta::seconds(offset.fix().local_minus_utc().into()))
            .ok_or(ParseReferenceError::NonexistentLocalTime(naive))?;

        Ok(Self(utc.and_utc()))
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl Display for ReferenceInstant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseReferenceError {
    #[error("invalid start date, expected YYYY-MM-DDTHH:MM:SS")]
    Format(#[from] chrono::ParseError),
    #[error("no offset found for local time {0}")]
    NonexistentLocalTime(NaiveDateTime),
}
