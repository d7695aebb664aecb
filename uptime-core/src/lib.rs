//! Elapsed time since a fixed start instant, and how to show it.

pub mod clock;
pub mod config;
pub mod elapsed;
pub mod format;
pub mod reference;

pub use crate::{
    clock::{
        Clock,
        FixedClock,
        SystemClock,
    },
    config::{
        Config,
        TargetMode,
    },
    elapsed::{
        compute_elapsed,
        ElapsedBreakdown,
    },
    format::{
        format_detailed,
        format_detailed_in,
        format_short,
        Locale,
        UptimeText,
    },
    reference::{
        ParseReferenceError,
        ReferenceInstant,
    },
};
