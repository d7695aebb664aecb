use serde::{
    Deserialize,
    Serialize,
};

use crate::elapsed::ElapsedBreakdown;

/// Language used for the detailed form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "en")]
    English,
}

#[derive(Clone, Copy, Debug)]
struct Unit {
    singular: &'static str,
    plural: &'static str,
}

impl Unit {
    fn segment(&self, count: u64) -> String {
        let name = if count == 1 {
            self.singular
        }
        else {
            self.plural
        };
        format!("{count} {name}")
    }
}

#[derive(Clone, Copy, Debug)]
struct Units {
    day: Unit,
    hour: Unit,
    minute: Unit,
}

impl Locale {
    fn units(self) -> Units {
        match self {
            Locale::Spanish => {
                Units {
                    day: Unit {
                        singular: "día",
                        plural: "días",
                    },
                    hour: Unit {
                        singular: "hora",
                        plural: "horas",
                    },
                    minute: Unit {
                        singular: "minuto",
                        plural: "minutos",
                    },
                }
            }
            Locale::English => {
                Units {
                    day: Unit {
                        singular: "day",
                        plural: "days",
                    },
                    hour: Unit {
                        singular: "hour",
                        plural: "hours",
                    },
                    minute: Unit {
                        singular: "minute",
                        plural: "minutes",
                    },
                }
            }
        }
    }
}

/// Compact label: `"2d 15h"` once a day has passed, `"1h 30m"` before.
pub fn format_short(breakdown: &ElapsedBreakdown) -> String {
    if breakdown.days > 0 {
        format!("{}d {}h", breakdown.days, breakdown.hours)
    }
    else {
        format!("{}h {:02}m", breakdown.total_hours, breakdown.minutes)
    }
}

/// Detailed form in the default locale.
pub fn format_detailed(breakdown: &ElapsedBreakdown) -> String {
    format_detailed_in(Locale::default(), breakdown)
}

/// Detailed form, e.g. `"1 día, 0 horas, 5 minutos"`.
///
/// Days are shown once a day has passed. Hours are shown if there are any or
/// if days are shown. Minutes are always shown. Seconds never are.
pub fn format_detailed_in(locale: Locale, breakdown: &ElapsedBreakdown) -> String {
    let units = locale.units();
    let mut parts = Vec::with_capacity(3);

    if breakdown.days > 0 {
        parts.push(units.day.segment(breakdown.days));
    }
    if breakdown.hours > 0 || breakdown.days > 0 {
        parts.push(units.hour.segment(breakdown.hours));
    }
    parts.push(units.minute.segment(breakdown.minutes));

    parts.join(", ")
}

/// Both renderings of one breakdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UptimeText {
    pub short: String,
    pub detailed: String,
}

impl UptimeText {
    pub fn new(locale: Locale, breakdown: &ElapsedBreakdown) -> Self {
        Self {
            short: format_short(breakdown),
            detailed: format_detailed_in(locale, breakdown),
        }
    }
}
