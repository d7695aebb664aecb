use std::time::Duration;

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    format::Locale,
    reference::ReferenceInstant,
};

/// Elements matched by default: any `.uptime-counter` plus `#uptime-display`.
pub const DEFAULT_SELECTOR: &str = ".uptime-counter, #uptime-display";

pub const DEFAULT_PERIOD: Duration = Duration::from_secs(1);

/// How the target elements are found.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetMode {
    /// Resolve the selector once when the counter is created.
    #[default]
    Snapshot,
    /// Resolve the selector again on every update, picking up elements added
    /// later.
    Live,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub reference: ReferenceInstant,

    #[serde(default = "default_selector")]
    pub selector: String,

    #[serde(default = "default_period", with = "period_millis")]
    pub period: Duration,

    #[serde(default)]
    pub targets: TargetMode,

    #[serde(default)]
    pub locale: Locale,
}

impl Config {
    pub fn new(reference: ReferenceInstant) -> Self {
        Self {
            reference,
            selector: default_selector(),
            period: DEFAULT_PERIOD,
            targets: TargetMode::default(),
            locale: Locale::default(),
        }
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    /// Sets the update period. A zero period is replaced by the default.
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = if period.is_zero() {
            DEFAULT_PERIOD
        }
        else {
            period
        };
        self
    }

    pub fn with_targets(mut self, targets: TargetMode) -> Self {
        self.targets = targets;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

fn default_selector() -> String {
    DEFAULT_SELECTOR.to_owned()
}

fn default_period() -> Duration {
    DEFAULT_PERIOD
}

mod period_millis {
    use std::time::Duration;

    use serde::{
        de::Error as _,
        Deserialize,
        Deserializer,
        Serializer,
    };

    pub fn serialize<S: Serializer>(period: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(period.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let millis = u64::deserialize(deserializer)?;
        if millis == 0 {
            return Err(D::Error::custom("update period must not be zero"));
        }
        Ok(Duration::from_millis(millis))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{
        TimeZone,
        Utc,
    };

    use super::*;

    fn reference() -> ReferenceInstant {
        ReferenceInstant::from_datetime(Utc.with_ymd_and_hms(2025, 12, 29, 20, 0, 0).unwrap())
    }

    #[test]
    fn it_defaults_to_the_page_layout() {
        let config = Config::new(reference());
        assert_eq!(config.selector, ".uptime-counter, #uptime-display");
        assert_eq!(config.period, Duration::from_secs(1));
        assert_eq!(config.targets, TargetMode::Snapshot);
        assert_eq!(config.locale, Locale::Spanish);
    }

    #[test]
    fn it_deserializes_with_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "reference": "2025-12-29T20:00:00Z" }"#).unwrap();
        assert_eq!(config, Config::new(reference()));
    }

    #[test]
    fn it_deserializes_all_fields() {
        let config: Config = serde_json::from_str(
            r#"{
                "reference": "2025-12-29T21:00:00+01:00",
                "selector": ".bot-uptime",
                "period": 250,
                "targets": "live",
                "locale": "en"
            }"#,
        )
        .unwrap();
        assert_eq!(
            config,
            Config::new(reference())
                .with_selector(".bot-uptime")
                .with_period(Duration::from_millis(250))
                .with_targets(TargetMode::Live)
                .with_locale(Locale::English)
        );
    }

    #[test]
    fn it_rejects_a_zero_period() {
        let result = serde_json::from_str::<Config>(
            r#"{ "reference": "2025-12-29T20:00:00Z", "period": 0 }"#,
        );
        assert!(result.is_err());
        assert_eq!(
            Config::new(reference()).with_period(Duration::ZERO).period,
            DEFAULT_PERIOD
        );
    }

    #[test]
    fn it_serializes_the_period_as_millis() {
        let config = Config::new(reference()).with_period(Duration::from_millis(1500));
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["period"], 1500);
        assert_eq!(json["targets"], "snapshot");
        assert_eq!(json["locale"], "es");
    }
}
