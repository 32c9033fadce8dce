//! Application-level configuration constants and per-instance counter settings.

use crate::utils::parse_attribute;
use crate::ConfigurationError;
use serde::{Deserialize, Serialize};

// Default bounds for a counter with no attributes
pub const DEFAULT_MINIMUM: i32 = 0;
pub const DEFAULT_MAXIMUM: i32 = 25;
pub const DEFAULT_VALUE: i32 = 0;

// Milestones with their own styling; the high one also fires confetti
pub const MILESTONE_LOW: i32 = 18;
pub const MILESTONE_HIGH: i32 = 21;

// Host page integration
pub const HOST_TAG: &str = "counter-app";
pub const ATTR_MIN: &str = "min";
pub const ATTR_MAX: &str = "max";
pub const ATTR_DEFAULT: &str = "default-count";
pub const ATTR_DEFAULT_LEGACY: &str = "defaultcount";
pub const ATTR_TITLE: &str = "title";
pub const EVENT_COUNT_CHANGED: &str = "count-changed";
pub const EVENT_COUNT_RESET: &str = "count-reset";

// Localization
pub const LOCALES: [&str; 4] = ["ar", "es", "hi", "zh"];
pub const LOCALES_PATH: &str = "./locales/";
pub const RTL_LOCALES: [&str; 1] = ["ar"];

// Celebration effect
pub const CONFETTI_MODULE: &str = "@haxtheweb/multiple-choice/lib/confetti-container.js";
pub const CONFETTI_POP_DELAY_MS: u32 = 0;

/// Bounds and reset target for one counter instance.
///
/// Field names on the JS side follow the widget's property names
/// (`min`, `max`, `defaultCount`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    #[serde(rename = "min")]
    pub minimum: i32,
    #[serde(rename = "max")]
    pub maximum: i32,
    #[serde(rename = "defaultCount")]
    pub default_value: i32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            minimum: DEFAULT_MINIMUM,
            maximum: DEFAULT_MAXIMUM,
            default_value: DEFAULT_VALUE,
        }
    }
}

impl CounterConfig {
    /// Check the bounds without activating a counter.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.minimum >= self.maximum {
            return Err(ConfigurationError::EmptyRange {
                minimum: self.minimum,
                maximum: self.maximum,
            });
        }
        if !(self.minimum..=self.maximum).contains(&self.default_value) {
            return Err(ConfigurationError::DefaultOutOfRange {
                default_value: self.default_value,
                minimum: self.minimum,
                maximum: self.maximum,
            });
        }
        Ok(())
    }

    /// Read settings from host element attributes.
    ///
    /// Absent attributes keep their defaults; attributes that are present but
    /// not integers are rejected rather than ignored. Range checks are left to
    /// activation.
    pub fn from_attributes<F>(lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(ATTR_MIN) {
            config.minimum = parse_attribute(ATTR_MIN, &raw)?;
        }
        if let Some(raw) = lookup(ATTR_MAX) {
            config.maximum = parse_attribute(ATTR_MAX, &raw)?;
        }
        let default_attr = [ATTR_DEFAULT, ATTR_DEFAULT_LEGACY]
            .into_iter()
            .find_map(|name| lookup(name).map(|raw| (name, raw)));
        if let Some((name, raw)) = default_attr {
            config.default_value = parse_attribute(name, &raw)?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn missing_attributes_use_defaults() {
        let config = CounterConfig::from_attributes(attrs(&[])).unwrap();
        assert_eq!(config, CounterConfig::default());
        assert_eq!(config.maximum, 25);
    }

    #[test]
    fn attributes_override_defaults() {
        let lookup = attrs(&[("min", "-5"), ("max", " 30 "), ("default-count", "16")]);
        let config = CounterConfig::from_attributes(lookup).unwrap();
        assert_eq!(
            config,
            CounterConfig {
                minimum: -5,
                maximum: 30,
                default_value: 16
            }
        );
    }

    #[test]
    fn lowercased_default_attribute_is_accepted() {
        let config = CounterConfig::from_attributes(attrs(&[("defaultcount", "3")])).unwrap();
        assert_eq!(config.default_value, 3);
    }

    #[test]
    fn non_integer_attribute_is_rejected() {
        let err = CounterConfig::from_attributes(attrs(&[("max", "lots")])).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::InvalidAttribute {
                name: "max".into(),
                value: "lots".into()
            }
        );
    }

    #[test]
    fn validate_rejects_inverted_and_out_of_range() {
        let inverted = CounterConfig {
            minimum: 10,
            maximum: 5,
            default_value: 7,
        };
        assert!(matches!(
            inverted.validate(),
            Err(ConfigurationError::EmptyRange { .. })
        ));

        let outside = CounterConfig {
            minimum: 0,
            maximum: 10,
            default_value: 20,
        };
        assert!(matches!(
            outside.validate(),
            Err(ConfigurationError::DefaultOutOfRange { .. })
        ));
    }

    #[test]
    fn deserializes_widget_property_names() {
        let config: CounterConfig = serde_json::from_str(r#"{"max": 40, "defaultCount": 5}"#).unwrap();
        assert_eq!(
            config,
            CounterConfig {
                minimum: 0,
                maximum: 40,
                default_value: 5
            }
        );
    }
}
