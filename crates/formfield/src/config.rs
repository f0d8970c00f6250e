//! Static tables consumed by the date and phone fields: locale patterns,
//! calendar names, phone rules and country prefixes.
//!
//! Every table has a built-in default and can be replaced from JSON or YAML.

use crate::error::ConfigError;
use crate::validators::{DatePattern, PhoneRule};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// All configuration tables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub date: DateConfig,
    pub phone: PhoneConfig,
}

impl FormConfig {
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.json`, `.yaml` or `.yml` file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let config = match extension.as_deref() {
            Some("json") => Self::from_json_str(&source)?,
            Some("yaml") | Some("yml") => Self::from_yaml_str(&source)?,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.display().to_string(),
                })
            }
        };
        tracing::debug!(path = %path.display(), "loaded form configuration");
        Ok(config)
    }

    /// Check that every pattern and rule compiles and every calendar table
    /// is complete
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.date.validate()?;
        self.phone.validate()
    }
}

/// Date patterns and calendar names per locale key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateConfig {
    pub patterns: HashMap<String, String>,
    pub i18n: HashMap<String, CalendarLocale>,
}

impl DateConfig {
    /// Compile the pattern registered for `lang`
    pub fn pattern(&self, lang: &str) -> Result<DatePattern, ConfigError> {
        let source = self
            .patterns
            .get(lang)
            .ok_or_else(|| ConfigError::unknown_locale(lang))?;
        DatePattern::parse(source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for lang in self.patterns.keys() {
            self.pattern(lang)?;
        }
        for (lang, locale) in &self.i18n {
            locale.validate(lang)?;
        }
        Ok(())
    }
}

impl Default for DateConfig {
    fn default() -> Self {
        let patterns = HashMap::from([
            ("de".to_string(), "DD.MM.YYYY".to_string()),
            ("en".to_string(), "YYYY-MM-DD".to_string()),
        ]);
        let i18n = HashMap::from([("de".to_string(), CalendarLocale::german())]);
        Self { patterns, i18n }
    }
}

/// Month and weekday names for a calendar widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarLocale {
    /// First day of the week, 0 = Sunday
    pub first_day: u8,
    pub previous_month: String,
    pub next_month: String,
    pub months: Vec<String>,
    pub weekdays: Vec<String>,
    pub weekdays_short: Vec<String>,
}

impl CalendarLocale {
    pub fn german() -> Self {
        let strings =
            |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
        Self {
            first_day: 1,
            previous_month: "Vorheriger Monat".to_string(),
            next_month: "Nächster Monat".to_string(),
            months: strings(&[
                "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August",
                "September", "Oktober", "November", "Dezember",
            ]),
            weekdays: strings(&[
                "Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag",
            ]),
            weekdays_short: strings(&["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"]),
        }
    }

    fn validate(&self, lang: &str) -> Result<(), ConfigError> {
        let checks = [
            ("months", self.months.len(), 12),
            ("weekdays", self.weekdays.len(), 7),
            ("weekdaysShort", self.weekdays_short.len(), 7),
        ];
        for (name, actual, expected) in checks {
            if actual != expected {
                return Err(ConfigError::invalid_value(
                    format!("i18n.{}.{}", lang, name),
                    format!("{} entries", actual),
                    format!("{} entries", expected),
                ));
            }
        }
        if self.first_day > 6 {
            return Err(ConfigError::invalid_value(
                format!("i18n.{}.firstDay", lang),
                self.first_day.to_string(),
                "0 (Sunday) to 6 (Saturday)",
            ));
        }
        Ok(())
    }
}

/// Phone acceptance rules by name plus the country-prefix whitelist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneConfig {
    pub rules: HashMap<String, String>,
    pub prefixes: Vec<PhonePrefix>,
}

impl PhoneConfig {
    /// Compile the rule registered under `name`
    pub fn rule(&self, name: &str) -> Result<Regex, ConfigError> {
        let pattern = self.rules.get(name).ok_or_else(|| ConfigError::UnknownRule {
            name: name.to_string(),
        })?;
        Regex::new(pattern).map_err(|source| ConfigError::InvalidRule {
            name: name.to_string(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for name in self.rules.keys() {
            self.rule(name)?;
        }
        for entry in &self.prefixes {
            if !entry.prefix.string.starts_with('+') {
                return Err(ConfigError::invalid_value(
                    format!("prefixes.{}", entry.name),
                    entry.prefix.string.clone(),
                    "a prefix starting with '+'",
                ));
            }
        }
        Ok(())
    }
}

impl Default for PhoneConfig {
    fn default() -> Self {
        let rules = PhoneRule::ALL
            .iter()
            .map(|rule| (rule.name().to_string(), rule.pattern().to_string()))
            .collect();
        let prefixes = [
            ("Deutschland", "+49", 49),
            ("Österreich", "+43", 43),
            ("Schweiz", "+41", 41),
            ("Niederlande", "+31", 31),
            ("Belgien", "+32", 32),
            ("Luxemburg", "+352", 352),
            ("Frankreich", "+33", 33),
            ("Italien", "+39", 39),
            ("Dänemark", "+45", 45),
            ("Polen", "+48", 48),
            ("Vereinigtes Königreich", "+44", 44),
        ]
        .into_iter()
        .map(|(name, string, number)| PhonePrefix::new(name, string, number))
        .collect();
        Self { rules, prefixes }
    }
}

/// Country dialling prefix, in the shape of the `prefixes.json` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhonePrefix {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    pub name: String,
    pub prefix: PrefixCode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixCode {
    /// Prefix as dialled, e.g. `+49`
    pub string: String,
    pub number: u32,
}

impl PhonePrefix {
    pub fn new(name: impl Into<String>, string: impl Into<String>, number: u32) -> Self {
        Self {
            img: None,
            name: name.into(),
            prefix: PrefixCode {
                string: string.into(),
                number,
            },
        }
    }

    /// Parse a standalone prefix list
    pub fn list_from_json(source: &str) -> Result<Vec<PhonePrefix>, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }
}
