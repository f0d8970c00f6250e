//! Phone number acceptance rules and country-prefix checks

use crate::config::PhonePrefix;
use crate::error::ConfigError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Built-in acceptance rules. Each one also accepts partial input, since
/// the rule is applied while the user is still typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PhoneRule {
    /// Optional `+`, digits, spaces, slashes, dashes and parentheses
    #[default]
    Complete,
    /// Local number without area code: digits, spaces, slashes and dashes
    Arealess,
    /// Area or country code: optional `+` followed by digits
    Area,
    /// International format: leading `+` followed by digits only
    Strict,
    /// Digits only
    Numbers,
}

impl PhoneRule {
    pub const ALL: [PhoneRule; 5] = [
        PhoneRule::Complete,
        PhoneRule::Arealess,
        PhoneRule::Area,
        PhoneRule::Strict,
        PhoneRule::Numbers,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PhoneRule::Complete => "complete",
            PhoneRule::Arealess => "arealess",
            PhoneRule::Area => "area",
            PhoneRule::Strict => "strict",
            PhoneRule::Numbers => "numbers",
        }
    }

    pub fn pattern(&self) -> &'static str {
        match self {
            PhoneRule::Complete => r"^\+?[0-9 ()/\-]*$",
            PhoneRule::Arealess => r"^[0-9 /\-]*$",
            PhoneRule::Area => r"^\+?[0-9]*$",
            PhoneRule::Strict => r"^\+[0-9]*$",
            PhoneRule::Numbers => r"^[0-9]*$",
        }
    }

    /// Compiled rule, built once per process
    pub fn regex(&self) -> &'static Regex {
        static COMPILED: OnceLock<Vec<Regex>> = OnceLock::new();
        let compiled = COMPILED.get_or_init(|| {
            PhoneRule::ALL
                .iter()
                .map(|rule| Regex::new(rule.pattern()).expect("built-in phone rule compiles"))
                .collect()
        });
        &compiled[*self as usize]
    }
}

impl fmt::Display for PhoneRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PhoneRule {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PhoneRule::ALL
            .into_iter()
            .find(|rule| rule.name() == s)
            .ok_or_else(|| ConfigError::UnknownRule {
                name: s.to_string(),
            })
    }
}

/// Whether `phonenr` starts with one of the whitelisted country prefixes.
///
/// Empty numbers pass. Anything else must start with `+`, and the digit
/// right after the matched prefix must not be a trunk `0`.
pub fn has_valid_prefix(phonenr: &str, prefixes: &[PhonePrefix]) -> bool {
    if phonenr.is_empty() {
        return true;
    }
    if !phonenr.starts_with('+') {
        return false;
    }

    prefixes.iter().any(|current| {
        let prefix = current.prefix.string.as_str();
        match phonenr.get(..prefix.len()) {
            Some(head) if head == prefix => !phonenr[prefix.len()..].starts_with('0'),
            _ => false,
        }
    })
}
