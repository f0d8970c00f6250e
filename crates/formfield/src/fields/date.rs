use super::{empty_complaint, FieldKind, FieldState};
use crate::cell::WeakCell;
use crate::complaint::{Complaint, ValidationType};
use crate::config::DateConfig;
use crate::error::ConfigError;
use crate::traits::FormField;
use crate::validators::DatePattern;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date hook: raw input, the locale that matched (if any), the range in
/// effect and the field. An empty result keeps the raw input.
pub type DateHook =
    Box<dyn Fn(&str, Option<&str>, Option<&DateRange>, &DateField) -> Option<String>>;

/// Inclusive date bounds; a missing side is unbounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        Self { min, max }
    }

    pub fn between(min: NaiveDate, max: NaiveDate) -> Self {
        Self::new(Some(min), Some(max))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min.map_or(true, |min| date >= min) && self.max.map_or(true, |max| date <= max)
    }
}

/// Date in one of several locale formats, optionally bounded
pub struct DateField {
    state: FieldState<String>,
    locales: Vec<(String, DatePattern)>,
    daterange: Option<DateRange>,
    hook: Option<DateHook>,
}

field_accessors!(DateField, String);

impl DateField {
    /// Field accepting the formats of `langs`, tried in order. Every locale
    /// must have a pattern in `config`.
    pub fn new(
        required: bool,
        langs: &[&str],
        daterange: Option<DateRange>,
        config: &DateConfig,
    ) -> Result<Self, ConfigError> {
        if langs.is_empty() {
            return Err(ConfigError::invalid_value(
                "langs",
                "[]",
                "at least one locale",
            ));
        }
        let locales = langs
            .iter()
            .map(|lang| Ok((lang.to_string(), config.pattern(lang)?)))
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Self {
            state: FieldState::new(required, String::new()),
            locales,
            daterange,
            hook: None,
        })
    }

    pub fn hook(
        mut self,
        hook: impl Fn(&str, Option<&str>, Option<&DateRange>, &DateField) -> Option<String>
            + 'static,
    ) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    /// Locale keys in matching order
    pub fn langs(&self) -> impl Iterator<Item = &str> {
        self.locales.iter().map(|(lang, _)| lang.as_str())
    }

    pub fn daterange(&self) -> Option<DateRange> {
        self.daterange
    }

    /// Validate against the range given at construction
    pub fn validate(&mut self, input: &str) {
        self.validate_in_range(input, self.daterange);
    }

    /// Validate against `range` instead of the configured one
    pub fn validate_in_range(&mut self, input: &str, range: Option<DateRange>) {
        let mut matched = None;
        let complaint = if let Some(empty) = empty_complaint(self.state.required, input) {
            empty
        } else if input.trim().is_empty() {
            Complaint::None
        } else {
            match self.match_locale(input) {
                None => ValidationType::Invalid.into(),
                Some((index, date)) => {
                    matched = Some(index);
                    match range {
                        Some(range) if !range.contains(date) => ValidationType::OutOfRange.into(),
                        _ => Complaint::None,
                    }
                }
            }
        };
        self.state.complaint = complaint;

        let lang = matched.map(|index| self.locales[index].0.as_str());
        let stored = self
            .hook
            .as_ref()
            .and_then(|hook| hook(input, lang, range.as_ref(), &*self))
            .filter(|hooked| !hooked.is_empty())
            .unwrap_or_else(|| input.to_string());
        self.state.store(FieldKind::Date, stored);
    }

    /// Stored value as a date, parsed with the first locale whose grammar
    /// matches
    pub fn get_date(&self) -> Option<NaiveDate> {
        self.state.value.with(|value| {
            self.locales
                .iter()
                .find_map(|(_, pattern)| pattern.matches(value))
        })
    }

    /// First locale accepting `input`, with the parsed date
    fn match_locale(&self, input: &str) -> Option<(usize, NaiveDate)> {
        self.locales
            .iter()
            .enumerate()
            .find_map(|(index, (_, pattern))| pattern.accepts(input).map(|date| (index, date)))
    }
}

impl FormField for DateField {
    fn kind(&self) -> FieldKind {
        FieldKind::Date
    }

    fn complaint(&self) -> Complaint {
        self.state.complaint
    }

    fn is_required(&self) -> bool {
        self.state.required
    }

    fn string_cell(&self) -> Option<WeakCell<String>> {
        Some(self.state.value.downgrade())
    }

    fn revalidate(&mut self) {
        let current = self.value();
        self.validate(&current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Duration, Local};

    fn field(langs: &[&str], range: Option<DateRange>) -> DateField {
        DateField::new(true, langs, range, &DateConfig::default()).unwrap()
    }

    #[test]
    fn test_german_dates() {
        let mut date = field(&["de"], None);
        for input in ["13.8.2019", "3.10.2019", "13.10.19", "2019-10-03", "31.02.2019"] {
            date.validate(input);
            assert_eq!(
                date.complaint(),
                Complaint::Kind(ValidationType::Invalid),
                "'{}' should be invalid",
                input
            );
        }

        date.validate("04.07.2019");
        assert_eq!(date.complaint(), Complaint::None);
        assert_eq!(date.get_date().map(|d| d.year()), Some(2019));
    }

    #[test]
    fn test_multiple_locales() {
        let mut date = field(&["de", "en"], None);
        for input in ["19-10-03", "2019-10-3", "2019-7-10", "13.10.19"] {
            date.validate(input);
            assert_eq!(date.complaint(), Complaint::Kind(ValidationType::Invalid), "'{}'", input);
        }

        date.validate("2019-07-04");
        assert_eq!(date.complaint(), Complaint::None);
        assert_eq!(date.get_date(), NaiveDate::from_ymd_opt(2019, 7, 4));

        date.validate("04.07.2019");
        assert_eq!(date.complaint(), Complaint::None);
    }

    #[test]
    fn test_empty() {
        let mut date = field(&["de"], None);
        date.validate("");
        assert_eq!(date.complaint(), Complaint::Kind(ValidationType::Empty));
        assert_eq!(date.get_date(), None);

        let mut optional = DateField::new(false, &["de"], None, &DateConfig::default()).unwrap();
        optional.validate("  ");
        assert_eq!(optional.complaint(), Complaint::None);
    }

    #[test]
    fn test_range() {
        let today = Local::now().date_naive();
        let pattern = DatePattern::parse("DD.MM.YYYY").unwrap();
        let range = DateRange::between(today, today + Duration::days(5));
        let mut date = field(&["de"], Some(range));

        date.validate(&pattern.format(today - Duration::days(2)));
        assert_eq!(date.complaint(), Complaint::Kind(ValidationType::OutOfRange));

        date.validate(&pattern.format(today + Duration::days(2)));
        assert_eq!(date.complaint(), Complaint::None);

        date.validate(&pattern.format(today));
        assert_eq!(date.complaint(), Complaint::None);

        // explicit range overrides the configured one
        date.validate_in_range(&pattern.format(today - Duration::days(2)), None);
        assert_eq!(date.complaint(), Complaint::None);
    }

    #[test]
    fn test_open_range() {
        let min = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let range = DateRange::new(Some(min), None);
        assert!(range.contains(min));
        assert!(range.contains(NaiveDate::from_ymd_opt(2999, 1, 1).unwrap()));
        assert!(!range.contains(NaiveDate::from_ymd_opt(2019, 12, 31).unwrap()));
        assert!(DateRange::default().contains(min));
    }

    #[test]
    fn test_hook_receives_matched_locale() {
        let mut date = field(&["de", "en"], None).hook(|input, lang, _, _| {
            Some(format!("{}:{}", lang.unwrap_or("none"), input))
        });

        date.validate("2019-07-04");
        assert_eq!(date.value(), "en:2019-07-04");

        date.validate("test");
        assert_eq!(date.value(), "none:test");
    }

    #[test]
    fn test_empty_hook_result_keeps_input() {
        let mut date = field(&["de"], None).hook(|_, _, _, _| Some(String::new()));
        date.validate("04.07.2019");
        assert_eq!(date.value(), "04.07.2019");
        assert_eq!(date.complaint(), Complaint::None);
    }

    #[test]
    fn test_year_zero_is_invalid() {
        let mut date = field(&["de"], None);
        date.validate("01.01.0000");
        assert_eq!(date.complaint(), Complaint::Kind(ValidationType::Invalid));
    }

    #[test]
    fn test_unknown_locale_is_a_config_error() {
        let result = DateField::new(true, &["de", "fr"], None, &DateConfig::default());
        assert!(matches!(result, Err(ConfigError::UnknownLocale { .. })));

        let result = DateField::new(true, &[], None, &DateConfig::default());
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }
}
