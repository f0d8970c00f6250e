use super::{apply_hook, empty_complaint, FieldKind, FieldState, Hook};
use crate::cell::WeakCell;
use crate::complaint::{Complaint, ValidationType};
use crate::traits::FormField;
use crate::validators::{is_time, parse_time};
use chrono::NaiveTime;

/// Time of day in 24-hour `hh:mm`
pub struct TimeField {
    state: FieldState<String>,
    hook: Option<Hook<TimeField>>,
}

field_accessors!(TimeField, String);

impl TimeField {
    pub fn new(required: bool) -> Self {
        Self {
            state: FieldState::new(required, String::new()),
            hook: None,
        }
    }

    pub fn hook(mut self, hook: impl Fn(&str, &TimeField) -> Option<String> + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    pub fn validate(&mut self, input: &str) {
        let complaint = match empty_complaint(self.state.required, input) {
            Some(empty) => empty,
            None if !input.trim().is_empty() && !is_time(input) => ValidationType::Invalid.into(),
            None => Complaint::None,
        };
        self.state.complaint = complaint;

        let stored = apply_hook(self.hook.as_ref(), input, &*self);
        self.state.store(FieldKind::Time, stored);
    }

    pub fn get_time(&self) -> Option<NaiveTime> {
        self.state.value.with(|value| parse_time(value))
    }
}

impl FormField for TimeField {
    fn kind(&self) -> FieldKind {
        FieldKind::Time
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
    use chrono::Timelike;

    #[test]
    fn test_invalid_times() {
        let mut field = TimeField::new(true);
        for input in ["13.00", "4:00", "4", "12.3", "12:5", "24:00", "12:60"] {
            field.validate(input);
            assert_eq!(
                field.complaint(),
                Complaint::Kind(ValidationType::Invalid),
                "'{}' should be invalid",
                input
            );
        }
    }

    #[test]
    fn test_valid_times() {
        let mut field = TimeField::new(true);
        for input in ["12:00", "04:15", "07:08", "12:05", "23:59", "00:00"] {
            field.validate(input);
            assert_eq!(field.complaint(), Complaint::None, "'{}' should be valid", input);
        }
        let time = field.get_time().unwrap();
        assert_eq!((time.hour(), time.minute()), (0, 0));
    }

    #[test]
    fn test_empty() {
        let mut field = TimeField::new(true);
        field.validate("");
        assert_eq!(field.complaint(), Complaint::Kind(ValidationType::Empty));
        assert_eq!(field.get_time(), None);
    }

    #[test]
    fn test_optional_empty() {
        let mut field = TimeField::new(false);
        field.validate("");
        assert_eq!(field.complaint(), Complaint::None);
        field.validate("  ");
        assert_eq!(field.complaint(), Complaint::None);
        assert_eq!(field.get_time(), None);
    }
}
