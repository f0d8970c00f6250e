use super::{apply_hook, empty_complaint, FieldKind, FieldState, Hook};
use crate::cell::WeakCell;
use crate::complaint::{Complaint, ValidationType};
use crate::traits::FormField;
use crate::validators::is_int;

/// Integer-shaped input, stored as a string
pub struct IntField {
    state: FieldState<String>,
    hook: Option<Hook<IntField>>,
}

field_accessors!(IntField, String);

impl IntField {
    pub fn new(required: bool) -> Self {
        Self {
            state: FieldState::new(required, String::new()),
            hook: None,
        }
    }

    pub fn hook(mut self, hook: impl Fn(&str, &IntField) -> Option<String> + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    pub fn validate(&mut self, input: &str) {
        let complaint = match empty_complaint(self.state.required, input) {
            Some(empty) => empty,
            None if !input.is_empty() && !is_int(input) => ValidationType::Invalid.into(),
            None => Complaint::None,
        };
        self.state.complaint = complaint;

        let stored = apply_hook(self.hook.as_ref(), input, &*self);
        self.state.store(FieldKind::Int, stored);
    }

    /// Stored value as a number, if it parses
    pub fn as_i64(&self) -> Option<i64> {
        self.state.value.with(|value| value.parse().ok())
    }
}

impl FormField for IntField {
    fn kind(&self) -> FieldKind {
        FieldKind::Int
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
