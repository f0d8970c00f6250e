use super::{apply_hook, empty_complaint, FieldKind, FieldState, Hook};
use crate::cell::WeakCell;
use crate::complaint::{Complaint, ValidationType};
use crate::traits::{FormField, InputElement};
use crate::validators::iban;

/// Bank account number with live grouping of the input element
pub struct IbanField {
    state: FieldState<String>,
    hook: Option<Hook<IbanField>>,
}

field_accessors!(IbanField, String);

impl IbanField {
    pub fn new(required: bool) -> Self {
        Self {
            state: FieldState::new(required, String::new()),
            hook: None,
        }
    }

    pub fn hook(mut self, hook: impl Fn(&str, &IbanField) -> Option<String> + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    pub fn validate(&mut self, input: &str) {
        let complaint = match empty_complaint(self.state.required, input) {
            Some(empty) => empty,
            None if !input.trim().is_empty() && !iban::is_valid(input) => {
                Complaint::Kind(ValidationType::Invalid)
            }
            None => Complaint::None,
        };
        self.state.complaint = complaint;

        let stored = apply_hook(self.hook.as_ref(), input, &*self);
        self.state.store(FieldKind::Iban, stored);
    }

    /// Rewrite `element` into groups of four, keep the caret behind the
    /// character it followed, then validate the result
    pub fn format(&mut self, element: &mut impl InputElement) {
        let raw = element.value();
        let length = raw.chars().count();
        let mut position = element.selection_end();

        let formatted = iban::print_format(&raw);
        let chars: Vec<char> = formatted.chars().collect();
        let is_space = |index: Option<usize>| {
            index.and_then(|index| chars.get(index)) == Some(&' ')
        };

        // caret sits right after a freshly inserted separator
        if is_space(position.checked_sub(1))
            && is_space(length.checked_sub(1))
            && length != chars.len()
        {
            position += 1;
        }
        position = position.min(chars.len());

        element.set_value(formatted.clone());
        element.set_selection_end(position);

        self.state.complaint = Complaint::None;
        self.validate(&formatted);
    }
}

impl FormField for IbanField {
    fn kind(&self) -> FieldKind {
        FieldKind::Iban
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
