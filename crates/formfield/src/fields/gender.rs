use super::{apply_hook, empty_complaint, FieldKind, FieldState, Hook};
use crate::cell::WeakCell;
use crate::complaint::{Complaint, ValidationType};
use crate::traits::FormField;

/// Accepted salutations, compared case-insensitively
pub const GENDER_TOKENS: [&str; 6] = ["herr", "frau", "maenlich", "maennlich", "weiblich", "divers"];

/// Salutation or gender from a fixed token list
pub struct GenderField {
    state: FieldState<String>,
    hook: Option<Hook<GenderField>>,
}

field_accessors!(GenderField, String);

impl GenderField {
    pub fn new(required: bool) -> Self {
        Self {
            state: FieldState::new(required, String::new()),
            hook: None,
        }
    }

    pub fn hook(mut self, hook: impl Fn(&str, &GenderField) -> Option<String> + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    pub fn validate(&mut self, input: &str) {
        let complaint = match empty_complaint(self.state.required, input) {
            Some(empty) => empty,
            None if !input.trim().is_empty() && !is_gender(input) => ValidationType::Invalid.into(),
            None => Complaint::None,
        };
        self.state.complaint = complaint;

        let stored = apply_hook(self.hook.as_ref(), input, &*self);
        self.state.store(FieldKind::Gender, stored);
    }
}

fn is_gender(input: &str) -> bool {
    let lowered = input.to_lowercase();
    GENDER_TOKENS.contains(&lowered.as_str())
}

impl FormField for GenderField {
    fn kind(&self) -> FieldKind {
        FieldKind::Gender
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
