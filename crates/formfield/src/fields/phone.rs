use super::{apply_hook, FieldKind, FieldState, Hook};
use crate::cell::WeakCell;
use crate::complaint::Complaint;
use crate::config::PhonePrefix;
use crate::traits::FormField;
use crate::validators::{has_valid_prefix, PhoneRule};
use regex::Regex;

/// Phone number filtered by an acceptance rule while typing.
///
/// Input the rule rejects is dropped: `validate` returns without touching
/// the stored value or the complaint. Only emptiness on a required field
/// is ever reported.
pub struct PhoneField {
    state: FieldState<String>,
    rule: Regex,
    hook: Option<Hook<PhoneField>>,
}

field_accessors!(PhoneField, String);

impl PhoneField {
    /// Field using the `complete` rule
    pub fn new(required: bool) -> Self {
        Self::with_rule(required, PhoneRule::Complete)
    }

    /// Field using one of the built-in rules
    pub fn with_rule(required: bool, rule: PhoneRule) -> Self {
        Self {
            state: FieldState::new(required, String::new()),
            rule: rule.regex().clone(),
            hook: None,
        }
    }

    /// Replace the acceptance rule
    pub fn rule(mut self, rule: Regex) -> Self {
        self.rule = rule;
        self
    }

    pub fn hook(mut self, hook: impl Fn(&str, &PhoneField) -> Option<String> + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    pub fn current_rule(&self) -> &Regex {
        &self.rule
    }

    pub fn validate(&mut self, input: &str) {
        let rule = self.rule.clone();
        self.validate_with(input, &rule);
    }

    /// Validate against `rule` instead of the configured one
    pub fn validate_with(&mut self, input: &str, rule: &Regex) {
        let blank = input.trim().is_empty();
        if !blank && !rule.is_match(input) {
            tracing::debug!(rule = %rule.as_str(), "phone input rejected by rule, discarding");
            return;
        }

        self.state.complaint = Complaint::from_flag(blank && self.state.required);
        let stored = apply_hook(self.hook.as_ref(), input, &*self);
        self.state.store(FieldKind::Phone, stored);
    }

    /// Whether `phonenr` starts with a whitelisted country prefix
    pub fn has_valid_prefix(&self, phonenr: &str, prefixes: &[PhonePrefix]) -> bool {
        has_valid_prefix(phonenr, prefixes)
    }
}

impl FormField for PhoneField {
    fn kind(&self) -> FieldKind {
        FieldKind::Phone
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
