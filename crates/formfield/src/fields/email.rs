use super::{apply_hook, empty_complaint, FieldKind, FieldState, Hook, Mirror};
use crate::cell::WeakCell;
use crate::complaint::{Complaint, ValidationType};
use crate::traits::{FormField, ValueSource};
use crate::validators::is_email;

/// Email address, optionally required to equal another field (the usual
/// "repeat your email" pair)
pub struct EmailField {
    state: FieldState<String>,
    mirror: Option<Mirror>,
    hook: Option<Hook<EmailField>>,
}

field_accessors!(EmailField, String);

impl EmailField {
    pub fn new(required: bool) -> Self {
        Self {
            state: FieldState::new(required, String::new()),
            mirror: None,
            hook: None,
        }
    }

    pub fn hook(mut self, hook: impl Fn(&str, &EmailField) -> Option<String> + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    /// Require input to equal `other`'s stored value
    pub fn set_mirror(&mut self, other: &impl ValueSource<String>) {
        self.mirror = Some(Mirror::to(other));
    }

    /// Like [`Self::set_mirror`], from a handle already taken
    pub fn set_mirror_cell(&mut self, target: WeakCell<String>) {
        self.mirror = Some(Mirror::from_cell(target));
    }

    pub fn clear_mirror(&mut self) {
        self.mirror = None;
    }

    pub fn has_mirror(&self) -> bool {
        self.mirror.is_some()
    }

    pub fn validate(&mut self, input: &str) {
        let complaint = if let Some(empty) = empty_complaint(self.state.required, input) {
            empty
        } else if !input.trim().is_empty() && !is_email(input) {
            Complaint::Kind(ValidationType::Invalid)
        } else if self.mirror.as_ref().is_some_and(|m| m.differs(input)) {
            Complaint::Kind(ValidationType::NotEqual)
        } else {
            Complaint::None
        };
        self.state.complaint = complaint;

        let stored = apply_hook(self.hook.as_ref(), input, &*self);
        self.state.store(FieldKind::Email, stored);
    }
}

impl FormField for EmailField {
    fn kind(&self) -> FieldKind {
        FieldKind::Email
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

    fn mirror_cell(&mut self, target: WeakCell<String>) -> bool {
        self.set_mirror_cell(target);
        true
    }

    fn revalidate(&mut self) {
        let current = self.value();
        self.validate(&current);
    }
}
