use super::{apply_hook, empty_complaint, FieldKind, FieldState, Hook, Mirror};
use crate::cell::WeakCell;
use crate::complaint::{Complaint, ValidationType};
use crate::traits::{FormField, ValueSource};

/// Free text, optionally required to equal another field
pub struct TextField {
    state: FieldState<String>,
    mirror: Option<Mirror>,
    hook: Option<Hook<TextField>>,
}

field_accessors!(TextField, String);

impl TextField {
    pub fn new(required: bool) -> Self {
        Self {
            state: FieldState::new(required, String::new()),
            mirror: None,
            hook: None,
        }
    }

    /// Install a value override run after each check
    pub fn hook(mut self, hook: impl Fn(&str, &TextField) -> Option<String> + 'static) -> Self {
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
        let mut complaint = empty_complaint(self.state.required, input).unwrap_or_default();
        if !complaint.is_raised() && self.mirror.as_ref().is_some_and(|m| m.differs(input)) {
            complaint = Complaint::Kind(ValidationType::NotEqual);
        }
        self.state.complaint = complaint;

        let stored = apply_hook(self.hook.as_ref(), input, &*self);
        self.state.store(FieldKind::Text, stored);
    }
}

impl FormField for TextField {
    fn kind(&self) -> FieldKind {
        FieldKind::Text
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
