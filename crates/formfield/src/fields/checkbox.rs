use super::{FieldKind, FieldState};
use crate::complaint::Complaint;
use crate::traits::{FormField, Truthy};

/// Checkbox hook: the coerced flag and the field
pub type CheckboxHook = Box<dyn Fn(bool, &CheckboxField) -> Option<bool>>;

/// Single checkbox. Any truthy input counts as checked and the stored value
/// is always a plain `bool`.
pub struct CheckboxField {
    state: FieldState<bool>,
    hook: Option<CheckboxHook>,
}

field_accessors!(CheckboxField, bool);

impl CheckboxField {
    pub fn new(required: bool) -> Self {
        Self {
            state: FieldState::new(required, false),
            hook: None,
        }
    }

    pub fn hook(mut self, hook: impl Fn(bool, &CheckboxField) -> Option<bool> + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    pub fn validate(&mut self, input: impl Truthy) {
        let checked = input.is_truthy();
        self.state.complaint = Complaint::from_flag(!checked && self.state.required);

        let stored = self
            .hook
            .as_ref()
            .and_then(|hook| hook(checked, &*self))
            .unwrap_or(checked);
        self.state.store(FieldKind::Checkbox, stored);
    }
}

impl FormField for CheckboxField {
    fn kind(&self) -> FieldKind {
        FieldKind::Checkbox
    }

    fn complaint(&self) -> Complaint {
        self.state.complaint
    }

    fn is_required(&self) -> bool {
        self.state.required
    }

    fn revalidate(&mut self) {
        let current = self.value();
        self.validate(current);
    }
}
