use super::{FieldKind, FieldState};
use crate::complaint::Complaint;
use crate::traits::FormField;

pub type RadioHook = Box<dyn Fn(Option<&str>, &RadioField) -> Option<String>>;

/// Radio group: the value is the selected option, `None` while nothing is
/// selected
pub struct RadioField {
    state: FieldState<Option<String>>,
    hook: Option<RadioHook>,
}

field_accessors!(RadioField, Option<String>);

impl RadioField {
    pub fn new(required: bool) -> Self {
        Self {
            state: FieldState::new(required, None),
            hook: None,
        }
    }

    pub fn hook(
        mut self,
        hook: impl Fn(Option<&str>, &RadioField) -> Option<String> + 'static,
    ) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    pub fn validate(&mut self, input: Option<&str>) {
        self.state.complaint = Complaint::from_flag(input.is_none() && self.state.required);

        let stored = self
            .hook
            .as_ref()
            .and_then(|hook| hook(input, &*self))
            .or_else(|| input.map(str::to_string));
        self.state.store(FieldKind::Radio, stored);
    }
}

impl FormField for RadioField {
    fn kind(&self) -> FieldKind {
        FieldKind::Radio
    }

    fn complaint(&self) -> Complaint {
        self.state.complaint
    }

    fn is_required(&self) -> bool {
        self.state.required
    }

    fn revalidate(&mut self) {
        let current = self.value();
        self.validate(current.as_deref());
    }
}
