//! Six-digit reference numbers: booking numbers and agency ids

use super::{apply_hook, empty_complaint, FieldKind, FieldState, Hook};
use crate::cell::WeakCell;
use crate::complaint::{Complaint, ValidationType};
use crate::traits::FormField;
use crate::validators::is_fixed_length_int;

const REFERENCE_LENGTH: usize = 6;

/// Booking number. Any non-empty input is checked, whitespace included.
pub struct BookingNrField {
    state: FieldState<String>,
    hook: Option<Hook<BookingNrField>>,
}

field_accessors!(BookingNrField, String);

impl BookingNrField {
    pub fn new(required: bool) -> Self {
        Self {
            state: FieldState::new(required, String::new()),
            hook: None,
        }
    }

    pub fn hook(
        mut self,
        hook: impl Fn(&str, &BookingNrField) -> Option<String> + 'static,
    ) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    pub fn validate(&mut self, input: &str) {
        let complaint = match empty_complaint(self.state.required, input) {
            Some(empty) => empty,
            None if !input.is_empty() && !is_fixed_length_int(input, REFERENCE_LENGTH) => {
                Complaint::Kind(ValidationType::Invalid)
            }
            None => Complaint::None,
        };
        self.state.complaint = complaint;

        let stored = apply_hook(self.hook.as_ref(), input, &*self);
        self.state.store(FieldKind::BookingNr, stored);
    }
}

impl FormField for BookingNrField {
    fn kind(&self) -> FieldKind {
        FieldKind::BookingNr
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

/// Agency id. Whitespace-only input on an optional field is not checked.
pub struct AgencyIdField {
    state: FieldState<String>,
    hook: Option<Hook<AgencyIdField>>,
}

field_accessors!(AgencyIdField, String);

impl AgencyIdField {
    pub fn new(required: bool) -> Self {
        Self {
            state: FieldState::new(required, String::new()),
            hook: None,
        }
    }

    pub fn hook(
        mut self,
        hook: impl Fn(&str, &AgencyIdField) -> Option<String> + 'static,
    ) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    pub fn validate(&mut self, input: &str) {
        let complaint = match empty_complaint(self.state.required, input) {
            Some(empty) => empty,
            None if !input.trim().is_empty()
                && !is_fixed_length_int(input, REFERENCE_LENGTH) =>
            {
                Complaint::Kind(ValidationType::Invalid)
            }
            None => Complaint::None,
        };
        self.state.complaint = complaint;

        let stored = apply_hook(self.hook.as_ref(), input, &*self);
        self.state.store(FieldKind::AgencyId, stored);
    }
}

impl FormField for AgencyIdField {
    fn kind(&self) -> FieldKind {
        FieldKind::AgencyId
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
