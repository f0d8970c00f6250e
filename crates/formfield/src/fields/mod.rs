//! Field kinds. Each kind owns a [`FieldState`] and applies its own rule on
//! `validate`.

/// Accessors shared by every kind: `value`, `complaint`, `is_required`,
/// the [`ValueSource`] impl and a `Debug` impl skipping the hook.
macro_rules! field_accessors {
    ($field:ident, $value:ty) => {
        impl $field {
            /// Canonical value stored by the last `validate` call
            pub fn value(&self) -> $value {
                self.state.value.get()
            }

            /// Cell holding the canonical value
            pub fn cell(&self) -> &$crate::cell::ValueCell<$value> {
                &self.state.value
            }

            /// Verdict of the last `validate` call
            pub fn complaint(&self) -> $crate::complaint::Complaint {
                self.state.complaint
            }

            pub fn is_required(&self) -> bool {
                self.state.required
            }
        }

        impl $crate::traits::ValueSource<$value> for $field {
            fn cell(&self) -> &$crate::cell::ValueCell<$value> {
                &self.state.value
            }
        }

        impl std::fmt::Debug for $field {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($field))
                    .field("state", &self.state)
                    .field("hook", &self.hook.is_some())
                    .finish_non_exhaustive()
            }
        }
    };
}

pub mod checkbox;
pub mod date;
pub mod email;
pub mod gender;
pub mod iban;
pub mod int;
pub mod phone;
pub mod radio;
pub mod reference;
pub mod text;
pub mod time;

pub use checkbox::{CheckboxField, CheckboxHook};
pub use date::{DateField, DateHook, DateRange};
pub use email::EmailField;
pub use gender::{GenderField, GENDER_TOKENS};
pub use iban::IbanField;
pub use int::IntField;
pub use phone::PhoneField;
pub use radio::{RadioField, RadioHook};
pub use reference::{AgencyIdField, BookingNrField};
pub use text::TextField;
pub use time::TimeField;

use crate::cell::{ValueCell, WeakCell};
use crate::complaint::{Complaint, ValidationType};
use crate::traits::ValueSource;
use serde::Serialize;
use std::fmt;

/// Value override invoked after the built-in check. `Some` replaces the
/// raw input before it is stored.
pub type Hook<F> = Box<dyn Fn(&str, &F) -> Option<String>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Int,
    Email,
    Date,
    Time,
    Gender,
    Phone,
    Radio,
    Checkbox,
    BookingNr,
    AgencyId,
    Iban,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Int => "int",
            FieldKind::Email => "email",
            FieldKind::Date => "date",
            FieldKind::Time => "time",
            FieldKind::Gender => "gender",
            FieldKind::Phone => "phone",
            FieldKind::Radio => "radio",
            FieldKind::Checkbox => "checkbox",
            FieldKind::BookingNr => "bookingnr",
            FieldKind::AgencyId => "agencyid",
            FieldKind::Iban => "iban",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State every field kind carries
#[derive(Debug)]
pub(crate) struct FieldState<T> {
    pub(crate) value: ValueCell<T>,
    pub(crate) complaint: Complaint,
    pub(crate) required: bool,
}

impl<T: Clone + fmt::Debug> FieldState<T> {
    pub(crate) fn new(required: bool, initial: T) -> Self {
        Self {
            value: ValueCell::new(initial),
            complaint: Complaint::None,
            required,
        }
    }

    /// Write the post-hook value, notifying subscribers
    pub(crate) fn store(&mut self, kind: FieldKind, value: T) {
        tracing::trace!(
            kind = %kind,
            complaint = %self.complaint,
            value = ?value,
            "field validated"
        );
        self.value.set(value);
    }
}

/// `Empty` when the trimmed input is blank on a required field
pub(crate) fn empty_complaint(required: bool, input: &str) -> Option<Complaint> {
    (required && input.trim().is_empty()).then_some(Complaint::Kind(ValidationType::Empty))
}

/// Hook result, falling back to the raw input
pub(crate) fn apply_hook<F>(hook: Option<&Hook<F>>, input: &str, field: &F) -> String {
    hook.and_then(|hook| hook(input, field))
        .unwrap_or_else(|| input.to_string())
}

/// Non-owning link to another field's value
#[derive(Debug, Clone)]
pub(crate) struct Mirror(WeakCell<String>);

impl Mirror {
    pub(crate) fn to(source: &impl ValueSource<String>) -> Self {
        Self(source.cell().downgrade())
    }

    pub(crate) fn from_cell(target: WeakCell<String>) -> Self {
        Self(target)
    }

    /// Whether the mirrored field's stored value differs from `input`.
    /// A mirror whose field is gone no longer constrains anything.
    pub(crate) fn differs(&self, input: &str) -> bool {
        match self.0.with(|stored| stored != input) {
            Some(differs) => differs,
            None => {
                tracing::debug!("mirror target dropped, skipping equality check");
                false
            }
        }
    }
}
