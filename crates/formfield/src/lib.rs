//! # formfield
//!
//! Stateful form-field validation for booking and contact forms. Each field
//! keeps its canonical value in an observable cell, records a complaint on
//! every `validate` call and can be aggregated into a form-wide verdict.

pub mod cell;
pub mod complaint;
pub mod config;
pub mod error;
pub mod fields;
pub mod form;
pub mod traits;
pub mod validators;

// Re-exports for easy access
pub use cell::{SubscriptionId, ValueCell, WeakCell};
pub use complaint::{Complaint, UserType, ValidationType};
pub use config::{CalendarLocale, DateConfig, FormConfig, PhoneConfig, PhonePrefix, PrefixCode};
pub use error::{ConfigError, ValidationError, ValidationErrors, ValidationResult};
pub use form::{is_valid_input, Form};
pub use traits::{FormField, InputElement, TextInput, Truthy, ValueSource};

// Field kinds
pub use fields::{
    AgencyIdField, BookingNrField, CheckboxField, DateField, DateRange, EmailField, FieldKind,
    GenderField, IbanField, IntField, PhoneField, RadioField, TextField, TimeField,
};

pub use validators::{DatePattern, EmailValidator, PhoneRule};
