//! Whole-form validity: revalidate every field and fold the complaints

use crate::complaint::Complaint;
use crate::error::{ConfigError, ValidationError, ValidationErrors, ValidationResult};
use crate::traits::FormField;
use std::collections::BTreeMap;
use std::fmt;

/// Revalidate every field on its stored value and report whether none of
/// them complains. Every field is revalidated, even after the first failure.
pub fn is_valid_input<'a, I>(fields: I) -> bool
where
    I: IntoIterator<Item = &'a mut dyn FormField>,
{
    let mut failing = 0usize;
    for field in fields {
        field.revalidate();
        if field.complaint().is_raised() {
            failing += 1;
        }
    }
    if failing > 0 {
        tracing::debug!(failing, "form input is invalid");
    }
    failing == 0
}

/// Named collection of fields, iterated in name order
#[derive(Default)]
pub struct Form {
    fields: BTreeMap<String, Box<dyn FormField>>,
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("fields", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Form::insert`]
    pub fn field<F: FormField>(mut self, name: impl Into<String>, field: F) -> Self {
        self.insert(name, field);
        self
    }

    /// Add a field, returning the one previously registered under `name`
    pub fn insert<F: FormField>(
        &mut self,
        name: impl Into<String>,
        field: F,
    ) -> Option<Box<dyn FormField>> {
        self.fields.insert(name.into(), Box::new(field))
    }

    pub fn remove(&mut self, name: &str) -> Option<Box<dyn FormField>> {
        self.fields.remove(name)
    }

    /// Typed access; `None` if the name is unknown or the kind differs
    pub fn get<F: FormField>(&self, name: &str) -> Option<&F> {
        let field: &dyn FormField = self.fields.get(name)?.as_ref();
        field.as_any().downcast_ref::<F>()
    }

    pub fn get_mut<F: FormField>(&mut self, name: &str) -> Option<&mut F> {
        let field: &mut dyn FormField = self.fields.get_mut(name)?.as_mut();
        field.as_any_mut().downcast_mut::<F>()
    }

    /// Untyped access, enough for complaints and revalidation
    pub fn get_dyn(&self, name: &str) -> Option<&dyn FormField> {
        self.fields.get(name).map(|field| field.as_ref())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Make `field` require input equal to the value `target` stores. Both
    /// must be registered, `target` must store text and `field` must be a
    /// kind that mirrors.
    pub fn mirror(&mut self, field: &str, target: &str) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidMirror {
            field: field.to_string(),
            target: target.to_string(),
            reason: reason.to_string(),
        };

        let cell = self
            .fields
            .get(target)
            .ok_or_else(|| invalid("unknown target"))?
            .string_cell()
            .ok_or_else(|| invalid("target does not store text"))?;
        let linked = self
            .fields
            .get_mut(field)
            .ok_or_else(|| invalid("unknown field"))?
            .mirror_cell(cell);

        if !linked {
            return Err(invalid("field kind cannot mirror"));
        }
        tracing::debug!(field, target, "mirror linked");
        Ok(())
    }

    /// Revalidate every field; `true` iff none complains
    pub fn is_valid(&mut self) -> bool {
        let valid = is_valid_input(self.fields.values_mut().map(as_dyn));
        if !valid {
            let failing: Vec<&str> = self.failing().collect();
            tracing::debug!(fields = ?failing, "failing form fields");
        }
        valid
    }

    /// Revalidate every field and report the complaints as errors
    pub fn check(&mut self) -> ValidationResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self.errors())
        }
    }

    /// Current complaints as a report, without revalidating
    pub fn errors(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for (name, field) in &self.fields {
            if let Some(error) = ValidationError::from_complaint(name, field.complaint()) {
                errors.add(error);
            }
        }
        errors
    }

    /// First complaining field in name order
    pub fn first_error(&self) -> Option<(&str, Complaint)> {
        self.fields
            .iter()
            .map(|(name, field)| (name.as_str(), field.complaint()))
            .find(|(_, complaint)| complaint.is_raised())
    }

    fn failing(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|(_, field)| field.complaint().is_raised())
            .map(|(name, _)| name.as_str())
    }
}

fn as_dyn(field: &mut Box<dyn FormField>) -> &mut dyn FormField {
    field.as_mut()
}
