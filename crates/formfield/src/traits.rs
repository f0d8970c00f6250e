//! Traits shared by every field kind and by the collaborators around them

use crate::cell::{ValueCell, WeakCell};
use crate::complaint::Complaint;
use crate::fields::FieldKind;
use std::any::Any;

/// Upcast helper so boxed fields can be downcast back to their concrete type
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Object-safe view of a field, used by the form aggregator
pub trait FormField: AsAny {
    /// Which kind of field this is
    fn kind(&self) -> FieldKind;

    /// Verdict of the most recent `validate` call
    fn complaint(&self) -> Complaint;

    /// Whether empty input is a complaint
    fn is_required(&self) -> bool;

    /// Re-run validation on the currently stored value
    fn revalidate(&mut self);

    /// Weak handle to the stored value, for kinds that store a string
    fn string_cell(&self) -> Option<WeakCell<String>> {
        None
    }

    /// Require input to equal the value behind `target`. Returns `false`
    /// for kinds that cannot mirror.
    fn mirror_cell(&mut self, _target: WeakCell<String>) -> bool {
        false
    }
}

/// Anything exposing the cell its canonical value lives in. Mirror targets
/// are taken through this trait.
pub trait ValueSource<T> {
    fn cell(&self) -> &ValueCell<T>;
}

/// Loose truthiness for checkbox input, which may arrive as a flag, a
/// form value or nothing at all
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for &str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

/// Editable text input with a caret, as handed over by the UI layer
pub trait InputElement {
    fn value(&self) -> String;
    fn set_value(&mut self, value: String);
    /// Caret position, counted in characters
    fn selection_end(&self) -> usize;
    fn set_selection_end(&mut self, position: usize);
}

/// Plain in-memory [`InputElement`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    pub value: String,
    pub selection_end: usize,
}

impl TextInput {
    /// Input holding `value` with the caret at its end
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let selection_end = value.chars().count();
        Self {
            value,
            selection_end,
        }
    }

    /// Input holding `value` with the caret at `position`
    pub fn with_cursor(value: impl Into<String>, position: usize) -> Self {
        Self {
            value: value.into(),
            selection_end: position,
        }
    }
}

impl InputElement for TextInput {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
    }

    fn selection_end(&self) -> usize {
        self.selection_end
    }

    fn set_selection_end(&mut self, position: usize) {
        self.selection_end = position;
    }
}
