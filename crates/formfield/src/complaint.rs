//! Validation verdicts and the shared constant tables

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// The closed set of named problems a field can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationType {
    /// Required input is missing or whitespace only
    Empty,
    /// Input does not follow the field's grammar
    Invalid,
    /// Input differs from the mirrored field
    NotEqual,
    /// Parsed date lies outside the configured range
    OutOfRange,
    /// Value is already taken elsewhere
    NotUnique,
}

impl ValidationType {
    /// Every kind, in declaration order
    pub const ALL: [ValidationType; 5] = [
        ValidationType::Empty,
        ValidationType::Invalid,
        ValidationType::NotEqual,
        ValidationType::OutOfRange,
        ValidationType::NotUnique,
    ];

    /// Wire name of the kind (`"not-equal"`, `"out-of-range"`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationType::Empty => "empty",
            ValidationType::Invalid => "invalid",
            ValidationType::NotEqual => "not-equal",
            ValidationType::OutOfRange => "out-of-range",
            ValidationType::NotUnique => "not-unique",
        }
    }
}

impl fmt::Display for ValidationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict stored on a field after each `validate` call.
///
/// Binary fields (radio, checkbox, phone) only ever report [`Complaint::Raised`];
/// all other kinds report a named [`ValidationType`]. Serializes to `false`,
/// `true` or the kind's wire name respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Complaint {
    #[default]
    None,
    Raised,
    Kind(ValidationType),
}

impl Complaint {
    /// Whether the field currently complains about anything
    pub fn is_raised(&self) -> bool {
        !matches!(self, Complaint::None)
    }

    /// The named kind, if any
    pub fn kind(&self) -> Option<ValidationType> {
        match self {
            Complaint::Kind(kind) => Some(*kind),
            _ => None,
        }
    }

    /// Boolean shorthand used by binary fields
    pub fn from_flag(flag: bool) -> Self {
        if flag {
            Complaint::Raised
        } else {
            Complaint::None
        }
    }
}

impl From<ValidationType> for Complaint {
    fn from(kind: ValidationType) -> Self {
        Complaint::Kind(kind)
    }
}

impl fmt::Display for Complaint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Complaint::None => f.write_str("false"),
            Complaint::Raised => f.write_str("true"),
            Complaint::Kind(kind) => kind.fmt(f),
        }
    }
}

impl Serialize for Complaint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Complaint::None => serializer.serialize_bool(false),
            Complaint::Raised => serializer.serialize_bool(true),
            Complaint::Kind(kind) => kind.serialize(serializer),
        }
    }
}

/// Kinds of users a form may be filled in for. Only read by UI collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Customer,
    Employee,
    Phoenix,
    Agency,
}

impl UserType {
    pub const ALL: [UserType; 4] = [
        UserType::Customer,
        UserType::Employee,
        UserType::Phoenix,
        UserType::Agency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Customer => "customer",
            UserType::Employee => "employee",
            UserType::Phoenix => "phoenix",
            UserType::Agency => "agency",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
