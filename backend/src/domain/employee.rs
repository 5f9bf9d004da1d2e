//! Employee record model and required-field validation.
//!
//! Clients submit an [`EmployeeDraft`] (the four business fields). The store
//! assigns an [`EmployeeId`] on insert, and reads return an
//! [`EmployeeRecord`] combining both.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Hex rendering of the all-zero identifier used for "no record" payloads.
pub const NIL_EMPLOYEE_ID: &str = "000000000000000000000000";

/// Opaque employee identifier as seen by clients.
///
/// The domain never interprets the string; store adapters convert it to
/// their native identifier type before building filters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Wrap a raw identifier string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Identifier carried by the empty record.
    pub fn nil() -> Self {
        Self(NIL_EMPLOYEE_ID.to_owned())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for EmployeeId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Business fields that must be present on create and update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeField {
    Firstname,
    Lastname,
    Position,
    Age,
}

impl EmployeeField {
    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Firstname => "firstname",
            Self::Lastname => "lastname",
            Self::Position => "position",
            Self::Age => "age",
        }
    }
}

impl fmt::Display for EmployeeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a draft is missing one or more required fields.
///
/// ## Invariants
/// - `missing` is non-empty and ordered as the fields are declared.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing required fields: {}", join_fields(.missing))]
pub struct EmployeeValidationError {
    missing: Vec<EmployeeField>,
}

impl EmployeeValidationError {
    /// Fields that failed the required check.
    pub fn missing(&self) -> &[EmployeeField] {
        &self.missing
    }
}

fn join_fields(fields: &[EmployeeField]) -> String {
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Candidate employee payload, as accepted from clients.
///
/// Absent JSON fields decode to their zero value so that omissions are
/// reported by [`EmployeeDraft::validate`] rather than by the JSON parser.
/// Any `id` supplied by the client is ignored.
///
/// # Examples
/// ```
/// use employees::domain::EmployeeDraft;
///
/// let draft = EmployeeDraft::new("Ann", "Lee", "Engineer", 30);
/// assert!(draft.validate().is_ok());
///
/// let err = EmployeeDraft::new("Ann", "", "Engineer", 0)
///     .validate()
///     .expect_err("lastname and age are missing");
/// assert_eq!(err.to_string(), "missing required fields: lastname, age");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeDraft {
    pub firstname: String,
    pub lastname: String,
    pub position: String,
    pub age: i64,
}

impl EmployeeDraft {
    /// Build a draft from its parts.
    pub fn new(
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        position: impl Into<String>,
        age: i64,
    ) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
            position: position.into(),
            age,
        }
    }

    /// Check that every required field is present.
    ///
    /// Text fields must be non-empty and `age` must be non-zero; a zero age
    /// is indistinguishable from an omitted one.
    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        let checks = [
            (EmployeeField::Firstname, self.firstname.is_empty()),
            (EmployeeField::Lastname, self.lastname.is_empty()),
            (EmployeeField::Position, self.position.is_empty()),
            (EmployeeField::Age, self.age == 0),
        ];
        let missing: Vec<EmployeeField> = checks
            .into_iter()
            .filter_map(|(field, is_missing)| is_missing.then_some(field))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(EmployeeValidationError { missing })
        }
    }
}

/// Persisted employee as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub firstname: String,
    pub lastname: String,
    pub position: String,
    pub age: i64,
}

impl EmployeeRecord {
    /// Combine a store-assigned identifier with business fields.
    pub fn from_parts(id: EmployeeId, draft: EmployeeDraft) -> Self {
        let EmployeeDraft {
            firstname,
            lastname,
            position,
            age,
        } = draft;
        Self {
            id,
            firstname,
            lastname,
            position,
            age,
        }
    }

    /// Zero-valued record returned when an update matched nothing.
    pub fn empty() -> Self {
        Self::from_parts(EmployeeId::nil(), EmployeeDraft::default())
    }

    /// Business fields of this record.
    pub fn draft(&self) -> EmployeeDraft {
        EmployeeDraft::new(
            self.firstname.clone(),
            self.lastname.clone(),
            self.position.clone(),
            self.age,
        )
    }
}
