//! Employee record and its validated fields.

use std::fmt;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Minimum allowed length for an employee name.
pub const EMPLOYEE_NAME_MIN: usize = 2;
/// Maximum allowed length for an employee name.
pub const EMPLOYEE_NAME_MAX: usize = 100;

/// Validation errors raised while constructing employee fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmployeeValidationError {
    #[error("employee id must not be empty")]
    EmptyId,
    #[error("employee id must not contain surrounding whitespace")]
    PaddedId,
    #[error("employee name must be at least {min} characters")]
    NameTooShort { min: usize },
    #[error("employee name must be at most {max} characters")]
    NameTooLong { max: usize },
    #[error("nte id must not be empty")]
    EmptyNteId,
}

/// Unique employee identifier.
///
/// New employees receive a random UUID string, but any non-empty trimmed
/// string is accepted so records created elsewhere round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Validate and construct an identifier.
    ///
    /// # Examples
    /// ```
    /// use room_allocation::domain::EmployeeId;
    ///
    /// let id = EmployeeId::new("double").expect("valid id");
    /// assert_eq!(id.as_str(), "double");
    /// assert!(EmployeeId::new(" padded").is_err());
    /// ```
    pub fn new(id: impl Into<String>) -> Result<Self, EmployeeValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(EmployeeValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(EmployeeValidationError::PaddedId);
        }
        Ok(Self(id))
    }

    /// Generate a fresh identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the identifier.
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

impl From<EmployeeId> for String {
    fn from(value: EmployeeId) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmployeeId {
    type Error = EmployeeValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Employee display name, between [`EMPLOYEE_NAME_MIN`] and
/// [`EMPLOYEE_NAME_MAX`] characters once surrounding whitespace is trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmployeeName(String);

impl EmployeeName {
    /// Validate and construct a name.
    pub fn new(name: impl Into<String>) -> Result<Self, EmployeeValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        let length = trimmed.chars().count();
        if length < EMPLOYEE_NAME_MIN {
            return Err(EmployeeValidationError::NameTooShort {
                min: EMPLOYEE_NAME_MIN,
            });
        }
        if length > EMPLOYEE_NAME_MAX {
            return Err(EmployeeValidationError::NameTooLong {
                max: EMPLOYEE_NAME_MAX,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the name.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for EmployeeName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<EmployeeName> for String {
    fn from(value: EmployeeName) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmployeeName {
    type Error = EmployeeValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Secondary organisational identifier carried by every employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NteId(String);

impl NteId {
    /// Validate and construct a secondary identifier.
    pub fn new(value: impl Into<String>) -> Result<Self, EmployeeValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(EmployeeValidationError::EmptyNteId);
        }
        Ok(Self(value))
    }

    /// Borrow the identifier.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for NteId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<NteId> for String {
    fn from(value: NteId) -> Self {
        value.0
    }
}

impl TryFrom<String> for NteId {
    type Error = EmployeeValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Employee record.
///
/// Timestamps are stored at whole-second precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub employee_id: EmployeeId,
    #[schema(value_type = String, example = "Ada Lovelace")]
    pub name: EmployeeName,
    #[schema(value_type = String, example = "NTE-0042")]
    pub nte_id: NteId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Build a new employee stamped with `now` for both timestamps.
    pub fn new(
        employee_id: EmployeeId,
        name: EmployeeName,
        nte_id: NteId,
        now: DateTime<Utc>,
    ) -> Self {
        let stamp = now.trunc_subsecs(0);
        Self {
            employee_id,
            name,
            nte_id,
            created_at: stamp,
            updated_at: stamp,
        }
    }

    /// Apply a partial update, refreshing `updated_at`.
    ///
    /// `None` fields keep their current value; `created_at` never changes.
    #[must_use]
    pub fn with_changes(
        mut self,
        name: Option<EmployeeName>,
        nte_id: Option<NteId>,
        now: DateTime<Utc>,
    ) -> Self {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(nte_id) = nte_id {
            self.nte_id = nte_id;
        }
        self.updated_at = now.trunc_subsecs(0);
        self
    }
}
