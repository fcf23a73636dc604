//! Room record and its validated fields.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::EmployeeId;

/// Validation errors raised while constructing room fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoomValidationError {
    #[error("room number must not be empty")]
    EmptyRoomNumber,
    #[error("room type must not be empty")]
    EmptyRoomType,
}

/// Storage identifier of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(Uuid);

impl RoomId {
    /// Generate a fresh identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Human-facing room number, unique across rooms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoomNumber(String);

impl RoomNumber {
    /// Validate and construct a room number. Surrounding whitespace is
    /// trimmed.
    pub fn new(value: impl AsRef<str>) -> Result<Self, RoomValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(RoomValidationError::EmptyRoomNumber);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the room number.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RoomNumber> for String {
    fn from(value: RoomNumber) -> Self {
        value.0
    }
}

impl TryFrom<String> for RoomNumber {
    type Error = RoomValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Room category label such as `single` or `double`.
///
/// Room types group rooms during allocation; no fixed vocabulary is
/// enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoomType(String);

impl RoomType {
    /// Validate and construct a room type. Surrounding whitespace is
    /// trimmed.
    ///
    /// # Examples
    /// ```
    /// use room_allocation::domain::RoomType;
    ///
    /// assert_eq!(RoomType::new(" double ").expect("valid type").as_str(), "double");
    /// assert!(RoomType::new("").is_err());
    /// ```
    pub fn new(value: impl AsRef<str>) -> Result<Self, RoomValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(RoomValidationError::EmptyRoomType);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the label.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RoomType> for String {
    fn from(value: RoomType) -> Self {
        value.0
    }
}

impl TryFrom<String> for RoomType {
    type Error = RoomValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Room record.
///
/// `occupied_by` references employees by identifier only; removing an
/// employee does not touch rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    #[schema(value_type = String, format = Uuid)]
    pub id: RoomId,
    #[schema(value_type = String, example = "101")]
    pub room_no: RoomNumber,
    #[schema(value_type = String, example = "double")]
    pub room_type: RoomType,
    #[schema(value_type = Vec<String>)]
    pub occupied_by: Vec<EmployeeId>,
}

impl Room {
    /// Build an unoccupied room with a fresh identifier.
    pub fn vacant(room_no: RoomNumber, room_type: RoomType) -> Self {
        Self {
            id: RoomId::random(),
            room_no,
            room_type,
            occupied_by: Vec::new(),
        }
    }

    /// Replace the occupant list with a single employee.
    #[must_use]
    pub fn occupied_by_only(mut self, employee_id: EmployeeId) -> Self {
        self.occupied_by = vec![employee_id];
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("", RoomValidationError::EmptyRoomNumber)]
    #[case("   ", RoomValidationError::EmptyRoomNumber)]
    fn room_number_rejects_blank(#[case] raw: &str, #[case] expected: RoomValidationError) {
        assert_eq!(RoomNumber::new(raw).expect_err("blank"), expected);
    }

    #[rstest]
    fn room_type_is_trimmed() {
        assert_eq!(RoomType::new("  single").expect("valid").as_str(), "single");
    }

    #[rstest]
    fn vacant_room_has_no_occupants() {
        let room = Room::vacant(
            RoomNumber::new("101").expect("valid number"),
            RoomType::new("single").expect("valid type"),
        );
        assert!(room.occupied_by.is_empty());
    }

    #[rstest]
    fn occupied_by_only_overwrites_previous_occupants() {
        let mut room = Room::vacant(
            RoomNumber::new("102").expect("valid number"),
            RoomType::new("double").expect("valid type"),
        );
        room.occupied_by = vec![EmployeeId::new("a").expect("id"), EmployeeId::new("b").expect("id")];

        let room = room.occupied_by_only(EmployeeId::new("c").expect("id"));
        assert_eq!(room.occupied_by, vec![EmployeeId::new("c").expect("id")]);
    }

    #[rstest]
    fn serialises_with_wire_field_names() {
        let room = Room {
            id: RoomId::from_uuid(Uuid::nil()),
            room_no: RoomNumber::new("7").expect("valid number"),
            room_type: RoomType::new("single").expect("valid type"),
            occupied_by: vec![EmployeeId::new("emp-1").expect("id")],
        };
        let value = serde_json::to_value(&room).expect("json");
        assert_eq!(
            value,
            json!({
                "id": "00000000-0000-0000-0000-000000000000",
                "roomNo": "7",
                "roomType": "single",
                "occupiedBy": ["emp-1"],
            })
        );
    }
}
