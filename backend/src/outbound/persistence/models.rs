//! Internal Diesel row structs.
//!
//! Never exposed to the domain. Conversions back into domain records
//! re-validate every field so rows edited outside the service surface as
//! query errors instead of invalid records.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{
    Employee, EmployeeId, EmployeeName, EmployeeValidationError, NteId, Room, RoomId, RoomNumber,
    RoomType, RoomValidationError,
};

use super::schema::{employees, rooms};

/// Row read from `rooms`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = rooms)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RoomRow {
    pub id: Uuid,
    pub room_no: String,
    pub room_type: String,
    pub occupied_by: Vec<String>,
}

/// Row inserted into `rooms`.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = rooms)]
pub(crate) struct NewRoomRow<'a> {
    pub id: Uuid,
    pub room_no: &'a str,
    pub room_type: &'a str,
    pub occupied_by: Vec<String>,
}

impl<'a> From<&'a Room> for NewRoomRow<'a> {
    fn from(room: &'a Room) -> Self {
        Self {
            id: *room.id.as_uuid(),
            room_no: room.room_no.as_str(),
            room_type: room.room_type.as_str(),
            occupied_by: room.occupied_by.iter().map(EmployeeId::to_string).collect(),
        }
    }
}

/// Stored row failed domain validation.
#[derive(Debug, thiserror::Error)]
pub(crate) enum RowConversionError {
    #[error("stored room {id} is invalid: {source}")]
    Room {
        id: Uuid,
        source: RoomValidationError,
    },
    #[error("stored room {id} has an invalid occupant: {source}")]
    Occupant {
        id: Uuid,
        source: EmployeeValidationError,
    },
    #[error("stored employee {id} is invalid: {source}")]
    Employee {
        id: String,
        source: EmployeeValidationError,
    },
}

impl TryFrom<RoomRow> for Room {
    type Error = RowConversionError;

    fn try_from(row: RoomRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let room_error = |source| RowConversionError::Room { id, source };
        let occupied_by = row
            .occupied_by
            .into_iter()
            .map(EmployeeId::new)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| RowConversionError::Occupant { id, source })?;
        Ok(Self {
            id: RoomId::from_uuid(id),
            room_no: RoomNumber::new(row.room_no).map_err(room_error)?,
            room_type: RoomType::new(row.room_type).map_err(room_error)?,
            occupied_by,
        })
    }
}

/// Row read from and inserted into `employees`.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EmployeeRow {
    pub employee_id: String,
    pub name: String,
    pub nte_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Changeset for the mutable employee columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = employees)]
pub(crate) struct EmployeeUpdate<'a> {
    pub name: &'a str,
    pub nte_id: &'a str,
    pub updated_at: DateTime<Utc>,
}

impl From<&Employee> for EmployeeRow {
    fn from(employee: &Employee) -> Self {
        Self {
            employee_id: employee.employee_id.to_string(),
            name: employee.name.as_str().to_owned(),
            nte_id: employee.nte_id.as_str().to_owned(),
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}

impl<'a> From<&'a Employee> for EmployeeUpdate<'a> {
    fn from(employee: &'a Employee) -> Self {
        Self {
            name: employee.name.as_str(),
            nte_id: employee.nte_id.as_str(),
            updated_at: employee.updated_at,
        }
    }
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = RowConversionError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        let id = row.employee_id.clone();
        let invalid = |source| RowConversionError::Employee {
            id: id.clone(),
            source,
        };
        Ok(Self {
            employee_id: EmployeeId::new(row.employee_id).map_err(invalid)?,
            name: EmployeeName::new(row.name).map_err(invalid)?,
            nte_id: NteId::new(row.nte_id).map_err(invalid)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn room_row_round_trips_into_domain() {
        let row = RoomRow {
            id: Uuid::new_v4(),
            room_no: "101".to_owned(),
            room_type: "double".to_owned(),
            occupied_by: vec!["emp-1".to_owned()],
        };

        let room = Room::try_from(row.clone()).expect("valid row");

        assert_eq!(room.id.as_uuid(), &row.id);
        assert_eq!(room.occupied_by[0].as_str(), "emp-1");
        let insert = NewRoomRow::from(&room);
        assert_eq!(insert.occupied_by, vec!["emp-1"]);
    }

    #[rstest]
    fn blank_room_type_is_rejected() {
        let row = RoomRow {
            id: Uuid::new_v4(),
            room_no: "101".to_owned(),
            room_type: " ".to_owned(),
            occupied_by: Vec::new(),
        };

        assert!(matches!(
            Room::try_from(row),
            Err(RowConversionError::Room {
                source: RoomValidationError::EmptyRoomType,
                ..
            })
        ));
    }

    #[rstest]
    fn short_employee_name_is_rejected() {
        let row = EmployeeRow {
            employee_id: "emp-1".to_owned(),
            name: "A".to_owned(),
            nte_id: "NTE-1".to_owned(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert!(matches!(
            Employee::try_from(row),
            Err(RowConversionError::Employee { .. })
        ));
    }
}
