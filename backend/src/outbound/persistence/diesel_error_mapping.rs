//! Shared Diesel error classification for the repositories.

use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
use tracing::debug;

/// Repository-neutral view of a Diesel failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DieselFailure {
    Connection(&'static str),
    Query(&'static str),
    /// Unique constraint violated; carries the conflicting key when
    /// PostgreSQL reported it.
    UniqueViolation { key: Option<String> },
}

/// Extract the key value from a detail line such as
/// `Key (room_no)=(101) already exists.`
fn conflicting_key(info: &dyn DatabaseErrorInformation) -> Option<String> {
    let details = info.details()?;
    let (_, rest) = details.split_once(")=(")?;
    let (key, _) = rest.split_once(')')?;
    Some(key.to_owned())
}

/// Classify a Diesel error, emitting debug context.
pub(crate) fn classify_diesel_error(error: DieselError) -> DieselFailure {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => DieselFailure::Query("record not found"),
        DieselError::QueryBuilderError(_) => DieselFailure::Query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DieselFailure::Connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            DieselFailure::UniqueViolation {
                key: conflicting_key(info.as_ref()),
            }
        }
        _ => DieselFailure::Query("database error"),
    }
}
