//! CSV room import parsing.
//!
//! Each record is `roomNo,roomType,<ignored>` with no header row. Parsing is
//! all-or-nothing: the first bad record rejects the file.

use std::collections::HashSet;

use csv::{ReaderBuilder, Trim};

use crate::domain::{Error, Room, RoomNumber, RoomType, RoomValidationError};

/// Number of columns every record must carry.
pub const ROOM_CSV_COLUMNS: usize = 3;

/// Reasons a CSV upload is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoomImportError {
    #[error("malformed CSV: {message}")]
    Malformed { message: String },
    #[error("row {row}: expected {expected} columns, found {found}")]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row}: {source}")]
    InvalidField {
        row: usize,
        source: RoomValidationError,
    },
    #[error("row {row}: room number {room_no} appears more than once in the file")]
    DuplicateInFile { row: usize, room_no: String },
    #[error("CSV file contains no rooms")]
    Empty,
}

impl From<RoomImportError> for Error {
    fn from(value: RoomImportError) -> Self {
        Self::invalid_request(value.to_string())
    }
}

/// Parse CSV text into vacant rooms, preserving file order.
///
/// # Examples
/// ```
/// use room_allocation::domain::parse_rooms_csv;
///
/// let rooms = parse_rooms_csv("101,single,east wing\n102,double,\n").expect("valid CSV");
/// assert_eq!(rooms.len(), 2);
/// assert_eq!(rooms[1].room_type.as_str(), "double");
/// ```
pub fn parse_rooms_csv(text: &str) -> Result<Vec<Room>, RoomImportError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut rooms = Vec::new();
    let mut seen = HashSet::new();
    for (index, record) in reader.records().enumerate() {
        let row = index + 1;
        let record = record.map_err(|err| RoomImportError::Malformed {
            message: err.to_string(),
        })?;
        if record.len() != ROOM_CSV_COLUMNS {
            return Err(RoomImportError::ColumnCount {
                row,
                expected: ROOM_CSV_COLUMNS,
                found: record.len(),
            });
        }

        let invalid = |source| RoomImportError::InvalidField { row, source };
        let room_no = RoomNumber::new(record.get(0).unwrap_or_default()).map_err(invalid)?;
        let room_type = RoomType::new(record.get(1).unwrap_or_default()).map_err(invalid)?;

        if !seen.insert(room_no.clone()) {
            return Err(RoomImportError::DuplicateInFile {
                row,
                room_no: room_no.to_string(),
            });
        }
        rooms.push(Room::vacant(room_no, room_type));
    }

    if rooms.is_empty() {
        return Err(RoomImportError::Empty);
    }
    Ok(rooms)
}
