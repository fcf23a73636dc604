//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every helper yields an `invalid_request` error whose details name the
//! offending field and a stable machine-readable code.

use serde_json::json;

use crate::domain::{
    EMPLOYEE_NAME_MAX, EMPLOYEE_NAME_MIN, EmployeeValidationError, Error, RoomValidationError,
};

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    BlankValue,
    PaddedValue,
    InvalidLength,
    EmptyUpdate,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::BlankValue => "blank_value",
            Self::PaddedValue => "padded_value",
            Self::InvalidLength => "invalid_length",
            Self::EmptyUpdate => "empty_update",
        }
    }
}

/// Wire name of a request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(&self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, message: impl Into<String>, code: ValidationCode) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        format!("missing required field: {name}"),
        ValidationCode::MissingField,
    )
}

/// Unwrap a required field or report it missing.
pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

pub(crate) fn empty_update_error() -> Error {
    Error::invalid_request("at least one of name or nteId must be provided").with_details(
        json!({
            "fields": ["name", "nteId"],
            "code": ValidationCode::EmptyUpdate.as_str(),
        }),
    )
}

pub(crate) fn employee_field_error(field: FieldName, err: EmployeeValidationError) -> Error {
    let name = field.as_str();
    match err {
        EmployeeValidationError::EmptyId | EmployeeValidationError::EmptyNteId => field_error(
            field,
            format!("{name} must not be empty"),
            ValidationCode::BlankValue,
        ),
        EmployeeValidationError::PaddedId => field_error(
            field,
            format!("{name} must not contain surrounding whitespace"),
            ValidationCode::PaddedValue,
        ),
        EmployeeValidationError::NameTooShort { .. } | EmployeeValidationError::NameTooLong { .. } => {
            field_error(
                field,
                format!(
                    "{name} must be between {EMPLOYEE_NAME_MIN} and {EMPLOYEE_NAME_MAX} characters"
                ),
                ValidationCode::InvalidLength,
            )
        }
    }
}

pub(crate) fn room_field_error(field: FieldName, err: RoomValidationError) -> Error {
    let name = field.as_str();
    match err {
        RoomValidationError::EmptyRoomNumber | RoomValidationError::EmptyRoomType => field_error(
            field,
            format!("{name} must not be empty"),
            ValidationCode::BlankValue,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    const NAME: FieldName = FieldName::new("name");

    #[rstest]
    fn missing_field_reports_field_and_code() {
        let err = require::<String>(None, NAME).expect_err("missing");

        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.message(), "missing required field: name");
        let details = err.details().expect("details");
        assert_eq!(details["field"], "name");
        assert_eq!(details["code"], "missing_field");
    }

    #[rstest]
    #[case(EmployeeValidationError::NameTooShort { min: 2 }, "invalid_length")]
    #[case(EmployeeValidationError::NameTooLong { max: 100 }, "invalid_length")]
    #[case(EmployeeValidationError::EmptyNteId, "blank_value")]
    #[case(EmployeeValidationError::PaddedId, "padded_value")]
    fn employee_errors_carry_codes(#[case] err: EmployeeValidationError, #[case] code: &str) {
        let err = employee_field_error(NAME, err);

        assert_eq!(err.details().expect("details")["code"], code);
    }

    #[rstest]
    fn length_message_names_bounds() {
        let err = employee_field_error(NAME, EmployeeValidationError::NameTooShort { min: 2 });

        assert_eq!(err.message(), "name must be between 2 and 100 characters");
    }

    #[rstest]
    fn room_errors_name_the_field() {
        let err = room_field_error(
            FieldName::new("roomType"),
            RoomValidationError::EmptyRoomType,
        );

        assert_eq!(err.message(), "roomType must not be empty");
    }
}
