//! Diesel table definitions.
//!
//! Must match `backend/migrations` exactly. `position` is an identity column
//! used only to return rows in insertion order.

diesel::table! {
    /// Rooms and their current occupants.
    rooms (id) {
        id -> Uuid,
        /// Unique human-facing room number.
        room_no -> Varchar,
        room_type -> Varchar,
        /// Employee identifiers; not a foreign key.
        occupied_by -> Array<Text>,
        position -> Int8,
    }
}

diesel::table! {
    employees (employee_id) {
        employee_id -> Text,
        name -> Varchar,
        nte_id -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
        position -> Int8,
    }
}

diesel::allow_tables_to_appear_in_same_query!(rooms, employees);
