//! Outbound adapters implementing the storage ports.
//!
//! - **persistence**: PostgreSQL repositories using Diesel.
//! - **memory**: process-local store used when no database is configured.
//!
//! Adapters only translate between domain records and storage; they hold no
//! business rules.

pub mod memory;
pub mod persistence;
