//! Employee and room records with a room allocation pass.
//!
//! The crate follows a ports-and-adapters layout: [`domain`] holds the
//! records, the allocation planner and the ports; [`outbound`] implements the
//! repositories; [`inbound`] exposes the HTTP surface.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
