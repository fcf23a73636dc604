//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::ports::{
    MockEmployeesCommand, MockEmployeesQuery, MockRoomAllocationCommand, MockRoomsCommand,
    MockRoomsQuery,
};
use crate::inbound::http::configure_api;
use crate::inbound::http::state::HttpState;

/// Mocked driving ports; set expectations on the fields you need and leave
/// the rest untouched so unexpected calls panic.
#[derive(Default)]
pub struct MockPorts {
    pub employees: MockEmployeesCommand,
    pub employees_query: MockEmployeesQuery,
    pub rooms: MockRoomsCommand,
    pub rooms_query: MockRoomsQuery,
    pub allocation: MockRoomAllocationCommand,
}

impl MockPorts {
    pub fn into_state(self) -> HttpState {
        HttpState {
            employees: Arc::new(self.employees),
            employees_query: Arc::new(self.employees_query),
            rooms: Arc::new(self.rooms),
            rooms_query: Arc::new(self.rooms_query),
            allocation: Arc::new(self.allocation),
        }
    }
}

/// App serving the `/api/v1` routes over `ports`.
pub fn test_app(
    ports: MockPorts,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(ports.into_state()))
        .configure(configure_api)
}
