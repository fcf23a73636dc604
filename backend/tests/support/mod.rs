//! Shared helpers for HTTP integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use mockable::DefaultClock;

use room_allocation::Trace;
use room_allocation::domain::ports::{RoomRepository, RoomRepositoryError};
use room_allocation::domain::{
    Employee, EmployeeId, EmployeeName, NteId, Room, RoomId, RoomNumber, RoomType,
};
use room_allocation::inbound::http::configure_api;
use room_allocation::inbound::http::state::HttpState;
use room_allocation::outbound::memory::InMemoryStore;

pub fn room(no: &str, kind: &str) -> Room {
    Room::vacant(
        RoomNumber::new(no).expect("room number"),
        RoomType::new(kind).expect("room type"),
    )
}

pub fn employee(id: &str) -> Employee {
    Employee::new(
        EmployeeId::new(id).expect("employee id"),
        EmployeeName::new(format!("Employee {id}")).expect("name"),
        NteId::new(format!("NTE-{id}")).expect("nte id"),
        Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0)
            .single()
            .expect("timestamp"),
    )
}

/// HTTP state over one store serving both repositories.
pub fn state_over(store: &Arc<InMemoryStore>) -> HttpState {
    HttpState::over_repositories(
        Arc::clone(store),
        Arc::clone(store),
        Arc::new(DefaultClock),
        Duration::from_secs(5),
    )
}

/// Full API app with the trace middleware.
pub fn app_with(
    state: HttpState,
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
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(configure_api)
}

/// Room repository whose `fail_on`-th occupant write fails.
pub struct FailingNthWrite {
    pub inner: Arc<InMemoryStore>,
    fail_on: usize,
    writes: AtomicUsize,
}

impl FailingNthWrite {
    pub fn new(inner: Arc<InMemoryStore>, fail_on: usize) -> Self {
        Self {
            inner,
            fail_on,
            writes: AtomicUsize::new(0),
        }
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RoomRepository for FailingNthWrite {
    async fn list_rooms(&self) -> Result<Vec<Room>, RoomRepositoryError> {
        self.inner.list_rooms().await
    }

    async fn find_by_room_number(
        &self,
        room_no: &RoomNumber,
    ) -> Result<Option<Room>, RoomRepositoryError> {
        self.inner.find_by_room_number(room_no).await
    }

    async fn insert_rooms(&self, rooms: &[Room]) -> Result<(), RoomRepositoryError> {
        self.inner.insert_rooms(rooms).await
    }

    async fn update_room_occupants(
        &self,
        room_id: &RoomId,
        occupant_ids: &[EmployeeId],
    ) -> Result<(), RoomRepositoryError> {
        let attempt = self.writes.fetch_add(1, Ordering::SeqCst) + 1;
        if attempt == self.fail_on {
            return Err(RoomRepositoryError::query("write rejected"));
        }
        self.inner.update_room_occupants(room_id, occupant_ids).await
    }
}
