//! HTTP inbound adapter exposing the REST endpoints.

pub mod employees;
pub mod error;
pub mod health;
pub mod rooms;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

use actix_web::{error::JsonPayloadError, web};

use crate::domain::Error;

pub use error::ApiResult;

/// Maximum accepted JSON or CSV body size.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

fn json_error(err: JsonPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("invalid JSON body: {err}")).into()
}

/// Register the `/api/v1` scope with every employee and room handler.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use room_allocation::inbound::http::configure_api;
///
/// let _app = App::new().configure(configure_api);
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(
                web::JsonConfig::default()
                    .limit(MAX_BODY_BYTES)
                    .error_handler(json_error),
            )
            .app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
            .service(employees::list_employees)
            .service(employees::create_employee)
            .service(employees::get_employee)
            .service(employees::update_employee)
            .service(rooms::list_rooms)
            .service(rooms::create_room)
            .service(rooms::upload_rooms_csv)
            .service(rooms::assign_employees),
    );
}
