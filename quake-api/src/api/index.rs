//! Liveness endpoint.

use rocket::serde::json::Json;
use rocket::{Route, State};

use crate::config::ServiceConfig;
use crate::models::MessageResponse;

/// Index endpoint.
///
/// - **URL:** `/`
/// - **Method:** `GET`
/// - **Purpose:** Confirms the service process is reachable
/// - **Authentication:** None required
///
/// Never touches the database.
///
/// # Response
///
/// **Success (HTTP 200 OK):**
/// ```json
/// { "message": "Earthquake API" }
/// ```
#[get("/")]
pub fn index(config: &State<ServiceConfig>) -> Json<MessageResponse> {
    Json(MessageResponse::new(config.service_name.clone()))
}

pub fn routes() -> Vec<Route> {
    routes![index]
}
