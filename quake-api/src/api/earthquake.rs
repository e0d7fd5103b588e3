//! API endpoints for earthquake lookups.
//!
//! Both endpoints are read-only and issue exactly one query against the
//! `earthquakes` table.

use rocket::Route;
use rocket::serde::json::Json;

use super::error::ApiError;
use super::params::{EarthquakeId, MinMagnitude, ParamError};
use crate::models::{Earthquake, EarthquakeList};
use crate::orm::DbConn;
use crate::orm::earthquake::{get_earthquake_by_id, get_earthquakes_by_min_magnitude};

/// Get Earthquake endpoint.
///
/// - **URL:** `/earthquakes/<id>`
/// - **Method:** `GET`
/// - **Purpose:** Retrieves a single earthquake by ID
/// - **Authentication:** None required
///
/// # Response
///
/// **Success (HTTP 200 OK):**
/// ```json
/// {
///   "id": 1,
///   "location": "California",
///   "magnitude": 3.5,
///   "year": 2021
/// }
/// ```
///
/// **Failure (HTTP 404 Not Found):**
/// ```json
/// { "message": "Earthquake 999 not found." }
/// ```
///
/// A non-integer `id` is answered by the generic 404 catcher. An integer
/// too large for the key column gets the not-found message above.
#[get("/earthquakes/<id>")]
pub async fn get_earthquake(
    db: DbConn,
    id: Result<EarthquakeId, ParamError>,
) -> Result<Json<Earthquake>, ApiError> {
    let key = match id? {
        EarthquakeId::Key(key) => key,
        // Wider than the key column, so nothing can be stored under it
        EarthquakeId::OutOfRange(digits) => return Err(ApiError::earthquake_not_found(digits)),
    };

    let found = db.run(move |conn| get_earthquake_by_id(conn, key)).await?;

    found
        .map(Json)
        .ok_or_else(|| ApiError::earthquake_not_found(key))
}

/// Earthquakes By Magnitude endpoint.
///
/// - **URL:** `/earthquakes/magnitude/<magnitude>`
/// - **Method:** `GET`
/// - **Purpose:** Lists every earthquake with magnitude greater than or equal
///   to the given value
/// - **Authentication:** None required
///
/// Rows come back in natural store order. No match is still a success.
///
/// # Response
///
/// **Success (HTTP 200 OK):**
/// ```json
/// {
///   "count": 1,
///   "quakes": [
///     { "id": 2, "location": "Alaska", "magnitude": 6.1, "year": 2019 }
///   ]
/// }
/// ```
#[get("/earthquakes/magnitude/<magnitude>")]
pub async fn get_earthquakes_by_magnitude(
    db: DbConn,
    magnitude: Result<MinMagnitude, ParamError>,
) -> Result<Json<EarthquakeList>, ApiError> {
    let min_magnitude = magnitude?.get();

    let quakes = db
        .run(move |conn| get_earthquakes_by_min_magnitude(conn, min_magnitude))
        .await?;

    Ok(Json(EarthquakeList::from(quakes)))
}

pub fn routes() -> Vec<Route> {
    routes![get_earthquake, get_earthquakes_by_magnitude]
}
