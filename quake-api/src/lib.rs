#[macro_use]
extern crate rocket;

use rocket::fairing::AdHoc;
use rocket::request::Request;
use rocket::serde::json::{Json, Value, json};
use rocket::{Build, Rocket};

pub mod api;
pub mod config;
pub mod models;
pub mod orm;
pub use orm::DbConn;
pub mod schema;
pub mod seed;

#[cfg(test)]
pub mod generate_types;

use config::ServiceConfig;

#[catch(404)]
fn not_found(req: &Request) -> Json<Value> {
    Json(json!({
        "error": "Not Found",
        "path": req.uri().path().to_string(),
        "status": 404
    }))
}

#[catch(500)]
fn internal_server_error(req: &Request) -> Json<Value> {
    Json(json!({
        "error": "Internal Server Error",
        "path": req.uri().path().to_string(),
        "status": 500
    }))
}

#[catch(default)]
fn default_catcher(status: rocket::http::Status, req: &Request) -> Json<Value> {
    Json(json!({
        "error": status.reason().unwrap_or("Unknown Error"),
        "path": req.uri().path().to_string(),
        "status": status.code
    }))
}

/// Attaches everything that does not depend on where the database lives:
/// service configuration, routes and JSON catchers.
///
/// Shared by the production builder and `orm::testing::test_rocket`.
pub fn mount_routes(rocket: Rocket<Build>) -> Rocket<Build> {
    rocket
        .attach(AdHoc::config::<ServiceConfig>())
        .mount("/", api::routes())
        .register("/", catchers![not_found, internal_server_error, default_catcher])
}

fn log_rocket_info(rocket: &Rocket<Build>) {
    let figment = rocket.figment();

    if let Ok(address) = figment.extract_inner::<String>("address") {
        info!("Rocket is running at: {}", address);
    }

    if let Ok(port) = figment.extract_inner::<u16>("port") {
        info!("Rocket is listening on port: {}", port);
    }

    match figment.extract_inner::<String>("databases.sqlite_db.url") {
        Ok(url) => info!("Database URL: {}", url),
        Err(e) => warn!("Failed to extract database configuration: {}", e),
    }
}

/// Builds the production server from `config::figment()`.
///
/// Tests use `orm::testing::test_rocket` instead, which swaps in a private
/// in-memory database.
pub fn rocket() -> Rocket<Build> {
    let rocket = rocket::custom(config::figment())
        .attach(DbConn::fairing())
        .attach(orm::run_migrations_fairing());

    log_rocket_info(&rocket);

    mount_routes(rocket)
}
