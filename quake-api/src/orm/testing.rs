//! Test helpers: throwaway databases and fully wired Rocket instances.

use diesel::sqlite::SqliteConnection;
use rocket::figment::{
    util::map,
    value::{Map, Value},
};
use rocket::{Build, Rocket, fairing::AdHoc};
use uuid::Uuid;

use super::db::{DbConn, run_migrations_fairing, run_pending_migrations};
use super::earthquake::insert_earthquakes;
use crate::models::NewEarthquake;

/// The two records used throughout the HTTP tests.
///
/// Inserted into a fresh database they receive ids 1 and 2.
pub fn sample_earthquakes() -> Vec<NewEarthquake> {
    vec![
        NewEarthquake::new("California", 3.5, 2021),
        NewEarthquake::new("Alaska", 6.1, 2019),
    ]
}

/// Creates a Rocket fairing that inserts `records` once migrations have run.
fn seed_fairing(records: Vec<NewEarthquake>) -> AdHoc {
    AdHoc::try_on_ignite("Test Data Initialization", |rocket| async move {
        let Some(conn) = DbConn::get_one(&rocket).await else {
            return Err(rocket);
        };

        match conn.run(move |c| insert_earthquakes(c, &records)).await {
            Ok(count) => {
                info!("[test-data-init] Inserted {} earthquakes", count);
                Ok(rocket)
            }
            Err(e) => {
                error!("[test-data-init] Failed to insert earthquakes: {:?}", e);
                Err(rocket)
            }
        }
    })
}

/// Creates and configures a Rocket instance for testing with an in-memory
/// SQLite database holding `records`.
///
/// Each call gets its own shared-cache in-memory database, so tests running
/// in parallel never see each other's rows.
pub fn test_rocket(records: Vec<NewEarthquake>) -> Rocket<Build> {
    let unique_db_name = format!("file:test_db_{}?mode=memory&cache=shared", Uuid::new_v4());

    let db_config: Map<_, Value> = map! {
        "url" => unique_db_name.into(),
        "pool_size" => 5.into(),
        "timeout" => 5.into(),
    };

    let figment = rocket::Config::figment().merge(("databases", map!["sqlite_db" => db_config]));

    let rocket = rocket::custom(figment)
        .attach(DbConn::fairing())
        .attach(run_migrations_fairing())
        .attach(seed_fairing(records));

    crate::mount_routes(rocket)
}

/// Creates a synchronous in-memory SQLite database connection for unit tests.
///
/// Migrations have been applied; the table is empty. Each call returns a new,
/// independent database.
pub fn setup_test_db() -> SqliteConnection {
    use diesel::Connection;

    let mut conn = SqliteConnection::establish(":memory:")
        .expect("Failed to create in-memory SQLite database");
    run_pending_migrations(&mut conn).expect("Failed to run pending migrations");
    conn
}
