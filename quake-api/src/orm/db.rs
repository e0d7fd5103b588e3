use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use rocket::fairing::AdHoc;
use rocket_sync_db_pools::{database, diesel};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[database("sqlite_db")]
pub struct DbConn(diesel::SqliteConnection);

/// Runs all pending database migrations on the provided connection.
///
/// Returns the versions that were applied, oldest first. An up-to-date
/// database yields an empty list.
pub fn run_pending_migrations(
    conn: &mut diesel::SqliteConnection,
) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    Ok(applied.iter().map(ToString::to_string).collect())
}

/// Creates a Rocket fairing that runs database migrations on ignition.
///
/// Ignition is aborted if no pooled connection can be obtained or a
/// migration fails, so the server never starts against a missing table.
pub fn run_migrations_fairing() -> AdHoc {
    AdHoc::try_on_ignite("Diesel Migrations", |rocket| async {
        let Some(conn) = DbConn::get_one(&rocket).await else {
            error!("No database connection available for migrations");
            return Err(rocket);
        };

        let outcome = conn
            .run(|c| run_pending_migrations(c).map_err(|e| e.to_string()))
            .await;

        match outcome {
            Ok(applied) => {
                for version in applied {
                    info!("Applied migration {}", version);
                }
                Ok(rocket)
            }
            Err(e) => {
                error!("Failed to run pending migrations: {}", e);
                Err(rocket)
            }
        }
    })
}
