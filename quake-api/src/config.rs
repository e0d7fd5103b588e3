//! Startup configuration.
//!
//! Values are layered, lowest precedence first: built-in defaults,
//! `Rocket.toml`, `ROCKET_*` environment variables, then `DATABASE_URL`.

use std::env;

use rocket::figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 5555;
pub const DEFAULT_DATABASE_URL: &str = "app.db";
pub const DEFAULT_SERVICE_NAME: &str = "Earthquake API";

/// Settings handed to handlers as managed state.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Reported by the index route.
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

fn default_service_name() -> String {
    DEFAULT_SERVICE_NAME.to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
        }
    }
}

/// `DATABASE_URL` if set, otherwise `app.db`.
pub fn database_url() -> String {
    env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Builds the figment the production server is configured from.
pub fn figment() -> Figment {
    let figment = Figment::from(rocket::Config::default())
        .merge(("port", DEFAULT_PORT))
        .merge(("service_name", DEFAULT_SERVICE_NAME))
        .merge(("databases.sqlite_db.url", DEFAULT_DATABASE_URL))
        .merge(Toml::file("Rocket.toml").nested())
        .merge(Env::prefixed("ROCKET_").global());

    match env::var("DATABASE_URL") {
        Ok(url) => figment.merge(("databases.sqlite_db.url", url)),
        Err(_) => figment,
    }
}
