//! Seeding support for the `quake-seed` binary.
//!
//! The HTTP service never writes; this is the only code path that populates
//! the `earthquakes` table outside of tests.

use std::fs;
use std::path::Path;

use diesel::prelude::*;

use crate::models::NewEarthquake;
use crate::orm::earthquake::{delete_all_earthquakes, insert_earthquakes};

/// Outcome of a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub removed: usize,
    pub inserted: usize,
}

/// A handful of large historical earthquakes used when no seed file is given.
pub fn historical_earthquakes() -> Vec<NewEarthquake> {
    vec![
        NewEarthquake::new("Chile", 9.5, 1960),
        NewEarthquake::new("Alaska", 9.2, 1964),
        NewEarthquake::new("Alaska", 8.6, 1946),
        NewEarthquake::new("Banda Sea", 8.5, 1934),
        NewEarthquake::new("Chile", 8.4, 1922),
    ]
}

/// Reads a JSON array of records such as
/// `[{"location": "Chile", "magnitude": 9.5, "year": 1960}]`.
pub fn load_seed_file(path: &Path) -> Result<Vec<NewEarthquake>, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    let records = serde_json::from_str(&contents)?;
    Ok(records)
}

/// Writes `records`, first clearing the table unless `keep_existing` is set.
///
/// Runs in one transaction: either all rows land or none do.
pub fn seed_earthquakes(
    conn: &mut SqliteConnection,
    records: &[NewEarthquake],
    keep_existing: bool,
) -> Result<SeedSummary, diesel::result::Error> {
    conn.transaction(|conn| {
        let removed = if keep_existing {
            0
        } else {
            delete_all_earthquakes(conn)?
        };
        let inserted = insert_earthquakes(conn, records)?;
        Ok(SeedSummary { removed, inserted })
    })
}
