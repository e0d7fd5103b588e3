//! Store queries for earthquake records.
//!
//! The HTTP layer only reads; `insert_earthquakes` and
//! `delete_all_earthquakes` exist for the seeder and for tests.

use diesel::prelude::*;

use crate::models::{Earthquake, NewEarthquake};

/// Gets an earthquake by its ID.
pub fn get_earthquake_by_id(
    conn: &mut SqliteConnection,
    quake_id: i64,
) -> Result<Option<Earthquake>, diesel::result::Error> {
    use crate::schema::earthquakes::dsl::*;
    earthquakes
        .filter(id.eq(quake_id))
        .select(Earthquake::as_select())
        .first(conn)
        .optional()
}

/// Gets every earthquake whose magnitude is at least `min_magnitude`, in
/// natural store order.
pub fn get_earthquakes_by_min_magnitude(
    conn: &mut SqliteConnection,
    min_magnitude: f64,
) -> Result<Vec<Earthquake>, diesel::result::Error> {
    use crate::schema::earthquakes::dsl::*;
    earthquakes
        .filter(magnitude.ge(min_magnitude))
        .select(Earthquake::as_select())
        .load(conn)
}

/// Inserts the given records in a single transaction and returns how many
/// rows were written.
pub fn insert_earthquakes(
    conn: &mut SqliteConnection,
    records: &[NewEarthquake],
) -> Result<usize, diesel::result::Error> {
    use crate::schema::earthquakes::dsl::*;
    conn.transaction(|conn| {
        let mut written = 0;
        for record in records {
            written += diesel::insert_into(earthquakes).values(record).execute(conn)?;
        }
        Ok(written)
    })
}

/// Removes every earthquake record.
pub fn delete_all_earthquakes(conn: &mut SqliteConnection) -> Result<usize, diesel::result::Error> {
    use crate::schema::earthquakes::dsl::*;
    diesel::delete(earthquakes).execute(conn)
}
