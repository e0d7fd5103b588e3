use diesel::{Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::schema::earthquakes;

#[derive(Queryable, Selectable, Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[diesel(table_name = earthquakes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[ts(export)]
pub struct Earthquake {
    #[ts(type = "number")]
    pub id: i64,
    pub location: Option<String>,
    pub magnitude: f64,
    pub year: i32,
}

/// A record as written by the seeder; the store assigns the id.
#[derive(Insertable, Debug, Clone, Deserialize, Serialize)]
#[diesel(table_name = earthquakes)]
pub struct NewEarthquake {
    pub location: Option<String>,
    pub magnitude: f64,
    pub year: i32,
}

impl NewEarthquake {
    pub fn new(location: impl Into<String>, magnitude: f64, year: i32) -> Self {
        Self {
            location: Some(location.into()),
            magnitude,
            year,
        }
    }
}

/// Response body for magnitude queries.
///
/// Only built from the matched rows, so `count` always equals the number
/// of entries in `quakes`. Deserializing (for API clients) rejects bodies
/// where the two disagree.
#[derive(Debug, Serialize, Deserialize, TS)]
#[serde(try_from = "EarthquakeListBody")]
#[ts(export)]
pub struct EarthquakeList {
    count: usize,
    quakes: Vec<Earthquake>,
}

/// Wire form of `EarthquakeList` before the count is checked.
#[derive(Deserialize)]
struct EarthquakeListBody {
    count: usize,
    quakes: Vec<Earthquake>,
}

impl TryFrom<EarthquakeListBody> for EarthquakeList {
    type Error = String;

    fn try_from(body: EarthquakeListBody) -> Result<Self, Self::Error> {
        if body.count != body.quakes.len() {
            return Err(format!(
                "count {} does not match {} quakes",
                body.count,
                body.quakes.len()
            ));
        }
        Ok(EarthquakeList::from(body.quakes))
    }
}

impl EarthquakeList {
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn quakes(&self) -> &[Earthquake] {
        &self.quakes
    }

    pub fn into_quakes(self) -> Vec<Earthquake> {
        self.quakes
    }
}

impl From<Vec<Earthquake>> for EarthquakeList {
    fn from(quakes: Vec<Earthquake>) -> Self {
        Self {
            count: quakes.len(),
            quakes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_count_tracks_quakes() {
        let list = EarthquakeList::from(vec![
            Earthquake {
                id: 1,
                location: Some("Chile".to_string()),
                magnitude: 9.5,
                year: 1960,
            },
            Earthquake {
                id: 2,
                location: None,
                magnitude: 8.6,
                year: 1946,
            },
        ]);
        assert_eq!(list.count(), 2);
        assert_eq!(list.count(), list.quakes().len());

        let empty = EarthquakeList::from(Vec::new());
        assert_eq!(empty.count(), 0);
        assert!(empty.quakes().is_empty());
    }

    #[test]
    fn earthquake_serializes_null_location() {
        let quake = Earthquake {
            id: 7,
            location: None,
            magnitude: 4.25,
            year: 1999,
        };
        let value = serde_json::to_value(&quake).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 7, "location": null, "magnitude": 4.25, "year": 1999})
        );
    }

    #[test]
    fn list_deserialization_checks_count() {
        let list: EarthquakeList = serde_json::from_value(serde_json::json!({
            "count": 1,
            "quakes": [{"id": 2, "location": "Alaska", "magnitude": 6.1, "year": 2019}]
        }))
        .unwrap();
        assert_eq!(list.count(), 1);
        assert_eq!(list.quakes()[0].id, 2);

        let mismatched = serde_json::from_value::<EarthquakeList>(serde_json::json!({
            "count": 3,
            "quakes": [{"id": 2, "location": "Alaska", "magnitude": 6.1, "year": 2019}]
        }));
        assert!(mismatched.is_err());
    }

    #[test]
    fn earthquake_id_beyond_i32_round_trips() {
        let quake: Earthquake = serde_json::from_value(serde_json::json!({
            "id": 3_000_000_000_i64, "location": null, "magnitude": 1.0, "year": 2000
        }))
        .unwrap();
        assert_eq!(quake.id, 3_000_000_000);
    }

    #[test]
    fn empty_list_serializes_with_zero_count() {
        let value = serde_json::to_value(EarthquakeList::from(Vec::new())).unwrap();
        assert_eq!(value, serde_json::json!({"count": 0, "quakes": []}));
    }
}
