pub mod earthquake;
pub mod error;
pub mod index;
pub mod params;

use rocket::Route;

pub fn routes() -> Vec<Route> {
    let mut routes = Vec::new();
    routes.extend(index::routes());
    routes.extend(earthquake::routes());
    routes
}
