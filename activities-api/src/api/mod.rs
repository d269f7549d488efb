pub mod activity;
pub mod status;

use rocket::Route;

pub fn routes() -> Vec<Route> {
    let mut routes = Vec::new();
    routes.extend(activity::routes());
    routes.extend(status::routes());
    routes
}
