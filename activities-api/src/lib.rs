#[macro_use]
extern crate rocket;

use std::path::PathBuf;

use rocket::fairing::AdHoc;
use rocket::figment::Figment;
use rocket::figment::providers::{Env, Format, Toml};
use rocket::fs::FileServer;
use rocket::request::Request;
use rocket::serde::json::{Json, Value, json};
use rocket::{Build, Rocket};

pub mod api;
pub mod directory;
pub mod models;
pub mod seed;
pub mod seed_fairing;
pub mod testing;

pub use directory::{ActivityDirectory, DirectoryError};
pub use seed::SeedSource;

#[cfg(test)]
pub mod generate_types;

pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

/// Environment variable naming the directory served under `/static`.
pub const STATIC_DIR_ENV: &str = "ACTIVITIES_STATIC_DIR";

fn error_body(status: rocket::http::Status, req: &Request) -> Json<Value> {
    Json(json!({
        "detail": status.reason().unwrap_or("Unknown Error"),
        "path": req.uri().path().to_string(),
        "status": status.code
    }))
}

#[catch(404)]
fn not_found(req: &Request) -> Json<Value> {
    error_body(rocket::http::Status::NotFound, req)
}

#[catch(422)]
fn unprocessable_entity(req: &Request) -> Json<Value> {
    error_body(rocket::http::Status::UnprocessableEntity, req)
}

#[catch(500)]
fn internal_server_error(req: &Request) -> Json<Value> {
    error_body(rocket::http::Status::InternalServerError, req)
}

#[catch(default)]
fn default_catcher(status: rocket::http::Status, req: &Request) -> Json<Value> {
    error_body(status, req)
}

/// What a server instance is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub seed: SeedSource,
    pub static_dir: PathBuf,
}

impl ServerSettings {
    /// Reads `ACTIVITIES_SEED_FILE` and `ACTIVITIES_STATIC_DIR`, falling back
    /// to the built-in roster and `./static`.
    pub fn from_env() -> Self {
        ServerSettings {
            seed: SeedSource::from_env(),
            static_dir: std::env::var(STATIC_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("static")),
        }
    }
}

/// Attach the activity directory, routes, catchers and static files to a
/// bare Rocket instance.
///
/// Every call seeds its own directory, so two instances never share a
/// roster. A missing static directory only disables `/static`; the API
/// itself still comes up.
pub fn assemble(rocket: Rocket<Build>, settings: ServerSettings) -> Rocket<Build> {
    let ServerSettings { seed, static_dir } = settings;

    let mut rocket = rocket
        .attach(seed_fairing::seed_fairing(seed))
        .mount("/", api::routes())
        .register(
            "/",
            catchers![
                not_found,
                unprocessable_entity,
                internal_server_error,
                default_catcher
            ],
        );

    let served = if static_dir.is_dir() {
        rocket = rocket.mount("/static", FileServer::from(&static_dir).rank(10));
        Some(static_dir)
    } else {
        error!(
            "Static directory '{}' does not exist, frontend will not be served",
            static_dir.display()
        );
        None
    };

    rocket.attach(startup_report(served))
}

/// Logs where the server ended up listening once it is actually up.
fn startup_report(static_dir: Option<PathBuf>) -> AdHoc {
    AdHoc::on_liftoff("Startup Report", move |rocket| {
        Box::pin(async move {
            let config = rocket.config();
            info!("Activities API listening on {}:{}", config.address, config.port);
            match static_dir {
                Some(dir) => info!("Serving static files from: {}", dir.display()),
                None => warn!("Static files disabled"),
            }
        })
    })
}

/// Server configured from `Rocket.toml`, `ROCKET_*` and the given settings.
pub fn rocket_with(settings: ServerSettings) -> Rocket<Build> {
    let figment = Figment::from(rocket::Config::default())
        .merge(Toml::file("Rocket.toml").nested())
        .merge(Env::prefixed("ROCKET_").global());

    assemble(rocket::custom(figment), settings)
}

/// Note that this function doesn't get tested by our tests. Tests build
/// their instances through the `testing` module instead.
pub fn rocket() -> Rocket<Build> {
    dotenvy::dotenv().ok();
    rocket_with(ServerSettings::from_env())
}
