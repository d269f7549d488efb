//! Helpers for building throwaway server instances in tests.

use std::path::Path;

use rocket::fs::relative;
use rocket::{Build, Rocket};

use crate::ServerSettings;
use crate::seed::SeedSource;

/// Creates a Rocket instance seeded with the built-in activity roster.
///
/// The returned instance will have:
/// - Its own activity directory, independent of every other instance
/// - All routes and catchers mounted
/// - The bundled frontend served under `/static`
pub fn test_rocket() -> Rocket<Build> {
    test_rocket_with_seed(SeedSource::Builtin)
}

/// Same as [`test_rocket`], seeding from the given TOML file instead.
pub fn test_rocket_with_seed_file(path: &Path) -> Rocket<Build> {
    test_rocket_with_seed(SeedSource::File(path.to_path_buf()))
}

/// Same as [`test_rocket`], serving `/static` from `static_dir`.
pub fn test_rocket_with_static_dir(static_dir: &Path) -> Rocket<Build> {
    let rocket = rocket::custom(rocket::Config::figment());
    crate::assemble(
        rocket,
        ServerSettings {
            seed: SeedSource::Builtin,
            static_dir: static_dir.to_path_buf(),
        },
    )
}

fn test_rocket_with_seed(seed: SeedSource) -> Rocket<Build> {
    let rocket = rocket::custom(rocket::Config::figment());
    crate::assemble(
        rocket,
        ServerSettings {
            seed,
            static_dir: relative!("static").into(),
        },
    )
}
