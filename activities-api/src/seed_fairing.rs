use rocket::fairing::AdHoc;

use crate::directory::ActivityDirectory;
use crate::seed::SeedSource;

/// Build the activity directory from `source` and hand it to Rocket as
/// managed state.
///
/// Ignition fails if the seed cannot be loaded, so a broken seed file stops
/// the server instead of starting it with an empty roster.
pub fn seed_fairing(source: SeedSource) -> AdHoc {
    AdHoc::try_on_ignite("Activity Directory Seeding", move |rocket| async move {
        let listing = match source.load() {
            Ok(listing) => listing,
            Err(e) => {
                error!("[seed-init] FATAL: Could not load activities: {}", e);
                return Err(rocket);
            }
        };

        match &source {
            SeedSource::Builtin => info!("[seed-init] Using built-in activity roster"),
            SeedSource::File(path) => info!("[seed-init] Loaded activities from '{}'", path.display()),
        }

        if listing.is_empty() {
            warn!("[seed-init] Activity roster is empty");
        }
        for (name, activity) in listing.iter() {
            info!(
                "[seed-init] '{}': {} of {} participants",
                name,
                activity.participants.len(),
                activity.max_participants
            );
        }

        Ok(rocket.manage(ActivityDirectory::new(listing)))
    })
}
