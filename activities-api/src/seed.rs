//! Initial activity roster.
//!
//! The built-in roster is what a fresh server starts with. A TOML file can
//! replace it, for example:
//!
//! ```toml
//! [[activity]]
//! name = "Chess Club"
//! description = "Learn strategies and compete in chess tournaments"
//! schedule = "Fridays, 3:30 PM - 5:00 PM"
//! max_participants = 12
//! participants = ["michael@mergington.edu"]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Activity, ActivityListing};

/// Environment variable naming an alternative seed file.
pub const SEED_FILE_ENV: &str = "ACTIVITIES_SEED_FILE";

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid seed file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Activity name must not be empty")]
    EmptyName,
    #[error("Duplicate activity '{0}'")]
    DuplicateActivity(String),
    #[error("Duplicate participant '{email}' in activity '{activity}'")]
    DuplicateParticipant { activity: String, email: String },
}

/// Where the roster of a new server comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    Builtin,
    File(PathBuf),
}

impl SeedSource {
    /// Uses the file named by `ACTIVITIES_SEED_FILE` when it is set and
    /// non-empty, the built-in roster otherwise.
    pub fn from_env() -> Self {
        match std::env::var(SEED_FILE_ENV) {
            Ok(path) if !path.trim().is_empty() => SeedSource::File(PathBuf::from(path)),
            _ => SeedSource::Builtin,
        }
    }

    pub fn load(&self) -> Result<ActivityListing, SeedError> {
        match self {
            SeedSource::Builtin => Ok(default_activities()),
            SeedSource::File(path) => load_seed_file(path),
        }
    }
}

#[derive(Deserialize)]
struct SeedFile {
    #[serde(default)]
    activity: Vec<SeedActivity>,
}

#[derive(Deserialize)]
struct SeedActivity {
    name: String,
    description: String,
    schedule: String,
    max_participants: u32,
    #[serde(default)]
    participants: Vec<String>,
}

pub fn load_seed_file(path: &Path) -> Result<ActivityListing, SeedError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_seed(&contents)
}

/// Parses and validates a TOML roster.
pub fn parse_seed(contents: &str) -> Result<ActivityListing, SeedError> {
    let file: SeedFile = toml::from_str(contents)?;

    let mut listing = ActivityListing::new();
    for entry in file.activity {
        if entry.name.trim().is_empty() {
            return Err(SeedError::EmptyName);
        }

        for (i, email) in entry.participants.iter().enumerate() {
            if entry.participants[..i].contains(email) {
                return Err(SeedError::DuplicateParticipant {
                    activity: entry.name.clone(),
                    email: email.clone(),
                });
            }
        }

        let activity = Activity {
            description: entry.description,
            schedule: entry.schedule,
            max_participants: entry.max_participants,
            participants: entry.participants,
        };
        if !listing.insert(entry.name.clone(), activity) {
            return Err(SeedError::DuplicateActivity(entry.name));
        }
    }

    Ok(listing)
}

fn activity(description: &str, schedule: &str, max_participants: u32, participants: &[&str]) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

/// The roster every server starts with unless a seed file is configured.
pub fn default_activities() -> ActivityListing {
    let mut listing = ActivityListing::new();
    let entries = [
        (
            "Chess Club",
            activity(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class",
            activity(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class",
            activity(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Soccer Team",
            activity(
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
                &["liam@mergington.edu", "noah@mergington.edu"],
            ),
        ),
        (
            "Basketball Club",
            activity(
                "Practice basketball skills and play friendly games",
                "Wednesdays, 3:30 PM - 5:00 PM",
                15,
                &["ava@mergington.edu", "mia@mergington.edu"],
            ),
        ),
        (
            "Drama Club",
            activity(
                "Act, direct, and produce plays and performances",
                "Mondays, 4:00 PM - 5:30 PM",
                20,
                &["amelia@mergington.edu", "harper@mergington.edu"],
            ),
        ),
        (
            "Art Workshop",
            activity(
                "Explore painting, drawing, and sculpture techniques",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
                &["ella@mergington.edu", "scarlett@mergington.edu"],
            ),
        ),
        (
            "Math Olympiad",
            activity(
                "Prepare for math competitions and solve challenging problems",
                "Fridays, 2:00 PM - 3:30 PM",
                10,
                &["james@mergington.edu", "benjamin@mergington.edu"],
            ),
        ),
        (
            "Science Club",
            activity(
                "Conduct experiments and explore scientific concepts",
                "Wednesdays, 4:00 PM - 5:00 PM",
                18,
                &["lucas@mergington.edu", "henry@mergington.edu"],
            ),
        ),
    ];

    for (name, record) in entries {
        listing.insert(name, record);
    }
    listing
}
