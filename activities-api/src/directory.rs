//! In-memory activity directory.
//!
//! The directory owns the activity roster for one server instance. It is
//! built once from the seed when Rocket ignites and handed to the request
//! handlers as managed state. Nothing outside of this module touches the
//! roster directly.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use crate::models::{Activity, ActivityListing};

/// Failures of directory mutations. The `Display` text is what clients see
/// in the `detail` field of the error body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up for this activity")]
    AlreadyRegistered,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

pub struct ActivityDirectory {
    activities: RwLock<ActivityListing>,
}

impl ActivityDirectory {
    pub fn new(seed: ActivityListing) -> Self {
        Self {
            activities: RwLock::new(seed),
        }
    }

    /// Snapshot of every activity, in seed order.
    pub fn list_activities(&self) -> ActivityListing {
        self.read().clone()
    }

    /// Adds `email` to the roster of `activity_name`.
    ///
    /// The existence check and the append happen under one write lock, so
    /// two concurrent signups for the same email cannot both succeed.
    pub fn signup(&self, activity_name: &str, email: &str) -> Result<String, DirectoryError> {
        let mut activities = self.write();
        let activity = find_activity(&mut activities, activity_name)?;

        if activity.has_participant(email) {
            return Err(DirectoryError::AlreadyRegistered);
        }

        activity.participants.push(email.to_string());
        Ok(format!("Signed up {} for {}", email, activity_name))
    }

    /// Removes `email` from the roster of `activity_name`.
    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<String, DirectoryError> {
        let mut activities = self.write();
        let activity = find_activity(&mut activities, activity_name)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(DirectoryError::NotSignedUp)?;

        activity.participants.remove(position);
        Ok(format!("Unregistered {} from {}", email, activity_name))
    }

    // A panic while holding the lock cannot leave a half-written roster
    // behind (every mutation is a single push or remove), so poisoning is
    // ignored.
    fn read(&self) -> RwLockReadGuard<'_, ActivityListing> {
        self.activities.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ActivityListing> {
        self.activities.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn find_activity<'a>(
    activities: &'a mut ActivityListing,
    activity_name: &str,
) -> Result<&'a mut Activity, DirectoryError> {
    activities
        .get_mut(activity_name)
        .ok_or(DirectoryError::ActivityNotFound)
}
