use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use ts_rs::TS;

/// A single extracurricular offering as it appears in `GET /activities`.
///
/// The activity name is not part of the record; it is the key the record is
/// stored (and serialized) under.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, TS)]
#[ts(export)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    // Informational only, signups are not refused once it is reached.
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// Ordered collection of activities keyed by name.
///
/// Serializes as a JSON object in insertion order, so the listing comes back
/// in the order the activities were seeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityListing(Vec<(String, Activity)>);

impl ActivityListing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an activity. Returns false (and leaves the listing untouched)
    /// if an activity with the same name is already present.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.0.push((name, activity));
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.0.iter_mut().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.0.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ActivityListing {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, activity) in &self.0 {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

/// Confirmation body returned by successful signup and unregister calls.
#[derive(Debug, Deserialize, Serialize, TS)]
#[ts(export)]
pub struct MessageResponse {
    pub message: String,
}
