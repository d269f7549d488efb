//! API endpoints for activities and their rosters.
//!
//! Activities themselves are fixed for the lifetime of the server; the only
//! thing clients can change is who is signed up for them.

use rocket::http::Status;
use rocket::response::{Redirect, status};
use rocket::serde::json::Json;
use rocket::{Route, State};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::directory::{ActivityDirectory, DirectoryError};
use crate::models::{ActivityListing, MessageResponse};

/// Error body for failed roster changes.
#[derive(Debug, Deserialize, Serialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub detail: String,
}

type ErrorReply = status::Custom<Json<ErrorResponse>>;

fn error_response(err: DirectoryError) -> ErrorReply {
    let status = match err {
        DirectoryError::ActivityNotFound => Status::NotFound,
        DirectoryError::AlreadyRegistered | DirectoryError::NotSignedUp => Status::BadRequest,
    };
    status::Custom(status, Json(ErrorResponse { detail: err.to_string() }))
}

/// Sends browsers hitting the bare host to the bundled frontend.
#[rocket::get("/")]
pub fn index() -> Redirect {
    Redirect::temporary("/static/index.html")
}

/// List Activities endpoint.
///
/// - **URL:** `/activities`
/// - **Method:** `GET`
/// - **Purpose:** Returns every activity keyed by name, in seed order
///
/// # Response
///
/// **Success (HTTP 200 OK):**
/// ```json
/// {
///   "Chess Club": {
///     "description": "Learn strategies and compete in chess tournaments",
///     "schedule": "Fridays, 3:30 PM - 5:00 PM",
///     "max_participants": 12,
///     "participants": ["michael@mergington.edu", "daniel@mergington.edu"]
///   }
/// }
/// ```
#[rocket::get("/activities")]
pub fn list_activities(directory: &State<ActivityDirectory>) -> Json<ActivityListing> {
    Json(directory.list_activities())
}

/// Signup endpoint.
///
/// - **URL:** `/activities/<activity_name>/signup?email=<email>`
/// - **Method:** `POST`
/// - **Purpose:** Adds a student to an activity's roster
///
/// The activity name is matched exactly after percent-decoding, so
/// `Chess%20Club` addresses "Chess Club".
///
/// # Response
///
/// **Success (HTTP 200 OK):**
/// ```json
/// { "message": "Signed up newstudent@mergington.edu for Chess Club" }
/// ```
///
/// **Error Responses:**
/// - **404 Not Found**: `{"detail": "Activity not found"}`
/// - **400 Bad Request**: `{"detail": "Student is already signed up for this activity"}`
/// - **422 Unprocessable Entity**: `email` query parameter missing
#[rocket::post("/activities/<activity_name>/signup?<email>")]
pub fn signup(
    activity_name: &str,
    email: &str,
    directory: &State<ActivityDirectory>,
) -> Result<Json<MessageResponse>, ErrorReply> {
    match directory.signup(activity_name, email) {
        Ok(message) => {
            info!("[signup] {} joined '{}'", email, activity_name);
            Ok(Json(MessageResponse { message }))
        }
        Err(e) => {
            warn!("[signup] {} for '{}' rejected: {}", email, activity_name, e);
            Err(error_response(e))
        }
    }
}

/// Unregister endpoint.
///
/// - **URL:** `/activities/<activity_name>/unregister?email=<email>`
/// - **Method:** `DELETE`
/// - **Purpose:** Removes a student from an activity's roster
///
/// # Response
///
/// **Success (HTTP 200 OK):**
/// ```json
/// { "message": "Unregistered michael@mergington.edu from Chess Club" }
/// ```
///
/// **Error Responses:**
/// - **404 Not Found**: `{"detail": "Activity not found"}`
/// - **400 Bad Request**: `{"detail": "Student is not signed up for this activity"}`
/// - **422 Unprocessable Entity**: `email` query parameter missing
#[rocket::delete("/activities/<activity_name>/unregister?<email>")]
pub fn unregister(
    activity_name: &str,
    email: &str,
    directory: &State<ActivityDirectory>,
) -> Result<Json<MessageResponse>, ErrorReply> {
    match directory.unregister(activity_name, email) {
        Ok(message) => {
            info!("[unregister] {} left '{}'", email, activity_name);
            Ok(Json(MessageResponse { message }))
        }
        Err(e) => {
            warn!("[unregister] {} for '{}' rejected: {}", email, activity_name, e);
            Err(error_response(e))
        }
    }
}

pub fn routes() -> Vec<Route> {
    routes![index, list_activities, signup, unregister]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_statuses() {
        assert_eq!(error_response(DirectoryError::ActivityNotFound).0, Status::NotFound);
        assert_eq!(error_response(DirectoryError::AlreadyRegistered).0, Status::BadRequest);
        assert_eq!(error_response(DirectoryError::NotSignedUp).0, Status::BadRequest);
    }

    #[test]
    fn test_error_detail_wording() {
        let detail = |e| error_response(e).1.into_inner().detail.to_lowercase();
        assert!(detail(DirectoryError::ActivityNotFound).contains("not found"));
        assert!(detail(DirectoryError::AlreadyRegistered).contains("already"));
        assert!(detail(DirectoryError::NotSignedUp).contains("not signed up"));
    }
}
