// Command data types for the activity lifecycle.
//
// Purpose
// - Carry caller input, as written, to the decide functions.
// - Declare field rules with `validator` so every inbound adapter gets the same checks.
//
// Times stay plain strings here; decide turns them into ClockTime.

use crate::modules::activities::core::activity::SocialMedia;
use crate::modules::activities::core::clock_time::validate_clock_time;
use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidateUrl, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateActivity {
    /// Ignored: ownership always comes from the authenticated creator.
    #[serde(default)]
    pub created_by_user: Option<String>,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    pub category: Option<String>,
    pub event_date: NaiveDate,
    #[validate(custom(function = "validate_clock_time"))]
    pub event_start_time: String,
    #[validate(custom(function = "validate_clock_time"))]
    pub event_end_time: String,
    #[validate(length(min = 1, message = "location must not be empty"))]
    pub location: String,
    #[validate(length(min = 1, message = "host must not be empty"))]
    pub host: String,
    #[validate(custom(function = "validate_optional_url"))]
    pub website: Option<String>,
    #[validate(custom(function = "validate_optional_url"))]
    pub meeting_url: Option<String>,
    pub registration_info: Option<String>,
    #[validate(range(min = 1, message = "capacity must be a positive number"))]
    pub capacity: Option<u32>,
    pub cost: Option<String>,
    #[validate(length(min = 1, message = "tags must not be empty"))]
    pub tags: Option<Vec<String>>,
    pub schedule: Option<String>,
    #[serde(default)]
    pub speakers: Vec<String>,
    pub prerequisites: Option<String>,
    pub cancellation_policy: Option<String>,
    #[validate(email(message = "Be sure to enter club email or a point of contact."))]
    pub contact_email: Option<String>,
    #[validate(custom(function = "validate_social_media"))]
    pub social_media: Option<SocialMedia>,
    pub privacy: Option<String>,
    pub accessibility: Option<String>,
    pub note: Option<String>,
    #[validate(custom(function = "validate_optional_url"))]
    pub cover_photo: Option<String>,
    #[validate(custom(function = "validate_optional_url"))]
    pub document: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
pub struct UpdateActivity {
    /// Must stay empty: ownership is immutable.
    #[serde(default)]
    pub created_by_user: Option<serde_json::Value>,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: Option<String>,
    pub category: Option<String>,
    pub event_date: Option<NaiveDate>,
    #[validate(custom(function = "validate_clock_time"))]
    pub event_start_time: Option<String>,
    #[validate(custom(function = "validate_clock_time"))]
    pub event_end_time: Option<String>,
    #[validate(length(min = 1, message = "location must not be empty"))]
    pub location: Option<String>,
    #[validate(length(min = 1, message = "host must not be empty"))]
    pub host: Option<String>,
    #[validate(custom(function = "validate_optional_url"))]
    pub website: Option<String>,
    #[validate(custom(function = "validate_optional_url"))]
    pub meeting_url: Option<String>,
    pub registration_info: Option<String>,
    #[validate(range(min = 1, message = "capacity must be a positive number"))]
    pub capacity: Option<u32>,
    pub cost: Option<String>,
    #[validate(length(min = 1, message = "tags must not be empty"))]
    pub tags: Option<Vec<String>>,
    pub schedule: Option<String>,
    pub speakers: Option<Vec<String>>,
    pub prerequisites: Option<String>,
    pub cancellation_policy: Option<String>,
    #[validate(email(message = "Be sure to enter club email or a point of contact."))]
    pub contact_email: Option<String>,
    #[validate(custom(function = "validate_social_media"))]
    pub social_media: Option<SocialMedia>,
    pub privacy: Option<String>,
    pub accessibility: Option<String>,
    pub note: Option<String>,
    /// An empty string clears the link.
    #[validate(custom(function = "validate_optional_url"))]
    pub cover_photo: Option<String>,
    #[validate(custom(function = "validate_optional_url"))]
    pub document: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct AttendeeInput {
    #[validate(length(min = 1, max = 50))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct AttendActivity {
    #[validate(nested)]
    pub attendee: Option<AttendeeInput>,
}

/// Empty strings stand for "no link" and pass.
fn validate_optional_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_url() {
        return Ok(());
    }
    let mut error = ValidationError::new("url");
    error.message = Some(format!("{value} must be a URL address").into());
    Err(error)
}

fn validate_social_media(value: &SocialMedia) -> Result<(), ValidationError> {
    if value.is_empty() {
        let mut error = ValidationError::new("social_media");
        error.message =
            Some("social_media must be an object with string keys and string values.".into());
        return Err(error);
    }
    Ok(())
}
