// Activity aggregate as it is stored and returned.
//
// Structure
// - NewActivity: validated data handed to the store on insert.
// - Activity: the stored record, with id, timestamps and lifecycle flags.
// - ActivityState: the lifecycle view derived from the two flags.

use crate::modules::activities::core::clock_time::ClockTime;
use crate::shared::core::primitives::RecordId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Platform name to handle or link, e.g. `instagram -> https://...`.
pub type SocialMedia = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewActivity {
    pub created_by_user: String,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub event_date: NaiveDate,
    pub event_start_time: ClockTime,
    pub event_end_time: ClockTime,
    pub location: String,
    pub host: String,
    pub website: Option<String>,
    pub meeting_url: Option<String>,
    pub registration_info: Option<String>,
    pub capacity: Option<u32>,
    pub cost: Option<String>,
    pub tags: Vec<String>,
    pub schedule: Option<String>,
    pub speakers: Vec<String>,
    pub prerequisites: Option<String>,
    pub cancellation_policy: Option<String>,
    pub contact_email: Option<String>,
    pub social_media: Option<SocialMedia>,
    pub privacy: Option<String>,
    pub accessibility: Option<String>,
    pub note: Option<String>,
    pub cover_photo: Option<String>,
    pub document: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: RecordId,
    pub created_by_user: String,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub event_date: NaiveDate,
    pub event_start_time: ClockTime,
    pub event_end_time: ClockTime,
    pub location: String,
    pub host: String,
    pub website: Option<String>,
    pub meeting_url: Option<String>,
    pub registration_info: Option<String>,
    pub capacity: Option<u32>,
    pub cost: Option<String>,
    pub tags: Vec<String>,
    pub schedule: Option<String>,
    pub speakers: Vec<String>,
    pub prerequisites: Option<String>,
    pub cancellation_policy: Option<String>,
    pub contact_email: Option<String>,
    pub social_media: Option<SocialMedia>,
    pub privacy: Option<String>,
    pub accessibility: Option<String>,
    pub note: Option<String>,
    pub cover_photo: Option<String>,
    pub document: Option<String>,
    pub attendance_count: u32,
    pub attendees: Vec<Attendee>,
    pub is_hidden: bool,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActivityState {
    Active,
    Archived,
    Hidden,
}

impl Activity {
    /// Materializes a stored record. Only stores call this.
    pub fn from_new(id: RecordId, new: NewActivity, now: DateTime<Utc>) -> Self {
        Self {
            id,
            created_by_user: new.created_by_user,
            title: new.title,
            description: new.description,
            category: new.category,
            event_date: new.event_date,
            event_start_time: new.event_start_time,
            event_end_time: new.event_end_time,
            location: new.location,
            host: new.host,
            website: new.website,
            meeting_url: new.meeting_url,
            registration_info: new.registration_info,
            capacity: new.capacity,
            cost: new.cost,
            tags: new.tags,
            schedule: new.schedule,
            speakers: new.speakers,
            prerequisites: new.prerequisites,
            cancellation_policy: new.cancellation_policy,
            contact_email: new.contact_email,
            social_media: new.social_media,
            privacy: new.privacy,
            accessibility: new.accessibility,
            note: new.note,
            cover_photo: new.cover_photo.filter(|url| !url.is_empty()),
            document: new.document.filter(|url| !url.is_empty()),
            attendance_count: 0,
            attendees: Vec::new(),
            is_hidden: false,
            is_archived: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Hidden dominates archived.
    pub fn state(&self) -> ActivityState {
        match (self.is_hidden, self.is_archived) {
            (true, _) => ActivityState::Hidden,
            (false, true) => ActivityState::Archived,
            (false, false) => ActivityState::Active,
        }
    }

    /// Legacy inline attendance counter.
    pub fn record_attendance(&mut self, attendee: Option<Attendee>) {
        self.attendance_count = self.attendance_count.saturating_add(1);
        if let Some(attendee) = attendee {
            self.attendees.push(attendee);
        }
    }
}
