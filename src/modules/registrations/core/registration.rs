// Event registrations and the read models built from them.
//
// A registration references an activity by its id string only; nothing ties
// the two together at storage level. Pairs of (user_id, event_id) are unique.

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::clock_time::ClockTime;
use crate::shared::core::primitives::RecordId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRegistration {
    pub event_id: String,
    pub user_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub referral_sources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRegistration {
    pub id: RecordId,
    pub event_id: String,
    pub user_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub referral_sources: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl EventRegistration {
    pub fn from_new(id: RecordId, new: NewRegistration, now: DateTime<Utc>) -> Self {
        Self {
            id,
            event_id: new.event_id,
            user_id: new.user_id,
            first_name: new.first_name,
            last_name: new.last_name,
            referral_sources: new.referral_sources,
            created_at: now,
        }
    }

    /// `"{first} {last}"` when both names are present and not blank.
    pub fn display_name(&self) -> Option<String> {
        let first = self.first_name.as_deref().map(str::trim).unwrap_or_default();
        let last = self.last_name.as_deref().map(str::trim).unwrap_or_default();
        if first.is_empty() || last.is_empty() {
            return None;
        }
        Some(format!("{first} {last}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationStats {
    pub count: usize,
    pub anonymous_count: usize,
    pub attendee_names: Vec<String>,
    pub attendees: Vec<EventRegistration>,
}

impl RegistrationStats {
    /// Keeps the order registrations were made in.
    pub fn from_registrations(attendees: Vec<EventRegistration>) -> Self {
        let attendee_names: Vec<String> = attendees
            .iter()
            .filter_map(EventRegistration::display_name)
            .collect();
        Self {
            count: attendees.len(),
            anonymous_count: attendees.len() - attendee_names.len(),
            attendee_names,
            attendees,
        }
    }
}

/// An activity a user registered for, as shown on their profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignedUpEvent {
    pub event_id: RecordId,
    pub event_title: String,
    pub event_date: NaiveDate,
    pub event_start_time: ClockTime,
    pub event_location: String,
    pub event_host: String,
}

impl From<&Activity> for SignedUpEvent {
    fn from(activity: &Activity) -> Self {
        Self {
            event_id: activity.id,
            event_title: activity.title.clone(),
            event_date: activity.event_date,
            event_start_time: activity.event_start_time.clone(),
            event_location: activity.location.clone(),
            event_host: activity.host.clone(),
        }
    }
}
