// Optional-field patch applied to stored activities.
//
// Every field left as None keeps the stored value. Attachment URLs use a
// nested option so a patch can clear them: Some(None) removes the URL.
// `created_by_user` has no field here, so ownership cannot be patched.

use crate::modules::activities::core::activity::{Activity, SocialMedia};
use crate::modules::activities::core::clock_time::ClockTime;
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub event_start_time: Option<ClockTime>,
    pub event_end_time: Option<ClockTime>,
    pub location: Option<String>,
    pub host: Option<String>,
    pub website: Option<String>,
    pub meeting_url: Option<String>,
    pub registration_info: Option<String>,
    pub capacity: Option<u32>,
    pub cost: Option<String>,
    pub tags: Option<Vec<String>>,
    pub schedule: Option<String>,
    pub speakers: Option<Vec<String>>,
    pub prerequisites: Option<String>,
    pub cancellation_policy: Option<String>,
    pub contact_email: Option<String>,
    pub social_media: Option<SocialMedia>,
    pub privacy: Option<String>,
    pub accessibility: Option<String>,
    pub note: Option<String>,
    pub cover_photo: Option<Option<String>>,
    pub document: Option<Option<String>>,
    pub is_hidden: Option<bool>,
    pub is_archived: Option<bool>,
}

impl ActivityPatch {
    pub fn hide() -> Self {
        Self {
            is_hidden: Some(true),
            ..Self::default()
        }
    }

    pub fn archived(is_archived: bool) -> Self {
        Self {
            is_archived: Some(is_archived),
            ..Self::default()
        }
    }

    pub fn cover_photo(url: Option<String>) -> Self {
        Self {
            cover_photo: Some(url),
            ..Self::default()
        }
    }

    pub fn document(url: Option<String>) -> Self {
        Self {
            document: Some(url),
            ..Self::default()
        }
    }

    /// Merges the patch into `activity` and stamps `updated_at`.
    pub fn apply_to(&self, activity: &mut Activity, now: DateTime<Utc>) {
        fn set<T: Clone>(target: &mut T, value: &Option<T>) {
            if let Some(value) = value {
                *target = value.clone();
            }
        }
        fn set_optional<T: Clone>(target: &mut Option<T>, value: &Option<T>) {
            if value.is_some() {
                *target = value.clone();
            }
        }

        set(&mut activity.title, &self.title);
        set(&mut activity.description, &self.description);
        set_optional(&mut activity.category, &self.category);
        set(&mut activity.event_date, &self.event_date);
        set(&mut activity.event_start_time, &self.event_start_time);
        set(&mut activity.event_end_time, &self.event_end_time);
        set(&mut activity.location, &self.location);
        set(&mut activity.host, &self.host);
        set_optional(&mut activity.website, &self.website);
        set_optional(&mut activity.meeting_url, &self.meeting_url);
        set_optional(&mut activity.registration_info, &self.registration_info);
        set_optional(&mut activity.capacity, &self.capacity);
        set_optional(&mut activity.cost, &self.cost);
        set(&mut activity.tags, &self.tags);
        set_optional(&mut activity.schedule, &self.schedule);
        set(&mut activity.speakers, &self.speakers);
        set_optional(&mut activity.prerequisites, &self.prerequisites);
        set_optional(&mut activity.cancellation_policy, &self.cancellation_policy);
        set_optional(&mut activity.contact_email, &self.contact_email);
        set_optional(&mut activity.social_media, &self.social_media);
        set_optional(&mut activity.privacy, &self.privacy);
        set_optional(&mut activity.accessibility, &self.accessibility);
        set_optional(&mut activity.note, &self.note);
        set(&mut activity.cover_photo, &self.cover_photo);
        set(&mut activity.document, &self.document);
        set(&mut activity.is_hidden, &self.is_hidden);
        set(&mut activity.is_archived, &self.is_archived);
        activity.updated_at = now;
    }
}
