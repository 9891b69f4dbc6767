// Stored-record fixtures for core and adapter tests.

use crate::modules::activities::core::activity::{Activity, NewActivity};
use crate::modules::activities::core::clock_time::ClockTime;
use crate::shared::core::primitives::RecordId;
use chrono::{NaiveDate, Utc};

pub struct NewActivityBuilder {
    inner: NewActivity,
}

impl Default for NewActivityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl NewActivityBuilder {
    pub fn new() -> Self {
        Self {
            inner: NewActivity {
                created_by_user: "creator-0001".to_string(),
                title: "Board game night".to_string(),
                description: "Bring a game or learn a new one.".to_string(),
                category: Some("Social".to_string()),
                event_date: NaiveDate::from_ymd_opt(2023, 8, 15).unwrap(),
                event_start_time: ClockTime::parse("6:00 PM").unwrap(),
                event_end_time: ClockTime::parse("9:00 PM").unwrap(),
                location: "Community Hall".to_string(),
                host: "Games Club".to_string(),
                website: None,
                meeting_url: None,
                registration_info: None,
                capacity: Some(30),
                cost: None,
                tags: vec!["Games".to_string(), "Social".to_string()],
                schedule: None,
                speakers: Vec::new(),
                prerequisites: None,
                cancellation_policy: None,
                contact_email: Some("games@example.org".to_string()),
                social_media: None,
                privacy: None,
                accessibility: None,
                note: None,
                cover_photo: None,
                document: None,
            },
        }
    }

    pub fn created_by_user(mut self, v: impl Into<String>) -> Self {
        self.inner.created_by_user = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn event_date(mut self, v: NaiveDate) -> Self {
        self.inner.event_date = v;
        self
    }

    pub fn event_end_time(mut self, v: &str) -> Self {
        self.inner.event_end_time = ClockTime::parse(v).unwrap();
        self
    }

    pub fn tags(mut self, v: Vec<String>) -> Self {
        self.inner.tags = v;
        self
    }

    pub fn build(self) -> NewActivity {
        self.inner
    }
}

pub fn make_activity() -> Activity {
    Activity::from_new(RecordId::new(), NewActivityBuilder::new().build(), Utc::now())
}
