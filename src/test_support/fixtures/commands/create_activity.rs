// Shared test fixture for the CreateActivity command.
// Defaults come from `json/create_activity.json`; setters override single fields.

use crate::modules::activities::core::activity::SocialMedia;
use crate::modules::activities::use_cases::manage_activities::command::CreateActivity;
use chrono::NaiveDate;
use std::fs;

pub struct CreateActivityBuilder {
    inner: CreateActivity,
}

impl Default for CreateActivityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateActivityBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/test_support/fixtures/commands/json/create_activity.json")
                .unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn created_by_user(mut self, v: impl Into<String>) -> Self {
        self.inner.created_by_user = Some(v.into());
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

    pub fn event_start_time(mut self, v: impl Into<String>) -> Self {
        self.inner.event_start_time = v.into();
        self
    }

    pub fn event_end_time(mut self, v: impl Into<String>) -> Self {
        self.inner.event_end_time = v.into();
        self
    }

    pub fn location(mut self, v: impl Into<String>) -> Self {
        self.inner.location = v.into();
        self
    }

    pub fn host(mut self, v: impl Into<String>) -> Self {
        self.inner.host = v.into();
        self
    }

    pub fn tags(mut self, v: Vec<String>) -> Self {
        self.inner.tags = Some(v);
        self
    }

    pub fn without_tags(mut self) -> Self {
        self.inner.tags = None;
        self
    }

    pub fn contact_email(mut self, v: impl Into<String>) -> Self {
        self.inner.contact_email = Some(v.into());
        self
    }

    pub fn social_media(mut self, v: SocialMedia) -> Self {
        self.inner.social_media = Some(v);
        self
    }

    pub fn cover_photo(mut self, v: impl Into<String>) -> Self {
        self.inner.cover_photo = Some(v.into());
        self
    }

    pub fn document(mut self, v: impl Into<String>) -> Self {
        self.inner.document = Some(v.into());
        self
    }

    pub fn build(self) -> CreateActivity {
        self.inner
    }
}
