// Shared test fixture for the RegisterForEvent command.
// The event id is not part of the JSON; tests point it at an activity they created.

use crate::modules::registrations::use_cases::manage_registrations::command::RegisterForEvent;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterForEventDto {
    pub user_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub referral_sources: Vec<String>,
}

pub struct RegisterForEventBuilder {
    inner: RegisterForEvent,
}

impl Default for RegisterForEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegisterForEventBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string(
            "./src/test_support/fixtures/commands/json/register_for_event.json",
        )
        .unwrap();
        let dto: RegisterForEventDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: RegisterForEvent {
                user_id: dto.user_id,
                event_id: "event-fixed-0001".to_string(),
                first_name: dto.first_name,
                last_name: dto.last_name,
                referral_sources: dto.referral_sources,
            },
        }
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn event_id(mut self, v: impl Into<String>) -> Self {
        self.inner.event_id = v.into();
        self
    }

    pub fn names(mut self, first: Option<&str>, last: Option<&str>) -> Self {
        self.inner.first_name = first.map(str::to_string);
        self.inner.last_name = last.map(str::to_string);
        self
    }

    pub fn anonymous(self) -> Self {
        self.names(None, None)
    }

    pub fn referral_sources(mut self, v: Vec<String>) -> Self {
        self.inner.referral_sources = v;
        self
    }

    pub fn build(self) -> RegisterForEvent {
        self.inner
    }
}
