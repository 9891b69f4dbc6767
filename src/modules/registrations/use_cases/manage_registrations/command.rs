// Command data types for event registration.
//
// Names are optional: a registration without both names counts as anonymous.

use crate::modules::registrations::core::registration::NewRegistration;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct RegisterForEvent {
    #[validate(length(min = 1, message = "user_id must not be empty"))]
    pub user_id: String,
    #[validate(length(min = 1, message = "event_id must not be empty"))]
    pub event_id: String,
    #[validate(length(max = 50))]
    pub first_name: Option<String>,
    #[validate(length(max = 50))]
    pub last_name: Option<String>,
    pub referral_sources: Vec<String>,
}

impl From<RegisterForEvent> for NewRegistration {
    fn from(command: RegisterForEvent) -> Self {
        Self {
            event_id: command.event_id,
            user_id: command.user_id,
            first_name: command.first_name,
            last_name: command.last_name,
            referral_sources: command.referral_sources,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct UnregisterFromEvent {
    #[validate(length(min = 1, message = "user_id must not be empty"))]
    pub user_id: String,
    #[validate(length(min = 1, message = "event_id must not be empty"))]
    pub event_id: String,
}
