use crate::modules::activities::adapters::outbound::activity_store::ActivityStore;
use crate::modules::registrations::adapters::outbound::registration_store::{
    RegistrationStore, RegistrationStoreError,
};
use crate::modules::registrations::core::registration::{
    EventRegistration, RegistrationStats, SignedUpEvent,
};
use crate::modules::registrations::use_cases::manage_registrations::command::{
    RegisterForEvent, UnregisterFromEvent,
};
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::RecordId;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use validator::Validate;

impl From<RegistrationStoreError> for ApplicationError {
    fn from(error: RegistrationStoreError) -> Self {
        match error {
            RegistrationStoreError::Duplicate { .. } => ApplicationError::Conflict(
                "You have already registered for this event.".into(),
            ),
            RegistrationStoreError::Backend(message) => ApplicationError::Internal(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unregistered {
    pub deleted_count: u64,
}

pub struct RegistrationHandler<TRegistrationStore, TActivityStore>
where
    TRegistrationStore: RegistrationStore + Send + Sync + 'static,
    TActivityStore: ActivityStore + Send + Sync + 'static,
{
    registrations: Arc<TRegistrationStore>,
    activities: Arc<TActivityStore>,
}

impl<TRegistrationStore, TActivityStore> RegistrationHandler<TRegistrationStore, TActivityStore>
where
    TRegistrationStore: RegistrationStore + Send + Sync + 'static,
    TActivityStore: ActivityStore + Send + Sync + 'static,
{
    pub fn new(registrations: Arc<TRegistrationStore>, activities: Arc<TActivityStore>) -> Self {
        Self {
            registrations,
            activities,
        }
    }

    pub async fn attend(
        &self,
        command: RegisterForEvent,
    ) -> Result<EventRegistration, ApplicationError> {
        command.validate()?;
        let registration = self.registrations.insert(command.into()).await?;
        tracing::info!(
            event_id = %registration.event_id,
            user_id = %registration.user_id,
            "registered for event"
        );
        Ok(registration)
    }

    pub async fn unattend(
        &self,
        command: UnregisterFromEvent,
    ) -> Result<Unregistered, ApplicationError> {
        command.validate()?;
        let deleted_count = self
            .registrations
            .delete_one(&command.user_id, &command.event_id)
            .await?;
        if deleted_count == 0 {
            return Err(ApplicationError::Conflict(
                "No registration found for this user and event.".into(),
            ));
        }
        tracing::info!(event_id = %command.event_id, user_id = %command.user_id, "unregistered from event");
        Ok(Unregistered { deleted_count })
    }

    pub async fn is_attending(
        &self,
        event_id: &str,
        user_id: &str,
    ) -> Result<bool, ApplicationError> {
        Ok(self
            .registrations
            .find_one(user_id, event_id)
            .await?
            .is_some())
    }

    pub async fn stats_for_event(
        &self,
        event_id: &str,
    ) -> Result<RegistrationStats, ApplicationError> {
        let registrations = self.registrations.find_by_event(event_id).await?;
        Ok(RegistrationStats::from_registrations(registrations))
    }

    /// Joins the user's registrations against stored activities. Registrations
    /// whose event id is malformed or no longer resolves are left out.
    pub async fn events_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<SignedUpEvent>, ApplicationError> {
        let event_ids: Vec<RecordId> = self
            .registrations
            .find_by_user(user_id)
            .await?
            .iter()
            .filter_map(|registration| RecordId::parse(&registration.event_id).ok())
            .collect();
        if event_ids.is_empty() {
            return Ok(Vec::new());
        }

        let activities: HashMap<RecordId, SignedUpEvent> = self
            .activities
            .find_by_ids(&event_ids)
            .await?
            .iter()
            .map(|activity| (activity.id, SignedUpEvent::from(activity)))
            .collect();

        let events: Vec<SignedUpEvent> = event_ids
            .iter()
            .filter_map(|id| activities.get(id).cloned())
            .collect();
        if events.len() < event_ids.len() {
            tracing::warn!(
                %user_id,
                missing = event_ids.len() - events.len(),
                "registrations point at activities that no longer resolve"
            );
        }
        Ok(events)
    }
}
