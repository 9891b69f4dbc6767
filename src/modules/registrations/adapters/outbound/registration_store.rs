use crate::modules::registrations::core::registration::{EventRegistration, NewRegistration};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationStoreError {
    #[error("duplicate registration: user_id={user_id}, event_id={event_id}")]
    Duplicate { user_id: String, event_id: String },

    #[error("backend error: {0}")]
    Backend(String),
}

/// Registration records with a unique `(user_id, event_id)` constraint.
///
/// `insert` must check and write atomically so that concurrent duplicates
/// resolve to exactly one success. Lists come back in insertion order.
#[async_trait]
pub trait RegistrationStore: Send + Sync {
    async fn insert(
        &self,
        registration: NewRegistration,
    ) -> Result<EventRegistration, RegistrationStoreError>;
    async fn delete_one(&self, user_id: &str, event_id: &str)
    -> Result<u64, RegistrationStoreError>;
    async fn find_one(
        &self,
        user_id: &str,
        event_id: &str,
    ) -> Result<Option<EventRegistration>, RegistrationStoreError>;
    async fn find_by_event(
        &self,
        event_id: &str,
    ) -> Result<Vec<EventRegistration>, RegistrationStoreError>;
    async fn find_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<EventRegistration>, RegistrationStoreError>;
}
