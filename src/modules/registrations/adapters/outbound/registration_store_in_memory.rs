// In memory registration store.
//
// Purpose
// - Back the registration service in tests and local development.
//
// Responsibilities
// - Keep registrations in insertion order.
// - Enforce the (user_id, event_id) unique constraint: the duplicate check and
//   the write happen under the same lock.

use crate::modules::registrations::adapters::outbound::registration_store::{
    RegistrationStore, RegistrationStoreError,
};
use crate::modules::registrations::core::registration::{EventRegistration, NewRegistration};
use crate::shared::core::primitives::RecordId;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryRegistrationStore {
    rows: Mutex<Vec<EventRegistration>>,
    is_offline: bool,
    delay_insert_ms: AtomicU64,
}

impl InMemoryRegistrationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Pauses between the duplicate check and the write.
    pub fn set_delay_insert_ms(&self, ms: u64) {
        self.delay_insert_ms.store(ms, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), RegistrationStoreError> {
        if self.is_offline {
            return Err(RegistrationStoreError::Backend(
                "Registration store offline".into(),
            ));
        }
        Ok(())
    }
}

fn is_pair(row: &EventRegistration, user_id: &str, event_id: &str) -> bool {
    row.user_id == user_id && row.event_id == event_id
}

#[async_trait::async_trait]
impl RegistrationStore for InMemoryRegistrationStore {
    async fn insert(
        &self,
        registration: NewRegistration,
    ) -> Result<EventRegistration, RegistrationStoreError> {
        self.ensure_online()?;
        let mut rows = self.rows.lock().await;
        if rows
            .iter()
            .any(|row| is_pair(row, &registration.user_id, &registration.event_id))
        {
            return Err(RegistrationStoreError::Duplicate {
                user_id: registration.user_id,
                event_id: registration.event_id,
            });
        }

        let delay = self.delay_insert_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let record = EventRegistration::from_new(RecordId::new(), registration, Utc::now());
        rows.push(record.clone());
        Ok(record)
    }

    async fn delete_one(
        &self,
        user_id: &str,
        event_id: &str,
    ) -> Result<u64, RegistrationStoreError> {
        self.ensure_online()?;
        let mut rows = self.rows.lock().await;
        match rows.iter().position(|row| is_pair(row, user_id, event_id)) {
            Some(index) => {
                rows.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn find_one(
        &self,
        user_id: &str,
        event_id: &str,
    ) -> Result<Option<EventRegistration>, RegistrationStoreError> {
        self.ensure_online()?;
        let rows = self.rows.lock().await;
        Ok(rows
            .iter()
            .find(|row| is_pair(row, user_id, event_id))
            .cloned())
    }

    async fn find_by_event(
        &self,
        event_id: &str,
    ) -> Result<Vec<EventRegistration>, RegistrationStoreError> {
        self.ensure_online()?;
        let rows = self.rows.lock().await;
        Ok(rows
            .iter()
            .filter(|row| row.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn find_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<EventRegistration>, RegistrationStoreError> {
        self.ensure_online()?;
        let rows = self.rows.lock().await;
        Ok(rows
            .iter()
            .filter(|row| row.user_id == user_id)
            .cloned()
            .collect())
    }
}
