// In memory activity store.
//
// Purpose
// - Exercise the lifecycle service without a database.
//
// Responsibilities
// - Store records in a map keyed by id, assign ids and timestamps on insert.
// - Sort by event date then id, and page with skip/limit, like the document store.
// - Apply bulk updates under a single write lock so each sweep is atomic.

use crate::modules::activities::adapters::outbound::activity_store::{
    ActivityStore, ActivityStoreError,
};
use crate::modules::activities::core::activity::{Activity, Attendee, NewActivity};
use crate::modules::activities::core::archival::ActivityPredicate;
use crate::modules::activities::core::filter::ActivityQuery;
use crate::modules::activities::core::patch::ActivityPatch;
use crate::shared::core::primitives::RecordId;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryActivityStore {
    rows: RwLock<HashMap<RecordId, Activity>>,
    is_offline: bool,
}

impl InMemoryActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Removes a record outright, the way an operator would in the database.
    /// The service itself never deletes activities.
    pub async fn purge(&self, id: &RecordId) -> bool {
        self.rows.write().await.remove(id).is_some()
    }

    fn ensure_online(&self) -> Result<(), ActivityStoreError> {
        if self.is_offline {
            return Err(ActivityStoreError::Backend(
                "Activity store offline".into(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn find(&self, query: &ActivityQuery) -> Result<Vec<Activity>, ActivityStoreError> {
        self.ensure_online()?;
        let guard = self.rows.read().await;

        let mut items: Vec<&Activity> = guard.values().filter(|a| query.matches(a)).collect();
        items.sort_by(|a, b| (a.event_date, a.id).cmp(&(b.event_date, b.id)));

        Ok(items
            .into_iter()
            .skip(query.skip as usize)
            .take(query.limit as usize)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &RecordId) -> Result<Option<Activity>, ActivityStoreError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.get(id).cloned())
    }

    async fn find_by_ids(&self, ids: &[RecordId]) -> Result<Vec<Activity>, ActivityStoreError> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        Ok(ids.iter().filter_map(|id| guard.get(id).cloned()).collect())
    }

    async fn insert(&self, activity: NewActivity) -> Result<Activity, ActivityStoreError> {
        self.ensure_online()?;
        if activity.created_by_user.trim().is_empty() {
            return Err(ActivityStoreError::Validation(
                "created_by_user is required".into(),
            ));
        }
        let record = Activity::from_new(RecordId::new(), activity, Utc::now());
        self.rows.write().await.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update_by_id(
        &self,
        id: &RecordId,
        patch: &ActivityPatch,
    ) -> Result<Option<Activity>, ActivityStoreError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        Ok(guard.get_mut(id).map(|activity| {
            patch.apply_to(activity, Utc::now());
            activity.clone()
        }))
    }

    async fn update_many(
        &self,
        predicate: &ActivityPredicate,
        patch: &ActivityPatch,
    ) -> Result<u64, ActivityStoreError> {
        self.ensure_online()?;
        let now = Utc::now();
        let mut guard = self.rows.write().await;
        let mut modified = 0;
        for activity in guard.values_mut().filter(|a| predicate.matches(a)) {
            patch.apply_to(activity, now);
            modified += 1;
        }
        Ok(modified)
    }

    async fn record_attendance(
        &self,
        id: &RecordId,
        attendee: Option<Attendee>,
    ) -> Result<Option<Activity>, ActivityStoreError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        Ok(guard.get_mut(id).map(|activity| {
            activity.record_attendance(attendee);
            activity.updated_at = Utc::now();
            activity.clone()
        }))
    }
}
