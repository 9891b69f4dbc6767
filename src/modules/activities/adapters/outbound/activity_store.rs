use crate::modules::activities::core::activity::{Activity, Attendee, NewActivity};
use crate::modules::activities::core::archival::ActivityPredicate;
use crate::modules::activities::core::filter::ActivityQuery;
use crate::modules::activities::core::patch::ActivityPatch;
use crate::shared::core::primitives::RecordId;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActivityStoreError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Document store holding activity records.
///
/// `find` returns records ordered by event date, then id, after applying the
/// query's skip and limit. `update_by_id` and `record_attendance` return the
/// record as written, or None when the id does not resolve.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    async fn find(&self, query: &ActivityQuery) -> Result<Vec<Activity>, ActivityStoreError>;
    async fn find_by_id(&self, id: &RecordId) -> Result<Option<Activity>, ActivityStoreError>;
    async fn find_by_ids(&self, ids: &[RecordId]) -> Result<Vec<Activity>, ActivityStoreError>;
    async fn insert(&self, activity: NewActivity) -> Result<Activity, ActivityStoreError>;
    async fn update_by_id(
        &self,
        id: &RecordId,
        patch: &ActivityPatch,
    ) -> Result<Option<Activity>, ActivityStoreError>;
    async fn update_many(
        &self,
        predicate: &ActivityPredicate,
        patch: &ActivityPatch,
    ) -> Result<u64, ActivityStoreError>;
    async fn record_attendance(
        &self,
        id: &RecordId,
        attendee: Option<Attendee>,
    ) -> Result<Option<Activity>, ActivityStoreError>;
}
