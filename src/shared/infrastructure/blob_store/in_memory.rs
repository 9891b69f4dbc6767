// In memory implementation of the BlobStore port.
//
// Purpose
// - Exercise the attachment protocol without a bucket.
//
// Responsibilities
// - Keep objects in a sorted map keyed by object key.
// - Build public URLs the same way the bucket does: `{base_url}/{key}`.
// - Simulate outages, and failing deletes on their own, for error path tests.

use crate::shared::infrastructure::blob_store::{BlobObject, BlobStore, BlobStoreError};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

pub struct InMemoryBlobStore {
    base_url: String,
    objects: RwLock<BTreeMap<String, BlobObject>>,
    is_offline: bool,
    is_failing_deletes: bool,
}

impl InMemoryBlobStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            objects: RwLock::new(BTreeMap::new()),
            is_offline: false,
            is_failing_deletes: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn toggle_failing_deletes(&mut self) {
        self.is_failing_deletes = !self.is_failing_deletes;
    }

    fn ensure_online(&self) -> Result<(), BlobStoreError> {
        if self.is_offline {
            return Err(BlobStoreError::Backend("Blob store offline".into()));
        }
        Ok(())
    }
}

impl Default for InMemoryBlobStore {
    fn default() -> Self {
        Self::new("https://activities.s3.amazonaws.com")
    }
}

#[async_trait::async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, BlobStoreError> {
        self.ensure_online()?;
        self.objects.write().await.insert(
            key.to_string(),
            BlobObject {
                bytes,
                content_type: Some(content_type.to_string()),
            },
        );
        Ok(format!("{}/{}", self.base_url, key))
    }

    async fn get(&self, key: &str) -> Result<BlobObject, BlobStoreError> {
        self.ensure_online()?;
        self.objects
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| BlobStoreError::NotFound(key.to_string()))
    }

    async fn delete(&self, key: &str) -> Result<(), BlobStoreError> {
        self.ensure_online()?;
        if self.is_failing_deletes {
            return Err(BlobStoreError::Backend("Access denied".into()));
        }
        match self.objects.write().await.remove(key) {
            Some(_) => Ok(()),
            None => Err(BlobStoreError::NotFound(key.to_string())),
        }
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, BlobStoreError> {
        self.ensure_online()?;
        Ok(self
            .objects
            .read()
            .await
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }
}
