use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlobStoreError {
    #[error("object not found: {0}")]
    NotFound(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobObject {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

/// Object storage addressed by key.
///
/// `delete` of a missing key reports `NotFound`; callers decide whether that
/// counts as success.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, BlobStoreError>;
    async fn get(&self, key: &str) -> Result<BlobObject, BlobStoreError>;
    async fn delete(&self, key: &str) -> Result<(), BlobStoreError>;
    async fn list(&self, prefix: &str) -> Result<Vec<String>, BlobStoreError>;
}

pub mod in_memory;
