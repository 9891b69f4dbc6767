use crate::modules::attachments::core::upload::{
    AttachmentSlot, FileUpload, StoredFile, content_type_by_extension, key_from_url, object_key,
    validate_upload,
};
use crate::shared::core::clock::Clock;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::blob_store::{BlobStore, BlobStoreError};
use std::sync::Arc;

/// Owns the blob side of an activity's attachment slots.
///
/// Replacing an attachment validates the new file, deletes the previous blob,
/// then uploads. Persisting the returned URL is left to the caller, so a
/// failure at any step leaves the activity record untouched.
pub struct AttachmentManager<TBlobStore>
where
    TBlobStore: BlobStore + Send + Sync + 'static,
{
    blob_store: Arc<TBlobStore>,
    clock: Arc<dyn Clock>,
}

impl<TBlobStore> AttachmentManager<TBlobStore>
where
    TBlobStore: BlobStore + Send + Sync + 'static,
{
    pub fn new(blob_store: Arc<TBlobStore>, clock: Arc<dyn Clock>) -> Self {
        Self { blob_store, clock }
    }

    pub async fn upload(&self, file: FileUpload, folder: &str) -> Result<String, ApplicationError> {
        validate_upload(&file)?;
        let timestamp = self.clock.now().and_utc().timestamp_millis();
        let key = object_key(folder, timestamp, &file.file_name);
        let url = self
            .blob_store
            .put(&key, file.bytes, &file.content_type)
            .await
            .map_err(|e| ApplicationError::Internal(format!("Failed to upload file: {e}")))?;
        tracing::info!(%key, "attachment uploaded");
        Ok(url)
    }

    /// Deleting a key that is already gone counts as success.
    pub async fn delete(&self, key: &str) -> Result<(), ApplicationError> {
        match self.blob_store.delete(key).await {
            Ok(()) => Ok(()),
            Err(BlobStoreError::NotFound(_)) => {
                tracing::warn!(%key, "attachment already absent from blob store");
                Ok(())
            }
            Err(e) => Err(ApplicationError::Internal(format!(
                "Failed to delete file: {e}"
            ))),
        }
    }

    pub async fn get(&self, key: &str) -> Result<StoredFile, ApplicationError> {
        let object = self.blob_store.get(key).await.map_err(|e| match e {
            BlobStoreError::NotFound(_) => {
                ApplicationError::NotFound(format!("File not found: {key}"))
            }
            BlobStoreError::Backend(message) => ApplicationError::Internal(message),
        })?;
        let filename = key.rsplit('/').next().unwrap_or(key).to_string();
        let content_type = object
            .content_type
            .unwrap_or_else(|| content_type_by_extension(&filename).to_string());
        Ok(StoredFile {
            content: object.bytes,
            filename,
            content_type,
        })
    }

    /// Swaps the blob behind `slot` and returns the URL to persist.
    pub async fn replace(
        &self,
        slot: AttachmentSlot,
        current_url: Option<&str>,
        file: FileUpload,
    ) -> Result<String, ApplicationError> {
        validate_upload(&file)?;
        self.remove_existing(slot, current_url).await?;
        self.upload(file, slot.folder()).await
    }

    /// Deletes the blob behind `slot`, if any.
    pub async fn remove(
        &self,
        slot: AttachmentSlot,
        current_url: Option<&str>,
    ) -> Result<(), ApplicationError> {
        self.remove_existing(slot, current_url).await
    }

    async fn remove_existing(
        &self,
        slot: AttachmentSlot,
        current_url: Option<&str>,
    ) -> Result<(), ApplicationError> {
        let Some(url) = current_url.filter(|url| !url.trim().is_empty()) else {
            return Ok(());
        };
        let Some(key) = key_from_url(slot.folder(), url) else {
            tracing::warn!(%url, "stored attachment url carries no object key");
            return Ok(());
        };
        self.delete(&key).await.map_err(|e| {
            tracing::warn!(%key, error = %e, "failed to delete previous attachment");
            ApplicationError::BadRequest(format!(
                "{} could not be replaced: {e}",
                slot.label()
            ))
        })
    }
}
