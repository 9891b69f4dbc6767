// Pure rules for attachment uploads.
//
// Purpose
// - Validate an incoming file before any call to the blob store.
// - Derive object keys for new uploads and recover keys from stored URLs.
//
// Boundaries
// - No input or output here. The attachment manager performs the calls.

use crate::shared::core::errors::ApplicationError;

pub const MAX_FILE_SIZE_BYTES: usize = 5 * 1024 * 1024;

pub const ALLOWED_FILE_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "application/pdf",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub content: Vec<u8>,
    pub filename: String,
    pub content_type: String,
}

/// The two single-blob fields an activity owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentSlot {
    CoverImage,
    Document,
}

impl AttachmentSlot {
    pub fn folder(self) -> &'static str {
        match self {
            AttachmentSlot::CoverImage => "cover-images",
            AttachmentSlot::Document => "documents",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AttachmentSlot::CoverImage => "Cover image",
            AttachmentSlot::Document => "Document",
        }
    }
}

pub fn validate_upload(file: &FileUpload) -> Result<(), ApplicationError> {
    if file.bytes.is_empty() || file.file_name.trim().is_empty() {
        return Err(ApplicationError::BadRequest("No file uploaded".into()));
    }
    if file.bytes.len() > MAX_FILE_SIZE_BYTES {
        return Err(ApplicationError::BadRequest(format!(
            "File size exceeds the maximum limit of {} MB.",
            MAX_FILE_SIZE_BYTES / 1024 / 1024
        )));
    }
    if !ALLOWED_FILE_TYPES.contains(&file.content_type.as_str()) {
        return Err(ApplicationError::BadRequest(format!(
            "Invalid file type. Allowed types are: {}.",
            ALLOWED_FILE_TYPES.join(", ")
        )));
    }
    Ok(())
}

/// `{folder}/{timestamp}-{file_name}`. Path separators, `?` and `#` in the
/// original name are flattened so the key stays inside its folder and
/// survives the trip through a URL back to [`key_from_url`].
pub fn object_key(folder: &str, timestamp_millis: i64, file_name: &str) -> String {
    let file_name = file_name.trim().replace(['/', '\\', '?', '#'], "_");
    format!("{folder}/{timestamp_millis}-{file_name}")
}

/// Recovers the object key of a stored URL: the slot folder plus the URL's
/// trailing path segment. Query strings and fragments are ignored.
pub fn key_from_url(folder: &str, url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let path = match path.split_once("://") {
        Some((_, rest)) => rest.split_once('/').map(|(_, p)| p).unwrap_or_default(),
        None => path,
    };
    let segment = path.trim_end_matches('/').rsplit('/').next()?;
    if segment.is_empty() {
        return None;
    }
    Some(format!("{folder}/{segment}"))
}

pub fn content_type_by_extension(filename: &str) -> &'static str {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}
