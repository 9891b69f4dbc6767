use axum::{
    Router,
    extract::{Multipart, Path, State},
    http::header,
    response::IntoResponse,
    routing::get,
};

use crate::modules::attachments::core::upload::FileUpload;
use crate::shared::core::errors::ApplicationError;
use crate::shell::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/files/{*key}", get(handle))
}

/// Streams a stored attachment back inline.
pub async fn handle(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, ApplicationError> {
    let file = state.attachments.get(&key).await?;
    Ok((
        [
            (header::CONTENT_TYPE, file.content_type),
            (
                header::CONTENT_DISPOSITION,
                inline_disposition(&file.filename),
            ),
        ],
        file.content,
    ))
}

/// `inline` disposition with the filename as a quoted-string. Quotes and
/// backslashes are escaped; control characters are dropped.
fn inline_disposition(filename: &str) -> String {
    let mut quoted = String::with_capacity(filename.len());
    for c in filename.chars().filter(|c| !c.is_control()) {
        if matches!(c, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    format!("inline; filename=\"{quoted}\"")
}

/// Reads the multipart field `field` into an upload. A request without that
/// field yields an empty upload, which the attachment manager rejects.
pub async fn read_upload(
    mut multipart: Multipart,
    field: &str,
) -> Result<FileUpload, ApplicationError> {
    while let Some(part) = multipart.next_field().await? {
        if part.name() != Some(field) {
            continue;
        }
        let file_name = part.file_name().unwrap_or_default().to_string();
        let content_type = part.content_type().unwrap_or_default().to_string();
        let bytes = part.bytes().await?.to_vec();
        return Ok(FileUpload {
            file_name,
            content_type,
            bytes,
        });
    }
    Ok(FileUpload {
        file_name: String::new(),
        content_type: String::new(),
        bytes: Vec::new(),
    })
}
