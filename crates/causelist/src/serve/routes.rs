use crate::prelude::*;
use axum::{
    extract::{Multipart, Path, Request, State},
    middleware::Next,
    response::Response,
    Json,
};
use causelist_core::causelist::{extract_cases, summarize_by_court};
use causelist_core::upload::{
    content_debug, debug_file_output, is_allowed_mime, should_retain, upload_filename,
    upload_message, DebugFileOutput, FileInfo, UploadOutput, UPLOAD_FIELD,
};
use std::sync::Arc;

use super::ServerState;

/// A file part pulled out of the multipart body.
#[derive(Debug)]
pub struct UploadedFile {
    pub original_name: String,
    pub mimetype: String,
    pub bytes: Vec<u8>,
}

/// Log every request before it reaches a handler.
pub async fn log_request(request: Request, next: Next) -> Response {
    log::info!("{} {}", request.method(), request.uri().path());
    next.run(request).await
}

/// Take the single `file` part from the body, enforcing the HTML-only filter.
pub async fn read_upload(multipart: &mut Multipart) -> Result<UploadedFile, Error> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::BadRequest(e.body_text()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let original_name = field.file_name().unwrap_or_default().to_string();
        let mimetype = field.content_type().unwrap_or_default().to_string();
        if !is_allowed_mime(&mimetype) {
            return Err(Error::InvalidFileType(mimetype));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| Error::BadRequest(e.body_text()))?;

        return Ok(UploadedFile {
            original_name,
            mimetype,
            bytes: bytes.to_vec(),
        });
    }

    Err(Error::NoFile)
}

pub async fn upload_handler(
    State(state): State<Arc<ServerState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadOutput>, Error> {
    let upload = read_upload(&mut multipart).await?;

    let filename = upload_filename(chrono::Utc::now().timestamp_millis(), &upload.original_name)
        .map_err(Error::BadRequest)?;
    let path = state
        .store
        .save(&filename, &upload.bytes)
        .await
        .map_err(|e| Error::Storage(e.to_string()))?;
    log::info!("Saved upload to {}", path.display());

    if !state.store.exists(&filename).await {
        return Err(Error::UploadMissing(path.display().to_string()));
    }

    let html = state
        .store
        .read(&filename)
        .await
        .map_err(|e| Error::Processing(e.to_string()))?;
    log::info!("Read {filename}, content length: {}", html.len());

    let debug = content_debug(&html, state.preview_len);
    let data = tokio::task::spawn_blocking(move || extract_cases(&html))
        .await
        .map_err(|e| Error::Processing(e.to_string()))?;

    log::info!("Extracted {} cases from {filename}", data.len());
    for court in summarize_by_court(&data) {
        log::debug!(
            "Court {}: {} cases, stages: {}",
            court.court_no,
            court.count,
            court.stages.join(", ")
        );
    }

    if should_retain(data.len()) {
        log::info!("No data extracted, keeping {filename} for debugging");
    } else if let Err(e) = state.store.remove(&filename).await {
        log::error!("Failed to delete {filename}: {e}");
    }

    Ok(Json(UploadOutput {
        message: upload_message(data.len()).to_string(),
        data,
        file_info: FileInfo {
            filename,
            size: upload.bytes.len() as u64,
            mimetype: upload.mimetype,
        },
        debug,
    }))
}

pub async fn debug_handler(
    State(state): State<Arc<ServerState>>,
    Path(filename): Path<String>,
) -> Result<Json<DebugFileOutput>, Error> {
    let content = state
        .store
        .read(&filename)
        .await
        .map_err(|e| Error::FileNotFound(f!("{filename}: {e}")))?;

    Ok(Json(debug_file_output(&filename, content)))
}
