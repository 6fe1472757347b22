use serde::Serialize;

use crate::causelist::CaseRecord;

/// The only content type accepted for uploads.
pub const ALLOWED_MIME: &str = "text/html";

/// Multipart field that carries the uploaded document.
pub const UPLOAD_FIELD: &str = "file";

/// Characters of the document echoed back after an upload.
pub const UPLOAD_PREVIEW_LEN: usize = 500;

/// Characters of a retained document shown by the debug endpoint.
pub const DEBUG_PREVIEW_LEN: usize = 1000;

/// Quick facts about an uploaded document, returned alongside the records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDebug {
    pub content_length: usize,
    pub has_table: bool,
    pub has_court: bool,
    pub preview: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    pub filename: String,
    pub size: u64,
    pub mimetype: String,
}

/// Response body of a processed upload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadOutput {
    pub message: String,
    pub data: Vec<CaseRecord>,
    pub file_info: FileInfo,
    pub debug: ContentDebug,
}

/// Response body of the debug endpoint for a retained upload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugFileOutput {
    pub filename: String,
    pub content_length: usize,
    pub preview: String,
    pub has_table: bool,
    pub has_court: bool,
    pub full_content: String,
}

/// First `len` characters of `content`.
pub fn preview(content: &str, len: usize) -> String {
    content.chars().take(len).collect()
}

/// Summarize a document for the upload response.
pub fn content_debug(content: &str, preview_len: usize) -> ContentDebug {
    ContentDebug {
        content_length: content.chars().count(),
        has_table: content.contains("<table"),
        has_court: content.to_lowercase().contains("court"),
        preview: preview(content, preview_len),
    }
}

/// Build the debug endpoint payload for a retained file.
pub fn debug_file_output(filename: &str, content: String) -> DebugFileOutput {
    let debug = content_debug(&content, DEBUG_PREVIEW_LEN);
    DebugFileOutput {
        filename: filename.to_string(),
        content_length: debug.content_length,
        preview: debug.preview,
        has_table: debug.has_table,
        has_court: debug.has_court,
        full_content: content,
    }
}

pub fn is_allowed_mime(mime: &str) -> bool {
    mime == ALLOWED_MIME
}

/// A single plain path component: no separators, no `.`/`..`, no NUL.
pub fn is_safe_filename(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}

/// Storage name for an upload: `<millis>-<original base name>`.
///
/// Directory parts of the client-supplied name are dropped.
pub fn upload_filename(timestamp_ms: i64, original_name: &str) -> Result<String, String> {
    let base = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    if !is_safe_filename(base) {
        return Err(format!("Invalid upload file name: '{original_name}'"));
    }

    Ok(format!("{timestamp_ms}-{base}"))
}

pub fn upload_message(record_count: usize) -> &'static str {
    if record_count > 0 {
        "File processed successfully"
    } else {
        "File processed but no case data found"
    }
}

/// Uploads that produced no records are kept on disk for inspection.
pub fn should_retain(record_count: usize) -> bool {
    record_count == 0
}
