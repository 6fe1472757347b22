use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Only HTML files are allowed")]
    InvalidFileType(String),

    #[error("No file uploaded or invalid file type")]
    NoFile,

    #[error("{0}")]
    BadRequest(String),

    #[error("Uploaded file not found")]
    UploadMissing(String),

    #[error("File not found or cannot be read")]
    FileNotFound(String),

    #[error("Failed to store uploaded file: {0}")]
    Storage(String),

    #[error("Failed to process file: {0}")]
    Processing(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::InvalidFileType(_) | Error::NoFile | Error::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::FileNotFound(_) => StatusCode::NOT_FOUND,
            Error::UploadMissing(_) | Error::Storage(_) | Error::Processing(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{self:?}");
        } else {
            log::warn!("{self:?}");
        }

        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_bad_request() {
        assert_eq!(
            Error::InvalidFileType("text/plain".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(Error::NoFile.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            Error::BadRequest("bad multipart".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_debug_lookup_maps_to_not_found() {
        assert_eq!(
            Error::FileNotFound("x.html".into()).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_server_errors() {
        assert_eq!(
            Error::UploadMissing("Uploads/x.html".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            Error::Processing("task panicked".into()).to_string(),
            "Failed to process file: task panicked"
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = Error::NoFile.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
