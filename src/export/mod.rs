use axum::{
    body::to_bytes,
    extract::Request,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::models::{ErrorResponse, ExportRequest, ExportResponse};

/// Message used when an unexpected failure has no description of its own
const FALLBACK_ERROR_MESSAGE: &str = "Failed to export files";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub fn routes() -> axum::Router {
    axum::Router::new().route("/", axum::routing::post(export_files))
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Files array is required")]
    Validation,
    #[error("{0}")]
    Unexpected(String),
}

impl ExportError {
    fn unexpected(err: impl std::fmt::Display) -> Self {
        ExportError::Unexpected(err.to_string())
    }
}

impl IntoResponse for ExportError {
    fn into_response(self) -> Response {
        let status = match &self {
            ExportError::Validation => StatusCode::BAD_REQUEST,
            ExportError::Unexpected(message) => {
                tracing::error!("Error exporting files: {}", message);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let mut error = self.to_string();
        if error.trim().is_empty() {
            error = FALLBACK_ERROR_MESSAGE.to_string();
        }

        (status, Json(ErrorResponse { error })).into_response()
    }
}

/// POST /api/export
/// Echo the submitted file list back; the client builds the archive itself
async fn export_files(request: Request) -> Result<Json<ExportResponse>, ExportError> {
    // No size cap: large payload handling is left to the hosting server
    let body = to_bytes(request.into_body(), usize::MAX)
        .await
        .map_err(ExportError::unexpected)?;

    let export = parse_export_request(&body)?;
    Ok(Json(ExportResponse::from(export)))
}

/// Parse a raw body into an export request.
///
/// Content-Type is not checked and a leading UTF-8 BOM is skipped. Malformed
/// JSON and a bare `null` body are unexpected failures; any other JSON
/// without a `files` array is a validation failure.
fn parse_export_request(body: &[u8]) -> Result<ExportRequest, ExportError> {
    let body = body.strip_prefix(UTF8_BOM).unwrap_or(body);
    let payload: Value = serde_json::from_slice(body).map_err(ExportError::unexpected)?;

    match payload {
        Value::Null => Err(ExportError::Unexpected(
            "Request body must be a JSON object, got null".to_string(),
        )),
        Value::Object(mut fields) => match fields.remove("files") {
            Some(Value::Array(files)) => Ok(ExportRequest { files }),
            _ => Err(ExportError::Validation),
        },
        _ => Err(ExportError::Validation),
    }
}
