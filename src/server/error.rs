//! HTTP mapping for [`crate::Error`]

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use crate::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation { .. } | Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(err: JsonRejection) -> Self {
        let message = match &err {
            JsonRejection::JsonDataError(e) => format!("Invalid JSON data: {}", e.body_text()),
            JsonRejection::JsonSyntaxError(_) => "Invalid JSON syntax".to_string(),
            JsonRejection::MissingJsonContentType(_) => {
                "Missing Content-Type: application/json header".to_string()
            }
            _ => format!("JSON parsing error: {}", err.body_text()),
        };
        Error::BadRequest(message)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let field = match &self {
            Error::Validation { field, .. } => Some(*field),
            _ => None,
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Rejected request: {}", self);
        }

        let body = ErrorResponse {
            error: self.to_string(),
            field,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            Error::validation("title", "Title and content are required").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::BadRequest("Invalid JSON syntax".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        let storage = Error::Storage(rusqlite::Error::QueryReturnedNoRows);
        assert_eq!(storage.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(storage.to_string(), rusqlite::Error::QueryReturnedNoRows.to_string());
    }

    #[test]
    fn test_error_body_serialization() {
        let body = ErrorResponse {
            error: "Proverb text is required".to_string(),
            field: Some("proverb"),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "Proverb text is required");
        assert_eq!(json["field"], "proverb");

        let body = ErrorResponse { error: "boom".to_string(), field: None };
        let json = serde_json::to_string(&body).unwrap();
        assert!(!json.contains("field"));
    }
}
