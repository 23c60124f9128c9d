use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    extract::path::ErrorKind,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use crate::models::{ErrorResponse, FieldError};

/// Error returned by every handler and extractor
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub detail: Vec<FieldError>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            detail: Vec::new(),
        }
    }

    /// 422 listing the fields that failed validation
    pub fn validation(detail: Vec<FieldError>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "Request validation failed".to_string(),
            detail,
        }
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.message)?;
        for field in &self.detail {
            write!(f, "; {} ({})", field.loc.join("."), field.msg)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, Json(ErrorResponse {
            code: status.as_u16(),
            status: status.to_string(),
            error: self.message,
            detail: self.detail,
        }))
            .into_response()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        let PathRejection::FailedToDeserializePathParams(e) = &rejection else {
            warn!("Path rejected: {}", rejection.body_text());
            return ApiError::new(rejection.status(), rejection.body_text());
        };

        let field = match e.kind() {
            ErrorKind::ParseErrorAtKey { key, value, expected_type } => FieldError::new(
                ["path", key.as_str()],
                format!("Input should be a valid {}, unable to parse '{}'", expected_type, value),
                parse_error_kind(expected_type),
            ),
            ErrorKind::ParseError { value, expected_type }
            | ErrorKind::ParseErrorAtIndex { value, expected_type, .. } => FieldError::new(
                ["path"],
                format!("Input should be a valid {}, unable to parse '{}'", expected_type, value),
                parse_error_kind(expected_type),
            ),
            ErrorKind::InvalidUtf8InPathParam { key } => FieldError::new(
                ["path", key.as_str()],
                "Path segment is not valid UTF-8",
                "string_unicode",
            ),
            // Route/extractor mismatch, not a client mistake
            _ => {
                warn!("Path rejected: {}", e.body_text());
                return ApiError::new(e.status(), e.body_text());
            }
        };
        warn!("Path validation failed: {}", e.body_text());
        ApiError::validation(vec![field])
    }
}

fn parse_error_kind(expected_type: &str) -> &'static str {
    if expected_type.starts_with('i') || expected_type.starts_with('u') {
        "int_parsing"
    } else {
        "parsing"
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        warn!("Query validation failed: {}", rejection.body_text());
        ApiError::validation(vec![FieldError::new(["query"], rejection.body_text(), "value_error")])
    }
}
