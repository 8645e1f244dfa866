use crate::i18n::Language;
use crate::validation::ValidationError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{debug, error};

/// JSON body of every failed API call
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub reason: &'static str,
    pub message: &'static str,
}

/// Errors surfaced over HTTP. Each carries the language its message is
/// rendered in.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid email: {1}")]
    InvalidEmail(Language, ValidationError),

    #[error("malformed request body: {1}")]
    BadRequest(Language, String),

    #[error("no waitlist store configured")]
    ServiceUnavailable(Language),

    #[error("admin credential missing or wrong")]
    Unauthorized(Language),

    #[error("waitlist store failure: {1:#}")]
    Store(Language, anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidEmail(..) | ApiError::BadRequest(..) => StatusCode::BAD_REQUEST,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Store(..) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable reason string
    pub fn reason(&self) -> &'static str {
        match self {
            ApiError::InvalidEmail(..) => "invalid_email",
            ApiError::BadRequest(..) => "invalid_request",
            ApiError::ServiceUnavailable(_) => "service_unavailable",
            ApiError::Unauthorized(_) => "unauthorized",
            ApiError::Store(..) => "internal",
        }
    }

    /// Localized user-facing message
    pub fn message(&self) -> &'static str {
        match self {
            // The join form has a single field, so a body we cannot read is
            // reported the same way as a bad address
            ApiError::InvalidEmail(lang, _) | ApiError::BadRequest(lang, _) => {
                lang.strings().subscribe_invalid_email
            }
            ApiError::ServiceUnavailable(lang) => lang.strings().service_unavailable,
            ApiError::Unauthorized(lang) => lang.strings().admin_unauthorized,
            ApiError::Store(lang, _) => lang.strings().generic_error,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Store(..) => error!(error = %self, "Request failed"),
            _ => debug!(error = %self, "Request rejected"),
        }

        let body = ErrorBody {
            success: false,
            reason: self.reason(),
            message: self.message(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let lang = Language::ENGLISH;
        assert_eq!(
            ApiError::InvalidEmail(lang, ValidationError::Empty).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::BadRequest(lang, "missing field `email`".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::ServiceUnavailable(lang).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::Unauthorized(lang).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Store(lang, anyhow::anyhow!("connection reset")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages_are_localized() {
        let err = ApiError::InvalidEmail(Language::RUSSIAN, ValidationError::Empty);
        assert_eq!(err.message(), "Пожалуйста, введите корректный email");

        let err = ApiError::BadRequest(Language::UZBEK, "expected value".into());
        assert_eq!(err.reason(), "invalid_request");
        assert_eq!(err.message(), Language::UZBEK.strings().subscribe_invalid_email);

        let err = ApiError::Store(Language::ENGLISH, anyhow::anyhow!("boom"));
        assert_eq!(err.message(), "Something went wrong. Please try again.");
    }

    #[test]
    fn test_store_error_display_includes_cause() {
        let err = ApiError::Store(
            Language::UZBEK,
            anyhow::anyhow!("connection reset").context("Failed to count waitlist entries"),
        );
        let text = err.to_string();
        assert!(text.contains("Failed to count waitlist entries"));
        assert!(text.contains("connection reset"));
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody {
            success: false,
            reason: "invalid_email",
            message: "Please enter a valid email",
        };
        let json = serde_json::to_string(&body).expect("Should serialize");
        assert_eq!(
            json,
            r#"{"success":false,"reason":"invalid_email","message":"Please enter a valid email"}"#
        );
    }
}
