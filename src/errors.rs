use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Language '{0}' is not supported")]
    UnsupportedLanguage(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Structural mismatch: {0}")]
    StructuralMismatch(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::UnsupportedLanguage(_) => "UNSUPPORTED_LANGUAGE",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::StructuralMismatch(_) => "STRUCTURAL_MISMATCH",
            AppError::Upstream(_) => "UPSTREAM_ERROR",
            AppError::ConfigError(_) => "CONFIG_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnsupportedLanguage(_) => StatusCode::BAD_REQUEST,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::StructuralMismatch(_) => StatusCode::BAD_GATEWAY,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Upstream(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::UnsupportedLanguage("de".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::ValidationError("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::StructuralMismatch("test".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::Upstream("test".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::UnsupportedLanguage("de".into());
        assert_eq!(err.to_string(), "Language 'de' is not supported");

        let err = AppError::StructuralMismatch("expected 3 quizzes, got 2".into());
        assert_eq!(
            err.to_string(),
            "Structural mismatch: expected 3 quizzes, got 2"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::UnsupportedLanguage("de".into()).error_code(),
            "UNSUPPORTED_LANGUAGE"
        );
        assert_eq!(
            AppError::Upstream("boom".into()).error_code(),
            "UPSTREAM_ERROR"
        );
    }
}
