use thiserror::Error;

use crate::domain::entities::field::{FieldErrors, ProfileField};
use crate::domain::entities::role::Role;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to load profile: {0}")]
    LoadFailure(String),

    #[error("Failed to save profile: {0}")]
    SaveFailure(String),

    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("User role is unknown")]
    UnknownRole,

    #[error("Profile role mismatch: expected {expected}, got {actual}")]
    RoleMismatch { expected: Role, actual: Role },

    #[error("Field `{0}` is not editable")]
    FieldNotEditable(ProfileField),

    #[error("Editor is closed")]
    EditorClosed,

    #[error("A save is already in flight")]
    SubmitInFlight,

    #[error("Session context error: {0}")]
    SessionContext(String),

    #[error("Remote service error: {0}")]
    Remote(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Remote(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::SessionContext(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SessionContext(err.to_string())
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::Validation(errors)
    }
}
