use thiserror::Error;

use datebook_db::error::DbError;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    RfcError(#[from] datebook_rfc::error::RfcError),

    #[error(transparent)]
    CoreError(#[from] datebook_core::error::CoreError),

    #[error("User already exists: {0}")]
    DuplicateUser(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<DbError> for ServiceError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::DuplicateUser(username) => Self::DuplicateUser(username),
            DbError::NotFound(what) => Self::NotFound(what),
        }
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
