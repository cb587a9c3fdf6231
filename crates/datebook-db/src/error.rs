use thiserror::Error;

/// Store layer errors
#[derive(Error, Debug)]
pub enum DbError {
    #[error("User already exists: {0}")]
    DuplicateUser(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type DbResult<T> = std::result::Result<T, DbError>;
