use thiserror::Error;

/// RFC parsing errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Parse error: {0}")]
    ParseError(String),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
