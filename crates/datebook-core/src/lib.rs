//! Shared building blocks for the Datebook workspace: configuration, errors,
//! route constants and small value types with no service dependencies.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
