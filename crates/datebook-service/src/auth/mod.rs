//! Authentication flow.
//!
//! ## Module Organization
//!
//! - `account`: Registration and credential checks against the store
//! - `authenticate`: Per-request user resolution (basic auth, single user)
//! - `depot`: Helpers for reading the authenticated user from Salvo's depot
//! - `password`: Password hashing and verification with Argon2

pub mod account;
pub mod authenticate;
pub mod depot;
pub mod password;

pub use account::{login, register};
pub use authenticate::authenticate;
pub use depot::{DepotUser, get_user_from_depot};
pub use password::{Argon2Verifier, CredentialVerifier};
