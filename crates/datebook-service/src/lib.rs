//! Datebook business logic: accounts and request authentication, event
//! creation/deletion, per-user queries, the month grid and ICS export.

pub mod auth;
pub mod calendar;
pub mod error;
pub mod event;
pub mod export;
