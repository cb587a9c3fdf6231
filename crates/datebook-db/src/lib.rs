//! In-memory persistence for Datebook: users, events and the per-user event index.

pub mod db;
pub mod error;
pub mod model;
