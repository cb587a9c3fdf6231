//! Datebook HTTP layer: depot injection handlers, middleware and routes.

pub mod app;
pub mod config;
pub mod credentials_handler;
pub mod error;
pub mod middleware;
pub mod store_handler;
