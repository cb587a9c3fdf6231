//! Datebook calendar server - integration test support.
//!
//! Re-exports the workspace crates so integration tests can reach every layer
//! through `datebook_test::` paths.

#![allow(ambiguous_glob_reexports)]

pub mod component {
    pub use datebook_core::*;
    pub use datebook_service::*;

    pub mod db {
        pub use datebook_db::db::*;

        // Depot injection lives in the app crate
        pub use datebook_app::store_handler::StoreHandler;
    }

    pub mod model {
        pub use datebook_db::model::*;
    }

    pub mod middleware {
        pub use datebook_app::middleware::*;
    }

    pub mod config {
        pub use datebook_app::config::ConfigHandler;
        pub use datebook_app::credentials_handler::CredentialsHandler;
        pub use datebook_core::config::*;
    }
}

pub mod app {
    pub use datebook_app::*;

    pub mod api {
        pub use datebook_app::app::api::*;
    }
}

pub use datebook_rfc as rfc;
