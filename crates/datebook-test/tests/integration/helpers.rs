#![allow(clippy::expect_used, dead_code)]
//! Test helpers for integration tests.
//!
//! Provides utilities for:
//! - Creating a test Salvo service wired like `main.rs`
//! - Making HTTP requests with Basic credentials
//! - Asserting on responses
//!
//! ## Isolation
//! Each `TestApp` owns a fresh in-memory store, so tests run in parallel
//! without sharing state.

use std::sync::Arc;

use base64::{Engine, engine::general_purpose::STANDARD};
use salvo::http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderName};
use salvo::http::{Method, ReqBody, StatusCode};
use salvo::prelude::*;
use salvo::test::{RequestBuilder, ResponseExt, TestClient};

use datebook_test::component::auth::Argon2Verifier;
use datebook_test::component::config::{
    AuthConfig, AuthMethod, ConfigHandler, CredentialsHandler, ExportConfig, LoggingConfig,
    ServerConfig, Settings,
};
use datebook_test::component::db::{Store, StoreHandler};
use datebook_test::component::types::IcsTextMode;

pub use datebook_test::component::constants::{
    APP_ROUTE_PREFIX, CALENDAR_ROUTE_PREFIX, EVENTS_ROUTE_PREFIX,
};

/// Test configuration - static struct instead of loading from file.
pub fn test_config() -> Settings {
    Settings {
        auth: AuthConfig {
            method: AuthMethod::BasicAuth,
            realm: "datebook".to_string(),
            single_user: None,
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
        export: ExportConfig {
            text_mode: IcsTextMode::Escaped,
        },
    }
}

/// Creates a service with the same hoops as `main.rs`, backed by `store`.
pub fn create_test_service(store: &Store, config: Settings) -> Service {
    let router = Router::new()
        .hoop(StoreHandler {
            store: store.clone(),
        })
        .hoop(ConfigHandler { settings: config })
        .hoop(CredentialsHandler {
            verifier: Arc::new(Argon2Verifier),
        })
        .push(datebook_test::app::api::routes());

    Service::new(router)
}

/// An isolated application instance: its own store and service.
pub struct TestApp {
    pub store: Store,
    pub service: Service,
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TestApp {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    #[must_use]
    pub fn with_config(config: Settings) -> Self {
        let store = Store::new();
        let service = create_test_service(&store, config);
        Self { store, service }
    }

    /// Registers `username` through the API.
    ///
    /// ## Panics
    /// Panics if registration does not answer 201.
    pub async fn register(&self, username: &str, password: &str) {
        TestRequest::post(&format!("{APP_ROUTE_PREFIX}/auth/register"))
            .json_body(&serde_json::json!({ "username": username, "password": password }))
            .send(&self.service)
            .await
            .assert_status(StatusCode::CREATED);
    }

    /// Creates an event as `username` and returns its id.
    ///
    /// ## Panics
    /// Panics if creation does not answer 201 with an id.
    pub async fn create_event(
        &self,
        (username, password): (&str, &str),
        title: &str,
        date: &str,
    ) -> String {
        let res = TestRequest::post(EVENTS_ROUTE_PREFIX)
            .basic_auth(username, password)
            .json_body(&serde_json::json!({ "title": title, "date": date }))
            .send(&self.service)
            .await
            .assert_status(StatusCode::CREATED);

        res.json()["id"]
            .as_str()
            .expect("created event id")
            .to_string()
    }
}

/// Test request builder for constructing HTTP requests.
pub struct TestRequest {
    method: Method,
    path: String,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl TestRequest {
    /// Creates a new test request with the given method and path.
    #[must_use]
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    #[must_use]
    pub fn post(path: &str) -> Self {
        Self::new(Method::POST, path)
    }

    #[must_use]
    pub fn delete(path: &str) -> Self {
        Self::new(Method::DELETE, path)
    }

    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    #[must_use]
    pub fn basic_auth(self, username: &str, password: &str) -> Self {
        let encoded = STANDARD.encode(format!("{username}:{password}"));
        self.header(AUTHORIZATION.as_str(), &format!("Basic {encoded}"))
    }

    #[must_use]
    pub fn content_type(self, content_type: &str) -> Self {
        self.header(CONTENT_TYPE.as_str(), content_type)
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn json_body(self, value: &serde_json::Value) -> Self {
        self.content_type("application/json")
            .body(value.to_string())
    }

    #[must_use]
    pub fn form_body(self, form: &str) -> Self {
        self.content_type("application/x-www-form-urlencoded")
            .body(form)
    }

    /// Sends the request to the test service.
    ///
    /// ## Panics
    /// Panics if the response body cannot be read.
    pub async fn send(self, service: &Service) -> TestResponse {
        let url = format!("http://127.0.0.1:5800{}", self.path);

        let mut client = match self.method.as_str() {
            "GET" => TestClient::get(&url),
            "POST" => TestClient::post(&url),
            "DELETE" => TestClient::delete(&url),
            _ => RequestBuilder::new(&url, self.method.clone()),
        };

        for (name, value) in self.headers {
            if let Ok(header_name) = HeaderName::try_from(name.as_str()) {
                client = client.add_header(header_name, value, true);
            }
        }

        if let Some(body_bytes) = self.body {
            client = client.body(ReqBody::Once(body_bytes.into()));
        }

        let mut response = client.send(service).await;

        let status = response
            .status_code
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();

        let body: Vec<u8> = response.take_bytes(None).await.unwrap_or_default().to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Represents an HTTP test response for assertions.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Asserts that the response status matches the expected code.
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status,
            expected,
            "Expected status {expected} but got {}: {}",
            self.status,
            self.body_string()
        );
        self
    }

    /// Asserts that a header exists with the expected value.
    pub fn assert_header(self, name: &str, expected: &str) -> Self {
        let value = self
            .get_header(name)
            .unwrap_or_else(|| panic!("Header '{name}' not found in response"));
        assert_eq!(
            value, expected,
            "Header '{name}' expected '{expected}' but got '{value}'"
        );
        self
    }

    /// Asserts that the response body contains the expected substring.
    pub fn assert_body_contains(self, expected: &str) -> Self {
        let body = self.body_string();
        assert!(
            body.contains(expected),
            "Expected body to contain '{expected}' but got:\n{body}"
        );
        self
    }

    /// Asserts that the response body does not contain the specified substring.
    pub fn assert_body_not_contains(self, unexpected: &str) -> Self {
        let body = self.body_string();
        assert!(
            !body.contains(unexpected),
            "Expected body to NOT contain '{unexpected}' but got:\n{body}"
        );
        self
    }

    /// Returns the body as a UTF-8 string.
    #[must_use]
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parses the body as JSON.
    ///
    /// ## Panics
    /// Panics if the body is not valid JSON.
    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }

    /// Gets a header value by name (case-insensitive).
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
