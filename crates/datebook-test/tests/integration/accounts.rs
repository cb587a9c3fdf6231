//! Registration, login and request authentication through the API.

use salvo::http::StatusCode;

use super::helpers::*;
use datebook_test::component::config::SingleUserAuthConfig;

#[test_log::test(tokio::test)]
async fn register_then_login() {
    let app = TestApp::new();
    app.register("alice", "pw1").await;

    let res = TestRequest::post(&format!("{APP_ROUTE_PREFIX}/auth/login"))
        .json_body(&serde_json::json!({ "username": "alice", "password": "pw1" }))
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK);
    assert_eq!(res.json()["username"], "alice");

    TestRequest::get(&format!("{APP_ROUTE_PREFIX}/whoami"))
        .basic_auth("alice", "pw1")
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("\"alice\"");
}

#[test_log::test(tokio::test)]
async fn duplicate_registration_conflicts() {
    let app = TestApp::new();
    app.register("alice", "pw1").await;

    let res = TestRequest::post(&format!("{APP_ROUTE_PREFIX}/auth/register"))
        .form_body("username=alice&password=other")
        .send(&app.service)
        .await
        .assert_status(StatusCode::CONFLICT);
    assert!(res.json()["error"].as_str().is_some_and(|e| e.contains("alice")));

    // The first password still works
    TestRequest::post(&format!("{APP_ROUTE_PREFIX}/auth/login"))
        .form_body("username=alice&password=pw1")
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK);
}

#[test_log::test(tokio::test)]
async fn login_rejects_wrong_password_and_unknown_user() {
    let app = TestApp::new();
    app.register("alice", "pw1").await;

    for (username, password) in [("alice", "pw2"), ("nobody", "pw1")] {
        TestRequest::post(&format!("{APP_ROUTE_PREFIX}/auth/login"))
            .json_body(&serde_json::json!({ "username": username, "password": password }))
            .send(&app.service)
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }
}

#[test_log::test(tokio::test)]
async fn usernames_with_colons_cannot_register() {
    let app = TestApp::new();

    TestRequest::post(&format!("{APP_ROUTE_PREFIX}/auth/register"))
        .json_body(&serde_json::json!({ "username": "a:b", "password": "pw" }))
        .send(&app.service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    TestRequest::get(EVENTS_ROUTE_PREFIX)
        .basic_auth("a:b", "pw")
        .send(&app.service)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[test_log::test(tokio::test)]
async fn protected_routes_challenge_public_requests() {
    let app = TestApp::new();
    app.register("alice", "pw1").await;

    for path in [
        EVENTS_ROUTE_PREFIX.to_string(),
        CALENDAR_ROUTE_PREFIX.to_string(),
        format!("{APP_ROUTE_PREFIX}/whoami"),
    ] {
        TestRequest::get(&path)
            .send(&app.service)
            .await
            .assert_status(StatusCode::UNAUTHORIZED)
            .assert_header("www-authenticate", "Basic realm=\"datebook\"");

        TestRequest::get(&path)
            .basic_auth("alice", "wrong")
            .send(&app.service)
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }
}

#[test_log::test(tokio::test)]
async fn single_user_mode_needs_no_credentials() {
    let mut config = test_config();
    config.auth.method = datebook_test::component::config::AuthMethod::SingleUser;
    config.auth.single_user = Some(SingleUserAuthConfig {
        username: "solo".to_string(),
    });
    let app = TestApp::with_config(config);

    let res = TestRequest::get(&format!("{APP_ROUTE_PREFIX}/whoami"))
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK);
    assert_eq!(res.json()["username"], "solo");
}
