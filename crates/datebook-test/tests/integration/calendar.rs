//! Month view queries.

use salvo::http::StatusCode;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn month_view_rolls_over_and_carries_events() {
    let app = TestApp::new();
    app.register("alice", "pw1").await;
    app.create_event(("alice", "pw1"), "New year", "2025-01-01").await;

    let december_next = TestRequest::get(&format!("{CALENDAR_ROUTE_PREFIX}?year=2024&month=13"))
        .basic_auth("alice", "pw1")
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    let january = TestRequest::get(&format!("{CALENDAR_ROUTE_PREFIX}?year=2025&month=1"))
        .basic_auth("alice", "pw1")
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .json();

    for key in ["year", "month", "month_name", "weeks", "prev", "next", "events"] {
        assert_eq!(december_next[key], january[key], "{key}");
    }
    assert_eq!(january["month_name"], "January");
    assert_eq!(january["weeks"][0], serde_json::json!([0, 0, 1, 2, 3, 4, 5]));
    assert_eq!(january["events_by_date"]["2025-01-01"][0]["title"], "New year");
}

#[test_log::test(tokio::test)]
async fn month_zero_is_previous_december() {
    let app = TestApp::new();
    app.register("alice", "pw1").await;

    let view = TestRequest::get(&format!("{CALENDAR_ROUTE_PREFIX}?year=2024&month=0"))
        .basic_auth("alice", "pw1")
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(view["year"], 2023);
    assert_eq!(view["month"], 12);
    assert_eq!(view["next"], serde_json::json!({ "year": 2024, "month": 1 }));
    assert!(view["today"].is_string());
}
