//! Failure-mode tests for the verification harness.
//!
//! Each test points a scenario at a misbehaving mock and checks that the
//! failure lands in the right category: transport, status, structure, or
//! value. The categories must stay distinguishable so a report can say
//! which layer broke.

use std::sync::Arc;

use apivet::Scenarios;
use apivet_application::ScenarioError;
use apivet_domain::StatusExpectation;
use apivet_infrastructure::ReqwestHttpClient;
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn scenarios_for(base: &str) -> Scenarios<ReqwestHttpClient> {
    let client = Arc::new(ReqwestHttpClient::new().unwrap());
    Scenarios::new(client, Url::parse(base).unwrap())
}

#[tokio::test]
async fn unreachable_service_reports_transport_failure() {
    let scenarios = scenarios_for("http://127.0.0.1:1");

    let result = scenarios.delete_user().await;
    assert!(matches!(result, Err(ScenarioError::Transport(_))));
}

#[tokio::test]
async fn wrong_status_reports_status_mismatch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/register"))
        .respond_with(ResponseTemplate::new(415))
        .mount(&server)
        .await;

    let result = scenarios_for(&server.uri()).register_user().await;
    assert_eq!(
        result,
        Err(ScenarioError::StatusMismatch {
            expected: StatusExpectation::Exact(200),
            actual: 415,
        })
    );
}

#[tokio::test]
async fn ok_status_with_missing_token_reports_structure_not_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 4})))
        .mount(&server)
        .await;

    let result = scenarios_for(&server.uri()).register_user().await;
    assert_eq!(
        result,
        Err(ScenarioError::MissingField {
            field: "/token".to_string(),
        })
    );
}

#[tokio::test]
async fn null_token_reports_structure_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": null})))
        .mount(&server)
        .await;

    let result = scenarios_for(&server.uri()).login_user().await;
    assert_eq!(
        result,
        Err(ScenarioError::MissingField {
            field: "/token".to_string(),
        })
    );
}

#[tokio::test]
async fn wrong_fixture_value_reports_value_mismatch_with_both_sides() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": 2,
                "email": "janet.weaver@reqres.in",
                "first_name": "Jane",
                "last_name": "Weaver",
                "avatar": "https://reqres.in/img/faces/2-image.jpg"
            },
            "support": {
                "url": "https://reqres.in/#support-heading",
                "text": "To keep ReqRes free, contributions towards server costs are appreciated!"
            }
        })))
        .mount(&server)
        .await;

    let result = scenarios_for(&server.uri()).fetch_single_user().await;
    assert_eq!(
        result,
        Err(ScenarioError::ValueMismatch {
            field: "data.first_name".to_string(),
            expected: "\"Janet\"".to_string(),
            actual: "\"Jane\"".to_string(),
        })
    );
}

#[tokio::test]
async fn altered_echo_reports_value_mismatch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "name": "Dog",
            "job": "walk around the house",
            "id": "713",
            "createdAt": "2025-08-21T10:15:00.000Z"
        })))
        .mount(&server)
        .await;

    let result = scenarios_for(&server.uri()).create_job().await;
    assert!(matches!(
        result,
        Err(ScenarioError::ValueMismatch { field, .. }) if field == "name"
    ));
}

#[tokio::test]
async fn malformed_body_reports_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let result = scenarios_for(&server.uri()).fetch_single_user().await;
    assert!(matches!(result, Err(ScenarioError::Decode(_))));
}

#[tokio::test]
async fn accepted_bodyless_create_reports_status_mismatch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "714"})))
        .mount(&server)
        .await;

    let result = scenarios_for(&server.uri()).reject_bodyless_create().await;
    assert_eq!(
        result,
        Err(ScenarioError::StatusMismatch {
            expected: StatusExpectation::Exact(415),
            actual: 201,
        })
    );
}

