//! Integration tests for `WebhookSink` using wiremock HTTP mocks.

use chrono::TimeZone;
use serde_json::json;
use tapreview_client::{AckPolicy, SubmissionError, SubmissionSink, WebhookSink};
use tapreview_core::{embedded_catalog, FormState, SubmissionRecord};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_record() -> SubmissionRecord {
    let catalog = embedded_catalog();
    let business = catalog.get("fitness-first").expect("present");
    let mut form = FormState::default();
    form.input_name("Sam Rivera");
    form.input_email("sam@example.com");
    form.set_consent(true);
    let validated = form.validate_for_submit().expect("valid form");
    let ts = chrono::Utc.with_ymd_and_hms(2026, 10, 15, 9, 0, 0).unwrap();
    SubmissionRecord::new(business, validated, "tapreview-test/0.1", ts)
}

fn sink(url: &str, ack: AckPolicy) -> WebhookSink {
    let client = tapreview_client::http_client("tapreview-test/0.1", Some(5))
        .expect("failed to build test client");
    WebhookSink::new(client, url, ack)
}

#[tokio::test]
async fn posts_submission_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/exec"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "businessId": "fitness-first",
            "businessName": "Fitness First Gym",
            "businessType": "Fitness Center",
            "customerName": "Sam Rivera",
            "customerEmail": "sam@example.com",
            "marketingConsent": true,
            "timestamp": "2026-10-15T09:00:00.000Z",
            "userAgent": "tapreview-test/0.1",
            "source": "NFC"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let result = sink(&format!("{}/exec", server.uri()), AckPolicy::Opaque)
        .submit(&sample_record())
        .await;
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
}

#[tokio::test]
async fn opaque_policy_ignores_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let result = sink(&server.uri(), AckPolicy::Opaque)
        .submit(&sample_record())
        .await;
    assert!(result.is_ok(), "opaque sink should not inspect status, got: {result:?}");
}

#[tokio::test]
async fn require_ack_policy_rejects_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let result = sink(&server.uri(), AckPolicy::RequireSuccessStatus)
        .submit(&sample_record())
        .await;
    assert!(
        matches!(result, Err(SubmissionError::Rejected { status: 403 })),
        "expected Rejected(403), got: {result:?}"
    );
}

#[tokio::test]
async fn unreachable_sink_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let result = sink(&format!("http://{addr}/exec"), AckPolicy::Opaque)
        .submit(&sample_record())
        .await;
    assert!(
        matches!(result, Err(SubmissionError::Transport(_))),
        "expected Transport, got: {result:?}"
    );
}
