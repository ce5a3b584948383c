use crate::e2e::helpers;

use chrono::{DateTime, Duration, Utc};
use helpers::{generate_envelope, TestContext, GENERATE_PATH, OUTAGE_KEY, PANIC_KEY, VALIDATE_PATH};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_answer_engine_outage_with_500_wrapper(ctx: &TestContext) {
    let response = ctx
        .client
        .post(GENERATE_PATH, &generate_envelope(OUTAGE_KEY))
        .await
        .unwrap();

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.json();
    assert_eq!(body["id"], "mosip.otp.generate");
    assert_eq!(body["version"], "1.0");
    assert_eq!(body["response"], Value::Null);
    assert_eq!(response.error_codes(), vec!["KER-OTM-500"]);
    assert!(body["errors"][0]["errorMessage"]
        .as_str()
        .unwrap()
        .contains("connection refused"));

    let responsetime: DateTime<Utc> = body["responsetime"].as_str().unwrap().parse().unwrap();
    assert!((Utc::now() - responsetime) < Duration::seconds(30));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_answer_outage_without_envelope_with_null_identity(ctx: &TestContext) {
    let response = ctx
        .client
        .get(&format!("{}?key={}&otp=123456", VALIDATE_PATH, OUTAGE_KEY))
        .await
        .unwrap();

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.json();
    assert_eq!(body["id"], Value::Null);
    assert_eq!(body["version"], Value::Null);
    assert_eq!(response.error_codes(), vec!["KER-OTM-500"]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_contain_handler_panics(ctx: &TestContext) {
    let response = ctx
        .client
        .post(GENERATE_PATH, &generate_envelope(PANIC_KEY))
        .await
        .unwrap();

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_header_exists("x-request-id");
    assert_eq!(response.error_codes(), vec!["KER-OTM-500"]);

    let body = response.json();
    assert_eq!(body["id"], "mosip.otp.generate");
    assert_eq!(body["version"], "1.0");
    assert_eq!(body["errors"][0]["errorMessage"], "engine exploded");

    // The server keeps serving after a panic
    let response = ctx.client.get("/health").await.unwrap();
    response.assert_status(StatusCode::OK);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_produce_equal_bodies_for_repeated_failures(ctx: &TestContext) {
    let mut bodies = Vec::new();
    for _ in 0..2 {
        let response = ctx
            .client
            .post(GENERATE_PATH, &generate_envelope(OUTAGE_KEY))
            .await
            .unwrap();
        let mut body = response.json().clone();
        body.as_object_mut().unwrap().remove("responsetime");
        bodies.push(body);
    }

    assert_eq!(bodies[0], bodies[1]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_handle_concurrent_failures_independently(ctx: &TestContext) {
    let futures = (0..10).map(|i| {
        let client = ctx.client.clone();
        async move {
            let key = if i % 2 == 0 { OUTAGE_KEY } else { "ab" };
            client.post(GENERATE_PATH, &generate_envelope(key)).await
        }
    });

    let results = futures::future::join_all(futures).await;

    for (i, result) in results.into_iter().enumerate() {
        let response = result.unwrap();
        if i % 2 == 0 {
            response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(response.error_codes(), vec!["KER-OTM-500"]);
        } else {
            response.assert_status(StatusCode::OK);
            assert_eq!(response.error_codes(), vec!["KER-OTG-001"]);
        }
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_answer_non_json_content_type_as_internal_failure(ctx: &TestContext) {
    let body = generate_envelope("user@example.com").to_string();
    let response = ctx
        .client
        .post_with_headers(GENERATE_PATH, &body, &[("content-type", "text/plain")])
        .await
        .unwrap();

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json()["id"], Value::Null);
    assert_eq!(response.error_codes(), vec!["KER-OTM-500"]);
}
