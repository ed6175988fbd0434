use std::sync::Arc;

use anyhow::Result;
use messageflow::store::SubscriberStore;
use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::helpers::{TestApp, UnavailableStore};

#[tokio::test]
async fn api_subscribe_ok() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .post_subscriptions(&json!({ "email": "john.doe@example.com" }))
        .await?;

    assert_eq!(
        res.status(),
        StatusCode::OK,
        "Wrong response StatusCode: {}",
        res.status()
    );
    let body: Value = res.json().await?;
    assert_eq!(body, json!({ "message": "Successfully subscribed!" }));

    let stored = app.app_state.store.list().await?;
    assert_eq!(stored, vec!["john.doe@example.com"]);

    Ok(())
}

#[tokio::test]
async fn api_subscribe_returns_a_400_for_invalid_email() -> Result<()> {
    let app = TestApp::spawn().await?;

    let cases = [
        (json!({}), "Empty json"),
        (json!({ "name": "John Doe" }), "Missing email"),
        (json!({ "email": null }), "Null email"),
        (json!({ "email": 42 }), "Number email"),
        (json!({ "email": "" }), "Empty email"),
        (json!({ "email": "not an email" }), "No '@'"),
        (json!(["a@example.com"]), "Array body"),
    ];

    for (body, description) in cases {
        let res = app.post_subscriptions(&body).await?;
        assert_eq!(
            400,
            res.status().as_u16(),
            "The API did not return a 400 BAD REQUEST the payload was {description}."
        );
        let body: Value = res.json().await?;
        assert_eq!(body, json!({ "error": "Invalid email address" }));
    }

    assert_eq!(app.subscriber_count().await?, 0);

    Ok(())
}

#[tokio::test]
async fn api_subscribe_returns_a_409_for_duplicates() -> Result<()> {
    let app = TestApp::spawn().await?;
    let body = json!({ "email": "le_guin@example.com" });

    let res = app.post_subscriptions(&body).await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.post_subscriptions(&body).await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let res_body: Value = res.json().await?;
    assert_eq!(res_body, json!({ "message": "Email already subscribed" }));

    assert_eq!(app.subscriber_count().await?, 1);

    Ok(())
}

#[tokio::test]
async fn api_subscribe_does_not_normalize_emails() -> Result<()> {
    let app = TestApp::spawn().await?;

    for email in ["ursula@example.com", "Ursula@example.com", "ursula@example.com "] {
        let res = app.post_subscriptions(&json!({ "email": email })).await?;
        assert_eq!(res.status(), StatusCode::OK, "for {email:?}");
    }

    assert_eq!(app.subscriber_count().await?, 3);

    Ok(())
}

#[tokio::test]
async fn subscribe_scenario_counts_unique_accepted_emails() -> Result<()> {
    let app = TestApp::spawn().await?;
    assert_eq!(app.subscriber_count().await?, 0);

    let steps = [
        ("a@example.com", 200, json!({ "message": "Successfully subscribed!" }), 1),
        ("a@example.com", 409, json!({ "message": "Email already subscribed" }), 1),
        ("not-an-email", 400, json!({ "error": "Invalid email address" }), 1),
    ];

    for (email, expected_status, expected_body, expected_count) in steps {
        let res = app.post_subscriptions(&json!({ "email": email })).await?;

        assert_eq!(res.status().as_u16(), expected_status, "for {email}");
        let body: Value = res.json().await?;
        assert_eq!(body, expected_body, "for {email}");
        assert_eq!(app.subscriber_count().await?, expected_count, "for {email}");
    }

    Ok(())
}

#[tokio::test]
async fn concurrent_identical_subscriptions_succeed_once() -> Result<()> {
    let app = Arc::new(TestApp::spawn().await?);

    let handles = (0..16)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move {
                app.post_subscriptions(&json!({ "email": "race@example.com" }))
                    .await
                    .map(|res| res.status())
            })
        })
        .collect::<Vec<_>>();

    let mut statuses = Vec::new();
    for handle in handles {
        statuses.push(handle.await??);
    }

    let ok = statuses.iter().filter(|s| **s == StatusCode::OK).count();
    let conflict = statuses
        .iter()
        .filter(|s| **s == StatusCode::CONFLICT)
        .count();
    assert_eq!((ok, conflict), (1, 15));
    assert_eq!(app.subscriber_count().await?, 1);

    Ok(())
}

#[tokio::test]
async fn malformed_body_returns_a_500() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app.post_raw_subscriptions("{ this is not json").await?;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await?;
    assert_eq!(body, json!({ "error": "Failed to process subscription" }));
    assert_eq!(app.subscriber_count().await?, 0);

    Ok(())
}

#[tokio::test]
async fn null_body_returns_a_500() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app.post_raw_subscriptions("null").await?;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await?;
    assert_eq!(body, json!({ "error": "Failed to process subscription" }));
    assert_eq!(app.subscriber_count().await?, 0);

    Ok(())
}

#[tokio::test]
async fn store_failure_returns_a_500() -> Result<()> {
    let app = TestApp::spawn_with_store(Arc::new(UnavailableStore)).await?;

    let res = app
        .post_subscriptions(&json!({ "email": "a@example.com" }))
        .await?;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await?;
    assert_eq!(body, json!({ "error": "Failed to process subscription" }));

    let res = app.http_client.get(app.url("/api/subscribe")).send().await?;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

#[tokio::test]
async fn error_responses_carry_the_request_id() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .post_subscriptions(&json!({ "email": "not-an-email" }))
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(res.headers().contains_key("x-request-id"));

    Ok(())
}
