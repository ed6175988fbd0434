//! Drives the signup form model against a running app, the way the landing page does.

use std::time::Duration;

use anyhow::Result;
use messageflow::{
    signup::{MessageKind, SignupForm},
    SubscribeClient,
};

use crate::helpers::TestApp;

async fn form_for(app: &TestApp, clear_delay: Duration) -> Result<SignupForm<SubscribeClient>> {
    let client = SubscribeClient::new(app.url(""), Duration::from_secs(2))?;
    Ok(SignupForm::with_clear_delay(client, clear_delay))
}

#[tokio::test]
async fn signup_form_round_trip() -> Result<()> {
    let app = TestApp::spawn().await?;
    let form = form_for(&app, Duration::from_secs(60)).await?;

    form.set_email("a@example.com");
    let message = form.submit().await.expect("no submission in flight");
    assert_eq!(message.kind, MessageKind::Success);
    assert_eq!(message.text, "Successfully subscribed!");
    assert_eq!(form.state().email, "");

    form.set_email("a@example.com");
    let message = form.submit().await.expect("no submission in flight");
    assert_eq!(message.kind, MessageKind::Error);
    assert_eq!(message.text, "Email already subscribed");

    form.set_email("not-an-email");
    let message = form.submit().await.expect("no submission in flight");
    assert_eq!(message.kind, MessageKind::Error);
    assert_eq!(message.text, "Invalid email address");

    let client = SubscribeClient::new(app.url(""), Duration::from_secs(2))?;
    assert_eq!(client.subscriber_count().await?, 1);

    Ok(())
}

#[tokio::test]
async fn signup_form_message_clears_itself() -> Result<()> {
    let app = TestApp::spawn().await?;
    let form = form_for(&app, Duration::from_millis(100)).await?;
    let mut rx = form.subscribe_state();

    form.set_email("b@example.com");
    form.submit().await;
    assert!(form.state().message.is_some());

    tokio::time::timeout(
        Duration::from_secs(5),
        rx.wait_for(|state| state.message.is_none()),
    )
    .await??;

    Ok(())
}

#[tokio::test]
async fn signup_form_reports_unreachable_endpoint() -> Result<()> {
    // Nothing listens on the discard port.
    let client = SubscribeClient::new("http://127.0.0.1:9", Duration::from_millis(500))?;
    let form = SignupForm::new(client);

    form.set_email("c@example.com");
    let message = form.submit().await.expect("no submission in flight");

    assert_eq!(message.kind, MessageKind::Error);
    assert_eq!(message.text, messageflow::signup::NETWORK_ERROR_MESSAGE);
    assert_eq!(form.state().email, "c@example.com");

    Ok(())
}
