use anyhow::Result;
use reqwest::{header::CONTENT_TYPE, StatusCode};

use crate::helpers::TestApp;

#[tokio::test]
async fn home_serves_the_landing_page() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app.http_client.get(app.url("/")).send().await?;

    assert_eq!(res.status(), StatusCode::OK);
    let content_type = res
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"), "got: {content_type}");

    let page = res.text().await?;
    assert!(page.contains("Never miss important updates in your startup"));
    assert_eq!(page.matches("data-signup-form").count(), 2);
    assert!(page.contains(r#"data-subscribe-path="/api/subscribe""#));

    Ok(())
}
