use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::{
    signup::{SubscribeApi, SubscribeReply},
    web::routes::SUBSCRIBE_PATH,
};

/// HTTP client for the subscription endpoint, the way the landing page talks to it.
#[derive(Debug, Clone)]
pub struct SubscribeClient {
    http_client: Client,
    base_url: reqwest::Url,
}

impl SubscribeClient {
    pub fn new<S: AsRef<str>>(base_url: S, timeout: Duration) -> Result<Self> {
        let base_url =
            reqwest::Url::parse(base_url.as_ref()).map_err(|e| Error::UrlParsing(e.to_string()))?;

        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(SubscribeClient {
            http_client,
            base_url,
        })
    }

    fn endpoint(&self) -> Result<reqwest::Url> {
        self.base_url
            .join(SUBSCRIBE_PATH)
            .map_err(|e| Error::UrlParsing(e.to_string()))
    }

    /// Posts `email` and returns whatever the server answered, whatever the status code.
    /// Only transport failures and bodies that are not JSON end up as an `Err`.
    pub async fn subscribe(&self, email: &str) -> Result<SubscribeReply> {
        let resp = self
            .http_client
            .post(self.endpoint()?)
            .json(&SubscribeBody { email })
            .send()
            .await?;

        let status = resp.status();
        let body: ReplyBody = resp.json().await?;

        Ok(SubscribeReply {
            status: status.as_u16(),
            message: body.message,
            error: body.error,
        })
    }

    pub async fn subscriber_count(&self) -> Result<u64> {
        let resp = self.http_client.get(self.endpoint()?).send().await?;

        if resp.status() != StatusCode::OK {
            return Err(Error::UnexpectedStatus(resp.status().as_u16()));
        }

        let body: CountReply = resp.json().await?;
        Ok(body.count)
    }
}

#[async_trait::async_trait]
impl SubscribeApi for SubscribeClient {
    async fn subscribe(&self, email: &str) -> Result<SubscribeReply> {
        SubscribeClient::subscribe(self, email).await
    }
}

#[derive(Serialize)]
struct SubscribeBody<'a> {
    email: &'a str,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ReplyBody {
    message: Option<String>,
    error: Option<String>,
}

#[derive(Deserialize)]
struct CountReply {
    count: u64,
}

// ###################################
// ->   ERROR & RESULT
// ###################################
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("url parsing error: {0}")]
    UrlParsing(String),
    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),

    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
