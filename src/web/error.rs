use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use std::sync::Arc;
use strum_macros::AsRefStr;

use super::routes::{HomeError, SubscribeError};

pub type WebResult<T> = core::result::Result<T, Error>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum Error {
    #[error("subscribe error: {0}")]
    Subscribe(#[from] SubscribeError),
    #[error("home page error: {0}")]
    Home(#[from] HomeError),

    #[error("unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),
}

impl Error {
    pub fn status_code_and_client_error(&self) -> (StatusCode, ClientError) {
        use ClientError::*;

        match self {
            Error::Subscribe(SubscribeError::DataParsing(_)) => {
                (StatusCode::BAD_REQUEST, InvalidEmail)
            }
            Error::Subscribe(SubscribeError::AlreadySubscribed) => {
                (StatusCode::CONFLICT, AlreadySubscribed)
            }
            Error::Home(_) => (StatusCode::INTERNAL_SERVER_ERROR, PageUnavailable),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, ServiceError),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::debug!("{:<12} - into_response(Error: {self:?})", "INTO_RESP");

        // Construct a response
        let mut res = StatusCode::INTERNAL_SERVER_ERROR.into_response();

        // Insert the Error into response so that it can be retrieved later.
        res.extensions_mut().insert(Arc::new(self));

        res
    }
}

/// The error as the client gets to see it.
#[derive(Debug, AsRefStr, derive_more::Display)]
pub enum ClientError {
    #[display("Invalid email address")]
    InvalidEmail,
    #[display("Email already subscribed")]
    AlreadySubscribed,
    #[display("Failed to process subscription")]
    ServiceError,
    #[display("Failed to render page")]
    PageUnavailable,
}

impl ClientError {
    /// A duplicate subscription is reported under `message`, everything else under `error`.
    fn body_key(&self) -> &'static str {
        match self {
            ClientError::AlreadySubscribed => "message",
            _ => "error",
        }
    }

    /// JSON body sent to the client, e.g. `{"error": "Invalid email address"}`.
    pub fn body(&self) -> Value {
        let mut body = Map::new();
        body.insert(self.body_key().to_string(), Value::String(self.to_string()));
        Value::Object(body)
    }
}
