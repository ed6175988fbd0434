use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde_json::Value;
use tracing::info;

use crate::{
    domain::DataParsingError,
    store::{InsertOutcome, StoreError},
    web::{
        types::{CountBody, MessageBody, ValidSubscription},
        WebResult,
    },
    AppState,
};

#[derive(Debug, thiserror::Error)]
pub enum SubscribeError {
    #[error("data parsing error: {0}")]
    DataParsing(#[from] DataParsingError),
    #[error("email already subscribed")]
    AlreadySubscribed,

    #[error("request body is not valid json: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("request body is json null")]
    NullBody,
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Records a new email on the subscriber list.
///
/// The raw body is parsed by hand: a body that is not JSON at all, or is a bare `null`, is an
/// unexpected failure (500), while a JSON body with a missing, non-string or '@'-less `email` is
/// invalid input (400).
#[tracing::instrument(name = "subscribe", skip_all)]
pub async fn subscribe(
    State(app_state): State<AppState>,
    body: Bytes,
) -> WebResult<(StatusCode, Json<MessageBody>)> {
    let body: Value = serde_json::from_slice(&body).map_err(SubscribeError::MalformedBody)?;
    if body.is_null() {
        return Err(SubscribeError::NullBody.into());
    }
    let subscription = ValidSubscription::try_from(body).map_err(SubscribeError::DataParsing)?;
    let email = subscription.email;

    let outcome = app_state
        .store
        .insert_if_absent(&email)
        .await
        .map_err(SubscribeError::Store)?;

    match outcome {
        InsertOutcome::Inserted { total } => {
            info!(subscriber_email = %email.as_ref(), "New subscription");
            info!(total_subscribers = total, "Subscriber list updated");

            Ok((
                StatusCode::OK,
                Json(MessageBody {
                    message: "Successfully subscribed!",
                }),
            ))
        }
        InsertOutcome::AlreadyPresent => Err(SubscribeError::AlreadySubscribed.into()),
    }
}

/// Reports how many emails are on the subscriber list.
#[tracing::instrument(name = "subscriber_count", skip_all)]
pub async fn subscriber_count(State(app_state): State<AppState>) -> WebResult<Json<CountBody>> {
    let count = app_state
        .store
        .count()
        .await
        .map_err(SubscribeError::Store)?;

    Ok(Json(CountBody { count }))
}
