//! Request payloads accepted by the `web` module and the response bodies it sends.
//! Includes the parsing implementations and tests for those.

use serde::Serialize;
use serde_json::Value;

use crate::domain::{DataParsingError, ValidEmail};

// ###################################
// ->   STRUCTS
// ###################################

/// A validated subscription request.
#[derive(Debug, Clone)]
pub struct ValidSubscription {
    pub email: ValidEmail,
}

impl TryFrom<Value> for ValidSubscription {
    type Error = DataParsingError;

    /// The body may be any JSON value except `null`; only the `email` key of an object is looked at.
    fn try_from(body: Value) -> Result<Self, Self::Error> {
        let email = match body.get("email") {
            None | Some(Value::Null) => return Err(DataParsingError::EmailMissing),
            Some(Value::String(email)) => ValidEmail::parse(email)?,
            Some(_) => return Err(DataParsingError::EmailNotAString),
        };

        Ok(ValidSubscription { email })
    }
}

/// Body of every successful or conflicting subscription response.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Body of the subscriber count response.
#[derive(Debug, Serialize)]
pub struct CountBody {
    pub count: usize,
}
