//! Email validation shared by the endpoint and the subscriber store.

// ###################################
// ->   STRUCTS
// ###################################

/// Validated Subscriber Email
///
/// The only requirement is an `@` somewhere in the string. The value is kept
/// exactly as received, without trimming or case folding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEmail(String);

impl AsRef<str> for ValidEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl ValidEmail {
    pub fn parse<S>(value: S) -> Result<Self, DataParsingError>
    where
        S: AsRef<str>,
    {
        let value = value.as_ref();

        if value.contains('@') {
            Ok(ValidEmail(value.to_owned()))
        } else {
            Err(DataParsingError::EmailMissingAt)
        }
    }
}

// ###################################
// ->   ERROR
// ###################################
#[derive(Debug, thiserror::Error)]
pub enum DataParsingError {
    #[error("email missing")]
    EmailMissing,
    #[error("email is not a string")]
    EmailNotAString,
    #[error("email does not contain '@'")]
    EmailMissingAt,
}
