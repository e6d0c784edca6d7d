use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

pub const MAX_MESSAGE_LENGTH: usize = 500;

/// Author side of a chat line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Patient,
    Admin,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::Patient => "patient",
            Sender::Admin => "admin",
        }
    }

    /// The author always counts as having read their own line.
    pub fn initially_read(&self) -> bool {
        matches!(self, Sender::Patient)
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sender: {0}")]
pub struct UnknownSender(pub String);

impl FromStr for Sender {
    type Err = UnknownSender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "patient" => Ok(Sender::Patient),
            "admin" => Ok(Sender::Admin),
            other => Err(UnknownSender(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: Uuid,
    pub user_id: UserId,
    pub user_email: String,
    pub username: String,
    pub message: String,
    pub sender: Sender,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageBodyError {
    #[error("message cannot be empty")]
    Empty,

    #[error("message must be at most {MAX_MESSAGE_LENGTH} characters")]
    TooLong,
}

/// Applies the length limit to the body as submitted and returns the trimmed text.
pub fn validate_body(raw: &str) -> Result<String, MessageBodyError> {
    if raw.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(MessageBodyError::TooLong);
    }
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(MessageBodyError::Empty);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exactly_the_limit() {
        let body = "a".repeat(MAX_MESSAGE_LENGTH);
        assert_eq!(validate_body(&body), Ok(body.clone()));
    }

    #[test]
    fn rejects_one_past_the_limit() {
        let body = "a".repeat(MAX_MESSAGE_LENGTH + 1);
        assert_eq!(validate_body(&body), Err(MessageBodyError::TooLong));
    }

    #[test]
    fn padding_counts_toward_the_limit() {
        let body = format!(" {}", "a".repeat(MAX_MESSAGE_LENGTH));
        assert_eq!(validate_body(&body), Err(MessageBodyError::TooLong));
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert_eq!(validate_body("  \n\t "), Err(MessageBodyError::Empty));
    }

    #[test]
    fn stores_trimmed_text() {
        assert_eq!(validate_body("  hello  "), Ok("hello".to_string()));
    }

    #[test]
    fn counts_characters_not_bytes() {
        let body = "ñ".repeat(MAX_MESSAGE_LENGTH);
        assert!(validate_body(&body).is_ok());
    }

    #[test]
    fn only_patient_lines_start_read() {
        assert!(Sender::Patient.initially_read());
        assert!(!Sender::Admin.initially_read());
    }

    #[test]
    fn parses_sender() {
        assert_eq!("admin".parse::<Sender>(), Ok(Sender::Admin));
        assert!("doctor".parse::<Sender>().is_err());
    }
}
