use email_address::EmailAddress;

use crate::auth::application::domain::entities::normalize_email;

pub const MAX_SERVICE_NAME: usize = 100;
pub const MAX_USERNAME: usize = 50;
pub const MAX_EMAIL: usize = 255;
pub const MAX_CONTACT_NUMBER: usize = 32;
pub const MAX_TIME: usize = 20;
pub const MAX_NOTES: usize = 2000;
pub const MAX_CANCELLATION_REASON: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("email is not a valid address")]
    InvalidEmail,
}

/// Trims `value` and rejects it when blank or longer than `max` characters.
pub fn required(field: &'static str, value: &str, max: usize) -> Result<String, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::Missing(field));
    }
    if value.chars().count() > max {
        return Err(FieldError::TooLong { field, max });
    }
    Ok(value.to_string())
}

/// Blank optional text collapses to `None`.
pub fn optional(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<Option<String>, FieldError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) if v.chars().count() > max => Err(FieldError::TooLong { field, max }),
        Some(v) => Ok(Some(v.to_string())),
    }
}

pub fn email(value: &str) -> Result<String, FieldError> {
    let value = required("email", value, MAX_EMAIL)?;
    if !EmailAddress::is_valid(&value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(normalize_email(&value))
}
