use crate::auth::application::ports::incoming::password_policy::{
    PasswordPolicy, PasswordPolicyError,
};

const MIN_PASSWORD_CHARS: usize = 6;
const MAX_PASSWORD_CHARS: usize = 128;

/// Length-only policy matching what the mobile client enforces.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicPasswordPolicy;

impl PasswordPolicy for BasicPasswordPolicy {
    fn validate(&self, password: &str) -> Result<(), PasswordPolicyError> {
        let length = password.chars().count();

        if length < MIN_PASSWORD_CHARS {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_CHARS,
            });
        }

        if length > MAX_PASSWORD_CHARS {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_CHARS,
            });
        }

        Ok(())
    }
}
