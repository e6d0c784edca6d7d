use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};

/// Minutes a verification or reset code stays valid after issuance.
pub const ONE_TIME_CODE_TTL_MINUTES: i64 = 10;

/// A stored one-time code. Only the SHA-256 digest is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneTimeCode {
    pub code_hash: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CodeCheckError {
    #[error("code does not match")]
    Mismatch,

    #[error("code has expired")]
    Expired,
}

impl OneTimeCode {
    pub fn issue(code: &str, now: DateTime<Utc>) -> Self {
        Self {
            code_hash: hash_code(code),
            expires_at: now + Duration::minutes(ONE_TIME_CODE_TTL_MINUTES),
        }
    }

    /// Accepts iff the candidate matches and `now` is strictly before expiry.
    pub fn check(&self, candidate: &str, now: DateTime<Utc>) -> Result<(), CodeCheckError> {
        if hash_code(candidate.trim()) != self.code_hash {
            return Err(CodeCheckError::Mismatch);
        }

        if now >= self.expires_at {
            return Err(CodeCheckError::Expired);
        }

        Ok(())
    }
}

pub fn hash_code(code: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(code.as_bytes());
    format!("{:x}", hasher.finalize())
}
