use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::domain::one_time_code::hash_code;
use crate::auth::application::ports::outgoing::user_query::UserQuery;
use crate::auth::application::use_cases::create_user::{
    CreateUserError, CreateUserInput, CreateUserOutput, ICreateUserUseCase,
};
use crate::email::application::ports::outgoing::user_email_notifier::{
    CodeRecipient, UserEmailNotifier,
};

// ============================================================================
// Retry policy for background code delivery
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Background attempts after the inline one failed.
    pub max_attempts: u32,
    /// Delay before attempt `n` is `base_delay * 2^n`.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub fn with_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..Self::default()
        }
    }

    fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay * 2_u32.saturating_pow(attempt)
    }
}

// ============================================================================
// Registration Output
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CodeDelivery {
    Sent,
    /// Inline dispatch failed; retries continue in the background.
    Delayed,
}

#[derive(Debug)]
pub struct UserRegistrationOutput {
    pub user_id: UserId,
    pub email: String,
    pub username: String,
    pub code_delivery: CodeDelivery,
    pub message: String,
}

impl UserRegistrationOutput {
    fn new(output: CreateUserOutput, code_delivery: CodeDelivery) -> Self {
        let message = match code_delivery {
            CodeDelivery::Sent => "Verification code sent to your email",
            CodeDelivery::Delayed => {
                "Account created. Your verification code may be delayed; you can request a new one."
            }
        };

        Self {
            user_id: output.user_id,
            email: output.email,
            username: output.username,
            code_delivery,
            message: message.to_string(),
        }
    }
}

// ============================================================================
// Registration Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum UserRegistrationError {
    #[error("User creation failed: {0}")]
    CreateUserFailed(#[from] CreateUserError),
}

// ============================================================================
// User Registration Service (Orchestration Layer)
// ============================================================================

#[derive(Clone)]
pub struct UserRegistrationOrchestrator {
    create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
    user_query: Arc<dyn UserQuery + Send + Sync>,
    email_notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
    retry_policy: RetryPolicy,
}

impl UserRegistrationOrchestrator {
    pub fn new(
        create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
        user_query: Arc<dyn UserQuery + Send + Sync>,
        email_notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            create_user_use_case,
            user_query,
            email_notifier,
            retry_policy,
        }
    }

    /// Creates the account, then tries to deliver the verification code once.
    /// A failed delivery never fails the registration: retries move to a background task
    /// and the caller is told the code may be delayed.
    pub async fn register_user(
        &self,
        input: CreateUserInput,
    ) -> Result<UserRegistrationOutput, UserRegistrationError> {
        let created_user = self.create_user_use_case.execute(input).await?;

        let recipient = CodeRecipient {
            email: created_user.email.clone(),
            username: created_user.username.clone(),
        };

        match self
            .email_notifier
            .send_verification_code(&recipient, &created_user.verification_code)
            .await
        {
            Ok(()) => Ok(UserRegistrationOutput::new(created_user, CodeDelivery::Sent)),
            Err(e) => {
                tracing::warn!(
                    user_id = %created_user.user_id,
                    "Verification code delivery failed, retrying in background: {}",
                    e
                );
                self.spawn_retry(
                    created_user.user_id,
                    recipient,
                    created_user.verification_code.clone(),
                );
                Ok(UserRegistrationOutput::new(
                    created_user,
                    CodeDelivery::Delayed,
                ))
            }
        }
    }

    /// Each attempt first re-reads the account and gives up once the code it
    /// carries is no longer the one on record.
    fn spawn_retry(&self, user_id: UserId, recipient: CodeRecipient, code: String) {
        let notifier = self.email_notifier.clone();
        let user_query = self.user_query.clone();
        let policy = self.retry_policy;
        let code_hash = hash_code(&code);

        tokio::spawn(async move {
            for attempt in 1..=policy.max_attempts {
                tokio::time::sleep(policy.delay_for(attempt)).await;

                match user_query.find_by_id(user_id).await {
                    Ok(user) if code_is_current(user.as_ref(), &code_hash) => {}
                    Ok(_) => {
                        tracing::info!(
                            user_id = %user_id,
                            attempt,
                            "Verification code superseded, stopping retries"
                        );
                        return;
                    }
                    Err(e) => {
                        tracing::warn!(
                            user_id = %user_id,
                            attempt,
                            "Could not reload user before retry: {}",
                            e
                        );
                        continue;
                    }
                }

                match notifier.send_verification_code(&recipient, &code).await {
                    Ok(()) => {
                        tracing::info!(
                            user_id = %user_id,
                            attempt,
                            "Verification code delivered on retry"
                        );
                        return;
                    }
                    Err(e) if attempt < policy.max_attempts => {
                        tracing::warn!(
                            "Email attempt {}/{} failed for user {}: {}. Retrying...",
                            attempt,
                            policy.max_attempts,
                            user_id,
                            e
                        );
                    }
                    Err(e) => {
                        tracing::error!(
                            "All {} email retries failed for user {}: {}",
                            policy.max_attempts,
                            user_id,
                            e
                        );
                    }
                }
            }
        });
    }
}

/// The account still exists, is unverified, and holds the code being resent.
fn code_is_current(user: Option<&User>, code_hash: &str) -> bool {
    match user {
        Some(user) if !user.is_verified => user
            .verification_code
            .as_ref()
            .is_some_and(|stored| stored.code_hash == code_hash),
        _ => false,
    }
}
