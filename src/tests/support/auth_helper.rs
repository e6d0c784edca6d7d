use std::sync::Arc;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::{Role, UserId};
use crate::auth::application::ports::outgoing::TokenProvider;

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_only_0123456789";

pub fn create_test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: TEST_JWT_SECRET.to_string(),
        issuer: "halili-test".to_string(),
        access_token_expiry: 3600,
    })
}

/// The shape `main` registers as app data.
pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(create_test_jwt_service())
}

/// Full `Authorization` header value for the given identity.
pub fn bearer_for(user_id: UserId, role: Role) -> String {
    let email = match role {
        Role::Admin => "admin@clinic.test",
        Role::Patient => "patient@clinic.test",
    };
    let token = create_test_jwt_service()
        .generate_access_token(user_id, email, role)
        .expect("test token");
    format!("Bearer {}", token)
}
