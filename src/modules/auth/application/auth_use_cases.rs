use std::sync::Arc;

use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::use_cases::{
    change_password::IChangePasswordUseCase, check_user::ICheckUserUseCase,
    delete_user::IDeleteUserUseCase, fetch_profile::FetchUserProfileUseCase,
    forgot_password::IForgotPasswordUseCase, login_user::ILoginUserUseCase,
    resend_code::IResendCodeUseCase, reset_password::IResetPasswordUseCase,
    update_profile::UpdateUserProfileUseCase, verify_user_email::IVerifyUserEmailUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<UserRegistrationOrchestrator>,
    pub verify_email: Arc<dyn IVerifyUserEmailUseCase + Send + Sync>,
    pub login: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub resend_code: Arc<dyn IResendCodeUseCase + Send + Sync>,
    pub forgot_password: Arc<dyn IForgotPasswordUseCase + Send + Sync>,
    pub reset_password: Arc<dyn IResetPasswordUseCase + Send + Sync>,
    pub fetch_profile: Arc<dyn FetchUserProfileUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateUserProfileUseCase + Send + Sync>,
    pub change_password: Arc<dyn IChangePasswordUseCase + Send + Sync>,
    pub delete_user: Arc<dyn IDeleteUserUseCase + Send + Sync>,
    pub check_user: Arc<dyn ICheckUserUseCase + Send + Sync>,
}
