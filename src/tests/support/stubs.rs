//! Canned use-case doubles for route tests.
//!
//! Each `StubX(result)` hands back a clone of `result` on every call.
//! [`Unused`] fills the slots a test never touches.

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Requester, User, UserId, UserProfile};
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError};
use crate::auth::application::use_cases::change_password::{
    ChangePasswordError, ChangePasswordInput, IChangePasswordUseCase,
};
use crate::auth::application::use_cases::check_user::{CheckUserError, ICheckUserUseCase};
use crate::auth::application::use_cases::create_user::{
    CreateUserError, CreateUserInput, CreateUserOutput, ICreateUserUseCase,
};
use crate::auth::application::use_cases::delete_user::{DeleteUserError, IDeleteUserUseCase};
use crate::auth::application::use_cases::fetch_profile::{FetchUserError, FetchUserProfileUseCase};
use crate::auth::application::use_cases::forgot_password::{
    ForgotPasswordError, IForgotPasswordUseCase,
};
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::auth::application::use_cases::resend_code::{IResendCodeUseCase, ResendCodeError};
use crate::auth::application::use_cases::reset_password::{
    IResetPasswordUseCase, ResetPasswordError, ResetPasswordInput,
};
use crate::auth::application::use_cases::update_profile::{
    UpdateUserProfileError, UpdateUserProfileInput, UpdateUserProfileUseCase,
};
use crate::auth::application::use_cases::verify_user_email::{
    IVerifyUserEmailUseCase, VerifyUserEmailError,
};
use crate::email::application::ports::outgoing::{
    CodeRecipient, UserEmailNotificationError, UserEmailNotifier,
};
use crate::modules::appointment::application::domain::entities::Appointment;
use crate::modules::appointment::application::ports::incoming::use_cases::{
    AppointmentPatch, CreateAppointmentError, CreateAppointmentInput, CreateAppointmentUseCase,
    DeleteAppointmentError, DeleteAppointmentUseCase, FeedbackInput, GetAppointmentsError,
    GetAppointmentsUseCase, GetSingleAppointmentError, GetSingleAppointmentUseCase,
    ListFeedbackEligibleError, ListFeedbackEligibleUseCase, SubmitFeedbackError,
    SubmitFeedbackUseCase, UpdateAppointmentError, UpdateAppointmentUseCase,
};
use crate::modules::chat::application::domain::conversation::ConversationSummary;
use crate::modules::chat::application::domain::message::Message;
use crate::modules::chat::application::ports::incoming::use_cases::{
    DeleteMessageError, DeleteMessageUseCase, ListConversationsError, ListConversationsUseCase,
    ListMessagesError, ListMessagesUseCase, MarkReadError, MarkReadUseCase, SendMessageError,
    SendMessageInput, SendMessageUseCase, UnreadCountError, UnreadCountUseCase,
};

/// Declares `pub struct $name(pub Result<$ok, $err>)` implementing `$trait`.
macro_rules! canned {
    ($name:ident: $trait:ident, fn execute(&self $(, $arg:ident: $ty:ty)*) -> Result<$ok:ty, $err:ty>) => {
        pub struct $name(pub Result<$ok, $err>);

        #[async_trait]
        impl $trait for $name {
            async fn execute(&self $(, $arg: $ty)*) -> Result<$ok, $err> {
                self.0.clone()
            }
        }
    };
}

/* --------------------------------------------------
 * auth
 * -------------------------------------------------- */

canned!(StubCreateUser: ICreateUserUseCase,
    fn execute(&self, _input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError>);
canned!(StubVerifyEmail: IVerifyUserEmailUseCase,
    fn execute(&self, _user_id: UserId, _code: &str) -> Result<(), VerifyUserEmailError>);
canned!(StubLoginUser: ILoginUserUseCase,
    fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError>);
canned!(StubResendCode: IResendCodeUseCase,
    fn execute(&self, _email: &str) -> Result<UserId, ResendCodeError>);
canned!(StubForgotPassword: IForgotPasswordUseCase,
    fn execute(&self, _email: &str) -> Result<(), ForgotPasswordError>);
canned!(StubResetPassword: IResetPasswordUseCase,
    fn execute(&self, _input: ResetPasswordInput) -> Result<(), ResetPasswordError>);
canned!(StubCheckUser: ICheckUserUseCase,
    fn execute(&self, _email: Option<&str>, _username: Option<&str>) -> Result<bool, CheckUserError>);
canned!(StubFetchProfile: FetchUserProfileUseCase,
    fn execute(&self, _user_id: UserId) -> Result<UserProfile, FetchUserError>);
canned!(StubUpdateProfile: UpdateUserProfileUseCase,
    fn execute(&self, _input: UpdateUserProfileInput) -> Result<UserProfile, UpdateUserProfileError>);
canned!(StubChangePassword: IChangePasswordUseCase,
    fn execute(&self, _input: ChangePasswordInput) -> Result<(), ChangePasswordError>);
canned!(StubDeleteUser: IDeleteUserUseCase,
    fn execute(&self, _user_id: UserId) -> Result<(), DeleteUserError>);

/// Mail double: either delivers everything or fails everything.
pub struct StubUserEmailNotifier {
    fail: bool,
}

impl StubUserEmailNotifier {
    pub fn ok() -> Self {
        Self { fail: false }
    }

    pub fn failing() -> Self {
        Self { fail: true }
    }

    fn outcome(&self) -> Result<(), UserEmailNotificationError> {
        if self.fail {
            Err(UserEmailNotificationError::EmailSendingFailed(
                "smtp unavailable".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UserEmailNotifier for StubUserEmailNotifier {
    async fn send_verification_code(
        &self,
        _recipient: &CodeRecipient,
        _code: &str,
    ) -> Result<(), UserEmailNotificationError> {
        self.outcome()
    }

    async fn send_password_reset_code(
        &self,
        _recipient: &CodeRecipient,
        _code: &str,
    ) -> Result<(), UserEmailNotificationError> {
        self.outcome()
    }
}

/* --------------------------------------------------
 * appointment
 * -------------------------------------------------- */

canned!(StubCreateAppointment: CreateAppointmentUseCase,
    fn execute(&self, _requester: Requester, _input: CreateAppointmentInput) -> Result<Appointment, CreateAppointmentError>);
canned!(StubGetAppointments: GetAppointmentsUseCase,
    fn execute(&self, _requester: Requester, _owner: Option<UserId>) -> Result<Vec<Appointment>, GetAppointmentsError>);
canned!(StubGetSingleAppointment: GetSingleAppointmentUseCase,
    fn execute(&self, _requester: Requester, _appointment_id: Uuid) -> Result<Appointment, GetSingleAppointmentError>);
canned!(StubUpdateAppointment: UpdateAppointmentUseCase,
    fn execute(&self, _requester: Requester, _appointment_id: Uuid, _patch: AppointmentPatch) -> Result<Appointment, UpdateAppointmentError>);
canned!(StubDeleteAppointment: DeleteAppointmentUseCase,
    fn execute(&self, _requester: Requester, _appointment_id: Uuid) -> Result<Appointment, DeleteAppointmentError>);
canned!(StubFeedbackEligible: ListFeedbackEligibleUseCase,
    fn execute(&self, _requester: Requester, _owner: UserId) -> Result<Vec<Appointment>, ListFeedbackEligibleError>);
canned!(StubSubmitFeedback: SubmitFeedbackUseCase,
    fn execute(&self, _requester: Requester, _appointment_id: Uuid, _input: FeedbackInput) -> Result<Appointment, SubmitFeedbackError>);

/* --------------------------------------------------
 * chat
 * -------------------------------------------------- */

canned!(StubListMessages: ListMessagesUseCase,
    fn execute(&self, _requester: Requester, _owner: UserId) -> Result<Vec<Message>, ListMessagesError>);
canned!(StubSendMessage: SendMessageUseCase,
    fn execute(&self, _requester: Requester, _input: SendMessageInput) -> Result<Message, SendMessageError>);
canned!(StubMarkRead: MarkReadUseCase,
    fn execute(&self, _requester: Requester, _owner: UserId) -> Result<u64, MarkReadError>);
canned!(StubUnreadCount: UnreadCountUseCase,
    fn execute(&self, _requester: Requester, _owner: UserId) -> Result<u64, UnreadCountError>);
canned!(StubDeleteMessage: DeleteMessageUseCase,
    fn execute(&self, _requester: Requester, _message_id: Uuid) -> Result<(), DeleteMessageError>);
canned!(StubListConversations: ListConversationsUseCase,
    fn execute(&self, _requester: Requester) -> Result<Vec<ConversationSummary>, ListConversationsError>);

/* --------------------------------------------------
 * placeholder for slots a test does not exercise
 * -------------------------------------------------- */

pub struct Unused;

macro_rules! unused {
    ($trait:ident, fn execute(&self $(, $arg:ident: $ty:ty)*) -> $ret:ty) => {
        #[async_trait]
        impl $trait for Unused {
            async fn execute(&self $(, $arg: $ty)*) -> $ret {
                unimplemented!(concat!(stringify!($trait), " is not used in this test"))
            }
        }
    };
}

unused!(ICreateUserUseCase, fn execute(&self, _input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError>);
unused!(IVerifyUserEmailUseCase, fn execute(&self, _user_id: UserId, _code: &str) -> Result<(), VerifyUserEmailError>);
unused!(ILoginUserUseCase, fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError>);
unused!(IResendCodeUseCase, fn execute(&self, _email: &str) -> Result<UserId, ResendCodeError>);
unused!(IForgotPasswordUseCase, fn execute(&self, _email: &str) -> Result<(), ForgotPasswordError>);
unused!(IResetPasswordUseCase, fn execute(&self, _input: ResetPasswordInput) -> Result<(), ResetPasswordError>);
unused!(ICheckUserUseCase, fn execute(&self, _email: Option<&str>, _username: Option<&str>) -> Result<bool, CheckUserError>);
unused!(FetchUserProfileUseCase, fn execute(&self, _user_id: UserId) -> Result<UserProfile, FetchUserError>);
unused!(UpdateUserProfileUseCase, fn execute(&self, _input: UpdateUserProfileInput) -> Result<UserProfile, UpdateUserProfileError>);
unused!(IChangePasswordUseCase, fn execute(&self, _input: ChangePasswordInput) -> Result<(), ChangePasswordError>);
unused!(IDeleteUserUseCase, fn execute(&self, _user_id: UserId) -> Result<(), DeleteUserError>);
unused!(CreateAppointmentUseCase, fn execute(&self, _requester: Requester, _input: CreateAppointmentInput) -> Result<Appointment, CreateAppointmentError>);
unused!(GetAppointmentsUseCase, fn execute(&self, _requester: Requester, _owner: Option<UserId>) -> Result<Vec<Appointment>, GetAppointmentsError>);
unused!(GetSingleAppointmentUseCase, fn execute(&self, _requester: Requester, _appointment_id: Uuid) -> Result<Appointment, GetSingleAppointmentError>);
unused!(UpdateAppointmentUseCase, fn execute(&self, _requester: Requester, _appointment_id: Uuid, _patch: AppointmentPatch) -> Result<Appointment, UpdateAppointmentError>);
unused!(DeleteAppointmentUseCase, fn execute(&self, _requester: Requester, _appointment_id: Uuid) -> Result<Appointment, DeleteAppointmentError>);
unused!(ListFeedbackEligibleUseCase, fn execute(&self, _requester: Requester, _owner: UserId) -> Result<Vec<Appointment>, ListFeedbackEligibleError>);
unused!(SubmitFeedbackUseCase, fn execute(&self, _requester: Requester, _appointment_id: Uuid, _input: FeedbackInput) -> Result<Appointment, SubmitFeedbackError>);
unused!(ListMessagesUseCase, fn execute(&self, _requester: Requester, _owner: UserId) -> Result<Vec<Message>, ListMessagesError>);
unused!(SendMessageUseCase, fn execute(&self, _requester: Requester, _input: SendMessageInput) -> Result<Message, SendMessageError>);
unused!(MarkReadUseCase, fn execute(&self, _requester: Requester, _owner: UserId) -> Result<u64, MarkReadError>);
unused!(UnreadCountUseCase, fn execute(&self, _requester: Requester, _owner: UserId) -> Result<u64, UnreadCountError>);
unused!(DeleteMessageUseCase, fn execute(&self, _requester: Requester, _message_id: Uuid) -> Result<(), DeleteMessageError>);
unused!(ListConversationsUseCase, fn execute(&self, _requester: Requester) -> Result<Vec<ConversationSummary>, ListConversationsError>);

#[async_trait]
impl UserQuery for Unused {
    async fn find_by_id(&self, _user_id: UserId) -> Result<Option<User>, UserQueryError> {
        unimplemented!("UserQuery is not used in this test")
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserQueryError> {
        unimplemented!("UserQuery is not used in this test")
    }

    async fn find_by_username(&self, _username: &str) -> Result<Option<User>, UserQueryError> {
        unimplemented!("UserQuery is not used in this test")
    }
}
