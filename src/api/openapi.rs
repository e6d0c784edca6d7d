use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::appointment::adapter::incoming::web::routes::dto::{AppointmentDto, FeedbackDto};
use crate::appointment::adapter::incoming::web::routes::{
    CreateAppointmentRequest, SubmitFeedbackRequest, UpdateAppointmentRequest,
};
use crate::appointment::application::domain::status::AppointmentStatus;
use crate::auth::adapter::incoming::web::routes::dto::{MessageResponse, UserProfileDto};
use crate::auth::adapter::incoming::web::routes::{
    ChangePasswordRequest, CheckUserRequest, CheckUserResponse, EmailRequest, LoginRequestDto,
    LoginResponse, RegisterUserRequest, RegisterUserResponse, ResendCodeResponse,
    ResetPasswordRequest, UpdateProfileRequest, VerifyEmailRequest,
};
use crate::auth::application::domain::entities::Role;
use crate::auth::application::orchestrator::user_registration::CodeDelivery;
use crate::chat::adapter::incoming::web::routes::dto::{ConversationDto, MessageDto};
use crate::chat::adapter::incoming::web::routes::{
    ConversationResponse, DeletedResponse, MarkReadResponse, SendMessageRequest,
    UnreadCountResponse,
};
use crate::chat::application::domain::message::Sender;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Halili Dental Clinic API",
        version = "1.0.0",
        description = "Accounts, appointment booking, feedback and patient-admin chat for the clinic",
        contact(
            name = "Clinic IT",
            email = "support@example.com"
        )
    ),
    paths(
        // Users
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::verify_user_email_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::resend_code_handler,
        crate::auth::adapter::incoming::web::routes::forgot_password_handler,
        crate::auth::adapter::incoming::web::routes::reset_password_handler,
        crate::auth::adapter::incoming::web::routes::check_user_handler,
        crate::auth::adapter::incoming::web::routes::fetch_profile_handler,
        crate::auth::adapter::incoming::web::routes::update_profile_handler,
        crate::auth::adapter::incoming::web::routes::change_password_handler,
        crate::auth::adapter::incoming::web::routes::delete_account_handler,

        // Appointments
        crate::appointment::adapter::incoming::web::routes::create_appointment_handler,
        crate::appointment::adapter::incoming::web::routes::get_appointments_handler,
        crate::appointment::adapter::incoming::web::routes::get_user_appointments_handler,
        crate::appointment::adapter::incoming::web::routes::get_single_appointment_handler,
        crate::appointment::adapter::incoming::web::routes::update_appointment_handler,
        crate::appointment::adapter::incoming::web::routes::delete_appointment_handler,

        // Feedback
        crate::appointment::adapter::incoming::web::routes::get_feedback_eligible_handler,
        crate::appointment::adapter::incoming::web::routes::submit_feedback_handler,

        // Chat
        crate::chat::adapter::incoming::web::routes::list_messages_handler,
        crate::chat::adapter::incoming::web::routes::send_message_handler,
        crate::chat::adapter::incoming::web::routes::mark_read_handler,
        crate::chat::adapter::incoming::web::routes::unread_count_handler,
        crate::chat::adapter::incoming::web::routes::delete_message_handler,
        crate::chat::adapter::incoming::web::routes::list_conversations_handler,
    ),
    components(
        schemas(
            SuccessResponse<RegisterUserResponse>,
            ErrorResponse,
            ErrorDetail,

            // Users
            RegisterUserRequest,
            RegisterUserResponse,
            CodeDelivery,
            VerifyEmailRequest,
            LoginRequestDto,
            LoginResponse,
            EmailRequest,
            ResendCodeResponse,
            ResetPasswordRequest,
            CheckUserRequest,
            CheckUserResponse,
            UserProfileDto,
            UpdateProfileRequest,
            ChangePasswordRequest,
            MessageResponse,
            Role,

            // Appointments and feedback
            CreateAppointmentRequest,
            UpdateAppointmentRequest,
            SubmitFeedbackRequest,
            AppointmentDto,
            FeedbackDto,
            AppointmentStatus,

            // Chat
            SendMessageRequest,
            MessageDto,
            ConversationDto,
            ConversationResponse,
            MarkReadResponse,
            UnreadCountResponse,
            DeletedResponse,
            Sender
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "users", description = "Registration, login, verification codes and account management"),
        (name = "appointments", description = "Booking and managing clinic appointments"),
        (name = "feedback", description = "Ratings for accepted and completed appointments"),
        (name = "chat", description = "Patient and admin messaging"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token returned by /api/users/login"))
                        .build(),
                ),
            )
        }
    }
}
