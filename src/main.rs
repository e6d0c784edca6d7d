pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::appointment;
pub use modules::auth;
pub use modules::chat;
pub use modules::email;

use crate::appointment::adapter::outgoing::{
    AppointmentQueryPostgres, AppointmentRepositoryPostgres,
};
use crate::appointment::application::appointment_use_cases::AppointmentUseCases;
use crate::appointment::application::domain::schedule::{ClinicHours, SchedulePolicy};
use crate::appointment::application::service::{
    CreateAppointmentService, DeleteAppointmentService, GetAppointmentsService,
    GetSingleAppointmentService, ListFeedbackEligibleService, SubmitFeedbackService,
    UpdateAppointmentService,
};
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::orchestrator::user_registration::{
    RetryPolicy, UserRegistrationOrchestrator,
};
use crate::auth::application::ports::incoming::password_policy::PasswordPolicy;
use crate::auth::application::ports::outgoing::{CodeGenerator, PasswordHasher, TokenProvider};
use crate::auth::application::services::code::RandomCodeGenerator;
use crate::auth::application::services::password::BasicPasswordPolicy;
use crate::auth::application::services::user_profile::{
    FetchUserProfileService, UpdateUserProfileService,
};
use crate::auth::application::use_cases::{
    change_password::ChangePasswordUseCase,
    check_user::CheckUserUseCase,
    create_user::{CreateUserUseCase, ICreateUserUseCase},
    delete_user::DeleteUserUseCase,
    forgot_password::ForgotPasswordUseCase,
    login_user::LoginUserUseCase,
    resend_code::ResendCodeUseCase,
    reset_password::ResetPasswordUseCase,
    seed_admin::{ISeedAdminUseCase, SeedAdminUseCase, SeedOutcome},
    verify_user_email::VerifyUserEmailUseCase,
};
use crate::chat::adapter::outgoing::{MessageQueryPostgres, MessageRepositoryPostgres};
use crate::chat::application::chat_use_cases::ChatUseCases;
use crate::chat::application::domain::polling::PollingPolicy;
use crate::chat::application::service::{
    DeleteMessageService, ListConversationsService, ListMessagesService, MarkReadService,
    SendMessageService, UnreadCountService,
};
use crate::config::AppConfig;
use crate::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::email::application::ports::outgoing::user_email_notifier::UserEmailNotifier;
use crate::email::application::services::{EmailService, UserEmailService};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub appointment: AppointmentUseCases,
    pub chat: ChatUseCases,
    pub polling: PollingPolicy,
}

/// Shared collaborators built once at startup and handed to each module's wiring.
struct Collaborators {
    db: Arc<DatabaseConnection>,
    user_query: UserQueryPostgres,
    user_repo: UserRepositoryPostgres,
    hasher: Arc<dyn PasswordHasher>,
    notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

#[cfg(not(tarpaulin_include))]
fn startup_error(err: impl Display) -> std::io::Error {
    error!("Startup failed: {}", err);
    std::io::Error::other(err.to_string())
}

#[cfg(not(tarpaulin_include))]
fn build_auth(deps: &Collaborators, config: &AppConfig) -> AuthUseCases {
    let policy: Arc<dyn PasswordPolicy> = Arc::new(BasicPasswordPolicy);
    let codes: Arc<dyn CodeGenerator> = Arc::new(RandomCodeGenerator);

    let create_user: Arc<dyn ICreateUserUseCase + Send + Sync> = Arc::new(CreateUserUseCase::new(
        deps.user_query.clone(),
        deps.user_repo.clone(),
        Arc::clone(&deps.hasher),
        Arc::clone(&policy),
        Arc::clone(&codes),
    ));
    let register = UserRegistrationOrchestrator::new(
        create_user,
        Arc::new(deps.user_query.clone()),
        Arc::clone(&deps.notifier),
        RetryPolicy::with_attempts(config.email_retry_attempts),
    );

    AuthUseCases {
        register: Arc::new(register),
        verify_email: Arc::new(VerifyUserEmailUseCase::new(
            deps.user_query.clone(),
            deps.user_repo.clone(),
        )),
        login: Arc::new(LoginUserUseCase::new(
            deps.user_query.clone(),
            Arc::clone(&deps.hasher),
            deps.token_provider.clone(),
        )),
        resend_code: Arc::new(ResendCodeUseCase::new(
            deps.user_query.clone(),
            deps.user_repo.clone(),
            Arc::clone(&codes),
            Arc::clone(&deps.notifier),
        )),
        forgot_password: Arc::new(ForgotPasswordUseCase::new(
            deps.user_query.clone(),
            deps.user_repo.clone(),
            Arc::clone(&codes),
            Arc::clone(&deps.notifier),
        )),
        reset_password: Arc::new(ResetPasswordUseCase::new(
            deps.user_query.clone(),
            deps.user_repo.clone(),
            Arc::clone(&deps.hasher),
            Arc::clone(&policy),
        )),
        fetch_profile: Arc::new(FetchUserProfileService::new(deps.user_query.clone())),
        update_profile: Arc::new(UpdateUserProfileService::new(deps.user_repo.clone())),
        change_password: Arc::new(ChangePasswordUseCase::new(
            deps.user_query.clone(),
            deps.user_repo.clone(),
            Arc::clone(&deps.hasher),
            policy,
        )),
        delete_user: Arc::new(DeleteUserUseCase::new(deps.user_repo.clone())),
        check_user: Arc::new(CheckUserUseCase::new(deps.user_query.clone())),
    }
}

#[cfg(not(tarpaulin_include))]
fn build_appointment(deps: &Collaborators, config: &AppConfig) -> AppointmentUseCases {
    let query = AppointmentQueryPostgres::new(Arc::clone(&deps.db));
    let repo = AppointmentRepositoryPostgres::new(Arc::clone(&deps.db));
    let schedule = SchedulePolicy::new(ClinicHours::default(), config.clinic_utc_offset);

    AppointmentUseCases {
        create: Arc::new(CreateAppointmentService::new(
            repo.clone(),
            deps.user_query.clone(),
            schedule,
        )),
        get_list: Arc::new(GetAppointmentsService::new(query.clone())),
        get_single: Arc::new(GetSingleAppointmentService::new(query.clone())),
        update: Arc::new(UpdateAppointmentService::new(
            query.clone(),
            repo.clone(),
            schedule,
        )),
        delete: Arc::new(DeleteAppointmentService::new(query.clone(), repo.clone())),
        feedback_eligible: Arc::new(ListFeedbackEligibleService::new(query.clone())),
        submit_feedback: Arc::new(SubmitFeedbackService::new(query, repo)),
    }
}

#[cfg(not(tarpaulin_include))]
fn build_chat(deps: &Collaborators) -> ChatUseCases {
    let query = MessageQueryPostgres::new(Arc::clone(&deps.db));
    let repo = MessageRepositoryPostgres::new(Arc::clone(&deps.db));

    ChatUseCases {
        list: Arc::new(ListMessagesService::new(query.clone())),
        send: Arc::new(SendMessageService::new(repo.clone())),
        mark_read: Arc::new(MarkReadService::new(repo.clone())),
        unread_count: Arc::new(UnreadCountService::new(query.clone())),
        delete: Arc::new(DeleteMessageService::new(repo)),
        conversations: Arc::new(ListConversationsService::new(query)),
    }
}

#[cfg(not(tarpaulin_include))]
async fn seed_admin(deps: &Collaborators, config: &AppConfig) -> std::io::Result<()> {
    let Some(seed) = &config.admin_seed else {
        return Ok(());
    };

    let seeder = SeedAdminUseCase::new(
        deps.user_query.clone(),
        deps.user_repo.clone(),
        Arc::clone(&deps.hasher),
    );

    match seeder.execute(seed).await.map_err(startup_error)? {
        SeedOutcome::Created(user_id) => info!(user_id = %user_id, "Admin account created"),
        SeedOutcome::AlreadyPresent(user_id) => {
            info!(user_id = %user_id, "Admin account already present")
        }
    }
    Ok(())
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // .env.{RUST_ENV} first, then plain .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().map_err(startup_error)?;
    let jwt_config = JwtConfig::from_env().map_err(startup_error)?;
    info!(environment = %config.environment, "Starting application...");

    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db = Arc::new(Database::connect(opt).await.map_err(startup_error)?);

    let smtp_sender =
        SmtpEmailSender::from_settings(&config.smtp, &config.email_from).map_err(startup_error)?;
    let user_email_service = UserEmailService::new(
        EmailService::new(Arc::new(smtp_sender)),
        config.clinic_name.clone(),
    );

    let hasher =
        Argon2Hasher::for_environment(config.is_production()).map_err(startup_error)?;

    let deps = Collaborators {
        db: Arc::clone(&db),
        user_query: UserQueryPostgres::new(Arc::clone(&db)),
        user_repo: UserRepositoryPostgres::new(Arc::clone(&db)),
        hasher: Arc::new(hasher),
        notifier: Arc::new(user_email_service),
        token_provider: Arc::new(JwtTokenService::new(jwt_config)),
    };

    seed_admin(&deps, &config).await?;

    let state = AppState {
        auth: build_auth(&deps, &config),
        appointment: build_appointment(&deps, &config),
        chat: build_chat(&deps),
        polling: PollingPolicy::new(
            config.chat_poll_interval_ms,
            config.chat_poll_max_interval_ms,
        ),
    };

    let token_provider = Arc::clone(&deps.token_provider);
    let openapi = api::openapi::ApiDoc::openapi();
    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(shared::api::custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db)))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::appointment::adapter::incoming::web::routes as appointment_routes;
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::chat::adapter::incoming::web::routes as chat_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth_routes::register_user_handler);
    cfg.service(auth_routes::verify_user_email_handler);
    cfg.service(auth_routes::login_user_handler);
    cfg.service(auth_routes::resend_code_handler);
    cfg.service(auth_routes::forgot_password_handler);
    cfg.service(auth_routes::reset_password_handler);
    cfg.service(auth_routes::check_user_handler);
    cfg.service(auth_routes::fetch_profile_handler);
    cfg.service(auth_routes::update_profile_handler);
    cfg.service(auth_routes::change_password_handler);
    cfg.service(auth_routes::delete_account_handler);
    // Appointments
    cfg.service(appointment_routes::create_appointment_handler);
    cfg.service(appointment_routes::get_appointments_handler);
    cfg.service(appointment_routes::get_user_appointments_handler);
    cfg.service(appointment_routes::get_single_appointment_handler);
    cfg.service(appointment_routes::update_appointment_handler);
    cfg.service(appointment_routes::delete_appointment_handler);
    cfg.service(appointment_routes::get_feedback_eligible_handler);
    cfg.service(appointment_routes::submit_feedback_handler);
    // Chat
    cfg.service(chat_routes::list_conversations_handler);
    cfg.service(chat_routes::list_messages_handler);
    cfg.service(chat_routes::send_message_handler);
    cfg.service(chat_routes::mark_read_handler);
    cfg.service(chat_routes::unread_count_handler);
    cfg.service(chat_routes::delete_message_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
