use std::sync::Arc;

use actix_web::web;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::orchestrator::user_registration::{
    RetryPolicy, UserRegistrationOrchestrator,
};
use crate::modules::appointment::application::appointment_use_cases::AppointmentUseCases;
use crate::modules::chat::application::chat_use_cases::ChatUseCases;
use crate::modules::chat::application::domain::polling::PollingPolicy;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an [`AppState`] where every use case is [`Unused`] unless replaced.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    appointment: AppointmentUseCases,
    chat: ChatUseCases,
    polling: PollingPolicy,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                register: Arc::new(UserRegistrationOrchestrator::new(
                    Arc::new(Unused),
                    Arc::new(Unused),
                    Arc::new(StubUserEmailNotifier::ok()),
                    RetryPolicy::with_attempts(0),
                )),
                verify_email: Arc::new(Unused),
                login: Arc::new(Unused),
                resend_code: Arc::new(Unused),
                forgot_password: Arc::new(Unused),
                reset_password: Arc::new(Unused),
                fetch_profile: Arc::new(Unused),
                update_profile: Arc::new(Unused),
                change_password: Arc::new(Unused),
                delete_user: Arc::new(Unused),
                check_user: Arc::new(Unused),
            },
            appointment: AppointmentUseCases {
                create: Arc::new(Unused),
                get_list: Arc::new(Unused),
                get_single: Arc::new(Unused),
                update: Arc::new(Unused),
                delete: Arc::new(Unused),
                feedback_eligible: Arc::new(Unused),
                submit_feedback: Arc::new(Unused),
            },
            chat: ChatUseCases {
                list: Arc::new(Unused),
                send: Arc::new(Unused),
                mark_read: Arc::new(Unused),
                unread_count: Arc::new(Unused),
                delete: Arc::new(Unused),
                conversations: Arc::new(Unused),
            },
            polling: PollingPolicy::default(),
        }
    }
}

impl TestAppStateBuilder {
    /* auth */

    pub fn with_register(mut self, orchestrator: UserRegistrationOrchestrator) -> Self {
        self.auth.register = Arc::new(orchestrator);
        self
    }

    pub fn with_verify_email(mut self, stub: StubVerifyEmail) -> Self {
        self.auth.verify_email = Arc::new(stub);
        self
    }

    pub fn with_login(mut self, stub: StubLoginUser) -> Self {
        self.auth.login = Arc::new(stub);
        self
    }

    pub fn with_resend_code(mut self, stub: StubResendCode) -> Self {
        self.auth.resend_code = Arc::new(stub);
        self
    }

    pub fn with_forgot_password(mut self, stub: StubForgotPassword) -> Self {
        self.auth.forgot_password = Arc::new(stub);
        self
    }

    pub fn with_reset_password(mut self, stub: StubResetPassword) -> Self {
        self.auth.reset_password = Arc::new(stub);
        self
    }

    pub fn with_check_user(mut self, stub: StubCheckUser) -> Self {
        self.auth.check_user = Arc::new(stub);
        self
    }

    pub fn with_fetch_profile(mut self, stub: StubFetchProfile) -> Self {
        self.auth.fetch_profile = Arc::new(stub);
        self
    }

    pub fn with_update_profile(mut self, stub: StubUpdateProfile) -> Self {
        self.auth.update_profile = Arc::new(stub);
        self
    }

    pub fn with_change_password(mut self, stub: StubChangePassword) -> Self {
        self.auth.change_password = Arc::new(stub);
        self
    }

    pub fn with_delete_user(mut self, stub: StubDeleteUser) -> Self {
        self.auth.delete_user = Arc::new(stub);
        self
    }

    /* appointment */

    pub fn with_create_appointment(mut self, stub: StubCreateAppointment) -> Self {
        self.appointment.create = Arc::new(stub);
        self
    }

    pub fn with_get_appointments(mut self, stub: StubGetAppointments) -> Self {
        self.appointment.get_list = Arc::new(stub);
        self
    }

    pub fn with_get_single_appointment(mut self, stub: StubGetSingleAppointment) -> Self {
        self.appointment.get_single = Arc::new(stub);
        self
    }

    pub fn with_update_appointment(mut self, stub: StubUpdateAppointment) -> Self {
        self.appointment.update = Arc::new(stub);
        self
    }

    pub fn with_delete_appointment(mut self, stub: StubDeleteAppointment) -> Self {
        self.appointment.delete = Arc::new(stub);
        self
    }

    pub fn with_feedback_eligible(mut self, stub: StubFeedbackEligible) -> Self {
        self.appointment.feedback_eligible = Arc::new(stub);
        self
    }

    pub fn with_submit_feedback(mut self, stub: StubSubmitFeedback) -> Self {
        self.appointment.submit_feedback = Arc::new(stub);
        self
    }

    /* chat */

    pub fn with_list_messages(mut self, stub: StubListMessages) -> Self {
        self.chat.list = Arc::new(stub);
        self
    }

    pub fn with_send_message(mut self, stub: StubSendMessage) -> Self {
        self.chat.send = Arc::new(stub);
        self
    }

    pub fn with_mark_read(mut self, stub: StubMarkRead) -> Self {
        self.chat.mark_read = Arc::new(stub);
        self
    }

    pub fn with_unread_count(mut self, stub: StubUnreadCount) -> Self {
        self.chat.unread_count = Arc::new(stub);
        self
    }

    pub fn with_delete_message(mut self, stub: StubDeleteMessage) -> Self {
        self.chat.delete = Arc::new(stub);
        self
    }

    pub fn with_list_conversations(mut self, stub: StubListConversations) -> Self {
        self.chat.conversations = Arc::new(stub);
        self
    }

    pub fn with_polling(mut self, polling: PollingPolicy) -> Self {
        self.polling = polling;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            appointment: self.appointment,
            chat: self.chat,
            polling: self.polling,
        })
    }
}
