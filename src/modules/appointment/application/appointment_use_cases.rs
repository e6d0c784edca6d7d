use std::sync::Arc;

use crate::modules::appointment::application::ports::incoming::use_cases::{
    CreateAppointmentUseCase, DeleteAppointmentUseCase, GetAppointmentsUseCase,
    GetSingleAppointmentUseCase, ListFeedbackEligibleUseCase, SubmitFeedbackUseCase,
    UpdateAppointmentUseCase,
};

#[derive(Clone)]
pub struct AppointmentUseCases {
    pub create: Arc<dyn CreateAppointmentUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetAppointmentsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleAppointmentUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateAppointmentUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteAppointmentUseCase + Send + Sync>,
    pub feedback_eligible: Arc<dyn ListFeedbackEligibleUseCase + Send + Sync>,
    pub submit_feedback: Arc<dyn SubmitFeedbackUseCase + Send + Sync>,
}
