mod create_appointment_service;
mod delete_appointment_service;
mod get_appointments_service;
mod get_single_appointment_service;
mod list_feedback_eligible_service;
mod submit_feedback_service;
mod update_appointment_service;

pub use create_appointment_service::CreateAppointmentService;
pub use delete_appointment_service::DeleteAppointmentService;
pub use get_appointments_service::GetAppointmentsService;
pub use get_single_appointment_service::GetSingleAppointmentService;
pub use list_feedback_eligible_service::ListFeedbackEligibleService;
pub use submit_feedback_service::SubmitFeedbackService;
pub use update_appointment_service::UpdateAppointmentService;
