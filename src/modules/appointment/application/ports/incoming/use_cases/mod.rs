mod create_appointment;
mod delete_appointment;
mod get_appointments;
mod get_single_appointment;
mod list_feedback_eligible;
mod submit_feedback;
mod update_appointment;

pub use create_appointment::{CreateAppointmentError, CreateAppointmentInput, CreateAppointmentUseCase};
pub use delete_appointment::{DeleteAppointmentError, DeleteAppointmentUseCase};
pub use get_appointments::{GetAppointmentsError, GetAppointmentsUseCase};
pub use get_single_appointment::{GetSingleAppointmentError, GetSingleAppointmentUseCase};
pub use list_feedback_eligible::{ListFeedbackEligibleError, ListFeedbackEligibleUseCase};
pub use submit_feedback::{FeedbackInput, SubmitFeedbackError, SubmitFeedbackUseCase};
pub use update_appointment::{AppointmentPatch, UpdateAppointmentError, UpdateAppointmentUseCase};
