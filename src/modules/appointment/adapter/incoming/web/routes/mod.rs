mod create_appointment;
mod delete_appointment;
pub mod dto;
mod get_appointments;
mod get_feedback_eligible;
mod get_single_appointment;
mod get_user_appointments;
mod submit_feedback;
mod update_appointment;

pub use create_appointment::*;
pub use delete_appointment::*;
pub use get_appointments::*;
pub use get_feedback_eligible::*;
pub use get_single_appointment::*;
pub use get_user_appointments::*;
pub use submit_feedback::*;
pub use update_appointment::*;
