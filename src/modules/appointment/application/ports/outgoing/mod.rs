pub mod appointment_query;
pub mod appointment_repository;

pub use appointment_query::{AppointmentFilter, AppointmentQuery, AppointmentQueryError};
pub use appointment_repository::{
    AppointmentChanges, AppointmentRepository, AppointmentRepositoryError, NewAppointment,
    PatchField,
};
