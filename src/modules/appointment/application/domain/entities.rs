use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::status::AppointmentStatus;
use crate::auth::application::domain::entities::UserId;

pub const MAX_FEEDBACK_COMMENT: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// 1..=5
    pub rating: u8,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: Uuid,
    pub user_id: UserId,
    pub service_name: String,
    pub username: String,
    pub email: String,
    pub contact_number: String,
    pub description: Option<String>,
    pub medical_history: Option<String>,
    pub allergies: Option<String>,
    pub date: NaiveDate,
    /// Kept exactly as the patient entered it.
    pub time: String,
    pub status: AppointmentStatus,
    pub cancellation_reason: Option<String>,
    pub feedback: Option<Feedback>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
