use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::application::domain::entities::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Accepted,
    Completed,
    Cancelled,
    Rescheduled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Accepted => "accepted",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Rescheduled => "rescheduled",
        }
    }

    pub fn accepts_feedback(&self) -> bool {
        matches!(self, AppointmentStatus::Accepted | AppointmentStatus::Completed)
    }

    pub fn feedback_eligible() -> Vec<AppointmentStatus> {
        vec![AppointmentStatus::Completed, AppointmentStatus::Accepted]
    }

    fn requires_admin(&self) -> bool {
        matches!(self, AppointmentStatus::Accepted | AppointmentStatus::Completed)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown appointment status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for AppointmentStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(AppointmentStatus::Pending),
            "accepted" => Ok(AppointmentStatus::Accepted),
            "completed" => Ok(AppointmentStatus::Completed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            "rescheduled" => Ok(AppointmentStatus::Rescheduled),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("Completed appointments can no longer be changed")]
    Completed,

    #[error("Cannot move an appointment from {from} to {to}")]
    NotAllowed {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },

    #[error("Only an administrator can mark an appointment {0}")]
    AdminRequired(AppointmentStatus),
}

/// Status an edit lands on.
///
/// Editing a cancelled appointment reschedules it unless the edit keeps it
/// cancelled, whatever status the caller asked for.
pub fn resolve_edit_target(
    current: AppointmentStatus,
    requested: Option<AppointmentStatus>,
) -> AppointmentStatus {
    match (current, requested) {
        (AppointmentStatus::Cancelled, Some(AppointmentStatus::Cancelled)) => {
            AppointmentStatus::Cancelled
        }
        (AppointmentStatus::Cancelled, _) => AppointmentStatus::Rescheduled,
        (_, Some(requested)) => requested,
        (current, None) => current,
    }
}

pub fn check_transition(
    from: AppointmentStatus,
    to: AppointmentStatus,
    role: Role,
) -> Result<(), TransitionError> {
    use AppointmentStatus::*;

    if from == Completed {
        return Err(TransitionError::Completed);
    }
    if from == to {
        return Ok(());
    }

    let allowed = matches!(
        (from, to),
        (Pending | Rescheduled, Accepted | Cancelled)
            | (Accepted, Completed | Cancelled)
            | (Cancelled, Rescheduled)
    );
    if !allowed {
        return Err(TransitionError::NotAllowed { from, to });
    }

    if to.requires_admin() && role != Role::Admin {
        return Err(TransitionError::AdminRequired(to));
    }

    Ok(())
}
