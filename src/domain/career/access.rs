use serde::Serialize;

use crate::entities::student::EnrollmentStatus;

/// Explanation shown in place of career history while the gate is closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LockedMessage {
    pub title: String,
    pub body: String,
}

impl LockedMessage {
    fn new(title: &str, body: &str) -> Self {
        LockedMessage {
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

/// Career history is an alumni feature. Records submitted under any other
/// status are never surfaced, even if they exist in storage.
pub fn can_show_career(status: EnrollmentStatus) -> bool {
    match status {
        EnrollmentStatus::Alumni => true,
        EnrollmentStatus::Active => false,
        EnrollmentStatus::OnLeave => false,
        EnrollmentStatus::Dropout => false,
    }
}

/// `None` means the gate is open. Each closed status carries its own copy
/// so the presentation layer never special-cases statuses itself.
pub fn locked_message(status: EnrollmentStatus) -> Option<LockedMessage> {
    match status {
        EnrollmentStatus::Alumni => None,
        EnrollmentStatus::Active => Some(LockedMessage::new(
            "Career tracking opens at graduation",
            "You are still enrolled. Once your status changes to alumni you \
             can record jobs, businesses, further study, and job searches here.",
        )),
        EnrollmentStatus::OnLeave => Some(LockedMessage::new(
            "Career tracking is paused",
            "Your enrollment is currently on leave. Career history becomes \
             available after you return and graduate.",
        )),
        EnrollmentStatus::Dropout => Some(LockedMessage::new(
            "Career tracking is not available",
            "Career history is only tracked for alumni. Contact the study \
             program office if your enrollment status is out of date.",
        )),
    }
}
