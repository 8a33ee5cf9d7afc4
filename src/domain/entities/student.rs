use std::str::FromStr;

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::student_number::validate_student_number;
use crate::errors::AppError;

/// Academic standing of a student. Set through the administrative edit
/// endpoint only, never inferred from career data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    #[display("active")]
    Active,
    #[display("alumni")]
    Alumni,
    #[display("on_leave")]
    OnLeave,
    #[display("dropout")]
    Dropout,
}

impl FromStr for EnrollmentStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(EnrollmentStatus::Active),
            "alumni" => Ok(EnrollmentStatus::Alumni),
            "on_leave" => Ok(EnrollmentStatus::OnLeave),
            "dropout" => Ok(EnrollmentStatus::Dropout),
            other => Err(AppError::InvalidEnrollmentStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: Uuid,
    pub full_name: String,
    pub student_number: String,
    pub email: String,
    pub graduation_year: Option<i32>,
    pub enrollment_status: EnrollmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewStudent {
    #[validate(length(min = 2, max = 120, message = "Must be between 2 and 120 characters"))]
    pub full_name: String,

    #[validate(custom(
        function = "validate_student_number",
        message = "Must be two uppercase letters followed by 8 digits"
    ))]
    pub student_number: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(range(min = 1990, max = 2100, message = "Graduation year out of range"))]
    pub graduation_year: Option<i32>,
}

impl NewStudent {
    /// New profiles always start as active students; alumni status is an
    /// administrative promotion.
    pub fn prepare_for_insert(&self) -> Student {
        let now = Utc::now();
        Student {
            id: Uuid::new_v4(),
            full_name: self.full_name.trim().to_string(),
            student_number: self.student_number.clone(),
            email: self.email.to_lowercase(),
            graduation_year: self.graduation_year,
            enrollment_status: EnrollmentStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Administrative enrollment-status edit. The status arrives as a raw
/// string so unknown values surface as `InvalidEnrollmentStatus` instead
/// of a generic deserialization failure.
#[derive(Debug, Deserialize)]
pub struct UpdateEnrollmentStatus {
    pub enrollment_status: String,
    pub graduation_year: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct StudentCreatedResponse {
    pub id: Uuid,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub id: Uuid,
    pub full_name: String,
    pub student_number: String,
    pub email: String,
    pub graduation_year: Option<i32>,
    pub enrollment_status: EnrollmentStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        StudentResponse {
            id: student.id,
            full_name: student.full_name,
            student_number: student.student_number,
            email: student.email,
            graduation_year: student.graduation_year,
            enrollment_status: student.enrollment_status,
            created_at: student.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enrollment_status_parses_known_values() {
        assert_eq!(EnrollmentStatus::from_str("alumni").unwrap(), EnrollmentStatus::Alumni);
        assert_eq!(EnrollmentStatus::from_str("ON_LEAVE").unwrap(), EnrollmentStatus::OnLeave);
    }

    #[test]
    fn enrollment_status_rejects_unknown_values() {
        let err = EnrollmentStatus::from_str("graduated").unwrap_err();
        assert!(matches!(err, AppError::InvalidEnrollmentStatus(v) if v == "graduated"));
    }
}
