use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum StudyLevel {
    #[display("diploma")]
    Diploma,
    #[display("bachelor")]
    Bachelor,
    #[display("master")]
    Master,
    #[display("doctorate")]
    Doctorate,
}

/// Status-specific payload of a career record. The tagged representation
/// makes "payload matches tag" structural; the remaining malformed case
/// (a blank required field) is caught by `ensure_well_formed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CareerStatus {
    Working {
        company: String,
        position: String,
        is_active: bool,
    },
    Searching {
        target_field: String,
        months_searching: i32,
    },
    Entrepreneur {
        business_name: String,
        sector: Option<String>,
        is_active: bool,
    },
    Studying {
        institution: String,
        program: String,
        level: StudyLevel,
    },
}

impl CareerStatus {
    /// Rejects records whose tag-required fields are blank, so the
    /// aggregator never renders an empty name.
    pub fn ensure_well_formed(&self) -> Result<(), AppError> {
        match self {
            CareerStatus::Working { company, position, .. } => {
                if company.trim().is_empty() {
                    return Err(AppError::MalformedCareerRecord(
                        "working record is missing an employer".to_string(),
                    ));
                }
                if position.trim().is_empty() {
                    return Err(AppError::MalformedCareerRecord(
                        "working record is missing a position".to_string(),
                    ));
                }
                Ok(())
            }
            CareerStatus::Searching { target_field, months_searching } => {
                if target_field.trim().is_empty() {
                    return Err(AppError::MalformedCareerRecord(
                        "searching record is missing a target field".to_string(),
                    ));
                }
                if *months_searching < 0 {
                    return Err(AppError::MalformedCareerRecord(
                        "searching duration cannot be negative".to_string(),
                    ));
                }
                Ok(())
            }
            CareerStatus::Entrepreneur { business_name, .. } => {
                if business_name.trim().is_empty() {
                    return Err(AppError::MalformedCareerRecord(
                        "entrepreneur record is missing a business name".to_string(),
                    ));
                }
                Ok(())
            }
            CareerStatus::Studying { institution, program, .. } => {
                if institution.trim().is_empty() {
                    return Err(AppError::MalformedCareerRecord(
                        "studying record is missing an institution".to_string(),
                    ));
                }
                if program.trim().is_empty() {
                    return Err(AppError::MalformedCareerRecord(
                        "studying record is missing a program".to_string(),
                    ));
                }
                Ok(())
            }
        }
    }

    pub fn kind_label(&self) -> &'static str {
        match self {
            CareerStatus::Working { .. } => "working",
            CareerStatus::Searching { .. } => "searching",
            CareerStatus::Entrepreneur { .. } => "entrepreneur",
            CareerStatus::Studying { .. } => "studying",
        }
    }
}

/// One submitted snapshot of a student's employment/business/study/search
/// state. Append-only: "update status" means submitting a new record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerRecord {
    pub id: Uuid,
    pub student_id: Uuid,
    #[serde(flatten)]
    pub status: CareerStatus,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct NewCareerRecord {
    #[serde(flatten)]
    pub status: CareerStatus,
}

impl NewCareerRecord {
    pub fn prepare_for_insert(&self, student_id: Uuid) -> CareerRecord {
        CareerRecord {
            id: Uuid::new_v4(),
            student_id,
            status: self.status.clone(),
            submitted_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CareerRecordCreatedResponse {
    pub id: Uuid,
    pub message: String,
}

/// Computed display summary for one student's record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedStatus {
    pub has_active_career: bool,
    pub primary_text: String,
    pub details: Vec<String>,
}

/// What the profile page gets back: either the gate's explanation or the
/// aggregated summary. The empty-state copy for `has_active_career ==
/// false` is the presentation layer's business.
#[derive(Debug, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CareerSummaryResponse {
    Locked { title: String, body: String },
    Open(AggregatedStatus),
}
