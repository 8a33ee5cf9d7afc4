use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRelevance {
    High,
    Medium,
    Low,
}

/// One tracer-study response per alumni.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracerSurvey {
    pub id: Uuid,
    pub student_id: Uuid,
    pub graduation_year: i32,
    /// Months from graduation to first job; absent while still searching.
    pub months_to_first_job: Option<i32>,
    pub field_relevance: FieldRelevance,
    pub satisfaction_score: i16,
    pub feedback: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewTracerSurvey {
    #[validate(range(min = 1990, max = 2100, message = "Graduation year out of range"))]
    pub graduation_year: i32,

    #[validate(range(min = 0, max = 240, message = "Must be between 0 and 240"))]
    pub months_to_first_job: Option<i32>,

    pub field_relevance: FieldRelevance,

    #[validate(range(min = 1, max = 5, message = "Must be between 1 and 5"))]
    pub satisfaction_score: i16,

    #[validate(length(max = 2000, message = "Must be at most 2000 characters"))]
    pub feedback: Option<String>,
}

impl NewTracerSurvey {
    pub fn prepare_for_insert(&self, student_id: Uuid) -> TracerSurvey {
        TracerSurvey {
            id: Uuid::new_v4(),
            student_id,
            graduation_year: self.graduation_year,
            months_to_first_job: self.months_to_first_job,
            field_relevance: self.field_relevance,
            satisfaction_score: self.satisfaction_score,
            feedback: self.feedback.clone(),
            submitted_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SurveyCreatedResponse {
    pub id: Uuid,
    pub message: String,
}
