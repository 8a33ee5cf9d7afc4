use chrono::{DateTime, NaiveDate, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    #[display("competition")]
    Competition,
    #[display("organization")]
    Organization,
    #[display("certification")]
    Certification,
    #[display("community")]
    Community,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum AchievementLevel {
    #[display("campus")]
    Campus,
    #[display("regional")]
    Regional,
    #[display("national")]
    National,
    #[display("international")]
    International,
}

/// A logged non-academic achievement. Open to every enrollment status;
/// achievements are not alumni-gated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub id: Uuid,
    pub student_id: Uuid,
    pub title: String,
    pub category: AchievementCategory,
    pub level: AchievementLevel,
    pub achieved_on: NaiveDate,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewAchievement {
    #[validate(length(min = 3, max = 200, message = "Must be between 3 and 200 characters"))]
    pub title: String,

    pub category: AchievementCategory,

    pub level: AchievementLevel,

    pub achieved_on: NaiveDate,

    #[validate(length(max = 2000, message = "Must be at most 2000 characters"))]
    pub description: Option<String>,
}

impl NewAchievement {
    pub fn prepare_for_insert(&self, student_id: Uuid) -> Achievement {
        Achievement {
            id: Uuid::new_v4(),
            student_id,
            title: self.title.trim().to_string(),
            category: self.category,
            level: self.level,
            achieved_on: self.achieved_on,
            description: self.description.clone(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AchievementCreatedResponse {
    pub id: Uuid,
    pub message: String,
}
