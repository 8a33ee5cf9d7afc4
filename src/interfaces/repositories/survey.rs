use std::sync::Arc;

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use crate::{
    db::memory::MemoryStore,
    entities::survey::TracerSurvey,
    errors::AppError,
    repositories::memory_repo::MemorySurveyRepo,
};

#[async_trait]
pub trait SurveyRepository: Send + Sync {
    /// Inserts the tracer response; a second response for the same
    /// student is a conflict
    async fn insert_survey(&self, survey: &TracerSurvey) -> Result<Uuid, AppError>;

    async fn survey_for_student(
        &self,
        student_id: &Uuid,
    ) -> Result<Option<TracerSurvey>, AppError>;

    async fn list_all(&self) -> Result<Vec<TracerSurvey>, AppError>;
}

impl MemorySurveyRepo {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        MemorySurveyRepo { store }
    }
}

#[async_trait]
impl SurveyRepository for MemorySurveyRepo {
    async fn insert_survey(&self, survey: &TracerSurvey) -> Result<Uuid, AppError> {
        match self.store.surveys.entry(survey.student_id) {
            Entry::Occupied(_) => Err(AppError::Conflict(
                "Tracer survey already submitted".to_string(),
            )),
            Entry::Vacant(slot) => {
                slot.insert(survey.clone());
                Ok(survey.id)
            }
        }
    }

    async fn survey_for_student(
        &self,
        student_id: &Uuid,
    ) -> Result<Option<TracerSurvey>, AppError> {
        Ok(self.store.surveys.get(student_id).map(|entry| entry.clone()))
    }

    async fn list_all(&self) -> Result<Vec<TracerSurvey>, AppError> {
        let mut surveys: Vec<TracerSurvey> = self
            .store
            .surveys
            .iter()
            .map(|entry| entry.clone())
            .collect();

        surveys.sort_by(|a, b| a.submitted_at.cmp(&b.submitted_at));
        Ok(surveys)
    }
}
