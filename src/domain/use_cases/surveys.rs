use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::survey::{NewTracerSurvey, SurveyCreatedResponse, TracerSurvey},
    errors::AppError,
    repositories::{student::StudentRepository, survey::SurveyRepository},
};

use super::careers::ensure_career_open;

pub struct SurveyHandler<R, S>
where
    R: StudentRepository,
    S: SurveyRepository,
{
    pub student_repo: R,
    pub survey_repo: S,
}

impl<R, S> SurveyHandler<R, S>
where
    R: StudentRepository,
    S: SurveyRepository,
{
    pub fn new(student_repo: R, survey_repo: S) -> Self {
        SurveyHandler {
            student_repo,
            survey_repo,
        }
    }

    /// Records the tracer-study response. One per alumni; the gate that
    /// locks career history also locks the survey.
    pub async fn submit_survey(
        &self,
        student_id: Uuid,
        request: NewTracerSurvey,
    ) -> Result<SurveyCreatedResponse, AppError> {
        request.validate()?;

        let student = self
            .student_repo
            .get_student_by_id(&student_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student profile not found".to_string()))?;
        ensure_career_open(student.enrollment_status)?;

        let survey = request.prepare_for_insert(student_id);
        let id = self.survey_repo.insert_survey(&survey).await?;

        tracing::info!("Tracer survey {} recorded for student {}", id, student_id);

        Ok(SurveyCreatedResponse {
            id,
            message: "Tracer survey recorded successfully".to_string(),
        })
    }

    pub async fn survey_for_student(
        &self,
        student_id: Uuid,
    ) -> Result<TracerSurvey, AppError> {
        if !self.student_repo.student_exists(&student_id).await? {
            return Err(AppError::NotFound("Student profile not found".to_string()));
        }

        self.survey_repo
            .survey_for_student(&student_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tracer survey not submitted yet".to_string()))
    }
}
