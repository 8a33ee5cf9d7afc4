use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::achievement::{Achievement, AchievementCreatedResponse, NewAchievement},
    errors::AppError,
    repositories::{achievement::AchievementRepository, student::StudentRepository},
};

pub struct AchievementHandler<R, A>
where
    R: StudentRepository,
    A: AchievementRepository,
{
    pub student_repo: R,
    pub achievement_repo: A,
}

impl<R, A> AchievementHandler<R, A>
where
    R: StudentRepository,
    A: AchievementRepository,
{
    pub fn new(student_repo: R, achievement_repo: A) -> Self {
        AchievementHandler {
            student_repo,
            achievement_repo,
        }
    }

    /// Logs a non-academic achievement. Open to every enrollment status.
    pub async fn log_achievement(
        &self,
        student_id: Uuid,
        request: NewAchievement,
    ) -> Result<AchievementCreatedResponse, AppError> {
        request.validate()?;

        if !self.student_repo.student_exists(&student_id).await? {
            return Err(AppError::NotFound("Student profile not found".to_string()));
        }

        let achievement = request.prepare_for_insert(student_id);
        let id = self.achievement_repo.log_achievement(&achievement).await?;

        tracing::info!(
            "Achievement {} ({}) logged for student {}",
            id,
            achievement.level,
            student_id
        );

        Ok(AchievementCreatedResponse {
            id,
            message: "Achievement logged successfully".to_string(),
        })
    }

    /// A student's achievements, newest first.
    pub async fn achievements_for_student(
        &self,
        student_id: Uuid,
    ) -> Result<Vec<Achievement>, AppError> {
        if !self.student_repo.student_exists(&student_id).await? {
            return Err(AppError::NotFound("Student profile not found".to_string()));
        }

        let mut achievements = self
            .achievement_repo
            .achievements_for_student(&student_id)
            .await?;
        achievements.sort_by(|a, b| b.achieved_on.cmp(&a.achieved_on));

        Ok(achievements)
    }

    pub async fn all_achievements(&self) -> Result<Vec<Achievement>, AppError> {
        let mut achievements = self.achievement_repo.list_all().await?;
        achievements.sort_by(|a, b| b.achieved_on.cmp(&a.achieved_on));

        Ok(achievements)
    }
}
