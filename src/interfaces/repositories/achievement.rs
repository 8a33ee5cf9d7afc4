use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::memory::MemoryStore,
    entities::achievement::Achievement,
    errors::AppError,
    repositories::memory_repo::MemoryAchievementRepo,
};

#[async_trait]
pub trait AchievementRepository: Send + Sync {
    async fn log_achievement(&self, achievement: &Achievement) -> Result<Uuid, AppError>;

    async fn achievements_for_student(
        &self,
        student_id: &Uuid,
    ) -> Result<Vec<Achievement>, AppError>;

    async fn list_all(&self) -> Result<Vec<Achievement>, AppError>;
}

impl MemoryAchievementRepo {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        MemoryAchievementRepo { store }
    }
}

#[async_trait]
impl AchievementRepository for MemoryAchievementRepo {
    async fn log_achievement(&self, achievement: &Achievement) -> Result<Uuid, AppError> {
        self.store.achievements.write().push(achievement.clone());
        Ok(achievement.id)
    }

    async fn achievements_for_student(
        &self,
        student_id: &Uuid,
    ) -> Result<Vec<Achievement>, AppError> {
        Ok(self
            .store
            .achievements
            .read()
            .iter()
            .filter(|achievement| achievement.student_id == *student_id)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Achievement>, AppError> {
        Ok(self.store.achievements.read().clone())
    }
}
