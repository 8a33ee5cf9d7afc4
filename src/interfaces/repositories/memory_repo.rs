use std::sync::Arc;

use crate::db::memory::MemoryStore;

#[derive(Clone)]
pub struct MemoryStudentRepo {
    pub store: Arc<MemoryStore>,
}

#[derive(Clone)]
pub struct MemoryCareerRepo {
    pub store: Arc<MemoryStore>,
}

#[derive(Clone)]
pub struct MemoryAchievementRepo {
    pub store: Arc<MemoryStore>,
}

#[derive(Clone)]
pub struct MemorySurveyRepo {
    pub store: Arc<MemoryStore>,
}
