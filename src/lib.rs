use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{career, entities, student_number, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, utils};

use db::memory::MemoryStore;
use repositories::memory_repo::{
    MemoryAchievementRepo, MemoryCareerRepo, MemoryStudentRepo, MemorySurveyRepo,
};
use use_cases::{
    achievements::AchievementHandler, careers::CareerHandler, dashboard::DashboardHandler,
    students::StudentHandler, surveys::SurveyHandler,
};

pub type AppStudentHandler = StudentHandler<MemoryStudentRepo>;
pub type AppCareerHandler = CareerHandler<MemoryStudentRepo, MemoryCareerRepo>;
pub type AppAchievementHandler = AchievementHandler<MemoryStudentRepo, MemoryAchievementRepo>;
pub type AppSurveyHandler = SurveyHandler<MemoryStudentRepo, MemorySurveyRepo>;
pub type AppDashboardHandler =
    DashboardHandler<MemoryStudentRepo, MemoryCareerRepo, MemoryAchievementRepo, MemorySurveyRepo>;

pub struct AppState {
    pub students: AppStudentHandler,
    pub careers: AppCareerHandler,
    pub achievements: AppAchievementHandler,
    pub surveys: AppSurveyHandler,
    pub dashboard: AppDashboardHandler,
}

impl AppState {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        let student_repo = MemoryStudentRepo::new(store.clone());
        let career_repo = MemoryCareerRepo::new(store.clone());
        let achievement_repo = MemoryAchievementRepo::new(store.clone());
        let survey_repo = MemorySurveyRepo::new(store);

        AppState {
            students: StudentHandler::new(student_repo.clone()),
            careers: CareerHandler::new(student_repo.clone(), career_repo.clone()),
            achievements: AchievementHandler::new(student_repo.clone(), achievement_repo.clone()),
            surveys: SurveyHandler::new(student_repo.clone(), survey_repo.clone()),
            dashboard: DashboardHandler::new(
                student_repo,
                career_repo,
                achievement_repo,
                survey_repo,
            ),
        }
    }
}
