pub mod achievements;
pub mod careers;
pub mod dashboard;
pub mod home;
pub mod json_error;
pub mod students;
pub mod surveys;
pub mod system;
