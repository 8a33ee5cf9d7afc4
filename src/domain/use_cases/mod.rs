pub mod achievements;
pub mod careers;
pub mod dashboard;
pub mod students;
pub mod surveys;
