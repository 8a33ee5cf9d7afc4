pub mod achievement;
pub mod career;
pub mod dashboard;
pub mod student;
pub mod survey;
