pub mod career;
pub mod entities;
pub mod student_number;
pub mod use_cases;
