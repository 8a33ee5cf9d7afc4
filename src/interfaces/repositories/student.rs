use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::{
    db::memory::MemoryStore,
    entities::student::{EnrollmentStatus, Student},
    errors::AppError,
    repositories::memory_repo::MemoryStudentRepo,
};

#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Store reachability probe for the health endpoint
    async fn check_store(&self) -> Result<(), AppError>;

    async fn student_exists(&self, id: &Uuid) -> Result<bool, AppError>;

    async fn student_number_exists(&self, student_number: &str) -> Result<bool, AppError>;

    async fn email_exists(&self, email: &str) -> Result<bool, AppError>;

    async fn count_students(&self) -> Result<u64, AppError>;

    /// Inserts a profile; duplicate student number or email is a conflict
    async fn create_student(&self, student: &Student) -> Result<Uuid, AppError>;

    async fn get_student_by_id(&self, id: &Uuid) -> Result<Option<Student>, AppError>;

    /// Profiles in stable (student-number) order, optionally filtered
    async fn list_students(
        &self,
        status: Option<EnrollmentStatus>,
    ) -> Result<Vec<Student>, AppError>;

    async fn update_enrollment_status(
        &self,
        id: &Uuid,
        status: EnrollmentStatus,
        graduation_year: Option<i32>,
    ) -> Result<Student, AppError>;
}

impl MemoryStudentRepo {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        MemoryStudentRepo { store }
    }
}

#[async_trait]
impl StudentRepository for MemoryStudentRepo {
    async fn check_store(&self) -> Result<(), AppError> {
        // Touching the map is enough; the store cannot be unreachable.
        let _ = self.store.students.len();
        Ok(())
    }

    async fn student_exists(&self, id: &Uuid) -> Result<bool, AppError> {
        Ok(self.store.students.contains_key(id))
    }

    async fn student_number_exists(&self, student_number: &str) -> Result<bool, AppError> {
        Ok(self
            .store
            .students
            .iter()
            .any(|entry| entry.student_number == student_number))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let needle = email.to_lowercase();
        Ok(self
            .store
            .students
            .iter()
            .any(|entry| entry.email == needle))
    }

    async fn count_students(&self) -> Result<u64, AppError> {
        Ok(self.store.students.len() as u64)
    }

    async fn create_student(&self, student: &Student) -> Result<Uuid, AppError> {
        if self.student_number_exists(&student.student_number).await? {
            return Err(AppError::Conflict("Student number already registered".to_string()));
        }
        if self.email_exists(&student.email).await? {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        self.store.students.insert(student.id, student.clone());
        Ok(student.id)
    }

    async fn get_student_by_id(&self, id: &Uuid) -> Result<Option<Student>, AppError> {
        Ok(self.store.students.get(id).map(|entry| entry.clone()))
    }

    async fn list_students(
        &self,
        status: Option<EnrollmentStatus>,
    ) -> Result<Vec<Student>, AppError> {
        let mut students: Vec<Student> = self
            .store
            .students
            .iter()
            .filter(|entry| status.map_or(true, |s| entry.enrollment_status == s))
            .map(|entry| entry.clone())
            .collect();

        students.sort_by(|a, b| a.student_number.cmp(&b.student_number));
        Ok(students)
    }

    async fn update_enrollment_status(
        &self,
        id: &Uuid,
        status: EnrollmentStatus,
        graduation_year: Option<i32>,
    ) -> Result<Student, AppError> {
        match self.store.students.get_mut(id) {
            Some(mut entry) => {
                entry.enrollment_status = status;
                entry.graduation_year = graduation_year;
                entry.updated_at = Utc::now();
                Ok(entry.clone())
            }
            None => Err(AppError::NotFound("Student profile not found".to_string())),
        }
    }
}
