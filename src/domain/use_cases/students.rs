use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::student::{
        EnrollmentStatus, NewStudent, StudentCreatedResponse, StudentResponse,
        UpdateEnrollmentStatus,
    },
    errors::AppError,
    repositories::student::StudentRepository,
};

pub struct StudentHandler<R>
where
    R: StudentRepository,
{
    pub student_repo: R,
}

impl<R> StudentHandler<R>
where
    R: StudentRepository,
{
    pub fn new(student_repo: R) -> Self {
        StudentHandler { student_repo }
    }

    /// Registers a student profile after validation and duplicate checks
    pub async fn register_student(
        &self,
        request: NewStudent,
    ) -> Result<StudentCreatedResponse, AppError> {
        request.validate()?;

        if self.student_repo.student_number_exists(&request.student_number).await? {
            return Err(AppError::Conflict("Student number already registered".to_string()));
        }
        if self.student_repo.email_exists(&request.email).await? {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let student = request.prepare_for_insert();
        let id = self.student_repo.create_student(&student).await?;

        tracing::info!("Registered student profile {}", id);

        Ok(StudentCreatedResponse {
            id,
            message: "Student profile created successfully".to_string(),
        })
    }

    /// Retrieves one student profile
    pub async fn get_student(&self, id: Uuid) -> Result<StudentResponse, AppError> {
        self.student_repo
            .get_student_by_id(&id)
            .await?
            .map(StudentResponse::from)
            .ok_or_else(|| AppError::NotFound("Student profile not found".to_string()))
    }

    /// Lists profiles, optionally filtered by enrollment status
    pub async fn list_students(
        &self,
        status: Option<EnrollmentStatus>,
    ) -> Result<Vec<StudentResponse>, AppError> {
        let students = self.student_repo.list_students(status).await?;
        Ok(students.into_iter().map(StudentResponse::from).collect())
    }

    /// Administrative enrollment-status edit, the only way the status
    /// changes. Promoting to alumni requires a graduation year.
    pub async fn update_enrollment_status(
        &self,
        id: Uuid,
        request: UpdateEnrollmentStatus,
    ) -> Result<StudentResponse, AppError> {
        let status = request.enrollment_status.parse::<EnrollmentStatus>()?;

        let current = self
            .student_repo
            .get_student_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student profile not found".to_string()))?;

        let graduation_year = request.graduation_year.or(current.graduation_year);
        if status == EnrollmentStatus::Alumni && graduation_year.is_none() {
            return Err(AppError::InvalidInput(
                "Graduation year is required when promoting to alumni".to_string(),
            ));
        }

        let updated = self
            .student_repo
            .update_enrollment_status(&id, status, graduation_year)
            .await?;

        tracing::info!("Enrollment status of {} set to {}", id, status);

        Ok(updated.into())
    }
}
