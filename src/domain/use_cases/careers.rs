use uuid::Uuid;

use crate::{
    career::access::{can_show_career, locked_message},
    career::aggregate::aggregate,
    entities::career::{
        CareerRecord, CareerRecordCreatedResponse, CareerSummaryResponse, NewCareerRecord,
    },
    entities::student::{EnrollmentStatus, Student},
    errors::AppError,
    repositories::{career::CareerRepository, student::StudentRepository},
};

/// Gate applied to career reads and writes alike: non-alumni requests are
/// rejected with the same copy the profile page shows.
pub(crate) fn ensure_career_open(status: EnrollmentStatus) -> Result<(), AppError> {
    if can_show_career(status) {
        return Ok(());
    }
    match locked_message(status) {
        Some(msg) => Err(AppError::CareerLocked(msg)),
        None => Err(AppError::InternalError(
            "career gate closed without explanation".to_string(),
        )),
    }
}

pub struct CareerHandler<R, C>
where
    R: StudentRepository,
    C: CareerRepository,
{
    pub student_repo: R,
    pub career_repo: C,
}

impl<R, C> CareerHandler<R, C>
where
    R: StudentRepository,
    C: CareerRepository,
{
    pub fn new(student_repo: R, career_repo: C) -> Self {
        CareerHandler {
            student_repo,
            career_repo,
        }
    }

    async fn require_student(&self, id: &Uuid) -> Result<Student, AppError> {
        self.student_repo
            .get_student_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student profile not found".to_string()))
    }

    /// Appends a career record for an alumni. Submissions never update in
    /// place; a changed status means a new record.
    pub async fn submit_record(
        &self,
        student_id: Uuid,
        request: NewCareerRecord,
    ) -> Result<CareerRecordCreatedResponse, AppError> {
        let student = self.require_student(&student_id).await?;
        ensure_career_open(student.enrollment_status)?;

        request.status.ensure_well_formed()?;

        let record = request.prepare_for_insert(student_id);
        let id = self.career_repo.append_record(&record).await?;

        tracing::info!(
            "Career record {} ({}) submitted for student {}",
            id,
            record.status.kind_label(),
            student_id
        );

        Ok(CareerRecordCreatedResponse {
            id,
            message: "Career record submitted successfully".to_string(),
        })
    }

    /// Computes the profile-page career summary: the locked explanation
    /// while the gate is closed, the aggregated status once it opens.
    pub async fn career_summary(
        &self,
        student_id: Uuid,
    ) -> Result<CareerSummaryResponse, AppError> {
        let student = self.require_student(&student_id).await?;

        match locked_message(student.enrollment_status) {
            Some(msg) => Ok(CareerSummaryResponse::Locked {
                title: msg.title,
                body: msg.body,
            }),
            None => {
                let records = self.career_repo.records_for_student(&student_id).await?;
                let aggregated = aggregate(&records)?;
                Ok(CareerSummaryResponse::Open(aggregated))
            }
        }
    }

    /// Raw submission history, newest first, alumni only.
    pub async fn career_history(
        &self,
        student_id: Uuid,
    ) -> Result<Vec<CareerRecord>, AppError> {
        let student = self.require_student(&student_id).await?;
        ensure_career_open(student.enrollment_status)?;

        let mut records = self.career_repo.records_for_student(&student_id).await?;
        records.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));

        Ok(records)
    }
}
