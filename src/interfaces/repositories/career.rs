use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::memory::MemoryStore,
    entities::career::CareerRecord,
    errors::AppError,
    repositories::memory_repo::MemoryCareerRepo,
};

#[async_trait]
pub trait CareerRepository: Send + Sync {
    /// Appends one submission; records are never updated in place
    async fn append_record(&self, record: &CareerRecord) -> Result<Uuid, AppError>;

    /// Snapshot copy of one student's records, in submission order
    async fn records_for_student(
        &self,
        student_id: &Uuid,
    ) -> Result<Vec<CareerRecord>, AppError>;
}

impl MemoryCareerRepo {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        MemoryCareerRepo { store }
    }
}

#[async_trait]
impl CareerRepository for MemoryCareerRepo {
    async fn append_record(&self, record: &CareerRecord) -> Result<Uuid, AppError> {
        self.store.career_records.write().push(record.clone());
        Ok(record.id)
    }

    async fn records_for_student(
        &self,
        student_id: &Uuid,
    ) -> Result<Vec<CareerRecord>, AppError> {
        Ok(self
            .store
            .career_records
            .read()
            .iter()
            .filter(|record| record.student_id == *student_id)
            .cloned()
            .collect())
    }
}
