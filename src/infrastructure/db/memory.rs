use anyhow::Context;
use chrono::{DateTime, NaiveDate, Utc};
use dashmap::DashMap;
use parking_lot::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::entities::{
    achievement::{Achievement, AchievementCategory, AchievementLevel},
    career::{CareerRecord, CareerStatus, StudyLevel},
    student::{EnrollmentStatus, Student},
    survey::{FieldRelevance, TracerSurvey},
};

/// In-memory store standing in for a future ORM-backed database. Keyed
/// collections live in `DashMap`s; append-only collections in locked
/// vectors. Repositories hand out snapshot clones, never references into
/// the store, so aggregation always works on a stable snapshot.
#[derive(Default)]
pub struct MemoryStore {
    pub students: DashMap<Uuid, Student>,
    pub career_records: RwLock<Vec<CareerRecord>>,
    pub achievements: RwLock<Vec<Achievement>>,
    pub surveys: DashMap<Uuid, TracerSurvey>,
}

fn demo_timestamp(raw: &str) -> anyhow::Result<DateTime<Utc>> {
    raw.parse::<DateTime<Utc>>()
        .with_context(|| format!("invalid demo timestamp: {raw}"))
}

fn demo_date(raw: &str) -> anyhow::Result<NaiveDate> {
    raw.parse::<NaiveDate>()
        .with_context(|| format!("invalid demo date: {raw}"))
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Small demo dataset for development environments: one alumni with a
    /// career history, one enrolled student, one student on leave.
    pub fn with_demo_data() -> anyhow::Result<Self> {
        let store = MemoryStore::new();

        let registered = demo_timestamp("2021-08-02T08:00:00Z")?;
        let alumni_id = Uuid::new_v4();
        store.students.insert(
            alumni_id,
            Student {
                id: alumni_id,
                full_name: "Raka Pratama".to_string(),
                student_number: "IF20170012".to_string(),
                email: "raka.pratama@example.ac.id".to_string(),
                graduation_year: Some(2021),
                enrollment_status: EnrollmentStatus::Alumni,
                created_at: registered,
                updated_at: demo_timestamp("2021-10-01T09:00:00Z")?,
            },
        );

        let active_id = Uuid::new_v4();
        store.students.insert(
            active_id,
            Student {
                id: active_id,
                full_name: "Dewi Anggraini".to_string(),
                student_number: "IF20220031".to_string(),
                email: "dewi.anggraini@example.ac.id".to_string(),
                graduation_year: None,
                enrollment_status: EnrollmentStatus::Active,
                created_at: demo_timestamp("2022-08-01T08:00:00Z")?,
                updated_at: demo_timestamp("2022-08-01T08:00:00Z")?,
            },
        );

        let on_leave_id = Uuid::new_v4();
        store.students.insert(
            on_leave_id,
            Student {
                id: on_leave_id,
                full_name: "Bima Saputra".to_string(),
                student_number: "SI20200007".to_string(),
                email: "bima.saputra@example.ac.id".to_string(),
                graduation_year: None,
                enrollment_status: EnrollmentStatus::OnLeave,
                created_at: demo_timestamp("2020-08-03T08:00:00Z")?,
                updated_at: demo_timestamp("2024-02-12T10:30:00Z")?,
            },
        );

        {
            let mut records = store.career_records.write();
            records.push(CareerRecord {
                id: Uuid::new_v4(),
                student_id: alumni_id,
                status: CareerStatus::Working {
                    company: "PT Lintas Data".to_string(),
                    position: "QA Analyst".to_string(),
                    is_active: false,
                },
                submitted_at: demo_timestamp("2022-03-10T09:15:00Z")?,
            });
            records.push(CareerRecord {
                id: Uuid::new_v4(),
                student_id: alumni_id,
                status: CareerStatus::Working {
                    company: "PT Nusantara Teknologi".to_string(),
                    position: "Backend Engineer".to_string(),
                    is_active: true,
                },
                submitted_at: demo_timestamp("2023-08-15T14:00:00Z")?,
            });
            records.push(CareerRecord {
                id: Uuid::new_v4(),
                student_id: alumni_id,
                status: CareerStatus::Entrepreneur {
                    business_name: "Kopi Svarga".to_string(),
                    sector: Some("food and beverage".to_string()),
                    is_active: true,
                },
                submitted_at: demo_timestamp("2024-01-20T11:45:00Z")?,
            });
            records.push(CareerRecord {
                id: Uuid::new_v4(),
                student_id: alumni_id,
                status: CareerStatus::Studying {
                    institution: "Universitas Gadjah Mada".to_string(),
                    program: "Software Engineering".to_string(),
                    level: StudyLevel::Master,
                },
                submitted_at: demo_timestamp("2024-09-02T08:30:00Z")?,
            });
        }

        store.achievements.write().push(Achievement {
            id: Uuid::new_v4(),
            student_id: active_id,
            title: "First place, national hackathon".to_string(),
            category: AchievementCategory::Competition,
            level: AchievementLevel::National,
            achieved_on: demo_date("2024-05-18")?,
            description: Some("48-hour civic-tech hackathon, team of three".to_string()),
            created_at: demo_timestamp("2024-05-20T09:30:00Z")?,
        });

        store.surveys.insert(
            alumni_id,
            TracerSurvey {
                id: Uuid::new_v4(),
                student_id: alumni_id,
                graduation_year: 2021,
                months_to_first_job: Some(4),
                field_relevance: FieldRelevance::High,
                satisfaction_score: 4,
                feedback: Some("More industry collaboration in final year, please.".to_string()),
                submitted_at: demo_timestamp("2022-05-02T13:20:00Z")?,
            },
        );

        info!(
            "Seeded demo data: {} students, {} career records",
            store.students.len(),
            store.career_records.read().len()
        );

        Ok(store)
    }
}
