use crate::{
    career::aggregate::current_kinds,
    entities::achievement::AchievementLevel,
    entities::dashboard::{
        AchievementStats, AlumniCareerBreakdown, DashboardStats, EnrollmentBreakdown,
        InsightReport, SurveyStats,
    },
    entities::student::EnrollmentStatus,
    errors::AppError,
    repositories::{
        achievement::AchievementRepository, career::CareerRepository,
        student::StudentRepository, survey::SurveyRepository,
    },
};

pub struct DashboardHandler<R, C, A, S>
where
    R: StudentRepository,
    C: CareerRepository,
    A: AchievementRepository,
    S: SurveyRepository,
{
    pub student_repo: R,
    pub career_repo: C,
    pub achievement_repo: A,
    pub survey_repo: S,
}

impl<R, C, A, S> DashboardHandler<R, C, A, S>
where
    R: StudentRepository,
    C: CareerRepository,
    A: AchievementRepository,
    S: SurveyRepository,
{
    pub fn new(student_repo: R, career_repo: C, achievement_repo: A, survey_repo: S) -> Self {
        DashboardHandler {
            student_repo,
            career_repo,
            achievement_repo,
            survey_repo,
        }
    }

    /// Aggregate counts for the admin dashboard. A malformed record set
    /// skips that alumni in the career breakdown instead of failing the
    /// whole batch.
    pub async fn compute_stats(&self) -> Result<DashboardStats, AppError> {
        let students = self.student_repo.list_students(None).await?;

        let mut enrollment = EnrollmentBreakdown::default();
        for student in &students {
            match student.enrollment_status {
                EnrollmentStatus::Active => enrollment.active += 1,
                EnrollmentStatus::Alumni => enrollment.alumni += 1,
                EnrollmentStatus::OnLeave => enrollment.on_leave += 1,
                EnrollmentStatus::Dropout => enrollment.dropout += 1,
            }
        }

        let mut alumni_career = AlumniCareerBreakdown::default();
        for student in students
            .iter()
            .filter(|s| s.enrollment_status == EnrollmentStatus::Alumni)
        {
            let records = self.career_repo.records_for_student(&student.id).await?;
            match current_kinds(&records) {
                Ok(kinds) => {
                    if kinds.working {
                        alumni_career.working += 1;
                    }
                    if kinds.entrepreneur {
                        alumni_career.entrepreneur += 1;
                    }
                    if kinds.searching {
                        alumni_career.searching += 1;
                    }
                    if kinds.studying {
                        alumni_career.studying += 1;
                    }
                    if kinds.working || kinds.entrepreneur {
                        alumni_career.employed += 1;
                    }
                    if !kinds.any() {
                        alumni_career.no_current_record += 1;
                    }
                }
                Err(AppError::MalformedCareerRecord(msg)) => {
                    tracing::warn!(
                        "Skipping alumni {} in career breakdown: {}",
                        student.id,
                        msg
                    );
                    alumni_career.aggregation_skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        let mut achievements = AchievementStats::default();
        for achievement in self.achievement_repo.list_all().await? {
            achievements.total += 1;
            match achievement.level {
                AchievementLevel::Campus => achievements.campus += 1,
                AchievementLevel::Regional => achievements.regional += 1,
                AchievementLevel::National => achievements.national += 1,
                AchievementLevel::International => achievements.international += 1,
            }
        }

        let surveys = self.survey_repo.list_all().await?;
        let responses = surveys.len() as u64;
        let response_rate_pct = if enrollment.alumni == 0 {
            0.0
        } else {
            responses as f64 * 100.0 / enrollment.alumni as f64
        };
        let avg_satisfaction = if surveys.is_empty() {
            None
        } else {
            let sum: i64 = surveys.iter().map(|s| i64::from(s.satisfaction_score)).sum();
            Some(sum as f64 / surveys.len() as f64)
        };
        let waits: Vec<i32> = surveys
            .iter()
            .filter_map(|s| s.months_to_first_job)
            .collect();
        let avg_months_to_first_job = if waits.is_empty() {
            None
        } else {
            let sum: i64 = waits.iter().map(|m| i64::from(*m)).sum();
            Some(sum as f64 / waits.len() as f64)
        };

        Ok(DashboardStats {
            total_students: students.len() as u64,
            enrollment,
            alumni_career,
            achievements,
            survey: SurveyStats {
                responses,
                response_rate_pct,
                avg_satisfaction,
                avg_months_to_first_job,
            },
        })
    }
}

/// Rule-based narrative over the computed statistics. Deterministic text
/// templating only; the same stats always produce the same report.
pub fn build_insight(stats: &DashboardStats) -> InsightReport {
    let alumni = stats.enrollment.alumni;
    let career = &stats.alumni_career;
    let mut highlights = Vec::new();

    if alumni == 0 {
        return InsightReport {
            summary: format!(
                "{} students tracked; employment insight becomes available once the first cohort graduates.",
                stats.total_students
            ),
            highlights,
        };
    }

    let measured = alumni.saturating_sub(career.aggregation_skipped);
    if measured > 0 {
        let employment_rate = career.employed as f64 * 100.0 / measured as f64;
        let line = if employment_rate >= 75.0 {
            format!(
                "Strong alumni absorption: {:.1}% hold an active job or business.",
                employment_rate
            )
        } else if employment_rate >= 40.0 {
            format!(
                "Moderate alumni absorption: {:.1}% hold an active job or business.",
                employment_rate
            )
        } else {
            format!(
                "Low alumni absorption: only {:.1}% hold an active job or business.",
                employment_rate
            )
        };
        highlights.push(line);
    }

    if career.searching > 0 {
        highlights.push(format!(
            "{} alumni are still searching for work; career-services outreach could target them.",
            career.searching
        ));
    }
    if career.studying > 0 {
        highlights.push(format!(
            "{} alumni continued into further study.",
            career.studying
        ));
    }
    if career.aggregation_skipped > 0 {
        highlights.push(format!(
            "{} alumni have malformed career data and were skipped; their records need cleanup.",
            career.aggregation_skipped
        ));
    }

    if stats.achievements.international > 0 {
        highlights.push(format!(
            "{} international-level achievements logged, worth featuring on the landing page.",
            stats.achievements.international
        ));
    } else if stats.achievements.national > 0 {
        highlights.push(format!(
            "{} national-level achievements logged.",
            stats.achievements.national
        ));
    }

    if stats.survey.responses == 0 {
        highlights.push("No tracer-survey responses yet.".to_string());
    } else {
        if stats.survey.response_rate_pct < 50.0 {
            highlights.push(format!(
                "Tracer-survey coverage is thin ({:.1}% of alumni); a reminder campaign would improve the data.",
                stats.survey.response_rate_pct
            ));
        }
        if let Some(avg) = stats.survey.avg_satisfaction {
            if avg >= 4.0 {
                highlights.push(format!(
                    "Alumni rate the study program highly (average satisfaction {:.1}/5).",
                    avg
                ));
            } else if avg < 2.5 {
                highlights.push(format!(
                    "Alumni satisfaction is low (average {:.1}/5).",
                    avg
                ));
            }
        }
        if let Some(avg) = stats.survey.avg_months_to_first_job {
            if avg <= 6.0 {
                highlights.push(format!(
                    "Alumni find their first job quickly (average {:.1} months after graduation).",
                    avg
                ));
            }
        }
    }

    let with_current = alumni
        .saturating_sub(career.no_current_record)
        .saturating_sub(career.aggregation_skipped);
    InsightReport {
        summary: format!(
            "{} students tracked; {} alumni, {} with a current career engagement.",
            stats.total_students, alumni, with_current
        ),
        highlights,
    }
}
