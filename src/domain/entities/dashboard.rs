use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct EnrollmentBreakdown {
    pub active: u64,
    pub alumni: u64,
    pub on_leave: u64,
    pub dropout: u64,
}

/// Alumni counted per current engagement kind. The kinds are not
/// exclusive: an alumni working while running a business increments both
/// counters. `employed` counts alumni with at least one active job or
/// business, each counted once. `aggregation_skipped` counts alumni whose
/// record set failed aggregation (malformed data).
#[derive(Debug, Clone, Default, Serialize)]
pub struct AlumniCareerBreakdown {
    pub working: u64,
    pub entrepreneur: u64,
    pub searching: u64,
    pub studying: u64,
    pub employed: u64,
    pub no_current_record: u64,
    pub aggregation_skipped: u64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AchievementStats {
    pub total: u64,
    pub campus: u64,
    pub regional: u64,
    pub national: u64,
    pub international: u64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SurveyStats {
    pub responses: u64,
    pub response_rate_pct: f64,
    pub avg_satisfaction: Option<f64>,
    pub avg_months_to_first_job: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_students: u64,
    pub enrollment: EnrollmentBreakdown,
    pub alumni_career: AlumniCareerBreakdown,
    pub achievements: AchievementStats,
    pub survey: SurveyStats,
}

/// Deterministic rule-based narrative over the computed statistics.
#[derive(Debug, Clone, Serialize)]
pub struct InsightReport {
    pub summary: String,
    pub highlights: Vec<String>,
}
