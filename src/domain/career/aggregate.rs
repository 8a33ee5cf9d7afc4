use chrono::{DateTime, Utc};

use crate::entities::career::{AggregatedStatus, CareerRecord, CareerStatus, StudyLevel};
use crate::errors::AppError;

/// Which engagement kinds are "current" for a record set. Kinds are not
/// exclusive; a student may hold a job and run a business at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentKinds {
    pub working: bool,
    pub entrepreneur: bool,
    pub searching: bool,
    pub studying: bool,
}

impl CurrentKinds {
    pub fn any(&self) -> bool {
        self.working || self.entrepreneur || self.searching || self.studying
    }
}

struct JobView<'a> {
    company: &'a str,
    position: &'a str,
    submitted_at: DateTime<Utc>,
}

struct BusinessView<'a> {
    name: &'a str,
    sector: Option<&'a str>,
    submitted_at: DateTime<Utc>,
}

struct SearchView<'a> {
    target_field: &'a str,
    months_searching: i32,
    submitted_at: DateTime<Utc>,
}

struct StudyView<'a> {
    institution: &'a str,
    program: &'a str,
    level: StudyLevel,
    submitted_at: DateTime<Utc>,
}

#[derive(Default)]
struct Buckets<'a> {
    jobs_active: Vec<JobView<'a>>,
    jobs_inactive: Vec<JobView<'a>>,
    businesses_active: Vec<BusinessView<'a>>,
    businesses_inactive: Vec<BusinessView<'a>>,
    searching: Vec<SearchView<'a>>,
    studying: Vec<StudyView<'a>>,
}

/// Buckets the record set by status tag and active flag. Fails on the
/// first malformed record; newest submissions sort first in every bucket.
fn partition(records: &[CareerRecord]) -> Result<Buckets<'_>, AppError> {
    let mut buckets = Buckets::default();

    for record in records {
        record.status.ensure_well_formed()?;

        match &record.status {
            CareerStatus::Working { company, position, is_active } => {
                let view = JobView {
                    company,
                    position,
                    submitted_at: record.submitted_at,
                };
                if *is_active {
                    buckets.jobs_active.push(view);
                } else {
                    buckets.jobs_inactive.push(view);
                }
            }
            CareerStatus::Entrepreneur { business_name, sector, is_active } => {
                let view = BusinessView {
                    name: business_name,
                    sector: sector.as_deref(),
                    submitted_at: record.submitted_at,
                };
                if *is_active {
                    buckets.businesses_active.push(view);
                } else {
                    buckets.businesses_inactive.push(view);
                }
            }
            CareerStatus::Searching { target_field, months_searching } => {
                buckets.searching.push(SearchView {
                    target_field,
                    months_searching: *months_searching,
                    submitted_at: record.submitted_at,
                });
            }
            CareerStatus::Studying { institution, program, level } => {
                buckets.studying.push(StudyView {
                    institution,
                    program,
                    level: *level,
                    submitted_at: record.submitted_at,
                });
            }
        }
    }

    buckets.jobs_active.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    buckets.jobs_inactive.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    buckets.businesses_active.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    buckets.businesses_inactive.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    buckets.searching.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    buckets.studying.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));

    Ok(buckets)
}

fn join(parts: Vec<String>) -> String {
    parts.join(" and ")
}

fn months_phrase(months: i32) -> String {
    if months == 1 {
        "1 month".to_string()
    } else {
        format!("{} months", months)
    }
}

impl BusinessView<'_> {
    fn phrase(&self) -> String {
        match self.sector {
            Some(sector) => format!("{} ({})", self.name, sector),
            None => self.name.to_string(),
        }
    }
}

/// Reduces a student's full record set to one display summary.
///
/// Priority for `primary_text` when several kinds are current at once:
/// active job + active business combine into one sentence; otherwise job,
/// then business, then study, then search. Everything current that did not
/// make the primary sentence lands in `details`, so no record is dropped.
/// Inactive jobs and businesses are reported only in `details`.
pub fn aggregate(records: &[CareerRecord]) -> Result<AggregatedStatus, AppError> {
    let buckets = partition(records)?;

    let kinds = CurrentKinds {
        working: !buckets.jobs_active.is_empty(),
        entrepreneur: !buckets.businesses_active.is_empty(),
        searching: !buckets.searching.is_empty(),
        studying: !buckets.studying.is_empty(),
    };

    if !kinds.any() {
        return Ok(AggregatedStatus {
            has_active_career: false,
            primary_text: String::new(),
            details: Vec::new(),
        });
    }

    let jobs = join(
        buckets
            .jobs_active
            .iter()
            .map(|j| format!("{} at {}", j.position, j.company))
            .collect(),
    );
    let businesses = join(buckets.businesses_active.iter().map(|b| b.phrase()).collect());
    let studies = join(
        buckets
            .studying
            .iter()
            .map(|s| format!("{} at {} ({})", s.program, s.institution, s.level))
            .collect(),
    );
    let search_fields = join(
        buckets
            .searching
            .iter()
            .map(|s| s.target_field.to_string())
            .collect(),
    );

    let (primary_text, study_in_primary, search_in_primary) =
        if kinds.working && kinds.entrepreneur {
            (
                format!("Working as {} while running a business: {}", jobs, businesses),
                false,
                false,
            )
        } else if kinds.working {
            (format!("Working as {}", jobs), false, false)
        } else if kinds.entrepreneur {
            (format!("Running a business: {}", businesses), false, false)
        } else if kinds.studying {
            (format!("Studying {}", studies), true, false)
        } else {
            (
                format!("Looking for opportunities in {}", search_fields),
                false,
                true,
            )
        };

    let mut details = Vec::new();

    if kinds.studying && !study_in_primary {
        for study in &buckets.studying {
            details.push(format!(
                "Also studying {} at {} ({})",
                study.program, study.institution, study.level
            ));
        }
    }

    for search in &buckets.searching {
        if search_in_primary {
            details.push(format!(
                "Searching for {}",
                months_phrase(search.months_searching)
            ));
        } else {
            details.push(format!(
                "Open to opportunities in {} ({} searching)",
                search.target_field,
                months_phrase(search.months_searching)
            ));
        }
    }

    for job in &buckets.jobs_inactive {
        details.push(format!(
            "Previously worked as {} at {} (no longer active)",
            job.position, job.company
        ));
    }

    for business in &buckets.businesses_inactive {
        details.push(format!("Ran {} (no longer active)", business.phrase()));
    }

    Ok(AggregatedStatus {
        has_active_career: true,
        primary_text,
        details,
    })
}

/// Engagement-kind flags for one record set, sharing the aggregator's
/// bucket and active-flag rules. Used by the dashboard breakdown.
pub fn current_kinds(records: &[CareerRecord]) -> Result<CurrentKinds, AppError> {
    let buckets = partition(records)?;

    Ok(CurrentKinds {
        working: !buckets.jobs_active.is_empty(),
        entrepreneur: !buckets.businesses_active.is_empty(),
        searching: !buckets.searching.is_empty(),
        studying: !buckets.studying.is_empty(),
    })
}
