use chrono::{DateTime, Utc};
use uuid::Uuid;

use sipal_backend::career::access::{can_show_career, locked_message};
use sipal_backend::career::aggregate::{aggregate, current_kinds};
use sipal_backend::entities::career::{CareerRecord, CareerStatus, StudyLevel};
use sipal_backend::entities::student::EnrollmentStatus;
use sipal_backend::errors::AppError;

fn ts(raw: &str) -> DateTime<Utc> {
    raw.parse().expect("test timestamp is valid")
}

fn record(status: CareerStatus, submitted_at: &str) -> CareerRecord {
    CareerRecord {
        id: Uuid::new_v4(),
        student_id: Uuid::new_v4(),
        status,
        submitted_at: ts(submitted_at),
    }
}

fn working(company: &str, position: &str, is_active: bool, submitted_at: &str) -> CareerRecord {
    record(
        CareerStatus::Working {
            company: company.to_string(),
            position: position.to_string(),
            is_active,
        },
        submitted_at,
    )
}

fn business(name: &str, is_active: bool, submitted_at: &str) -> CareerRecord {
    record(
        CareerStatus::Entrepreneur {
            business_name: name.to_string(),
            sector: None,
            is_active,
        },
        submitted_at,
    )
}

#[test]
fn gate_is_closed_for_every_non_alumni_status() {
    for status in [
        EnrollmentStatus::Active,
        EnrollmentStatus::OnLeave,
        EnrollmentStatus::Dropout,
    ] {
        assert!(!can_show_career(status));
        let msg = locked_message(status).expect("closed gate carries a message");
        assert!(!msg.title.is_empty());
        assert!(!msg.body.is_empty());
    }
    assert!(can_show_career(EnrollmentStatus::Alumni));
}

#[test]
fn empty_record_list_means_no_active_career() {
    let result = aggregate(&[]).unwrap();

    assert!(!result.has_active_career);
    assert_eq!(result.primary_text, "");
    assert!(result.details.is_empty());
}

#[test]
fn only_inactive_records_mean_no_active_career() {
    let records = vec![
        working("Acme", "Engineer", false, "2023-01-10T08:00:00Z"),
        business("Warung Lama", false, "2022-06-01T08:00:00Z"),
    ];

    let result = aggregate(&records).unwrap();

    assert!(!result.has_active_career);
    assert_eq!(result.primary_text, "");
    assert!(result.details.is_empty());
}

#[test]
fn single_active_job_names_employer_and_position() {
    let records = vec![working("Acme", "Engineer", true, "2024-02-01T09:00:00Z")];

    let result = aggregate(&records).unwrap();

    assert!(result.has_active_career);
    assert!(result.primary_text.contains("Acme"));
    assert!(result.primary_text.contains("Engineer"));
}

#[test]
fn active_job_and_business_combine_into_one_sentence() {
    let records = vec![
        working("Acme", "Engineer", true, "2024-02-01T09:00:00Z"),
        business("Kopi Svarga", true, "2024-03-15T10:00:00Z"),
    ];

    let result = aggregate(&records).unwrap();

    assert!(result.primary_text.contains("Acme"));
    assert!(result.primary_text.contains("Engineer"));
    assert!(result.primary_text.contains("Kopi Svarga"));
}

#[test]
fn inactive_business_lands_in_details_only() {
    let records = vec![
        business("Kopi Svarga", true, "2024-03-15T10:00:00Z"),
        business("Warung Lama", false, "2022-06-01T08:00:00Z"),
    ];

    let result = aggregate(&records).unwrap();

    assert!(result.primary_text.contains("Kopi Svarga"));
    assert!(!result.primary_text.contains("Warung Lama"));

    let inactive_line = result
        .details
        .iter()
        .find(|d| d.contains("Warung Lama"))
        .expect("inactive business must be reported");
    assert!(inactive_line.contains("no longer active"));
}

#[test]
fn newer_job_reads_before_older_one() {
    let records = vec![
        working("Alpha Corp", "Analyst", true, "2022-05-01T08:00:00Z"),
        working("Beta Labs", "Engineer", true, "2024-05-01T08:00:00Z"),
    ];

    let result = aggregate(&records).unwrap();

    let beta = result.primary_text.find("Beta Labs").expect("newer job present");
    let alpha = result.primary_text.find("Alpha Corp").expect("older job present");
    assert!(beta < alpha, "newest submission should read first");
}

#[test]
fn concurrent_jobs_are_both_named() {
    let records = vec![
        working("Alpha Corp", "Analyst", true, "2022-05-01T08:00:00Z"),
        working("Beta Labs", "Engineer", true, "2024-05-01T08:00:00Z"),
    ];

    let result = aggregate(&records).unwrap();

    assert!(result.primary_text.contains("Alpha Corp"));
    assert!(result.primary_text.contains("Beta Labs"));
}

#[test]
fn studying_beside_a_job_is_reported_in_details() {
    let records = vec![
        working("Acme", "Engineer", true, "2023-08-15T14:00:00Z"),
        record(
            CareerStatus::Studying {
                institution: "Universitas Gadjah Mada".to_string(),
                program: "Software Engineering".to_string(),
                level: StudyLevel::Master,
            },
            "2024-09-02T08:30:00Z",
        ),
    ];

    let result = aggregate(&records).unwrap();

    assert!(!result.primary_text.contains("Universitas Gadjah Mada"));
    let study_line = result
        .details
        .iter()
        .find(|d| d.contains("Universitas Gadjah Mada"))
        .expect("current study must not be dropped");
    assert!(study_line.contains("Software Engineering"));
}

#[test]
fn searching_only_reports_field_and_duration() {
    let records = vec![record(
        CareerStatus::Searching {
            target_field: "data engineering".to_string(),
            months_searching: 4,
        },
        "2024-06-01T08:00:00Z",
    )];

    let result = aggregate(&records).unwrap();

    assert!(result.has_active_career);
    assert!(result.primary_text.contains("data engineering"));
    assert!(result.details.iter().any(|d| d.contains("4 months")));
}

#[test]
fn aggregation_is_deterministic() {
    let records = vec![
        working("Acme", "Engineer", true, "2023-08-15T14:00:00Z"),
        business("Kopi Svarga", true, "2024-01-20T11:45:00Z"),
        working("PT Lintas Data", "QA Analyst", false, "2022-03-10T09:15:00Z"),
    ];

    let first = aggregate(&records).unwrap();
    let second = aggregate(&records).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn blank_employer_is_a_malformed_record() {
    let records = vec![working("", "Engineer", true, "2024-02-01T09:00:00Z")];

    let err = aggregate(&records).unwrap_err();
    assert!(matches!(err, AppError::MalformedCareerRecord(_)));
}

#[test]
fn malformed_record_fails_the_whole_aggregation() {
    let records = vec![
        working("Acme", "Engineer", true, "2024-02-01T09:00:00Z"),
        working("", "Ghost", true, "2024-03-01T09:00:00Z"),
    ];

    assert!(matches!(
        aggregate(&records),
        Err(AppError::MalformedCareerRecord(_))
    ));
}

#[test]
fn current_kinds_follow_active_flags() {
    let records = vec![
        working("Acme", "Engineer", false, "2022-02-01T09:00:00Z"),
        business("Kopi Svarga", true, "2024-01-20T11:45:00Z"),
    ];

    let kinds = current_kinds(&records).unwrap();

    assert!(!kinds.working);
    assert!(kinds.entrepreneur);
    assert!(!kinds.searching);
    assert!(!kinds.studying);
    assert!(kinds.any());
}
