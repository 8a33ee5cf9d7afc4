use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use sipal_backend::entities::career::{CareerRecord, CareerStatus};

use test_utils::{StudentFixtures, TestApp};

async fn fetch_dashboard(app: &TestApp) -> serde_json::Value {
    app.client
        .get(&format!("{}/api/v1/admin/dashboard", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn empty_dashboard_reports_zero_counts() {
    let app = TestApp::spawn().await;

    let body = fetch_dashboard(&app).await;
    let stats = &body["stats"];

    assert_eq!(stats["total_students"], 0);
    assert_eq!(stats["enrollment"]["alumni"], 0);
    assert_eq!(stats["survey"]["responses"], 0);

    let summary = body["insight"]["summary"].as_str().unwrap();
    assert!(summary.contains("first cohort graduates"));
}

#[tokio::test]
async fn dashboard_aggregates_careers_achievements_and_surveys() {
    let app = TestApp::spawn().await;

    let alumni_id = app.create_student("Raka Pratama", "IF20170012").await;
    app.promote_to_alumni(alumni_id, 2021).await;
    let active_id = app.create_student("Dewi Anggraini", "IF20220031").await;

    app.submit_career(
        alumni_id,
        json!({
            "kind": "working",
            "company": "PT Nusantara Teknologi",
            "position": "Backend Engineer",
            "is_active": true
        }),
    )
    .await;

    app.client
        .post(&format!(
            "{}/api/v1/students/{}/achievements",
            app.address, active_id
        ))
        .json(&json!({
            "title": "First place, national hackathon",
            "category": "competition",
            "level": "international",
            "achieved_on": "2024-05-18"
        }))
        .send()
        .await
        .unwrap();

    app.client
        .post(&format!(
            "{}/api/v1/students/{}/survey",
            app.address, alumni_id
        ))
        .json(&json!({
            "graduation_year": 2021,
            "months_to_first_job": 4,
            "field_relevance": "high",
            "satisfaction_score": 4
        }))
        .send()
        .await
        .unwrap();

    let body = fetch_dashboard(&app).await;
    let stats = &body["stats"];

    assert_eq!(stats["total_students"], 2);
    assert_eq!(stats["enrollment"]["alumni"], 1);
    assert_eq!(stats["enrollment"]["active"], 1);
    assert_eq!(stats["alumni_career"]["working"], 1);
    assert_eq!(stats["alumni_career"]["employed"], 1);
    assert_eq!(stats["alumni_career"]["no_current_record"], 0);
    assert_eq!(stats["achievements"]["total"], 1);
    assert_eq!(stats["achievements"]["international"], 1);
    assert_eq!(stats["survey"]["responses"], 1);
    assert_eq!(stats["survey"]["response_rate_pct"], 100.0);

    let highlights: Vec<String> = body["insight"]["highlights"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h.as_str().unwrap().to_string())
        .collect();

    assert!(highlights
        .iter()
        .any(|h| h.contains("Strong alumni absorption") && h.contains("100.0%")));
    assert!(highlights
        .iter()
        .any(|h| h.contains("international-level achievements")));
    assert!(highlights
        .iter()
        .any(|h| h.contains("average satisfaction 4.0/5")));

    let summary = body["insight"]["summary"].as_str().unwrap();
    assert!(summary.contains("2 students tracked"));
    assert!(summary.contains("1 alumni"));
}

#[tokio::test]
async fn insight_is_deterministic_for_the_same_data() {
    let app = TestApp::spawn().await;

    let alumni_id = app.create_student("Raka Pratama", "IF20170012").await;
    app.promote_to_alumni(alumni_id, 2021).await;
    app.submit_career(
        alumni_id,
        json!({
            "kind": "searching",
            "target_field": "data engineering",
            "months_searching": 4
        }),
    )
    .await;

    let first = fetch_dashboard(&app).await;
    let second = fetch_dashboard(&app).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn malformed_records_skip_the_student_not_the_batch() {
    let app = TestApp::spawn().await;

    let broken_id = app.create_student("Raka Pratama", "IF20170012").await;
    app.promote_to_alumni(broken_id, 2021).await;
    let healthy_id = app.create_student("Sari Wulandari", "IF20180023").await;
    app.promote_to_alumni(healthy_id, 2022).await;

    app.submit_career(
        healthy_id,
        json!({
            "kind": "working",
            "company": "Acme",
            "position": "Engineer",
            "is_active": true
        }),
    )
    .await;

    // Intake validation blocks malformed submissions, so plant one
    // directly in the store the way a buggy import would.
    app.store.career_records.write().push(CareerRecord {
        id: Uuid::new_v4(),
        student_id: broken_id,
        status: CareerStatus::Working {
            company: String::new(),
            position: "Ghost".to_string(),
            is_active: true,
        },
        submitted_at: Utc::now(),
    });

    let summary = app
        .client
        .get(&format!(
            "{}/api/v1/students/{}/career",
            app.address, broken_id
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(summary.status(), 422);

    let body = fetch_dashboard(&app).await;
    let stats = &body["stats"];

    assert_eq!(stats["alumni_career"]["aggregation_skipped"], 1);
    assert_eq!(stats["alumni_career"]["working"], 1);
    assert_eq!(stats["alumni_career"]["employed"], 1);
}
