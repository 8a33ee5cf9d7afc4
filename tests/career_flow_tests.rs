use serde_json::json;
use uuid::Uuid;

use test_utils::{StudentFixtures, TestApp};

#[tokio::test]
async fn career_is_locked_while_still_enrolled() {
    let app = TestApp::spawn().await;
    let student_id = app.create_student("Dewi Anggraini", "IF20220031").await;

    let summary = app.career_summary(student_id).await;
    assert_eq!(summary["state"], "locked");
    assert!(!summary["title"].as_str().unwrap().is_empty());
    assert!(!summary["body"].as_str().unwrap().is_empty());

    let response = app
        .submit_career(
            student_id,
            json!({
                "kind": "working",
                "company": "Acme",
                "position": "Engineer",
                "is_active": true
            }),
        )
        .await;
    assert_eq!(response.status(), 403);

    let history = app
        .client
        .get(&format!(
            "{}/api/v1/students/{}/career/history",
            app.address, student_id
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(history.status(), 403);
}

#[tokio::test]
async fn alumni_with_no_records_have_no_active_career() {
    let app = TestApp::spawn().await;
    let student_id = app.create_student("Raka Pratama", "IF20170012").await;
    app.promote_to_alumni(student_id, 2021).await;

    let summary = app.career_summary(student_id).await;
    assert_eq!(summary["state"], "open");
    assert_eq!(summary["has_active_career"], false);
    assert_eq!(summary["primary_text"], "");
}

#[tokio::test]
async fn job_and_business_combine_in_profile_summary() {
    let app = TestApp::spawn().await;
    let student_id = app.create_student("Raka Pratama", "IF20170012").await;
    app.promote_to_alumni(student_id, 2021).await;

    let response = app
        .submit_career(
            student_id,
            json!({
                "kind": "working",
                "company": "PT Nusantara Teknologi",
                "position": "Backend Engineer",
                "is_active": true
            }),
        )
        .await;
    assert_eq!(response.status(), 201);

    let response = app
        .submit_career(
            student_id,
            json!({
                "kind": "entrepreneur",
                "business_name": "Kopi Svarga",
                "sector": "food and beverage",
                "is_active": true
            }),
        )
        .await;
    assert_eq!(response.status(), 201);

    let summary = app.career_summary(student_id).await;
    assert_eq!(summary["state"], "open");
    assert_eq!(summary["has_active_career"], true);

    let primary = summary["primary_text"].as_str().unwrap();
    assert!(primary.contains("PT Nusantara Teknologi"));
    assert!(primary.contains("Backend Engineer"));
    assert!(primary.contains("Kopi Svarga"));
}

#[tokio::test]
async fn inactive_business_moves_to_details() {
    let app = TestApp::spawn().await;
    let student_id = app.create_student("Raka Pratama", "IF20170012").await;
    app.promote_to_alumni(student_id, 2021).await;

    app.submit_career(
        student_id,
        json!({
            "kind": "entrepreneur",
            "business_name": "Warung Lama",
            "is_active": false
        }),
    )
    .await;
    app.submit_career(
        student_id,
        json!({
            "kind": "entrepreneur",
            "business_name": "Kopi Svarga",
            "is_active": true
        }),
    )
    .await;

    let summary = app.career_summary(student_id).await;
    let primary = summary["primary_text"].as_str().unwrap();
    assert!(primary.contains("Kopi Svarga"));
    assert!(!primary.contains("Warung Lama"));

    let details: Vec<String> = summary["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d.as_str().unwrap().to_string())
        .collect();
    assert!(details
        .iter()
        .any(|d| d.contains("Warung Lama") && d.contains("no longer active")));
}

#[tokio::test]
async fn history_lists_newest_submission_first() {
    let app = TestApp::spawn().await;
    let student_id = app.create_student("Raka Pratama", "IF20170012").await;
    app.promote_to_alumni(student_id, 2021).await;

    app.submit_career(
        student_id,
        json!({
            "kind": "working",
            "company": "Alpha Corp",
            "position": "Analyst",
            "is_active": false
        }),
    )
    .await;
    app.submit_career(
        student_id,
        json!({
            "kind": "working",
            "company": "Beta Labs",
            "position": "Engineer",
            "is_active": true
        }),
    )
    .await;

    let history: serde_json::Value = app
        .client
        .get(&format!(
            "{}/api/v1/students/{}/career/history",
            app.address, student_id
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let records = history.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["company"], "Beta Labs");
    assert_eq!(records[1]["company"], "Alpha Corp");
}

#[tokio::test]
async fn blank_employer_is_rejected_at_intake() {
    let app = TestApp::spawn().await;
    let student_id = app.create_student("Raka Pratama", "IF20170012").await;
    app.promote_to_alumni(student_id, 2021).await;

    let response = app
        .submit_career(
            student_id,
            json!({
                "kind": "working",
                "company": "",
                "position": "Engineer",
                "is_active": true
            }),
        )
        .await;

    assert_eq!(response.status(), 422);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Malformed career record");
}

#[tokio::test]
async fn unknown_enrollment_status_is_a_bad_request() {
    let app = TestApp::spawn().await;
    let student_id = app.create_student("Dewi Anggraini", "IF20220031").await;

    let response = app
        .client
        .patch(&format!(
            "{}/api/v1/students/{}/status",
            app.address, student_id
        ))
        .json(&json!({"enrollment_status": "graduated"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Invalid enrollment status"));
}

#[tokio::test]
async fn promotion_without_graduation_year_is_rejected() {
    let app = TestApp::spawn().await;
    let student_id = app.create_student("Dewi Anggraini", "IF20220031").await;

    let response = app
        .client
        .patch(&format!(
            "{}/api/v1/students/{}/status",
            app.address, student_id
        ))
        .json(&json!({"enrollment_status": "alumni"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn duplicate_student_number_is_a_conflict() {
    let app = TestApp::spawn().await;
    app.create_student("Raka Pratama", "IF20170012").await;

    let response = app
        .client
        .post(&format!("{}/api/v1/students", app.address))
        .json(&json!({
            "full_name": "Impostor",
            "student_number": "IF20170012",
            "email": "impostor@example.ac.id"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 409);
}

#[tokio::test]
async fn career_endpoints_check_the_student_exists() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(&format!(
            "{}/api/v1/students/{}/career",
            app.address,
            Uuid::new_v4()
        ))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
}
