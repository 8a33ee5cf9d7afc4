use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{entities::student::{EnrollmentStatus, NewStudent, UpdateEnrollmentStatus}, AppState};

pub async fn register_student(
    state: web::Data<AppState>,
    input: web::Json<NewStudent>,
) -> impl Responder {
    match state.students.register_student(input.into_inner()).await {
        Ok(response) => HttpResponse::Created().json(response),
        Err(e) => e.to_http_response(),
    }
}

pub async fn get_student(
    state: web::Data<AppState>,
    student_id: web::Path<Uuid>,
) -> impl Responder {
    match state.students.get_student(student_id.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => e.to_http_response(),
    }
}

#[derive(Debug, Deserialize)]
pub struct StudentListQuery {
    pub status: Option<String>,
}

pub async fn list_students(
    state: web::Data<AppState>,
    query: web::Query<StudentListQuery>,
) -> impl Responder {
    let status = match query.status.as_deref() {
        Some(raw) => match raw.parse::<EnrollmentStatus>() {
            Ok(status) => Some(status),
            Err(e) => return e.to_http_response(),
        },
        None => None,
    };

    match state.students.list_students(status).await {
        Ok(students) => HttpResponse::Ok().json(students),
        Err(e) => e.to_http_response(),
    }
}

pub async fn update_enrollment_status(
    state: web::Data<AppState>,
    student_id: web::Path<Uuid>,
    input: web::Json<UpdateEnrollmentStatus>,
) -> impl Responder {
    match state
        .students
        .update_enrollment_status(student_id.into_inner(), input.into_inner())
        .await
    {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => e.to_http_response(),
    }
}
