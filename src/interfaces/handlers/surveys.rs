use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;

use crate::{entities::survey::NewTracerSurvey, AppState};

pub async fn submit_survey(
    state: web::Data<AppState>,
    student_id: web::Path<Uuid>,
    input: web::Json<NewTracerSurvey>,
) -> impl Responder {
    match state
        .surveys
        .submit_survey(student_id.into_inner(), input.into_inner())
        .await
    {
        Ok(response) => HttpResponse::Created().json(response),
        Err(e) => e.to_http_response(),
    }
}

pub async fn student_survey(
    state: web::Data<AppState>,
    student_id: web::Path<Uuid>,
) -> impl Responder {
    match state.surveys.survey_for_student(student_id.into_inner()).await {
        Ok(survey) => HttpResponse::Ok().json(survey),
        Err(e) => e.to_http_response(),
    }
}
