use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;

use crate::{entities::achievement::NewAchievement, AppState};

pub async fn log_achievement(
    state: web::Data<AppState>,
    student_id: web::Path<Uuid>,
    input: web::Json<NewAchievement>,
) -> impl Responder {
    match state
        .achievements
        .log_achievement(student_id.into_inner(), input.into_inner())
        .await
    {
        Ok(response) => HttpResponse::Created().json(response),
        Err(e) => e.to_http_response(),
    }
}

pub async fn student_achievements(
    state: web::Data<AppState>,
    student_id: web::Path<Uuid>,
) -> impl Responder {
    match state
        .achievements
        .achievements_for_student(student_id.into_inner())
        .await
    {
        Ok(achievements) => HttpResponse::Ok().json(achievements),
        Err(e) => e.to_http_response(),
    }
}
