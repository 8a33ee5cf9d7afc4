use actix_web::{web, HttpResponse, Responder};

use crate::{
    entities::career::NewCareerRecord, errors::AppError, utils::valid_uuid::valid_uuid,
    AppState,
};

pub async fn submit_record(
    state: web::Data<AppState>,
    path: web::Path<String>,
    input: web::Json<NewCareerRecord>,
) -> impl Responder {
    let student_id = match valid_uuid(&path.into_inner()) {
        Ok(id) => id,
        Err(e) => return e.to_http_response(),
    };

    match state.careers.submit_record(student_id, input.into_inner()).await {
        Ok(response) => HttpResponse::Created().json(response),
        Err(e) => handle_handler_error(e),
    }
}

pub async fn career_summary(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let student_id = match valid_uuid(&path.into_inner()) {
        Ok(id) => id,
        Err(e) => return e.to_http_response(),
    };

    match state.careers.career_summary(student_id).await {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(e) => handle_handler_error(e),
    }
}

pub async fn career_history(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let student_id = match valid_uuid(&path.into_inner()) {
        Ok(id) => id,
        Err(e) => return e.to_http_response(),
    };

    match state.careers.career_history(student_id).await {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(e) => handle_handler_error(e),
    }
}

// Helper function to handle CareerHandler errors
fn handle_handler_error(e: AppError) -> HttpResponse {
    match e {
        AppError::NotFound(msg) => HttpResponse::NotFound().json(
            serde_json::json!({"error": "Not found", "message": msg})
        ),
        AppError::MalformedCareerRecord(msg) => HttpResponse::UnprocessableEntity().json(
            serde_json::json!({"error": "Malformed career record", "message": msg})
        ),
        AppError::CareerLocked(msg) => HttpResponse::Forbidden().json(
            serde_json::json!({
                "error": "Career features locked",
                "title": msg.title,
                "body": msg.body
            })
        ),
        other => other.to_http_response(),
    }
}
