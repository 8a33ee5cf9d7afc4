use actix_web::{http::StatusCode, web, HttpResponse};

use crate::handlers::json_error::json_error;

async fn not_found() -> HttpResponse {
    json_error(
        StatusCode::NOT_FOUND,
        "Not found",
        "The requested resource does not exist",
    )
}

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.default_service(web::route().to(not_found));
}
