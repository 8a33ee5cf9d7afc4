use actix_web::web;
use crate::handlers::careers;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/students/{student_id}/career")
            .service(
                web::resource("")
                    .route(web::post().to(careers::submit_record))
                    .route(web::get().to(careers::career_summary))
            )
            .service(
                web::resource("/history")
                    .route(web::get().to(careers::career_history))
            )
    );
}
