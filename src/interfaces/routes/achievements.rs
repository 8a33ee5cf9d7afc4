use actix_web::web;
use crate::handlers::achievements;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/students/{student_id}/achievements")
            .service(
                web::resource("")
                    .route(web::post().to(achievements::log_achievement))
                    .route(web::get().to(achievements::student_achievements))
            )
    );
}
