use actix_web::web;
use crate::handlers::surveys;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/students/{student_id}/survey")
            .service(
                web::resource("")
                    .route(web::post().to(surveys::submit_survey))
                    .route(web::get().to(surveys::student_survey))
            )
    );
}
