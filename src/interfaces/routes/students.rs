use actix_web::web;
use crate::handlers::students;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/students")
            .service(
                web::resource("")
                    .route(web::post().to(students::register_student))
                    .route(web::get().to(students::list_students))
            )
            .service(
                web::resource("/{student_id}")
                    .route(web::get().to(students::get_student))
            )
            .service(
                web::resource("/{student_id}/status")
                    .route(web::patch().to(students::update_enrollment_status))
            )
    );
}
