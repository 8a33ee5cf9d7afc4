use actix_web::web;

use crate::handlers::home::home;

mod achievements;
mod admin;
mod careers;
mod json_error;
mod students;
mod surveys;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    // Scopes nested under /students/{student_id} must register before the
    // general /students scope so the router tries them first.
    cfg.service(
        web::scope("/api/v1")
            .configure(careers::config_routes)
            .configure(achievements::config_routes)
            .configure(surveys::config_routes)
            .configure(students::config_routes)
            .configure(admin::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
