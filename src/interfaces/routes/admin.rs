use actix_web::web;
use crate::handlers::{dashboard, system};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .service(system::admin_health_check)
            .service(dashboard::admin_dashboard)
            .service(dashboard::admin_achievements)
    );
}
