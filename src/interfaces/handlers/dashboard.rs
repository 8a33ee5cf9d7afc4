use actix_web::{get, web, HttpResponse, Responder};

use crate::{use_cases::dashboard::build_insight, AppState};

/// Aggregate statistics plus the rule-based insight narrative, in one
/// payload so the admin page renders from a single request.
#[get("/dashboard")]
pub async fn admin_dashboard(state: web::Data<AppState>) -> impl Responder {
    match state.dashboard.compute_stats().await {
        Ok(stats) => {
            let insight = build_insight(&stats);
            HttpResponse::Ok().json(serde_json::json!({
                "stats": stats,
                "insight": insight
            }))
        }
        Err(e) => e.to_http_response(),
    }
}

#[get("/achievements")]
pub async fn admin_achievements(state: web::Data<AppState>) -> impl Responder {
    match state.achievements.all_achievements().await {
        Ok(achievements) => HttpResponse::Ok().json(achievements),
        Err(e) => e.to_http_response(),
    }
}
