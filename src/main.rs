use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use sipal_backend::{
    db::memory::MemoryStore, graceful_shutdown::shutdown_signal, routes::configure_routes,
    settings::AppConfig, AppState,
};
use tracing_actix_web::TracingLogger;

fn build_cors(origins: &[String]) -> Cors {
    if origins.iter().any(|o| o == "*") {
        return Cors::permissive();
    }

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PATCH"])
        .allow_any_header()
        .max_age(3600);
    for origin in origins {
        cors = cors.allowed_origin(origin);
    }
    cors
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let config = match AppConfig::new() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        },
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let store = if config.seed_demo_data {
        match MemoryStore::with_demo_data() {
            Ok(store) => store,
            Err(e) => {
                tracing::error!("Demo data error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        MemoryStore::new()
    };

    let app_state = web::Data::new(AppState::new(Arc::new(store)));

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "🚀 Starting SIPAL API v{} on {}",
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let cors_origins = config.cors_origins();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(TracingLogger::default())
            .wrap(build_cors(&cors_origins))
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .bind(server_addr)?
    .run();

    tokio::select! {
        res = server => res,
        _ = shutdown_signal() => Ok(()),
    }
}
