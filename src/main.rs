mod api;
mod config;
mod database;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;

use crate::config::AppConfig;
use crate::database::UserStore;

fn build_cors(origins: &[String]) -> Cors {
    if origins.is_empty() {
        return Cors::permissive();
    }

    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            actix_web::http::header::CONTENT_TYPE,
            actix_web::http::header::ACCEPT,
        ])
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(|e| {
        log::error!("❌ Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    log::info!("🚀 Starting Usuarios Service...");

    // Store em memória: criado uma vez e compartilhado entre os workers
    let store = web::Data::new(UserStore::new());

    let host = config.host.clone();
    let port = config.port;

    log::info!("🌐 Server starting on {}", config.bind_address());
    log::info!("📚 Swagger UI available at: http://{}:{}/api-docs/", host, port);
    log::info!("📄 OpenAPI spec at: http://{}:{}/api-docs/openapi.json", host, port);

    let cors_origins = config.cors_origins.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .wrap(build_cors(&cors_origins))
            .wrap(Logger::default())
            .configure(api::swagger::configure_docs(port))
            .configure(api::configure)
    })
    .bind(config.bind_address())?
    .run()
    .await
}
