//! Trim specification server - main entry point.
//!
//! Starts the Actix-web server with configured routes and middleware.

use actix_cors::Cors;
use actix_web::{App, HttpServer, http::header, web};
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use trimspec_lib::api::{self, ApiDoc};
use trimspec_lib::config::Config;
use trimspec_lib::db::DbPool;
use trimspec_lib::middleware::RequestLogger;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).map_err(std::io::Error::other)?;

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            error!("");
            error!("Please check your environment variables:");
            error!("  - RUST_ENV must be set to 'development' or 'production'");
            error!("  - In production, DATABASE_URL must be set to a non-default value");
            std::process::exit(1);
        }
    };

    info!("========================================");
    info!("  Trim Specification Server");
    info!("  Environment: {}", config.environment);
    info!("========================================");

    if config.is_development() {
        warn!("Running in DEVELOPMENT mode - do not use in production!");
    }

    tokio::fs::create_dir_all(config.uploads_dir()).await?;
    tokio::fs::create_dir_all(config.exports_dir()).await?;

    let pool = DbPool::new(&config)
        .await
        .map_err(std::io::Error::other)?;
    info!("Database connection established");

    pool.run_migrations().await.map_err(std::io::Error::other)?;

    let bind_address = config.bind_address();
    let is_development = config.is_development();
    let max_upload_size = config.max_upload_size;
    info!("Upload limit: {}MB per file", max_upload_size / 1024 / 1024);

    let worker_count = if is_development { 4 } else { num_cpus::get() };
    info!(
        "Starting server at http://{} ({} workers)",
        bind_address, worker_count
    );

    let config = web::Data::new(config);
    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        let cors = if is_development {
            Cors::default()
                .allowed_origin("http://localhost:3000")
                .allowed_origin("http://127.0.0.1:3000")
                .allowed_origin("http://localhost:5173")
                .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
                .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
                .expose_headers(vec![
                    header::CONTENT_DISPOSITION,
                    header::HeaderName::from_static("x-export-id"),
                ])
                .max_age(3600)
        } else {
            // Same-origin only
            Cors::default()
                .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
                .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
                .max_age(3600)
        };

        App::new()
            .wrap(cors)
            .wrap(RequestLogger)
            .app_data(web::Data::new(pool.clone()))
            .app_data(config.clone())
            .app_data(web::JsonConfig::default().limit(max_upload_size))
            .service(web::scope("/api/v1").configure(api::configure_api))
            .service(
                SwaggerUi::new("/api/docs/{_:.*}").url("/api/openapi.json", openapi.clone()),
            )
    })
    .workers(worker_count)
    .bind(&bind_address)?
    .run()
    .await
}
