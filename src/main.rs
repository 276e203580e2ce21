use std::process;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};

use ugsl_videos::db::{ConnectionProvider, run_pending_migrations};
use ugsl_videos::media::MediaStorage;
use ugsl_videos::models::config::ServerConfig;
use ugsl_videos::repository::DieselRepository;
use ugsl_videos::routes;
use ugsl_videos::seed::seed_sample_data;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".into());
    let server_config = match ServerConfig::load(&app_env) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            process::exit(1);
        }
    };

    let provider = ConnectionProvider::new(server_config.database.clone());
    match run_pending_migrations(&provider) {
        Ok(applied) => log::info!("Applied {applied} pending migrations"),
        Err(e) => {
            log::error!("Failed to run database migrations: {e}");
            process::exit(1);
        }
    }

    let storage = MediaStorage::new(&server_config.media_dir, &server_config.media_url_prefix);
    if let Err(e) = storage.ensure_dir() {
        log::error!("Failed to create media directory: {e}");
        process::exit(1);
    }

    if server_config.seed_sample_data {
        if let Err(e) = seed_sample_data(&provider, |file_name| storage.url_for(file_name)) {
            log::error!("Failed to seed sample data: {e}");
            process::exit(1);
        }
    }

    let repo = web::Data::new(DieselRepository::new(provider));
    let storage = web::Data::new(storage);
    let allowed_origins = server_config.allowed_origins.clone();

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting server on {}:{}",
        server_config.address,
        server_config.port
    );

    HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allow_any_header()
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors)
            .app_data(repo.clone())
            .app_data(storage.clone())
            .service(Files::new(storage.url_prefix(), storage.dir()))
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
