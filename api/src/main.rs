use actix_web::{web, HttpServer};
use log::{error, info, warn};
use std::sync::Arc;

use es_api::app::{create_app, AppState};
use es_api::middleware::create_cors;
use es_core::services::{AuthServiceConfig, MediaService, TokenService, TokenServiceConfig};
use es_infra::database::{mysql_repositories, DatabasePool};
use es_infra::media::CloudinaryGateway;
use es_shared::{AppConfig, Environment};

fn startup_error(context: &str, err: impl std::fmt::Display) -> std::io::Error {
    error!("{}: {}", context, err);
    std::io::Error::new(std::io::ErrorKind::Other, format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let log_level = Environment::from_env().default_log_level().to_string();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(log_level));

    info!("Starting EduSync API Server");

    let config = AppConfig::load().map_err(|e| startup_error("Invalid configuration", e))?;
    info!("Environment: {}", config.environment);

    if config.auth.jwt.is_using_default_secret() {
        if config.is_production() {
            return Err(startup_error("Invalid configuration", "JWT_SECRET must be set in production"));
        }
        warn!("JWT_SECRET is not set; using the development default");
    }

    let pool = DatabasePool::new(config.database.clone())
        .await
        .map_err(|e| startup_error("Database connection failed", e))?;

    if config.database.run_migrations {
        pool.run_migrations()
            .await
            .map_err(|e| startup_error("Database migration failed", e))?;
    }

    let repositories = mysql_repositories(pool.get_pool());

    let gateway = CloudinaryGateway::new(config.media.clone())
        .map_err(|e| startup_error("Media host configuration failed", e))?;
    let media = Arc::new(MediaService::new(Arc::new(gateway), config.media.root_folder.clone()));

    let tokens = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth.jwt)));

    let state = web::Data::new(
        AppState::new(&repositories, media, tokens, AuthServiceConfig::from(&config.auth))
            .with_limits(config.server.max_json_size, config.server.max_upload_size),
    );

    let cors_config = config.cors.clone();
    let environment = config.environment;
    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || {
        create_app(state.clone(), create_cors(&cors_config, environment))
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    info!("Server stopped, closing database pool");
    pool.close().await;

    Ok(())
}
