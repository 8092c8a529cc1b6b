use std::sync::Arc;

use actix_web::{web, HttpServer};
use log::info;

use sg_core::services::token::TokenService;
use sg_infra::smile::SmileWebApi;
use sg_shared::config::{ServerConfig, SmileEnv};

mod app;
mod dto;
mod handlers;
mod middleware;
mod routes;

use routes::token::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting SmileGate API Server");

    // Load configuration
    let server_config = ServerConfig::from_env();
    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    // Snapshot the Smile ID environment once; each request validates it and
    // reports every missing variable.
    let smile_env = SmileEnv::from_env();
    if let Err(missing) = smile_env.require() {
        info!(
            "Smile ID configuration incomplete (missing: {}); token requests will fail until set",
            missing.join(", ")
        );
    }

    let provider = Arc::new(SmileWebApi::new());
    let token_service = Arc::new(TokenService::new(provider, smile_env));
    let app_state = web::Data::new(AppState { token_service });

    HttpServer::new(move || app::create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
