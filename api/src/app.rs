//! Application factory
//!
//! Builds the Actix-web application with CORS, request logging, and the
//! token/callback routes wired to a token service.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use sg_core::services::token::TokenProvider;

use crate::middleware::cors::create_cors;
use crate::routes::callback::smile_callback;
use crate::routes::token::{get_token, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<P>(
    app_state: web::Data<AppState<P>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    P: TokenProvider + 'static,
{
    let cors = create_cors();

    App::new()
        // Add application state
        .app_data(app_state)
        // Add middleware
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(web::scope("/api/v1").route("/token", web::get().to(get_token::<P>)))
        // Server-to-server callback from Smile ID
        .route("/smile/callback", web::post().to(smile_callback))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "smile-gate-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
