use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use log::info;

use sf_api::{middleware, routes, state::AppState};
use sf_core::services::agent::ResponseCache;
use sf_core::services::auth::{AuthServiceConfig, ResetTokenSweeper, SweeperConfig};
use sf_core::services::token::TokenServiceConfig;
use sf_core::services::{AgentService, AuthService, TokenService};
use sf_infra::ai::GeminiClient;
use sf_infra::database::{create_pool, MySqlBusinessRepository, MySqlUserRepository};
use sf_infra::email::ResendEmailService;
use sf_shared::config::{AgentConfig, AuthConfig, DatabaseConfig, EmailConfig, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting StoreFront API Server");

    let server_config = ServerConfig::from_env();
    let auth_config = AuthConfig::from_env();

    // Database and repositories
    let pool = create_pool(&DatabaseConfig::from_env())
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    let user_repository = Arc::new(MySqlUserRepository::new(pool.clone()));
    let business_repository = Arc::new(MySqlBusinessRepository::new(pool));

    // External services
    let email_service = Arc::new(
        ResendEmailService::new(EmailConfig::from_env())
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?,
    );
    let generation_client = Arc::new(
        GeminiClient::new(AgentConfig::from_env())
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?,
    );

    // Core services
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&auth_config)));
    let auth_service = Arc::new(AuthService::new(
        user_repository.clone(),
        email_service,
        token_service.clone(),
        AuthServiceConfig::from(&auth_config),
    ));
    let agent_service = Arc::new(AgentService::new(
        business_repository,
        generation_client,
        Arc::new(ResponseCache::new()),
    ));

    // Background cleanup of expired reset tokens
    let sweeper = Arc::new(ResetTokenSweeper::new(
        user_repository,
        SweeperConfig {
            interval_seconds: auth_config.sweep_interval_seconds,
            enabled: true,
        },
    ));
    sweeper.start_background_task();

    let state = web::Data::new(AppState::new(auth_service, agent_service, token_service.clone()));

    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || {
        let cors = middleware::cors::create_cors();

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(state.clone())
            .configure(|cfg| {
                routes::configure::<
                    MySqlUserRepository,
                    MySqlBusinessRepository,
                    ResendEmailService,
                    GeminiClient,
                >(cfg, token_service.clone())
            })
            .default_service(web::route().to(|| async {
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": "not_found",
                    "message": "The requested resource was not found"
                }))
            }))
    });

    if server_config.workers > 0 {
        server = server.workers(server_config.workers);
    }

    server.bind(&bind_address)?.run().await
}
