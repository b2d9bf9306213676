//! Route registration

pub mod agent;
pub mod auth;
pub mod health;

use std::sync::Arc;

use actix_web::web;

use sf_core::repositories::{BusinessRepository, UserRepository};
use sf_core::services::agent::GenerationClient;
use sf_core::services::{NotificationService, TokenService};

use crate::middleware::JwtAuth;

/// Registers every route of the API
///
/// Generic over the seams so the same tree serves production wiring and
/// mock-backed integration tests.
pub fn configure<U, B, N, G>(cfg: &mut web::ServiceConfig, token_service: Arc<TokenService>)
where
    U: UserRepository + 'static,
    B: BusinessRepository + 'static,
    N: NotificationService + 'static,
    G: GenerationClient + 'static,
{
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register::<U, B, N, G>))
                        .route("/login", web::post().to(auth::login::<U, B, N, G>))
                        .route(
                            "/forgot-password",
                            web::post().to(auth::forgot_password::<U, B, N, G>),
                        )
                        .route(
                            "/reset-password",
                            web::post().to(auth::reset_password::<U, B, N, G>),
                        )
                        .route("/refresh", web::post().to(auth::refresh::<U, B, N, G>))
                        .route(
                            "/validate-token",
                            web::post().to(auth::validate_token::<U, B, N, G>),
                        )
                        .service(
                            web::scope("")
                                .wrap(JwtAuth::new(token_service.clone()))
                                .route(
                                    "/change-password",
                                    web::post().to(auth::change_password::<U, B, N, G>),
                                )
                                .route("/profile", web::get().to(auth::profile::<U, B, N, G>)),
                        ),
                )
                .service(
                    web::scope("/agent")
                        .wrap(JwtAuth::new(token_service))
                        .route(
                            "/{business_id}/generate",
                            web::post().to(agent::generate::<U, B, N, G>),
                        ),
                ),
        );
}
