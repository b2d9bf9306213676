use actix_web::{web, HttpResponse};
use validator::Validate;

use sf_core::repositories::{BusinessRepository, UserRepository};
use sf_core::services::agent::GenerationClient;
use sf_core::services::NotificationService;
use sf_shared::types::response::ApiResponse;

use crate::dto::auth::LoginRequest;
use crate::handlers::error::{validation_error, ApiError};
use crate::state::AppState;

/// Handler for POST /api/v1/auth/login
///
/// Exchanges email/password credentials for an access + refresh token
/// pair. Unknown email and wrong password both yield 401.
pub async fn login<U, B, N, G>(
    state: web::Data<AppState<U, B, N, G>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    B: BusinessRepository + 'static,
    N: NotificationService + 'static,
    G: GenerationClient + 'static,
{
    request.validate().map_err(|e| validation_error(&e))?;

    let response = state
        .auth_service
        .authenticate_user(&request.email, &request.password)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Login successful", response)))
}
