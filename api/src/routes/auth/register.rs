use actix_web::{web, HttpResponse};
use validator::Validate;

use sf_core::repositories::{BusinessRepository, UserRepository};
use sf_core::services::agent::GenerationClient;
use sf_core::services::NotificationService;
use sf_shared::types::response::ApiResponse;

use crate::dto::auth::{RegisterRequest, RegisterResponse};
use crate::handlers::error::{validation_error, ApiError};
use crate::state::AppState;

/// Handler for POST /api/v1/auth/register
///
/// Creates a new account and sends a best-effort welcome email. A
/// duplicate email yields 409.
pub async fn register<U, B, N, G>(
    state: web::Data<AppState<U, B, N, G>>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    B: BusinessRepository + 'static,
    N: NotificationService + 'static,
    G: GenerationClient + 'static,
{
    request.validate().map_err(|e| validation_error(&e))?;

    let user = state
        .auth_service
        .register_user(
            &request.email,
            &request.password,
            &request.first_name,
            &request.last_name,
        )
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(
        "User registered successfully",
        RegisterResponse {
            user_id: user.id,
            email: user.email,
        },
    )))
}
