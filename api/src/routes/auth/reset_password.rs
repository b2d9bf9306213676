use actix_web::{web, HttpResponse};
use validator::Validate;

use sf_core::repositories::{BusinessRepository, UserRepository};
use sf_core::services::agent::GenerationClient;
use sf_core::services::NotificationService;
use sf_shared::types::response::ApiResponse;

use crate::dto::auth::ResetPasswordRequest;
use crate::handlers::error::{validation_error, ApiError};
use crate::state::AppState;

/// Handler for POST /api/v1/auth/reset-password
///
/// Redeems a single-use reset token for a new password. An unknown token
/// yields 400; an expired one is consumed and also yields 400.
pub async fn reset_password<U, B, N, G>(
    state: web::Data<AppState<U, B, N, G>>,
    request: web::Json<ResetPasswordRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    B: BusinessRepository + 'static,
    N: NotificationService + 'static,
    G: GenerationClient + 'static,
{
    request.validate().map_err(|e| validation_error(&e))?;

    state
        .auth_service
        .reset_password(&request.reset_token, &request.new_password)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::ok("Password has been reset")))
}
