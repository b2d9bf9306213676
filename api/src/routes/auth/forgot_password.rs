use actix_web::{web, HttpResponse};
use validator::Validate;

use sf_core::repositories::{BusinessRepository, UserRepository};
use sf_core::services::agent::GenerationClient;
use sf_core::services::NotificationService;
use sf_shared::types::response::ApiResponse;

use crate::dto::auth::ForgotPasswordRequest;
use crate::handlers::error::{validation_error, ApiError};
use crate::state::AppState;

/// Handler for POST /api/v1/auth/forgot-password
///
/// Starts the password-reset flow. The response is success-shaped whether
/// or not the email is registered, so the endpoint cannot be used to
/// enumerate accounts.
pub async fn forgot_password<U, B, N, G>(
    state: web::Data<AppState<U, B, N, G>>,
    request: web::Json<ForgotPasswordRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    B: BusinessRepository + 'static,
    N: NotificationService + 'static,
    G: GenerationClient + 'static,
{
    request.validate().map_err(|e| validation_error(&e))?;

    state.auth_service.forgot_password(&request.email).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::ok(
        "If the email is registered, a reset link has been sent",
    )))
}
