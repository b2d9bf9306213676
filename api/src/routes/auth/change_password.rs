use actix_web::{web, HttpResponse};
use validator::Validate;

use sf_core::repositories::{BusinessRepository, UserRepository};
use sf_core::services::agent::GenerationClient;
use sf_core::services::NotificationService;
use sf_shared::types::response::ApiResponse;

use crate::dto::auth::ChangePasswordRequest;
use crate::handlers::error::{validation_error, ApiError};
use crate::middleware::AuthContext;
use crate::state::AppState;

/// Handler for POST /api/v1/auth/change-password (JWT protected)
///
/// The account comes from the validated access token, never from the
/// request body.
pub async fn change_password<U, B, N, G>(
    state: web::Data<AppState<U, B, N, G>>,
    auth: AuthContext,
    request: web::Json<ChangePasswordRequest>,
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
        .change_password(&auth.email, &request.current_password, &request.new_password)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::ok("Password changed")))
}
