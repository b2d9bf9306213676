use actix_web::{web, HttpResponse};

use sf_core::repositories::{BusinessRepository, UserRepository};
use sf_core::services::agent::GenerationClient;
use sf_core::services::NotificationService;
use sf_shared::types::response::ApiResponse;

use crate::dto::auth::RefreshTokenRequest;
use crate::handlers::ApiError;
use crate::state::AppState;

/// Handler for POST /api/v1/auth/refresh
///
/// Exchanges a valid refresh token for a fresh access token. The refresh
/// token itself is echoed back unrotated.
pub async fn refresh<U, B, N, G>(
    state: web::Data<AppState<U, B, N, G>>,
    request: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    B: BusinessRepository + 'static,
    N: NotificationService + 'static,
    G: GenerationClient + 'static,
{
    let response = state
        .auth_service
        .refresh_token(&request.refresh_token)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Token refreshed", response)))
}
