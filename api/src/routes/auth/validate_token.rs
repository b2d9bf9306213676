use actix_web::{web, HttpResponse};

use sf_core::repositories::{BusinessRepository, UserRepository};
use sf_core::services::agent::GenerationClient;
use sf_core::services::NotificationService;
use sf_shared::types::response::ApiResponse;

use crate::dto::auth::{ValidateTokenRequest, ValidateTokenResponse};
use crate::handlers::ApiError;
use crate::state::AppState;

/// Handler for POST /api/v1/auth/validate-token
///
/// Reports whether the supplied access token validates. Always 200; the
/// verdict is in the body, so clients can check token freshness without
/// triggering auth failures.
pub async fn validate_token<U, B, N, G>(
    state: web::Data<AppState<U, B, N, G>>,
    request: web::Json<ValidateTokenRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    B: BusinessRepository + 'static,
    N: NotificationService + 'static,
    G: GenerationClient + 'static,
{
    let body = match state.token_service.verify_access_token(&request.token) {
        Ok(claims) => ValidateTokenResponse {
            valid: true,
            email: Some(claims.sub),
            role: Some(claims.role),
        },
        Err(_) => ValidateTokenResponse {
            valid: false,
            email: None,
            role: None,
        },
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success("Token validated", body)))
}
