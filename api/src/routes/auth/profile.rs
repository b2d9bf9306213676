use actix_web::{web, HttpResponse};

use sf_core::repositories::{BusinessRepository, UserRepository};
use sf_core::services::agent::GenerationClient;
use sf_core::services::NotificationService;
use sf_shared::types::response::ApiResponse;

use crate::handlers::ApiError;
use crate::middleware::AuthContext;
use crate::state::AppState;

/// Handler for GET /api/v1/auth/profile (JWT protected)
pub async fn profile<U, B, N, G>(
    state: web::Data<AppState<U, B, N, G>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    B: BusinessRepository + 'static,
    N: NotificationService + 'static,
    G: GenerationClient + 'static,
{
    let profile = state.auth_service.get_profile(&auth.email).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Profile retrieved", profile)))
}
