use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use sf_core::repositories::{BusinessRepository, UserRepository};
use sf_core::services::agent::GenerationClient;
use sf_core::services::NotificationService;
use sf_shared::types::response::ApiResponse;

use crate::dto::agent::{GenerateRequest, GenerateResponse};
use crate::handlers::error::{validation_error, ApiError};
use crate::middleware::AuthContext;
use crate::state::AppState;

/// Handler for POST /api/v1/agent/{business_id}/generate (JWT protected)
///
/// Proxies a customer prompt to the per-business assistant. An unknown
/// business yields 404; an upstream outage yields a 200 with the canned
/// fallback text rather than an error.
pub async fn generate<U, B, N, G>(
    state: web::Data<AppState<U, B, N, G>>,
    _auth: AuthContext,
    business_id: web::Path<Uuid>,
    request: web::Json<GenerateRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    B: BusinessRepository + 'static,
    N: NotificationService + 'static,
    G: GenerationClient + 'static,
{
    request.validate().map_err(|e| validation_error(&e))?;

    let response = state
        .agent_service
        .respond(business_id.into_inner(), &request.prompt)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Response generated",
        GenerateResponse { response },
    )))
}
