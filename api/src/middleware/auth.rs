//! JWT authentication middleware
//!
//! Extracts the bearer token from the Authorization header, verifies it
//! as an access token, and injects an explicit `AuthContext` into request
//! extensions before any business logic runs. Identity is never ambient:
//! handlers take it from the context, not from request bodies.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll};

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;

use sf_core::domain::entities::token::Claims;
use sf_core::services::TokenService;

use crate::handlers::ApiError;
use sf_core::errors::{DomainError, TokenError};

/// User authentication context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Email (JWT subject) of the authenticated user
    pub email: String,
    /// Account role from the token claims
    pub role: String,
}

impl AuthContext {
    fn from_claims(claims: &Claims) -> Self {
        Self {
            email: claims.sub.clone(),
            role: claims.role.clone(),
        }
    }
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let context = req.extensions().get::<AuthContext>().cloned();
        ready(context.ok_or_else(|| {
            ApiError(DomainError::Token(TokenError::InvalidTokenFormat)).into()
        }))
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    token_service: Arc<TokenService>,
}

impl JwtAuth {
    /// Creates a new JWT authentication middleware over the token service
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: self.token_service.clone(),
        }))
    }
}

pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let token_service = self.token_service.clone();

        Box::pin(async move {
            let token = bearer_token(&req).ok_or_else(|| {
                Error::from(ApiError(DomainError::Token(TokenError::InvalidTokenFormat)))
            })?;

            let claims = token_service
                .verify_access_token(&token)
                .map_err(|e| Error::from(ApiError(e)))?;

            req.extensions_mut()
                .insert(AuthContext::from_claims(&claims));

            service.call(req).await
        })
    }
}

fn bearer_token(req: &ServiceRequest) -> Option<String> {
    let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    header
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}
