//! JWT authentication middleware for protecting API endpoints.
//!
//! Extracts the access token from the `Authorization: Bearer` header or the
//! `access_token` cookie (the browser client uses the cookie), verifies it,
//! and injects the caller's identity into request extensions. Handlers
//! trust that identity for ownership checks and never re-verify
//! credentials.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    Error, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};
use uuid::Uuid;

use estate_core::services::auth::AccessTokenIssuer;
use estate_shared::types::response::ErrorBody;

/// Name of the session cookie set at sign-in
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Authenticated caller identity injected into requests
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
    /// User ID extracted from JWT claims
    pub user_id: Uuid,
}

impl AuthContext {
    /// Read the identity a [`JwtAuth`]-wrapped route injected
    pub fn from_request(req: &HttpRequest) -> Option<Self> {
        req.extensions().get::<AuthContext>().copied()
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    issuer: AccessTokenIssuer,
}

impl JwtAuth {
    /// Creates a new JWT authentication middleware
    pub fn new(issuer: AccessTokenIssuer) -> Self {
        Self { issuer }
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
            issuer: self.issuer.clone(),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    issuer: AccessTokenIssuer,
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

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let issuer = self.issuer.clone();

        Box::pin(async move {
            let token = match extract_token(&req) {
                Some(token) => token,
                None => return Err(unauthorized("Authentication required")),
            };

            let context = match issuer.verify(&token).and_then(|claims| claims.user_id()) {
                Ok(user_id) => AuthContext { user_id },
                Err(_) => return Err(unauthorized("Invalid or expired token")),
            };

            req.extensions_mut().insert(context);
            service.call(req).await
        })
    }
}

/// Bearer header first, session cookie second
fn extract_token(req: &ServiceRequest) -> Option<String> {
    let bearer = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.to_string());

    bearer.or_else(|| {
        req.cookie(ACCESS_TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_string())
    })
}

/// 401 carrying the shared error envelope
fn unauthorized(message: &str) -> Error {
    let response = HttpResponse::Unauthorized().json(ErrorBody::new(401, message));
    InternalError::from_response(message.to_string(), response).into()
}
