//! Authentication endpoints

use actix_web::cookie::Cookie;
use actix_web::{web, HttpResponse};
use serde_json::json;
use validator::Validate;

use estate_core::repositories::{ListingRepository, TestimonialRepository, UserRepository};
use estate_core::services::auth::service::AuthenticatedUser;
use estate_core::services::email::EmailService;

use crate::app::AppState;
use crate::dto::auth::{
    ForgotPasswordRequest, OAuthRequest, ResetPasswordRequest, SigninRequest, SignupRequest,
};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::middleware::auth::ACCESS_TOKEN_COOKIE;

/// Session cookie carrying the freshly issued token
fn session_cookie(token: &str) -> Cookie<'static> {
    Cookie::build(ACCESS_TOKEN_COOKIE, token.to_string())
        .path("/")
        .http_only(true)
        .finish()
}

/// Expired session cookie used to sign the client out
fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(ACCESS_TOKEN_COOKIE, "");
    cookie.set_path("/");
    cookie.make_removal();
    cookie
}

/// Handler for POST /api/auth/signup
pub async fn signup<L, U, T, M>(
    state: web::Data<AppState<L, U, T, M>>,
    request: web::Json<SignupRequest>,
) -> HttpResponse
where
    L: ListingRepository + 'static,
    U: UserRepository + 'static,
    T: TestimonialRepository + 'static,
    M: EmailService + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .auth
        .signup(&request.username, &request.email, &request.password)
        .await
    {
        Ok(_) => HttpResponse::Created().json(json!({
            "success": true,
            "message": "User created successfully!",
        })),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for POST /api/auth/signin
pub async fn signin<L, U, T, M>(
    state: web::Data<AppState<L, U, T, M>>,
    request: web::Json<SigninRequest>,
) -> HttpResponse
where
    L: ListingRepository + 'static,
    U: UserRepository + 'static,
    T: TestimonialRepository + 'static,
    M: EmailService + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state.auth.signin(&request.email, &request.password).await {
        Ok(AuthenticatedUser { user, token }) => HttpResponse::Ok()
            .cookie(session_cookie(&token))
            .json(json!({ "success": true, "user": user })),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for POST /api/auth/google - external identity provider sign-in
pub async fn oauth<L, U, T, M>(
    state: web::Data<AppState<L, U, T, M>>,
    request: web::Json<OAuthRequest>,
) -> HttpResponse
where
    L: ListingRepository + 'static,
    U: UserRepository + 'static,
    T: TestimonialRepository + 'static,
    M: EmailService + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    let request = request.into_inner();
    match state
        .auth
        .oauth(&request.email, &request.name, request.photo)
        .await
    {
        Ok(AuthenticatedUser { user, token }) => HttpResponse::Ok()
            .cookie(session_cookie(&token))
            .json(user),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for GET /api/auth/signout
pub async fn signout() -> HttpResponse {
    HttpResponse::Ok()
        .cookie(removal_cookie())
        .json("User has been logged out!")
}

/// Handler for POST /api/auth/forgot-password
pub async fn forgot_password<L, U, T, M>(
    state: web::Data<AppState<L, U, T, M>>,
    request: web::Json<ForgotPasswordRequest>,
) -> HttpResponse
where
    L: ListingRepository + 'static,
    U: UserRepository + 'static,
    T: TestimonialRepository + 'static,
    M: EmailService + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state.auth.forgot_password(&request.email).await {
        Ok(()) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Reset link sent to your email.",
        })),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for POST /api/auth/reset-password/{token}
pub async fn reset_password<L, U, T, M>(
    state: web::Data<AppState<L, U, T, M>>,
    path: web::Path<String>,
    request: web::Json<ResetPasswordRequest>,
) -> HttpResponse
where
    L: ListingRepository + 'static,
    U: UserRepository + 'static,
    T: TestimonialRepository + 'static,
    M: EmailService + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state.auth.reset_password(&path, &request.password).await {
        Ok(()) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Password reset successful.",
        })),
        Err(err) => domain_error_response(&err),
    }
}
