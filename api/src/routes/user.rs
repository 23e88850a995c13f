//! User profile endpoints - all require an authenticated caller

use actix_web::{web, HttpRequest, HttpResponse};

use estate_core::errors::DomainError;
use estate_core::repositories::{ListingRepository, TestimonialRepository, UserRepository};
use estate_core::services::email::EmailService;
use estate_core::services::user::UserChanges;

use crate::app::AppState;
use crate::dto::user::UpdateUserRequest;
use crate::handlers::domain_error_response;
use crate::middleware::AuthContext;

use super::parse_uuid;

/// Handler for POST /api/user/update/{id}
pub async fn update_user<L, U, T, M>(
    req: HttpRequest,
    state: web::Data<AppState<L, U, T, M>>,
    path: web::Path<String>,
    request: web::Json<UpdateUserRequest>,
) -> HttpResponse
where
    L: ListingRepository + 'static,
    U: UserRepository + 'static,
    T: TestimonialRepository + 'static,
    M: EmailService + 'static,
{
    let Some(auth) = AuthContext::from_request(&req) else {
        return domain_error_response(&DomainError::forbidden("Authentication required"));
    };

    let id = match parse_uuid(&path, "user") {
        Ok(id) => id,
        Err(err) => return domain_error_response(&err),
    };

    let request = request.into_inner();
    let changes = UserChanges {
        username: request.username,
        email: request.email,
        password: request.password,
        avatar: request.avatar,
    };

    match state.users.update(id, auth.user_id, changes).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for DELETE /api/user/delete/{id}
pub async fn delete_user<L, U, T, M>(
    req: HttpRequest,
    state: web::Data<AppState<L, U, T, M>>,
    path: web::Path<String>,
) -> HttpResponse
where
    L: ListingRepository + 'static,
    U: UserRepository + 'static,
    T: TestimonialRepository + 'static,
    M: EmailService + 'static,
{
    let Some(auth) = AuthContext::from_request(&req) else {
        return domain_error_response(&DomainError::forbidden("Authentication required"));
    };

    let id = match parse_uuid(&path, "user") {
        Ok(id) => id,
        Err(err) => return domain_error_response(&err),
    };

    match state.users.delete(id, auth.user_id).await {
        Ok(()) => {
            let mut cookie = actix_web::cookie::Cookie::new(
                crate::middleware::auth::ACCESS_TOKEN_COOKIE,
                "",
            );
            cookie.set_path("/");
            cookie.make_removal();
            HttpResponse::Ok().cookie(cookie).json("User has been deleted!")
        }
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for GET /api/user/listings/{id} - the caller's own listings
pub async fn get_user_listings<L, U, T, M>(
    req: HttpRequest,
    state: web::Data<AppState<L, U, T, M>>,
    path: web::Path<String>,
) -> HttpResponse
where
    L: ListingRepository + 'static,
    U: UserRepository + 'static,
    T: TestimonialRepository + 'static,
    M: EmailService + 'static,
{
    let Some(auth) = AuthContext::from_request(&req) else {
        return domain_error_response(&DomainError::forbidden("Authentication required"));
    };

    let id = match parse_uuid(&path, "user") {
        Ok(id) => id,
        Err(err) => return domain_error_response(&err),
    };

    match state.listings.list_by_owner(id, auth.user_id).await {
        Ok(listings) => HttpResponse::Ok().json(listings),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for GET /api/user/{id}
pub async fn get_user<L, U, T, M>(
    req: HttpRequest,
    state: web::Data<AppState<L, U, T, M>>,
    path: web::Path<String>,
) -> HttpResponse
where
    L: ListingRepository + 'static,
    U: UserRepository + 'static,
    T: TestimonialRepository + 'static,
    M: EmailService + 'static,
{
    if AuthContext::from_request(&req).is_none() {
        return domain_error_response(&DomainError::forbidden("Authentication required"));
    }

    let id = match parse_uuid(&path, "user") {
        Ok(id) => id,
        Err(err) => return domain_error_response(&err),
    };

    match state.users.get(id).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for PUT /api/user/remove-avatar/{id}
pub async fn remove_avatar<L, U, T, M>(
    req: HttpRequest,
    state: web::Data<AppState<L, U, T, M>>,
    path: web::Path<String>,
) -> HttpResponse
where
    L: ListingRepository + 'static,
    U: UserRepository + 'static,
    T: TestimonialRepository + 'static,
    M: EmailService + 'static,
{
    let Some(auth) = AuthContext::from_request(&req) else {
        return domain_error_response(&DomainError::forbidden("Authentication required"));
    };

    let id = match parse_uuid(&path, "user") {
        Ok(id) => id,
        Err(err) => return domain_error_response(&err),
    };

    match state.users.remove_avatar(id, auth.user_id).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(err) => domain_error_response(&err),
    }
}
