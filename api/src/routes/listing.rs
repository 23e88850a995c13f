//! Listing endpoints
//!
//! Create, update and delete require an authenticated caller and enforce
//! ownership in the service; the read endpoints are public.

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use estate_core::errors::DomainError;
use estate_core::repositories::{ListingRepository, TestimonialRepository, UserRepository};
use estate_core::services::email::EmailService;

use crate::app::AppState;
use crate::dto::listing::{ListingPayload, SearchListingsQuery};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::middleware::AuthContext;

use super::parse_uuid;

/// Handler for POST /api/listing/create
pub async fn create_listing<L, U, T, M>(
    req: HttpRequest,
    state: web::Data<AppState<L, U, T, M>>,
    payload: web::Json<ListingPayload>,
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

    if let Err(errors) = payload.validate() {
        return validation_error_response(&errors);
    }

    match state
        .listings
        .create(auth.user_id, payload.into_inner().into())
        .await
    {
        Ok(listing) => HttpResponse::Created().json(listing),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for DELETE /api/listing/delete/{id}
pub async fn delete_listing<L, U, T, M>(
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

    let id = match parse_uuid(&path, "listing") {
        Ok(id) => id,
        Err(err) => return domain_error_response(&err),
    };

    match state.listings.delete(id, auth.user_id).await {
        Ok(()) => HttpResponse::Ok().json("Listing has been deleted!"),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for POST /api/listing/update/{id}
pub async fn update_listing<L, U, T, M>(
    req: HttpRequest,
    state: web::Data<AppState<L, U, T, M>>,
    path: web::Path<String>,
    payload: web::Json<ListingPayload>,
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

    let id = match parse_uuid(&path, "listing") {
        Ok(id) => id,
        Err(err) => return domain_error_response(&err),
    };

    if let Err(errors) = payload.validate() {
        return validation_error_response(&errors);
    }

    match state
        .listings
        .update(id, auth.user_id, payload.into_inner().into())
        .await
    {
        Ok(listing) => HttpResponse::Ok().json(listing),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for GET /api/listing/get/{id}
pub async fn get_listing<L, U, T, M>(
    state: web::Data<AppState<L, U, T, M>>,
    path: web::Path<String>,
) -> HttpResponse
where
    L: ListingRepository + 'static,
    U: UserRepository + 'static,
    T: TestimonialRepository + 'static,
    M: EmailService + 'static,
{
    let id = match parse_uuid(&path, "listing") {
        Ok(id) => id,
        Err(err) => return domain_error_response(&err),
    };

    match state.listings.get(id).await {
        Ok(listing) => HttpResponse::Ok().json(listing),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for GET /api/listing/get - filtered/paginated search
pub async fn search_listings<L, U, T, M>(
    state: web::Data<AppState<L, U, T, M>>,
    query: web::Query<SearchListingsQuery>,
) -> HttpResponse
where
    L: ListingRepository + 'static,
    U: UserRepository + 'static,
    T: TestimonialRepository + 'static,
    M: EmailService + 'static,
{
    match state.listings.search(&query.into_inner().into()).await {
        Ok(listings) => HttpResponse::Ok().json(listings),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for GET /api/listing/search/{code} - lookup by listing code
pub async fn get_listing_by_code<L, U, T, M>(
    state: web::Data<AppState<L, U, T, M>>,
    path: web::Path<String>,
) -> HttpResponse
where
    L: ListingRepository + 'static,
    U: UserRepository + 'static,
    T: TestimonialRepository + 'static,
    M: EmailService + 'static,
{
    match state.listings.get_by_code(&path).await {
        Ok(listing) => HttpResponse::Ok().json(listing),
        Err(err) => domain_error_response(&err),
    }
}
