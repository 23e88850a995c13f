//! Public testimonial endpoints

use actix_web::{web, HttpResponse};
use serde_json::json;

use estate_core::repositories::{ListingRepository, TestimonialRepository, UserRepository};
use estate_core::services::email::EmailService;

use crate::app::AppState;
use crate::dto::testimonial::AddTestimonialRequest;
use crate::handlers::domain_error_response;

/// Handler for POST /api/testimonial/add
pub async fn add_testimonial<L, U, T, M>(
    state: web::Data<AppState<L, U, T, M>>,
    request: web::Json<AddTestimonialRequest>,
) -> HttpResponse
where
    L: ListingRepository + 'static,
    U: UserRepository + 'static,
    T: TestimonialRepository + 'static,
    M: EmailService + 'static,
{
    match state.testimonials.add(request.into_inner().into()).await {
        Ok(_) => HttpResponse::Created().json(json!({
            "message": "Testimonial added successfully",
        })),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for GET /api/testimonial/all
pub async fn get_testimonials<L, U, T, M>(
    state: web::Data<AppState<L, U, T, M>>,
) -> HttpResponse
where
    L: ListingRepository + 'static,
    U: UserRepository + 'static,
    T: TestimonialRepository + 'static,
    M: EmailService + 'static,
{
    match state.testimonials.list().await {
        Ok(testimonials) => HttpResponse::Ok().json(testimonials),
        Err(err) => domain_error_response(&err),
    }
}
