//! Contact-form relay endpoint

use actix_web::{web, HttpResponse};
use serde_json::json;
use validator::Validate;

use estate_core::repositories::{ListingRepository, TestimonialRepository, UserRepository};
use estate_core::services::email::{EmailMessage, EmailService};

use crate::app::AppState;
use crate::dto::contact::ContactRequest;
use crate::handlers::{domain_error_response, validation_error_response};

/// Handler for POST /api/email/send
///
/// Relays a visitor's message to the site operator's inbox, with the
/// visitor's address as reply-to.
pub async fn send_contact_email<L, U, T, M>(
    state: web::Data<AppState<L, U, T, M>>,
    request: web::Json<ContactRequest>,
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
    let subject = request
        .subject
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "New Contact Message".to_string());
    let body = format!(
        "Name: {}\nEmail: {}\n\n{}",
        request.name, request.email, request.message
    );

    let message = EmailMessage::new(state.contact_inbox.clone(), subject, body)
        .with_reply_to(request.email);

    match state.mailer.send(message).await {
        Ok(()) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Email sent!",
        })),
        Err(err) => domain_error_response(&err),
    }
}
