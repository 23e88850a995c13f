//! Domain error to HTTP response mapping
//!
//! Status mapping: 404 Not-Found, 401 Forbidden, 400 Validation/Conflict,
//! 500 Internal. Internal messages are logged and replaced with a constant
//! so store details never reach clients.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use tracing::error;
use validator::ValidationErrors;

use estate_core::errors::DomainError;
use estate_shared::types::response::ErrorBody;

/// Convert a domain error into the shared error envelope
pub fn domain_error_response(err: &DomainError) -> HttpResponse {
    let (status, message) = match err {
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
        DomainError::Forbidden { message } => (StatusCode::UNAUTHORIZED, message.clone()),
        DomainError::Validation { message } => (StatusCode::BAD_REQUEST, message.clone()),
        DomainError::Conflict { message } => (StatusCode::BAD_REQUEST, message.clone()),
        DomainError::Internal { message } => {
            error!(error = %message, "internal error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error".to_string(),
            )
        }
    };

    HttpResponse::build(status).json(ErrorBody::new(status.as_u16(), message))
}

/// Convert request DTO validation failures into a 400 envelope
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let message = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let detail = errs
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| "is invalid".to_string());
            format!("{}: {}", field, detail)
        })
        .collect::<Vec<_>>()
        .join("; ");

    HttpResponse::BadRequest().json(ErrorBody::new(400, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (DomainError::not_found("Listing"), 404),
            (DomainError::forbidden("no"), 401),
            (DomainError::validation("bad"), 400),
            (DomainError::conflict("dup"), 400),
            (DomainError::internal("boom"), 500),
        ];
        for (err, expected) in cases {
            let response = domain_error_response(&err);
            assert_eq!(response.status().as_u16(), expected);
        }
    }

    #[actix_rt::test]
    async fn test_internal_message_is_sanitized() {
        let response = domain_error_response(&DomainError::internal("mysql said: secret"));
        let bytes = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["statusCode"], 500);
        assert_eq!(json["message"], "Internal Server Error");
    }

    #[actix_rt::test]
    async fn test_not_found_envelope() {
        let response = domain_error_response(&DomainError::not_found("Listing"));
        let bytes = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["message"], "Listing not found!");
    }
}
