//! Route handlers

pub mod auth;
pub mod contact;
pub mod listing;
pub mod testimonial;
pub mod user;

use uuid::Uuid;

use estate_core::errors::{DomainError, DomainResult};

/// Parse a path segment into an id, failing as a 400 rather than a 500
pub(crate) fn parse_uuid(raw: &str, what: &str) -> DomainResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| DomainError::validation(format!("Invalid {} id.", what)))
}
