//! Request and response payloads

pub mod auth;
pub mod contact;
pub mod listing;
pub mod testimonial;
pub mod user;
