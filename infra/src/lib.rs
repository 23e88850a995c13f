//! # AM Estate Infrastructure
//!
//! Concrete implementations of the core repository and collaborator
//! traits: MySQL persistence via SQLx and SMTP email delivery via lettre.

pub mod database;
pub mod email;

pub use database::{
    create_pool, MySqlListingRepository, MySqlTestimonialRepository, MySqlUserRepository,
};
pub use email::SmtpEmailService;
