//! Outbound email delivery

pub mod smtp;

pub use smtp::SmtpEmailService;
