//! Business services orchestrating repositories and collaborators

pub mod auth;
pub mod email;
pub mod listing;
pub mod testimonial;
pub mod user;

pub use auth::AuthService;
pub use email::{EmailMessage, EmailService};
pub use listing::ListingService;
pub use testimonial::TestimonialService;
pub use user::UserService;
