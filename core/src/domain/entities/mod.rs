//! Domain entities

pub mod listing;
pub mod testimonial;
pub mod user;

pub use listing::{Listing, ListingDraft, ListingKind};
pub use testimonial::{Testimonial, TestimonialDraft};
pub use user::{User, UserProfile};
