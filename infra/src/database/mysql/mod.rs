//! MySQL repository implementations

pub mod listing_repository_impl;
pub mod testimonial_repository_impl;
pub mod user_repository_impl;

pub use listing_repository_impl::MySqlListingRepository;
pub use testimonial_repository_impl::MySqlTestimonialRepository;
pub use user_repository_impl::MySqlUserRepository;
