//! Testimonial repository trait.

use async_trait::async_trait;

use crate::domain::entities::testimonial::Testimonial;
use crate::errors::DomainError;

/// Repository trait for Testimonial persistence
#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    /// Persist a new testimonial
    async fn create(&self, testimonial: Testimonial) -> Result<Testimonial, DomainError>;

    /// All testimonials, newest first
    async fn find_all(&self) -> Result<Vec<Testimonial>, DomainError>;
}
