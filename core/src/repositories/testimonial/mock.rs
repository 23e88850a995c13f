//! In-memory implementation of TestimonialRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::testimonial::Testimonial;
use crate::errors::DomainError;

use super::trait_::TestimonialRepository;

/// Mock testimonial repository for testing
pub struct MockTestimonialRepository {
    testimonials: Arc<RwLock<Vec<Testimonial>>>,
}

impl MockTestimonialRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            testimonials: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for MockTestimonialRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TestimonialRepository for MockTestimonialRepository {
    async fn create(&self, testimonial: Testimonial) -> Result<Testimonial, DomainError> {
        let mut testimonials = self.testimonials.write().await;
        testimonials.push(testimonial.clone());
        Ok(testimonial)
    }

    async fn find_all(&self) -> Result<Vec<Testimonial>, DomainError> {
        let testimonials = self.testimonials.read().await;
        let mut all = testimonials.clone();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }
}
