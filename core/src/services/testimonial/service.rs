//! Testimonial service implementation

use std::sync::Arc;

use crate::domain::entities::testimonial::{Testimonial, TestimonialDraft};
use crate::errors::DomainResult;
use crate::repositories::TestimonialRepository;

/// Service for the public testimonial wall
pub struct TestimonialService<T>
where
    T: TestimonialRepository,
{
    repository: Arc<T>,
}

impl<T> TestimonialService<T>
where
    T: TestimonialRepository,
{
    /// Create a new testimonial service
    pub fn new(repository: Arc<T>) -> Self {
        Self { repository }
    }

    /// Validate and publish a testimonial
    pub async fn add(&self, draft: TestimonialDraft) -> DomainResult<Testimonial> {
        draft.validate()?;
        self.repository.create(Testimonial::new(draft)).await
    }

    /// All testimonials, newest first
    pub async fn list(&self) -> DomainResult<Vec<Testimonial>> {
        self.repository.find_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;
    use crate::repositories::MockTestimonialRepository;

    fn draft(rating: u8) -> TestimonialDraft {
        TestimonialDraft {
            name: "Amina".to_string(),
            location: "Lagos".to_string(),
            rating,
            feedback: "Found our home in a week.".to_string(),
            image_url: "https://cdn.example.com/amina.jpg".to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_and_list_newest_first() {
        let service = TestimonialService::new(Arc::new(MockTestimonialRepository::new()));
        let first = service.add(draft(5)).await.unwrap();
        let second = service.add(draft(4)).await.unwrap();

        let all = service.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all[0].created_at >= all[1].created_at);
        assert!(all.iter().any(|t| t.id == first.id));
        assert!(all.iter().any(|t| t.id == second.id));
    }

    #[tokio::test]
    async fn test_add_rejects_bad_rating() {
        let service = TestimonialService::new(Arc::new(MockTestimonialRepository::new()));
        let result = service.add(draft(0)).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }
}
