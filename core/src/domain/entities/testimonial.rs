//! Testimonial entity for the public landing page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};

/// Fields submitted when adding a testimonial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialDraft {
    pub name: String,
    pub location: String,
    pub rating: u8,
    pub feedback: String,
    pub image_url: String,
}

impl TestimonialDraft {
    /// All fields are required; rating is a 1-5 star score
    pub fn validate(&self) -> DomainResult<()> {
        let required = [
            &self.name,
            &self.location,
            &self.feedback,
            &self.image_url,
        ];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(DomainError::validation("All fields are required"));
        }
        if !(1..=5).contains(&self.rating) {
            return Err(DomainError::validation("Rating must be between 1 and 5"));
        }
        Ok(())
    }
}

/// A published testimonial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub rating: u8,
    pub feedback: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

impl Testimonial {
    /// Create a new Testimonial from a validated draft
    pub fn new(draft: TestimonialDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            location: draft.location,
            rating: draft.rating,
            feedback: draft.feedback,
            image_url: draft.image_url,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> TestimonialDraft {
        TestimonialDraft {
            name: "Amina".to_string(),
            location: "Lagos".to_string(),
            rating: 5,
            feedback: "Found our home in a week.".to_string(),
            image_url: "https://cdn.example.com/amina.jpg".to_string(),
        }
    }

    #[test]
    fn test_valid_draft() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_missing_field_rejected() {
        let mut d = draft();
        d.location = "  ".to_string();
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_rating_bounds() {
        let mut d = draft();
        d.rating = 0;
        assert!(d.validate().is_err());
        d.rating = 6;
        assert!(d.validate().is_err());
        d.rating = 3;
        assert!(d.validate().is_ok());
    }
}
