//! Testimonial request payloads

use serde::{Deserialize, Serialize};

use estate_core::domain::entities::testimonial::TestimonialDraft;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTestimonialRequest {
    pub name: String,
    pub location: String,
    pub rating: u8,
    pub feedback: String,
    pub image_url: String,
}

impl From<AddTestimonialRequest> for TestimonialDraft {
    fn from(request: AddTestimonialRequest) -> Self {
        TestimonialDraft {
            name: request.name,
            location: request.location,
            rating: request.rating,
            feedback: request.feedback,
            image_url: request.image_url,
        }
    }
}
