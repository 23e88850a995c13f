//! Testimonial service

pub mod service;

pub use service::TestimonialService;
