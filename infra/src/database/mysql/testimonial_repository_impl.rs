//! MySQL implementation of the TestimonialRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use estate_core::domain::entities::testimonial::Testimonial;
use estate_core::errors::DomainError;
use estate_core::repositories::TestimonialRepository;

/// MySQL implementation of TestimonialRepository
pub struct MySqlTestimonialRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTestimonialRepository {
    /// Create a new MySQL testimonial repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_testimonial(row: &sqlx::mysql::MySqlRow) -> Result<Testimonial, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::internal(format!("Failed to get id: {}", e)))?;
        let rating: u8 = row
            .try_get("rating")
            .map_err(|e| DomainError::internal(format!("Failed to get rating: {}", e)))?;

        Ok(Testimonial {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid testimonial UUID: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::internal(format!("Failed to get name: {}", e)))?,
            location: row
                .try_get("location")
                .map_err(|e| DomainError::internal(format!("Failed to get location: {}", e)))?,
            rating,
            feedback: row
                .try_get("feedback")
                .map_err(|e| DomainError::internal(format!("Failed to get feedback: {}", e)))?,
            image_url: row
                .try_get("image_url")
                .map_err(|e| DomainError::internal(format!("Failed to get image_url: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::internal(format!("Failed to get created_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl TestimonialRepository for MySqlTestimonialRepository {
    async fn create(&self, testimonial: Testimonial) -> Result<Testimonial, DomainError> {
        let query = r#"
            INSERT INTO testimonials (id, name, location, rating, feedback, image_url, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(testimonial.id.to_string())
            .bind(&testimonial.name)
            .bind(&testimonial.location)
            .bind(testimonial.rating)
            .bind(&testimonial.feedback)
            .bind(&testimonial.image_url)
            .bind(testimonial.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to create testimonial: {}", e)))?;

        Ok(testimonial)
    }

    async fn find_all(&self) -> Result<Vec<Testimonial>, DomainError> {
        let query = r#"
            SELECT id, name, location, rating, feedback, image_url, created_at
            FROM testimonials
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to list testimonials: {}", e)))?;

        let mut testimonials = Vec::with_capacity(rows.len());
        for row in rows {
            testimonials.push(Self::row_to_testimonial(&row)?);
        }
        Ok(testimonials)
    }
}
