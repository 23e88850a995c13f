//! MySQL implementation of the ListingRepository trait.
//!
//! Translates the normalized [`ListingQuery`] into a dynamic SQL statement:
//! the free-text clause is an OR across name, address, description and code,
//! the remaining filters are ANDed equality checks, followed by ORDER BY and
//! LIMIT/OFFSET. The `utf8mb4` `_ci` collation makes LIKE case-insensitive,
//! matching the search contract without an explicit LOWER().

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, QueryBuilder, Row};
use std::str::FromStr;
use uuid::Uuid;

use estate_core::domain::entities::listing::{Listing, ListingKind};
use estate_core::domain::value_objects::listing_query::{
    FlagFilter, KindFilter, ListingQuery, SortField, SortOrder,
};
use estate_core::errors::DomainError;
use estate_core::repositories::ListingRepository;

const SELECT_COLUMNS: &str = "id, code, name, description, address, kind, bedrooms, bathrooms, \
     regular_price, discount_price, offer, parking, furnished, image_urls, user_ref, created_at";

/// MySQL implementation of ListingRepository
pub struct MySqlListingRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlListingRepository {
    /// Create a new MySQL listing repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Listing entity
    fn row_to_listing(row: &sqlx::mysql::MySqlRow) -> Result<Listing, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::internal(format!("Failed to get id: {}", e)))?;
        let user_ref: String = row
            .try_get("user_ref")
            .map_err(|e| DomainError::internal(format!("Failed to get user_ref: {}", e)))?;
        let kind: String = row
            .try_get("kind")
            .map_err(|e| DomainError::internal(format!("Failed to get kind: {}", e)))?;
        let image_urls: String = row
            .try_get("image_urls")
            .map_err(|e| DomainError::internal(format!("Failed to get image_urls: {}", e)))?;

        Ok(Listing {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid listing UUID: {}", e)))?,
            code: row
                .try_get("code")
                .map_err(|e| DomainError::internal(format!("Failed to get code: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::internal(format!("Failed to get name: {}", e)))?,
            description: row
                .try_get("description")
                .map_err(|e| DomainError::internal(format!("Failed to get description: {}", e)))?,
            address: row
                .try_get("address")
                .map_err(|e| DomainError::internal(format!("Failed to get address: {}", e)))?,
            kind: ListingKind::from_str(&kind).map_err(DomainError::internal)?,
            bedrooms: row
                .try_get("bedrooms")
                .map_err(|e| DomainError::internal(format!("Failed to get bedrooms: {}", e)))?,
            bathrooms: row
                .try_get("bathrooms")
                .map_err(|e| DomainError::internal(format!("Failed to get bathrooms: {}", e)))?,
            regular_price: row
                .try_get("regular_price")
                .map_err(|e| DomainError::internal(format!("Failed to get regular_price: {}", e)))?,
            discount_price: row.try_get("discount_price").map_err(|e| {
                DomainError::internal(format!("Failed to get discount_price: {}", e))
            })?,
            offer: row
                .try_get("offer")
                .map_err(|e| DomainError::internal(format!("Failed to get offer: {}", e)))?,
            parking: row
                .try_get("parking")
                .map_err(|e| DomainError::internal(format!("Failed to get parking: {}", e)))?,
            furnished: row
                .try_get("furnished")
                .map_err(|e| DomainError::internal(format!("Failed to get furnished: {}", e)))?,
            image_urls: serde_json::from_str(&image_urls)
                .map_err(|e| DomainError::internal(format!("Invalid image_urls JSON: {}", e)))?,
            user_ref: Uuid::parse_str(&user_ref)
                .map_err(|e| DomainError::internal(format!("Invalid owner UUID: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::internal(format!("Failed to get created_at: {}", e)))?,
        })
    }
}

/// Whitelisted ORDER BY column for a sort field
fn sort_column(field: SortField) -> &'static str {
    match field {
        SortField::CreatedAt => "created_at",
        SortField::RegularPrice => "regular_price",
        SortField::Bedrooms => "bedrooms",
        SortField::Bathrooms => "bathrooms",
    }
}

/// Escape LIKE wildcards so the search term matches literally
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[async_trait]
impl ListingRepository for MySqlListingRepository {
    async fn create(&self, listing: Listing) -> Result<Listing, DomainError> {
        let image_urls = serde_json::to_string(&listing.image_urls)
            .map_err(|e| DomainError::internal(format!("Failed to encode image_urls: {}", e)))?;

        let query = r#"
            INSERT INTO listings (
                id, code, name, description, address, kind, bedrooms, bathrooms,
                regular_price, discount_price, offer, parking, furnished,
                image_urls, user_ref, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(listing.id.to_string())
            .bind(&listing.code)
            .bind(&listing.name)
            .bind(&listing.description)
            .bind(&listing.address)
            .bind(listing.kind.as_str())
            .bind(listing.bedrooms)
            .bind(listing.bathrooms)
            .bind(listing.regular_price)
            .bind(listing.discount_price)
            .bind(listing.offer)
            .bind(listing.parking)
            .bind(listing.furnished)
            .bind(&image_urls)
            .bind(listing.user_ref.to_string())
            .bind(listing.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to create listing: {}", e)))?;

        Ok(listing)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Listing>, DomainError> {
        let query = format!("SELECT {} FROM listings WHERE id = ? LIMIT 1", SELECT_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find listing: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_listing(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Listing>, DomainError> {
        let query = format!(
            "SELECT {} FROM listings WHERE code = ? LIMIT 1",
            SELECT_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find listing by code: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_listing(&row)?)),
            None => Ok(None),
        }
    }

    async fn search(&self, query: &ListingQuery) -> Result<Vec<Listing>, DomainError> {
        let pattern = format!("%{}%", escape_like(&query.search_term));

        let mut builder: QueryBuilder<sqlx::MySql> =
            QueryBuilder::new(format!("SELECT {} FROM listings WHERE (name LIKE ", SELECT_COLUMNS));
        builder.push_bind(pattern.clone());
        builder.push(" OR address LIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR description LIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR code LIKE ");
        builder.push_bind(pattern);
        builder.push(")");

        if let KindFilter::Only(kind) = query.kind {
            builder.push(" AND kind = ");
            builder.push_bind(kind.as_str());
        }
        if query.offer == FlagFilter::Only {
            builder.push(" AND offer = TRUE");
        }
        if query.furnished == FlagFilter::Only {
            builder.push(" AND furnished = TRUE");
        }
        if query.parking == FlagFilter::Only {
            builder.push(" AND parking = TRUE");
        }

        builder.push(" ORDER BY ");
        builder.push(sort_column(query.sort));
        builder.push(match query.order {
            SortOrder::Asc => " ASC",
            SortOrder::Desc => " DESC",
        });

        builder.push(" LIMIT ");
        builder.push_bind(query.limit);
        builder.push(" OFFSET ");
        builder.push_bind(query.start_index);

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to search listings: {}", e)))?;

        let mut listings = Vec::with_capacity(rows.len());
        for row in rows {
            listings.push(Self::row_to_listing(&row)?);
        }
        Ok(listings)
    }

    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<Listing>, DomainError> {
        let query = format!(
            "SELECT {} FROM listings WHERE user_ref = ? ORDER BY created_at DESC",
            SELECT_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(owner.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find owner listings: {}", e)))?;

        let mut listings = Vec::with_capacity(rows.len());
        for row in rows {
            listings.push(Self::row_to_listing(&row)?);
        }
        Ok(listings)
    }

    async fn update(&self, listing: Listing) -> Result<Listing, DomainError> {
        let image_urls = serde_json::to_string(&listing.image_urls)
            .map_err(|e| DomainError::internal(format!("Failed to encode image_urls: {}", e)))?;

        let query = r#"
            UPDATE listings SET
                name = ?, description = ?, address = ?, kind = ?,
                bedrooms = ?, bathrooms = ?, regular_price = ?, discount_price = ?,
                offer = ?, parking = ?, furnished = ?, image_urls = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&listing.name)
            .bind(&listing.description)
            .bind(&listing.address)
            .bind(listing.kind.as_str())
            .bind(listing.bedrooms)
            .bind(listing.bathrooms)
            .bind(listing.regular_price)
            .bind(listing.discount_price)
            .bind(listing.offer)
            .bind(listing.parking)
            .bind(listing.furnished)
            .bind(&image_urls)
            .bind(listing.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to update listing: {}", e)))?;

        if result.rows_affected() == 0 {
            // MySQL reports changed rows, not matched rows, so a same-values
            // update also lands here. Distinguish it from a missing row.
            let exists = sqlx::query("SELECT 1 FROM listings WHERE id = ? LIMIT 1")
                .bind(listing.id.to_string())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::internal(format!("Failed to check listing: {}", e)))?;
            if exists.is_none() {
                return Err(DomainError::not_found("Listing"));
            }
        }

        Ok(listing)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM listings WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to delete listing: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_neutralizes_wildcards() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn test_sort_column_whitelist() {
        assert_eq!(sort_column(SortField::CreatedAt), "created_at");
        assert_eq!(sort_column(SortField::RegularPrice), "regular_price");
    }
}
