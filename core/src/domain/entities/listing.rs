//! Listing entity representing one property for sale or rent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};

/// Maximum number of images a listing may carry
pub const MAX_IMAGES: usize = 6;

/// Whether a listing is offered for sale or for rent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    /// Property for sale
    Sale,
    /// Property for rent
    Rent,
}

impl ListingKind {
    /// Column value used by the persistence layer
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingKind::Sale => "sale",
            ListingKind::Rent => "rent",
        }
    }
}

impl std::str::FromStr for ListingKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sale" => Ok(ListingKind::Sale),
            "rent" => Ok(ListingKind::Rent),
            other => Err(format!("unknown listing kind: {}", other)),
        }
    }
}

/// The mutable fields of a listing, as submitted by a client
///
/// A draft is validated before it reaches the store; the reference web
/// client enforced these rules in the UI only, the service enforces them
/// again here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDraft {
    pub name: String,
    pub description: String,
    pub address: String,
    #[serde(rename = "type")]
    pub kind: ListingKind,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub regular_price: f64,
    pub discount_price: f64,
    pub offer: bool,
    pub parking: bool,
    pub furnished: bool,
    pub image_urls: Vec<String>,
}

impl ListingDraft {
    /// Validate the draft invariants
    ///
    /// - 1 to 6 image references, first one is the cover image
    /// - non-negative prices
    /// - `discount_price` strictly below `regular_price` whenever `offer`
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("Name is required."));
        }
        if self.image_urls.is_empty() {
            return Err(DomainError::validation(
                "A listing must have at least one image.",
            ));
        }
        if self.image_urls.len() > MAX_IMAGES {
            return Err(DomainError::validation(format!(
                "A listing can have at most {} images.",
                MAX_IMAGES
            )));
        }
        if self.regular_price < 0.0 || self.discount_price < 0.0 {
            return Err(DomainError::validation("Prices must be non-negative."));
        }
        if self.offer && self.discount_price >= self.regular_price {
            return Err(DomainError::validation(
                "Discount price must be lower than regular price.",
            ));
        }
        Ok(())
    }
}

/// Listing entity representing one property listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Unique identifier for the listing
    pub id: Uuid,

    /// Human-readable short code, e.g. "LST483920". Not guaranteed unique.
    #[serde(rename = "listingId")]
    pub code: String,

    pub name: String,
    pub description: String,
    pub address: String,

    #[serde(rename = "type")]
    pub kind: ListingKind,

    pub bedrooms: u32,
    pub bathrooms: u32,

    pub regular_price: f64,

    /// Only meaningful when `offer` is true
    pub discount_price: f64,

    pub offer: bool,
    pub parking: bool,
    pub furnished: bool,

    /// 1 to 6 image references; the first is the cover image
    pub image_urls: Vec<String>,

    /// Identifier of the owning user; immutable after creation
    pub user_ref: Uuid,

    /// Timestamp when the listing was created
    pub created_at: DateTime<Utc>,
}

impl Listing {
    /// Create a new Listing from a validated draft
    pub fn new(code: String, draft: ListingDraft, user_ref: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            code,
            name: draft.name,
            description: draft.description,
            address: draft.address,
            kind: draft.kind,
            bedrooms: draft.bedrooms,
            bathrooms: draft.bathrooms,
            regular_price: draft.regular_price,
            discount_price: draft.discount_price,
            offer: draft.offer,
            parking: draft.parking,
            furnished: draft.furnished,
            image_urls: draft.image_urls,
            user_ref,
            created_at: Utc::now(),
        }
    }

    /// Check whether the given user owns this listing
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_ref == user_id
    }

    /// Replace all mutable fields with the draft's values
    ///
    /// Identity, code, owner and creation timestamp are preserved.
    pub fn apply(&mut self, draft: ListingDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.address = draft.address;
        self.kind = draft.kind;
        self.bedrooms = draft.bedrooms;
        self.bathrooms = draft.bathrooms;
        self.regular_price = draft.regular_price;
        self.discount_price = draft.discount_price;
        self.offer = draft.offer;
        self.parking = draft.parking;
        self.furnished = draft.furnished;
        self.image_urls = draft.image_urls;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ListingDraft {
        ListingDraft {
            name: "Cozy Flat".to_string(),
            description: "Two rooms near the river".to_string(),
            address: "12 Brook Lane".to_string(),
            kind: ListingKind::Rent,
            bedrooms: 2,
            bathrooms: 1,
            regular_price: 1000.0,
            discount_price: 0.0,
            offer: false,
            parking: false,
            furnished: true,
            image_urls: vec!["https://cdn.example.com/u1.jpg".to_string()],
        }
    }

    #[test]
    fn test_new_listing_from_draft() {
        let owner = Uuid::new_v4();
        let listing = Listing::new("LST123456".to_string(), draft(), owner);

        assert_eq!(listing.code, "LST123456");
        assert_eq!(listing.name, "Cozy Flat");
        assert_eq!(listing.kind, ListingKind::Rent);
        assert_eq!(listing.user_ref, owner);
        assert!(listing.is_owned_by(owner));
        assert!(!listing.is_owned_by(Uuid::new_v4()));
    }

    #[test]
    fn test_apply_preserves_identity() {
        let owner = Uuid::new_v4();
        let mut listing = Listing::new("LST123456".to_string(), draft(), owner);
        let id = listing.id;
        let created_at = listing.created_at;

        let mut updated = draft();
        updated.name = "Sunny Flat".to_string();
        updated.kind = ListingKind::Sale;
        listing.apply(updated);

        assert_eq!(listing.id, id);
        assert_eq!(listing.code, "LST123456");
        assert_eq!(listing.user_ref, owner);
        assert_eq!(listing.created_at, created_at);
        assert_eq!(listing.name, "Sunny Flat");
        assert_eq!(listing.kind, ListingKind::Sale);
    }

    #[test]
    fn test_validate_rejects_empty_images() {
        let mut d = draft();
        d.image_urls.clear();
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_too_many_images() {
        let mut d = draft();
        d.image_urls = (0..7).map(|i| format!("https://cdn.example.com/{i}.jpg")).collect();
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_validate_offer_requires_lower_discount() {
        let mut d = draft();
        d.offer = true;
        d.regular_price = 1000.0;
        d.discount_price = 1000.0;
        assert!(d.validate().is_err());

        d.discount_price = 900.0;
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_validate_ignores_discount_without_offer() {
        let mut d = draft();
        d.offer = false;
        d.discount_price = 5000.0;
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_kind_serialization() {
        assert_eq!(serde_json::to_string(&ListingKind::Sale).unwrap(), "\"sale\"");
        assert_eq!(serde_json::to_string(&ListingKind::Rent).unwrap(), "\"rent\"");
    }

    #[test]
    fn test_listing_serializes_wire_names() {
        let listing = Listing::new("LST000001".to_string(), draft(), Uuid::new_v4());
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["listingId"], "LST000001");
        assert_eq!(json["type"], "rent");
        assert!(json["regularPrice"].is_number());
        assert!(json["imageUrls"].is_array());
        assert!(json["userRef"].is_string());
        assert!(json.get("kind").is_none());
    }
}
