//! Listing service tests against the in-memory repository

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::listing::{ListingDraft, ListingKind};
use crate::domain::value_objects::listing_query::ListingQueryParams;
use crate::errors::DomainError;
use crate::repositories::MockListingRepository;
use crate::services::listing::ListingService;

fn service() -> ListingService<MockListingRepository> {
    ListingService::new(Arc::new(MockListingRepository::new()))
}

fn cozy_flat() -> ListingDraft {
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
        image_urls: vec!["u1".to_string()],
    }
}

fn params_with(f: impl FnOnce(&mut ListingQueryParams)) -> ListingQueryParams {
    let mut params = ListingQueryParams::default();
    f(&mut params);
    params
}

#[tokio::test]
async fn test_create_assigns_identity_and_code() {
    let service = service();
    let owner = Uuid::new_v4();

    let created = service.create(owner, cozy_flat()).await.unwrap();
    assert!(created.code.starts_with("LST"));
    assert_eq!(created.user_ref, owner);

    let fetched = service.get(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_round_trip_preserves_payload() {
    let service = service();
    let draft = cozy_flat();
    let created = service.create(Uuid::new_v4(), draft.clone()).await.unwrap();

    assert_eq!(created.name, draft.name);
    assert_eq!(created.description, draft.description);
    assert_eq!(created.address, draft.address);
    assert_eq!(created.kind, draft.kind);
    assert_eq!(created.regular_price, draft.regular_price);
    assert_eq!(created.image_urls, draft.image_urls);
}

#[tokio::test]
async fn test_create_rejects_invalid_offer_prices() {
    let service = service();
    let mut draft = cozy_flat();
    draft.offer = true;
    draft.discount_price = 1200.0;

    let result = service.create(Uuid::new_v4(), draft).await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));
}

#[tokio::test]
async fn test_create_rejects_image_count_out_of_bounds() {
    let service = service();

    let mut none = cozy_flat();
    none.image_urls.clear();
    assert!(service.create(Uuid::new_v4(), none).await.is_err());

    let mut many = cozy_flat();
    many.image_urls = (0..7).map(|i| format!("u{i}")).collect();
    assert!(service.create(Uuid::new_v4(), many).await.is_err());
}

#[tokio::test]
async fn test_get_missing_is_not_found() {
    let service = service();
    let result = service.get(Uuid::new_v4()).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_get_by_code() {
    let service = service();
    let created = service.create(Uuid::new_v4(), cozy_flat()).await.unwrap();

    let fetched = service.get_by_code(&created.code).await.unwrap();
    assert_eq!(fetched.id, created.id);

    let missing = service.get_by_code("LST000000").await;
    assert!(matches!(missing, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_update_by_owner_replaces_fields() {
    let service = service();
    let owner = Uuid::new_v4();
    let created = service.create(owner, cozy_flat()).await.unwrap();

    let mut draft = cozy_flat();
    draft.name = "Sunny Flat".to_string();
    draft.regular_price = 1100.0;
    let updated = service.update(created.id, owner, draft).await.unwrap();

    assert_eq!(updated.name, "Sunny Flat");
    assert_eq!(updated.regular_price, 1100.0);
    assert_eq!(updated.code, created.code);
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn test_update_by_stranger_is_forbidden_and_does_not_mutate() {
    let service = service();
    let owner = Uuid::new_v4();
    let created = service.create(owner, cozy_flat()).await.unwrap();

    let mut draft = cozy_flat();
    draft.name = "Hijacked".to_string();
    let result = service.update(created.id, Uuid::new_v4(), draft).await;
    assert!(matches!(result, Err(DomainError::Forbidden { .. })));

    let unchanged = service.get(created.id).await.unwrap();
    assert_eq!(unchanged.name, "Cozy Flat");
}

#[tokio::test]
async fn test_update_missing_is_not_found_before_ownership() {
    let service = service();
    let result = service
        .update(Uuid::new_v4(), Uuid::new_v4(), cozy_flat())
        .await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_delete_lifecycle() {
    let service = service();
    let owner = Uuid::new_v4();
    let stranger = Uuid::new_v4();
    let created = service.create(owner, cozy_flat()).await.unwrap();

    // stranger cannot delete
    let result = service.delete(created.id, stranger).await;
    assert!(matches!(result, Err(DomainError::Forbidden { .. })));
    assert!(service.get(created.id).await.is_ok());

    // owner can
    service.delete(created.id, owner).await.unwrap();
    let gone = service.get(created.id).await;
    assert!(matches!(gone, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_search_term_and_kind_scenario() {
    let service = service();
    service.create(Uuid::new_v4(), cozy_flat()).await.unwrap();

    let by_term = service
        .search(&params_with(|p| p.search_term = Some("Cozy".to_string())))
        .await
        .unwrap();
    assert_eq!(by_term.len(), 1);

    let wrong_kind = service
        .search(&params_with(|p| {
            p.search_term = Some("Cozy".to_string());
            p.kind = Some("sale".to_string());
        }))
        .await
        .unwrap();
    assert!(wrong_kind.is_empty());
}

#[tokio::test]
async fn test_search_tri_state_flags_do_not_narrow_when_false() {
    let service = service();
    let owner = Uuid::new_v4();

    let mut with_offer = cozy_flat();
    with_offer.offer = true;
    with_offer.discount_price = 900.0;
    service.create(owner, with_offer).await.unwrap();
    service.create(owner, cozy_flat()).await.unwrap();

    let unfiltered = service
        .search(&params_with(|p| p.offer = Some("false".to_string())))
        .await
        .unwrap();
    assert_eq!(unfiltered.len(), 2);

    let narrowed = service
        .search(&params_with(|p| p.offer = Some("true".to_string())))
        .await
        .unwrap();
    assert_eq!(narrowed.len(), 1);
    assert!(narrowed[0].offer);
}

#[tokio::test]
async fn test_list_by_owner_enforces_self_access() {
    let service = service();
    let owner = Uuid::new_v4();
    service.create(owner, cozy_flat()).await.unwrap();

    let mine = service.list_by_owner(owner, owner).await.unwrap();
    assert_eq!(mine.len(), 1);

    let result = service.list_by_owner(owner, Uuid::new_v4()).await;
    assert!(matches!(result, Err(DomainError::Forbidden { .. })));
}
