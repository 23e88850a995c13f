//! Tests for the mock listing repository search semantics

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::listing::{Listing, ListingDraft, ListingKind};
use crate::domain::value_objects::listing_query::{ListingQuery, ListingQueryParams};
use crate::repositories::listing::mock::MockListingRepository;
use crate::repositories::listing::ListingRepository;

fn draft(name: &str, kind: ListingKind, price: f64) -> ListingDraft {
    ListingDraft {
        name: name.to_string(),
        description: format!("{} description", name),
        address: "1 Test Street".to_string(),
        kind,
        bedrooms: 2,
        bathrooms: 1,
        regular_price: price,
        discount_price: 0.0,
        offer: false,
        parking: false,
        furnished: false,
        image_urls: vec!["https://cdn.example.com/a.jpg".to_string()],
    }
}

fn listing(name: &str, kind: ListingKind, price: f64, age_minutes: i64) -> Listing {
    let mut l = Listing::new(format!("LST{:06}", price as u32), draft(name, kind, price), Uuid::new_v4());
    l.created_at = Utc::now() - Duration::minutes(age_minutes);
    l
}

fn query(f: impl FnOnce(&mut ListingQueryParams)) -> ListingQuery {
    let mut params = ListingQueryParams::default();
    f(&mut params);
    ListingQuery::from_params(&params)
}

async fn seeded() -> MockListingRepository {
    let repo = MockListingRepository::new();
    repo.create(listing("Cozy Flat", ListingKind::Rent, 1000.0, 30))
        .await
        .unwrap();
    repo.create(listing("Bright Loft", ListingKind::Sale, 250000.0, 20))
        .await
        .unwrap();
    repo.create(listing("Garden House", ListingKind::Sale, 480000.0, 10))
        .await
        .unwrap();
    repo
}

#[tokio::test]
async fn test_crud_roundtrip() {
    let repo = MockListingRepository::new();
    let created = repo
        .create(listing("Cozy Flat", ListingKind::Rent, 1000.0, 0))
        .await
        .unwrap();

    let fetched = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);

    assert!(repo.delete(created.id).await.unwrap());
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    assert!(!repo.delete(created.id).await.unwrap());
}

#[tokio::test]
async fn test_update_missing_listing_is_not_found() {
    let repo = MockListingRepository::new();
    let orphan = listing("Nowhere", ListingKind::Sale, 1.0, 0);
    assert!(repo.update(orphan).await.is_err());
}

#[tokio::test]
async fn test_find_by_code() {
    let repo = seeded().await;
    let found = repo.find_by_code("LST001000").await.unwrap().unwrap();
    assert_eq!(found.name, "Cozy Flat");
    assert!(repo.find_by_code("LST999999").await.unwrap().is_none());
}

#[tokio::test]
async fn test_search_text_or_across_fields() {
    let repo = seeded().await;
    let found = repo
        .search(&query(|p| p.search_term = Some("cozy".to_string())))
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Cozy Flat");

    // description also matches
    let found = repo
        .search(&query(|p| p.search_term = Some("loft description".to_string())))
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
}

#[tokio::test]
async fn test_search_kind_filter_ands_with_text() {
    let repo = seeded().await;
    let found = repo
        .search(&query(|p| {
            p.search_term = Some("Cozy".to_string());
            p.kind = Some("sale".to_string());
        }))
        .await
        .unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn test_search_unfiltered_returns_both_kinds() {
    let repo = seeded().await;
    let found = repo.search(&ListingQuery::default()).await.unwrap();
    assert_eq!(found.len(), 3);
}

#[tokio::test]
async fn test_search_sorts_newest_first_by_default() {
    let repo = seeded().await;
    let found = repo.search(&ListingQuery::default()).await.unwrap();
    let names: Vec<_> = found.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Garden House", "Bright Loft", "Cozy Flat"]);
}

#[tokio::test]
async fn test_search_sort_by_price_ascending() {
    let repo = seeded().await;
    let found = repo
        .search(&query(|p| {
            p.sort = Some("regularPrice".to_string());
            p.order = Some("asc".to_string());
        }))
        .await
        .unwrap();
    let prices: Vec<_> = found.iter().map(|l| l.regular_price).collect();
    assert_eq!(prices, vec![1000.0, 250000.0, 480000.0]);
}

#[tokio::test]
async fn test_search_pagination_window() {
    let repo = MockListingRepository::new();
    for i in 0..5 {
        repo.create(listing(&format!("Home {i}"), ListingKind::Sale, i as f64, i))
            .await
            .unwrap();
    }

    // ascending by price: 0,1,2,3,4 -> window [1, 3)
    let page = repo
        .search(&query(|p| {
            p.sort = Some("regularPrice".to_string());
            p.order = Some("asc".to_string());
            p.limit = Some("2".to_string());
            p.start_index = Some("1".to_string());
        }))
        .await
        .unwrap();
    let prices: Vec<_> = page.iter().map(|l| l.regular_price).collect();
    assert_eq!(prices, vec![1.0, 2.0]);

    // window past the end is clamped
    let tail = repo
        .search(&query(|p| {
            p.limit = Some("10".to_string());
            p.start_index = Some("4".to_string());
        }))
        .await
        .unwrap();
    assert_eq!(tail.len(), 1);
}

#[tokio::test]
async fn test_find_by_owner_only_returns_their_listings() {
    let repo = MockListingRepository::new();
    let owner = Uuid::new_v4();

    let mut mine = listing("Mine", ListingKind::Rent, 500.0, 0);
    mine.user_ref = owner;
    repo.create(mine).await.unwrap();
    repo.create(listing("Theirs", ListingKind::Rent, 700.0, 0))
        .await
        .unwrap();

    let found = repo.find_by_owner(owner).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Mine");
}
