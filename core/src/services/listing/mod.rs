//! Listing service - CRUD orchestration with ownership enforcement

pub mod code;
pub mod service;

#[cfg(test)]
mod tests;

pub use code::generate_listing_code;
pub use service::ListingService;
