//! User profile service

pub mod service;

#[cfg(test)]
mod tests;

pub use service::{UserChanges, UserService};
