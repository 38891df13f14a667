//! Core domain types for the fWAR player explorer.
//!
//! This crate holds the player record model, the canonical league reference
//! data (teams, positions, signing countries) with historical franchise name
//! normalization, the JSON file store that persists a generated collection,
//! and the query operations the serving layer applies to a loaded collection.

pub mod errors;
pub mod models;
pub mod query;
pub mod store;
pub mod teams;

pub use errors::StoreError;
pub use models::Player;
