//! Entity generators for the players collection.
//!
//! - [`PlayerGenerator`]: Seed roster plus a tier-shaped synthetic long tail

pub mod player;

pub use player::PlayerGenerator;
