//! Historical player data generation for the player explorer.
//!
//! This crate produces the persisted players collection: a fixed roster of
//! known top players plus a synthetic long tail shaped by weighted sampling
//! across fWAR tiers, team counts, positions, career lengths, and
//! international-signing status.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use roster_data::prelude::*;
//! use std::path::Path;
//!
//! let generator = PlayerGenerator::new();
//! let mut rng = rand::thread_rng();
//! let players = generator.generate(1000, &mut rng);
//! roster::store::save_players(Path::new(roster::store::DEFAULT_DATA_PATH), &players)?;
//! ```

pub mod config;
pub mod generators;
pub mod names;
pub mod sampling;
pub mod seed;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{FwarTier, PlayerGenConfig};
    pub use crate::generators::PlayerGenerator;
    pub use crate::sampling::WeightedChoice;
    pub use crate::seed::known_players;
}
