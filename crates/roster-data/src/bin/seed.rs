//! Generates the players collection and writes it to the data directory.
//!
//! Run with:
//! ```
//! cargo run -p roster-data --bin seed -- [count]
//! ```

use std::path::Path;

use tracing_subscriber::EnvFilter;

use roster::store;
use roster_data::generators::PlayerGenerator;

const DEFAULT_COUNT: usize = 1000;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let target = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<i64>() {
            // Negative counts behave as "seed roster only"
            Ok(count) => count.max(0) as usize,
            Err(_) => {
                tracing::warn!("Invalid count: {arg}. Using default: {DEFAULT_COUNT}");
                DEFAULT_COUNT
            }
        },
        None => DEFAULT_COUNT,
    };

    tracing::info!("Generating {target} players with comprehensive data...");

    let generator = PlayerGenerator::new();
    let mut rng = rand::thread_rng();
    let players = generator.generate(target, &mut rng);

    store::save_players(Path::new(store::DEFAULT_DATA_PATH), &players)?;

    tracing::info!("Data generation complete! {} players written", players.len());
    tracing::info!("Top 10 by fWAR:");
    for (rank, player) in players.iter().take(10).enumerate() {
        tracing::info!("  {}. {}: {} fWAR", rank + 1, player.name, player.fwar);
    }

    Ok(())
}
