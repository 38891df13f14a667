//! JSON file persistence for the players collection.
//!
//! The collection is written wholesale: serialize to a sibling temp file,
//! then rename over the destination so readers never observe a partial
//! document.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::errors::StoreError;
use crate::models::Player;

/// Well-known location of the persisted collection.
pub const DEFAULT_DATA_PATH: &str = "data/players.json";

/// Writes the whole collection to `path`, replacing any previous file.
pub fn save_players(path: &Path, players: &[Player]) -> Result<(), StoreError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let tmp = path.with_extension("json.tmp");
    {
        let file = File::create(&tmp)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, players)?;
        writer.flush()?;
    }
    fs::rename(&tmp, path)?;

    info!("Saved {} players to {}", players.len(), path.display());
    Ok(())
}

/// Reads a previously persisted collection back from `path`.
pub fn load_players(path: &Path) -> Result<Vec<Player>, StoreError> {
    let file = File::open(path)?;
    let players = serde_json::from_reader(BufReader::new(file))?;
    Ok(players)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("roster-store-{}-{name}", std::process::id()))
    }

    fn sample_players() -> Vec<Player> {
        vec![
            Player {
                name: "Walter Johnson".to_string(),
                fwar: 164.5,
                teams: vec!["Texas Rangers".to_string()],
                positions: vec!["P".to_string()],
                years_active: ["1907".to_string(), "1927".to_string()],
                minor_league: false,
                international_signing: false,
                signing_country: String::new(),
            },
            Player {
                name: "Ichiro Suzuki".to_string(),
                fwar: 60.0,
                teams: vec![
                    "Seattle Mariners".to_string(),
                    "New York Yankees".to_string(),
                    "Miami Marlins".to_string(),
                ],
                positions: vec!["RF".to_string(), "OF".to_string()],
                years_active: ["2001".to_string(), "2019".to_string()],
                minor_league: false,
                international_signing: true,
                signing_country: "Japan".to_string(),
            },
        ]
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = scratch_path("round-trip");
        let path = dir.join("players.json");
        let players = sample_players();

        save_players(&path, &players).unwrap();
        let loaded = load_players(&path).unwrap();

        assert_eq!(loaded, players);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = scratch_path("no-temp");
        let path = dir.join("players.json");

        save_players(&path, &sample_players()).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_players(Path::new("/nonexistent/players.json")).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }
}
