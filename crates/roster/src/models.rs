use serde::{Deserialize, Serialize};

/// One player's career summary as stored in the players collection.
///
/// Records are assembled once per generation run and never mutated after
/// the collection is finalized. `signing_country` is the empty string
/// whenever `international_signing` is false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    /// Aggregate career performance value; primary ranking key.
    pub fwar: f64,
    /// Franchises played for, normalized to their current names.
    pub teams: Vec<String>,
    pub positions: Vec<String>,
    /// `[start_year, end_year]` as strings, start <= end.
    pub years_active: [String; 2],
    pub minor_league: bool,
    pub international_signing: bool,
    pub signing_country: String,
}

impl Player {
    /// Case-insensitive membership test against the team list.
    pub fn played_for(&self, team: &str) -> bool {
        self.teams.iter().any(|t| t.eq_ignore_ascii_case(team))
    }

    /// Case-insensitive membership test against the position list.
    pub fn plays_position(&self, position: &str) -> bool {
        self.positions
            .iter()
            .any(|p| p.eq_ignore_ascii_case(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_player() -> Player {
        Player {
            name: "Babe Ruth".to_string(),
            fwar: 182.5,
            teams: vec![
                "New York Yankees".to_string(),
                "Boston Red Sox".to_string(),
            ],
            positions: vec!["OF".to_string(), "SP".to_string()],
            years_active: ["1914".to_string(), "1935".to_string()],
            minor_league: false,
            international_signing: false,
            signing_country: String::new(),
        }
    }

    #[test]
    fn test_played_for_ignores_case() {
        let player = sample_player();
        assert!(player.played_for("new york yankees"));
        assert!(player.played_for("BOSTON RED SOX"));
        assert!(!player.played_for("Chicago Cubs"));
    }

    #[test]
    fn test_plays_position_ignores_case() {
        let player = sample_player();
        assert!(player.plays_position("of"));
        assert!(player.plays_position("sp"));
        assert!(!player.plays_position("C"));
    }

    #[test]
    fn test_json_field_names_are_stable() {
        let json = serde_json::to_value(sample_player()).unwrap();
        for field in [
            "name",
            "fwar",
            "teams",
            "positions",
            "years_active",
            "minor_league",
            "international_signing",
            "signing_country",
        ] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
    }
}
