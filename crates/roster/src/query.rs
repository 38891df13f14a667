//! Query operations applied to a loaded players collection.
//!
//! These implement the serving layer's read path: equality/membership
//! filters, the descending fWAR ordering, result truncation, and the
//! per-team best-player rollup.

use std::collections::HashMap;

use crate::models::Player;

/// Result count cap applied when a request does not name one.
pub const DEFAULT_LIMIT: usize = 100;

/// Filter parameters accepted by the players query.
#[derive(Debug, Clone, Default)]
pub struct PlayerFilter {
    /// Keep players whose team list contains this name (case-insensitive).
    pub team: Option<String>,
    /// Keep players listed at this position code (case-insensitive).
    pub position: Option<String>,
    /// Keep players with at least this fWAR.
    pub min_fwar: Option<f64>,
    /// Maximum number of records returned; [`DEFAULT_LIMIT`] when unset.
    pub limit: Option<usize>,
}

/// One page of query results plus the pre-truncation match count.
#[derive(Debug, Clone)]
pub struct FilteredPlayers {
    pub players: Vec<Player>,
    pub total: usize,
}

/// Applies the filter, sorts descending by fWAR, and truncates to the limit.
pub fn filter_players(players: &[Player], filter: &PlayerFilter) -> FilteredPlayers {
    let mut matched: Vec<Player> = players
        .iter()
        .filter(|p| filter.team.as_deref().is_none_or(|team| p.played_for(team)))
        .filter(|p| {
            filter
                .position
                .as_deref()
                .is_none_or(|pos| p.plays_position(pos))
        })
        .filter(|p| filter.min_fwar.is_none_or(|min| p.fwar >= min))
        .cloned()
        .collect();

    matched.sort_by(|a, b| b.fwar.total_cmp(&a.fwar));

    let total = matched.len();
    matched.truncate(filter.limit.unwrap_or(DEFAULT_LIMIT));

    FilteredPlayers {
        players: matched,
        total,
    }
}

/// For every team appearing in the collection, the single highest-fWAR
/// record that lists that team.
pub fn best_by_team(players: &[Player]) -> HashMap<String, Player> {
    let mut best: HashMap<String, Player> = HashMap::new();

    for player in players {
        for team in &player.teams {
            match best.get(team) {
                Some(current) if current.fwar >= player.fwar => {}
                _ => {
                    best.insert(team.clone(), player.clone());
                }
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, fwar: f64, teams: &[&str], positions: &[&str]) -> Player {
        Player {
            name: name.to_string(),
            fwar,
            teams: teams.iter().map(|t| t.to_string()).collect(),
            positions: positions.iter().map(|p| p.to_string()).collect(),
            years_active: ["1990".to_string(), "2000".to_string()],
            minor_league: false,
            international_signing: false,
            signing_country: String::new(),
        }
    }

    fn fixture() -> Vec<Player> {
        vec![
            player("A", 50.0, &["Chicago Cubs"], &["C"]),
            player("B", 80.0, &["Chicago Cubs", "New York Mets"], &["SS"]),
            player("C", 20.0, &["New York Mets"], &["C", "1B"]),
            player("D", 95.0, &["Seattle Mariners"], &["SP"]),
        ]
    }

    #[test]
    fn test_unfiltered_sorts_descending() {
        let result = filter_players(&fixture(), &PlayerFilter::default());
        assert_eq!(result.total, 4);
        let names: Vec<_> = result.players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["D", "B", "A", "C"]);
    }

    #[test]
    fn test_team_filter_is_case_insensitive() {
        let filter = PlayerFilter {
            team: Some("chicago cubs".to_string()),
            ..Default::default()
        };
        let result = filter_players(&fixture(), &filter);
        let names: Vec<_> = result.players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn test_position_filter_is_case_insensitive() {
        let filter = PlayerFilter {
            position: Some("c".to_string()),
            ..Default::default()
        };
        let result = filter_players(&fixture(), &filter);
        let names: Vec<_> = result.players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[test]
    fn test_min_fwar_filter() {
        let filter = PlayerFilter {
            min_fwar: Some(50.0),
            ..Default::default()
        };
        let result = filter_players(&fixture(), &filter);
        assert_eq!(result.total, 3);
        assert!(result.players.iter().all(|p| p.fwar >= 50.0));
    }

    #[test]
    fn test_limit_truncates_but_total_counts_all_matches() {
        let filter = PlayerFilter {
            limit: Some(2),
            ..Default::default()
        };
        let result = filter_players(&fixture(), &filter);
        assert_eq!(result.players.len(), 2);
        assert_eq!(result.total, 4);
        assert_eq!(result.players[0].name, "D");
    }

    #[test]
    fn test_best_by_team() {
        let best = best_by_team(&fixture());
        assert_eq!(best["Chicago Cubs"].name, "B");
        assert_eq!(best["New York Mets"].name, "B");
        assert_eq!(best["Seattle Mariners"].name, "D");
        assert_eq!(best.len(), 3);
    }
}
