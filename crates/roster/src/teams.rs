//! Canonical league reference data and franchise name normalization.

/// The 30 current franchises.
pub const ALL_TEAMS: &[&str] = &[
    "Arizona Diamondbacks",
    "Atlanta Braves",
    "Baltimore Orioles",
    "Boston Red Sox",
    "Chicago Cubs",
    "Chicago White Sox",
    "Cincinnati Reds",
    "Cleveland Guardians",
    "Colorado Rockies",
    "Detroit Tigers",
    "Houston Astros",
    "Kansas City Royals",
    "Los Angeles Angels",
    "Los Angeles Dodgers",
    "Miami Marlins",
    "Milwaukee Brewers",
    "Minnesota Twins",
    "New York Mets",
    "New York Yankees",
    "Oakland Athletics",
    "Philadelphia Phillies",
    "Pittsburgh Pirates",
    "San Diego Padres",
    "San Francisco Giants",
    "Seattle Mariners",
    "St. Louis Cardinals",
    "Tampa Bay Rays",
    "Texas Rangers",
    "Toronto Blue Jays",
    "Washington Nationals",
];

/// Position codes a player can be listed at.
pub const POSITIONS: &[&str] = &[
    "C", "1B", "2B", "3B", "SS", "RF", "CF", "LF", "DH", "SP", "RP", "CP",
];

/// The three pitching roles within [`POSITIONS`].
pub const PITCHING_POSITIONS: &[&str] = &["SP", "RP", "CP"];

/// Countries an international signing can originate from.
pub const INTERNATIONAL_COUNTRIES: &[&str] = &[
    "Dominican Republic",
    "Venezuela",
    "Puerto Rico",
    "Cuba",
    "Japan",
    "Mexico",
    "Panama",
    "South Korea",
    "Taiwan",
    "Colombia",
    "Brazil",
    "Argentina",
];

/// Defunct or relocated franchise names and their modern successors.
const HISTORICAL_ALIASES: &[(&str, &str)] = &[
    ("Milwaukee Braves", "Atlanta Braves"),
    ("Boston Braves", "Atlanta Braves"),
    ("Brooklyn Dodgers", "Los Angeles Dodgers"),
    ("New York Giants", "San Francisco Giants"),
    ("St. Louis Browns", "Baltimore Orioles"),
    ("Washington Senators", "Texas Rangers"),
    ("Montreal Expos", "Washington Nationals"),
    ("California Angels", "Los Angeles Angels"),
    ("Anaheim Angels", "Los Angeles Angels"),
    ("Florida Marlins", "Miami Marlins"),
    ("Tampa Bay Devil Rays", "Tampa Bay Rays"),
    ("Cleveland Indians", "Cleveland Guardians"),
    ("Cleveland Naps", "Cleveland Guardians"),
    ("Cleveland Spiders", "Cleveland Guardians"),
    ("Philadelphia Athletics", "Oakland Athletics"),
    ("Kansas City Athletics", "Oakland Athletics"),
];

/// Rewrites a historical franchise name to its current canonical name.
///
/// Unknown names pass through unchanged, so the lookup is total and
/// idempotent.
pub fn normalize_team_name(team: &str) -> &str {
    HISTORICAL_ALIASES
        .iter()
        .find(|(historical, _)| *historical == team)
        .map(|(_, current)| *current)
        .unwrap_or(team)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_historical_name() {
        assert_eq!(
            normalize_team_name("Brooklyn Dodgers"),
            "Los Angeles Dodgers"
        );
        assert_eq!(normalize_team_name("Montreal Expos"), "Washington Nationals");
        assert_eq!(
            normalize_team_name("Cleveland Spiders"),
            "Cleveland Guardians"
        );
    }

    #[test]
    fn test_normalize_passes_current_names_through() {
        assert_eq!(normalize_team_name("Houston Astros"), "Houston Astros");
        for team in ALL_TEAMS {
            assert_eq!(normalize_team_name(team), *team);
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for (historical, _) in HISTORICAL_ALIASES {
            let once = normalize_team_name(historical);
            assert_eq!(normalize_team_name(once), once);
        }
    }

    #[test]
    fn test_alias_targets_are_current_franchises() {
        for (_, current) in HISTORICAL_ALIASES {
            assert!(ALL_TEAMS.contains(current), "{current} is not a franchise");
        }
    }

    #[test]
    fn test_pitching_positions_are_position_codes() {
        for role in PITCHING_POSITIONS {
            assert!(POSITIONS.contains(role));
        }
    }
}
