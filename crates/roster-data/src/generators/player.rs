//! Historical player synthesis across fWAR tiers.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use roster::models::Player;
use roster::teams::{
    ALL_TEAMS, INTERNATIONAL_COUNTRIES, PITCHING_POSITIONS, POSITIONS, normalize_team_name,
};

use crate::config::{FwarTier, PlayerGenConfig};
use crate::names::{FIRST_NAMES, LAST_NAMES};
use crate::sampling::WeightedChoice;
use crate::seed::known_players;

/// Generates a ranked collection of historical player records.
///
/// Each run is an independent computation over the supplied random source;
/// the generator holds no state between runs.
pub struct PlayerGenerator {
    config: PlayerGenConfig,
    team_counts: WeightedChoice<usize>,
    position_counts: WeightedChoice<usize>,
    career_lengths: WeightedChoice<u16>,
}

impl PlayerGenerator {
    /// Creates a generator with the default tier and weight tables.
    pub fn new() -> Self {
        Self::with_config(PlayerGenConfig::default())
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: PlayerGenConfig) -> Self {
        let team_counts = WeightedChoice::new(&config.team_count_weights);
        let position_counts = WeightedChoice::new(&config.position_count_weights);
        let career_lengths = WeightedChoice::new(&config.career_length_weights);
        Self {
            config,
            team_counts,
            position_counts,
            career_lengths,
        }
    }

    /// Produces the seed roster plus a synthetic long tail, normalized and
    /// sorted by fWAR descending.
    ///
    /// The seed roster is always emitted whole, so a `target` below the seed
    /// count returns the full roster; a `target` beyond the combined tier
    /// capacity saturates there. Generation never fails and performs no I/O.
    pub fn generate(&self, target: usize, rng: &mut impl Rng) -> Vec<Player> {
        let mut players = known_players();
        let mut used_names: HashSet<String> =
            players.iter().map(|p| p.name.clone()).collect();

        for tier in &self.config.tiers {
            let room = tier.capacity.min(target.saturating_sub(players.len()));
            for _ in 0..room {
                players.push(self.synthesize(tier, &mut used_names, rng));
            }
            if players.len() >= target {
                break;
            }
        }

        for player in &mut players {
            player.teams = player
                .teams
                .iter()
                .map(|team| normalize_team_name(team).to_string())
                .collect();
        }

        players.sort_by(|a, b| b.fwar.total_cmp(&a.fwar));
        players
    }

    fn synthesize(
        &self,
        tier: &FwarTier,
        used_names: &mut HashSet<String>,
        rng: &mut impl Rng,
    ) -> Player {
        let fwar = round_tenths(rng.gen_range(tier.min_fwar..tier.max_fwar));
        let name = self.draw_name(used_names, rng);
        let teams = self.draw_teams(rng);
        let positions = self.draw_positions(rng);
        let years_active = self.draw_years(rng);
        let (international_signing, signing_country) = self.draw_signing(fwar, rng);
        let minor_league = fwar < self.config.minor_league_fwar_cutoff
            && rng.r#gen::<f64>() < self.config.minor_league_rate;

        Player {
            name,
            fwar,
            teams,
            positions,
            years_active,
            minor_league,
            international_signing,
            signing_country,
        }
    }

    /// Draws a name not yet present in the collection being built.
    ///
    /// The pools only yield `38 * 38` combinations, so redraws are bounded;
    /// once the budget is spent the name is disambiguated with a counter
    /// instead of spinning.
    fn draw_name(&self, used_names: &mut HashSet<String>, rng: &mut impl Rng) -> String {
        let mut name = full_name(rng);
        let mut redraws = 0;

        while used_names.contains(&name) {
            redraws += 1;
            if redraws > self.config.name_retry_budget {
                let base = name;
                let mut suffix = 2;
                name = format!("{base} {suffix}");
                while used_names.contains(&name) {
                    suffix += 1;
                    name = format!("{base} {suffix}");
                }
                break;
            }
            name = full_name(rng);
        }

        used_names.insert(name.clone());
        name
    }

    fn draw_teams(&self, rng: &mut impl Rng) -> Vec<String> {
        let count = self.team_counts.sample(rng).min(ALL_TEAMS.len());
        ALL_TEAMS
            .choose_multiple(rng, count)
            .map(|team| team.to_string())
            .collect()
    }

    fn draw_positions(&self, rng: &mut impl Rng) -> Vec<String> {
        let count = self.position_counts.sample(rng);

        if count == 1 && rng.r#gen::<f64>() < self.config.pitcher_probability {
            let role = PITCHING_POSITIONS[rng.gen_range(0..PITCHING_POSITIONS.len())];
            return vec![role.to_string()];
        }

        let fielding: Vec<&str> = POSITIONS
            .iter()
            .copied()
            .filter(|position| !PITCHING_POSITIONS.contains(position))
            .collect();
        let count = count.min(fielding.len());
        fielding
            .choose_multiple(rng, count)
            .map(|position| position.to_string())
            .collect()
    }

    fn draw_years(&self, rng: &mut impl Rng) -> [String; 2] {
        let length = self.career_lengths.sample(rng);
        let start = rng.gen_range(self.config.first_season..=self.config.last_season - length);
        let end = start + length - 1;
        [start.to_string(), end.to_string()]
    }

    fn draw_signing(&self, fwar: f64, rng: &mut impl Rng) -> (bool, String) {
        let rate = if fwar > self.config.international_fwar_threshold {
            self.config.international_rate_star
        } else {
            self.config.international_rate_journeyman
        };

        if rng.r#gen::<f64>() < rate {
            let country = INTERNATIONAL_COUNTRIES[rng.gen_range(0..INTERNATIONAL_COUNTRIES.len())];
            (true, country.to_string())
        } else {
            (false, String::new())
        }
    }
}

impl Default for PlayerGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn full_name(rng: &mut impl Rng) -> String {
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    format!("{first} {last}")
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
