//! Configuration for historical player generation.

/// One fWAR band of the synthetic long tail.
#[derive(Debug, Clone, Copy)]
pub struct FwarTier {
    /// Inclusive lower bound of the band.
    pub min_fwar: f64,
    /// Exclusive upper bound of the band.
    pub max_fwar: f64,
    /// Maximum number of synthetic records this band contributes.
    pub capacity: usize,
}

impl FwarTier {
    pub const fn new(min_fwar: f64, max_fwar: f64, capacity: usize) -> Self {
        Self {
            min_fwar,
            max_fwar,
            capacity,
        }
    }
}

/// Tunables for the player generator.
#[derive(Debug, Clone)]
pub struct PlayerGenConfig {
    /// Ordered fWAR bands, filled top-down until the target count is reached.
    pub tiers: Vec<FwarTier>,
    /// Weight table for how many franchises a career spans.
    pub team_count_weights: Vec<(usize, u32)>,
    /// Weight table for how many positions a player is listed at.
    pub position_count_weights: Vec<(usize, u32)>,
    /// Weight table for career length in seasons.
    pub career_length_weights: Vec<(u16, u32)>,
    /// Probability that a single-position player is a pitcher.
    pub pitcher_probability: f64,
    /// International-signing probability above the fWAR threshold.
    pub international_rate_star: f64,
    /// International-signing probability at or below the fWAR threshold.
    pub international_rate_journeyman: f64,
    /// fWAR value separating the two international-signing rates.
    pub international_fwar_threshold: f64,
    /// Minor-league-only probability, applied only below the fWAR cutoff.
    pub minor_league_rate: f64,
    /// fWAR value below which the minor-league flag can be set.
    pub minor_league_fwar_cutoff: f64,
    /// Earliest possible debut season.
    pub first_season: u16,
    /// Last completed season a career can extend into.
    pub last_season: u16,
    /// Redraws allowed before a duplicate name is disambiguated instead.
    pub name_retry_budget: usize,
}

impl Default for PlayerGenConfig {
    fn default() -> Self {
        // Career lengths are front-loaded toward 4-9 seasons, tapering
        // toward one-season careers and twenty-year veterans.
        let mut career_length_weights: Vec<(u16, u32)> = [5, 5, 10, 15, 20, 20, 15, 10, 5, 5]
            .into_iter()
            .enumerate()
            .map(|(i, weight)| (i as u16 + 1, weight))
            .collect();
        career_length_weights.extend((11..=20).map(|length| (length, 3)));

        Self {
            tiers: vec![
                FwarTier::new(50.0, 120.0, 100),
                FwarTier::new(30.0, 50.0, 200),
                FwarTier::new(15.0, 30.0, 300),
                FwarTier::new(5.0, 15.0, 400),
                FwarTier::new(0.0, 5.0, 1000),
            ],
            team_count_weights: vec![(1, 40), (2, 30), (3, 20), (4, 7), (5, 3)],
            position_count_weights: vec![(1, 60), (2, 30), (3, 10)],
            career_length_weights,
            pitcher_probability: 0.3,
            international_rate_star: 0.2,
            international_rate_journeyman: 0.35,
            international_fwar_threshold: 20.0,
            minor_league_rate: 0.05,
            minor_league_fwar_cutoff: 10.0,
            first_season: 1871,
            last_season: 2024,
            name_retry_budget: 50,
        }
    }
}

impl PlayerGenConfig {
    /// Total number of synthetic records the tiers can contribute.
    pub fn synthetic_capacity(&self) -> usize {
        self.tiers.iter().map(|tier| tier.capacity).sum()
    }
}
