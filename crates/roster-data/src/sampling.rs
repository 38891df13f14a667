//! Reusable weighted discrete sampling.

use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};

/// Samples values from a fixed `(value, weight)` table.
///
/// Weights are proportional; they do not need to sum to 100. Each
/// distribution used by the generator is declared once as a table and
/// sampled through this type.
#[derive(Debug, Clone)]
pub struct WeightedChoice<T> {
    values: Vec<T>,
    index: WeightedIndex<u32>,
}

impl<T: Clone> WeightedChoice<T> {
    /// Builds a sampler from a weight table.
    ///
    /// Panics if the table is empty or carries no positive weight; the
    /// tables in this crate are fixed at construction time.
    pub fn new(table: &[(T, u32)]) -> Self {
        let values = table.iter().map(|(value, _)| value.clone()).collect();
        let index = WeightedIndex::new(table.iter().map(|(_, weight)| *weight))
            .expect("weight table must contain a positive weight");
        Self { values, index }
    }

    /// Draws one value according to the table's weights.
    pub fn sample(&self, rng: &mut impl Rng) -> T {
        self.values[self.index.sample(rng)].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    #[test]
    fn test_weights_shape_the_distribution() {
        let choice = WeightedChoice::new(&[(1usize, 40), (2, 30), (3, 20), (4, 7), (5, 3)]);
        let mut rng = StdRng::seed_from_u64(12345);

        let mut counts: HashMap<usize, usize> = HashMap::new();
        for _ in 0..10_000 {
            *counts.entry(choice.sample(&mut rng)).or_insert(0) += 1;
        }

        assert!(counts[&1] > counts[&2]);
        assert!(counts[&2] > counts[&3]);
        assert!(counts[&3] > counts[&4]);
        assert!(counts[&4] > counts[&5]);
    }

    #[test]
    fn test_zero_weight_value_is_never_drawn() {
        let choice = WeightedChoice::new(&[("kept", 10), ("dropped", 0)]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1_000 {
            assert_eq!(choice.sample(&mut rng), "kept");
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let choice = WeightedChoice::new(&[(1, 5), (2, 5), (3, 10)]);

        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let first: Vec<i32> = (0..100).map(|_| choice.sample(&mut a)).collect();
        let second: Vec<i32> = (0..100).map(|_| choice.sample(&mut b)).collect();

        assert_eq!(first, second);
    }
}
