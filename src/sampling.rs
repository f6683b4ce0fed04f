use rand::Rng;

use crate::error::{Error, Result};

/// Prefix sums over a weight vector, used to draw an index with probability
/// proportional to its weight.
#[derive(Debug, Clone)]
pub(crate) struct CumulativeWeights {
    prefix: Vec<f64>,
}

impl CumulativeWeights {
    pub fn new(weights: &[f64]) -> Result<Self> {
        let mut total = 0.0;
        let prefix: Vec<f64> = weights
            .iter()
            .map(|w| {
                total += w;
                total
            })
            .collect();

        if !total.is_finite() {
            return Err(Error::InvalidWeight(
                "the sum of the weights is not finite".to_string(),
            ));
        }
        if total <= 0.0 {
            return Err(Error::InvalidWeight(
                "at least one face needs a positive weight".to_string(),
            ));
        }

        Ok(Self { prefix })
    }

    pub fn total(&self) -> f64 {
        self.prefix.last().copied().unwrap_or(0.0)
    }

    /// Index of the first prefix sum strictly greater than `point`.
    /// Zero weight entries never satisfy this because their prefix sum equals
    /// the one before them.
    pub fn index_of(&self, point: f64) -> usize {
        let index = self.prefix.partition_point(|&sum| sum <= point);
        index.min(self.prefix.len() - 1)
    }

    pub fn sample(&self, rng: &mut impl Rng) -> usize {
        let point = rng.gen_range(0.0..self.total());
        self.index_of(point)
    }
}
