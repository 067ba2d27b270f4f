use crate::{Error, Result};
use rand::{
    distr::{weighted::WeightedIndex, Distribution},
    Rng,
};

/// Draws an index with probability proportional to its weight.
#[derive(Debug, Clone)]
pub struct WeightedChoice {
    index: WeightedIndex<f64>,
}

impl WeightedChoice {
    /// Fails when a weight is negative or not finite, or when all weights
    /// are zero.
    pub fn new(weights: &[f64]) -> Result<Self> {
        let index = WeightedIndex::new(weights.iter().copied())
            .map_err(|e| Error::invalid(format!("weights {weights:?}: {e}")))?;
        Ok(Self { index })
    }

    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.index.sample(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn single() {
        let mut rng = StdRng::seed_from_u64(3407);
        let wc = WeightedChoice::new(&[1.0]).unwrap();
        for _ in 0..100 {
            assert_eq!(wc.choose(&mut rng), 0);
        }
    }

    #[test]
    fn zero_weights_never_chosen() {
        let mut rng = StdRng::seed_from_u64(3407);
        let wc = WeightedChoice::new(&[0.0, 0.5, 0.0, 0.5]).unwrap();
        for _ in 0..1000 {
            let i = wc.choose(&mut rng);
            assert!(i == 1 || i == 3, "{i}");
        }
    }

    #[test]
    fn frequencies_follow_weights() {
        const N: usize = 100_000;
        let weights = [0.1, 0.2, 0.7];
        let mut rng = StdRng::seed_from_u64(3407);
        let wc = WeightedChoice::new(&weights).unwrap();
        let mut counts = [0usize; 3];
        for _ in 0..N {
            counts[wc.choose(&mut rng)] += 1;
        }
        for (c, w) in counts.iter().zip(weights.iter()) {
            let freq = *c as f64 / N as f64;
            assert!((freq - w).abs() < 0.01, "{counts:?}");
        }
    }

    #[test]
    fn invalid_weights() {
        assert!(WeightedChoice::new(&[]).is_err());
        assert!(WeightedChoice::new(&[0.0, 0.0]).is_err());
        assert!(WeightedChoice::new(&[1.0, -1.0]).is_err());
        assert!(WeightedChoice::new(&[f64::NAN]).is_err());
    }
}
