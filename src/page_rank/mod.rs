mod traits;
pub use self::traits::*;
mod transition;
pub use self::transition::transition;
mod weighted;
pub use self::weighted::WeightedChoice;
pub mod iterated;
pub use self::iterated::IteratedPageRank;
pub mod sampled;
pub use self::sampled::SampledPageRank;

use crate::{RankTable, Result, DEFAULT_EPSILON};
use algograph::graph::QueryableGraph;

/// Estimates PageRank by a random walk of `n` pages, drawn from the
/// thread-local generator.
pub fn sample_pagerank<G: QueryableGraph>(graph: &G, damping: f64, n: usize) -> Result<RankTable> {
    let config = sampled::Config {
        damping,
        samples: n,
    };
    let res = SampledPageRank::new(graph, &config)?.calc()?;
    Ok(res.page_rank)
}

/// Estimates PageRank by iterating until no page changes by
/// `DEFAULT_EPSILON` or more in a round.
pub fn iterate_pagerank<G: QueryableGraph>(graph: &G, damping: f64) -> Result<RankTable> {
    let config = iterated::Config {
        damping,
        epsilon: DEFAULT_EPSILON,
    };
    let res = IteratedPageRank::new(graph, &config)?.calc()?;
    Ok(res.page_rank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{norm_1, Corpus};
    use rand::{rngs::StdRng, SeedableRng};

    fn ranks_of<P: PageRank>(pr: &P) -> RankTable {
        pr.calc().unwrap().page_rank().clone()
    }

    #[test]
    fn estimators_behind_the_trait() {
        let c = Corpus::from_links([("A", vec!["B", "C"]), ("B", vec![]), ("C", vec!["A"])]);
        let ipr = IteratedPageRank::new(c.graph(), &iterated::Config::default()).unwrap();
        let cfg = sampled::Config::default();
        let spr = SampledPageRank::with_rng(c.graph(), &cfg, StdRng::seed_from_u64(3407)).unwrap();
        for ranks in [ranks_of(&ipr), ranks_of(&spr)] {
            assert_eq!(ranks.len(), c.len());
            let sum = norm_1(&ranks);
            assert!((sum - 1.0).abs() < 1e-3, "sum={sum}");
        }
        assert_eq!(
            ranks_of(&ipr),
            iterate_pagerank(c.graph(), crate::DEFAULT_DAMPING).unwrap()
        );
    }
}
