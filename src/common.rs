use crate::{Error, Result};
use algograph::graph::*;
use std::{collections::HashMap, hash::Hash};

pub const DEFAULT_DAMPING: f64 = 0.85;
pub const DEFAULT_SAMPLES: usize = 10_000;
pub const DEFAULT_EPSILON: f64 = 0.001;

/// Page → rank estimate.
pub type RankTable = HashMap<VertexId, f64, ahash::RandomState>;
/// Page → probability of being visited next.
pub type Distribution = HashMap<VertexId, f64, ahash::RandomState>;

pub fn norm_1<K: Hash>(v: &HashMap<K, f64, ahash::RandomState>) -> f64 {
    v.values().map(|x| x.abs()).sum()
}

/// Pages sorted from the highest rank to the lowest.
pub fn ranked(page_rank: &RankTable) -> Vec<(VertexId, f64)> {
    let mut res: Vec<_> = page_rank.iter().map(|(v, p)| (*v, *p)).collect();
    res.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    res
}

pub(crate) fn check_non_empty<G: QueryableGraph>(graph: &G) -> Result<()> {
    if graph.vertex_size() == 0 {
        return Err(Error::invalid("graph has no pages"));
    }
    Ok(())
}

/// Accepts the closed range `[0, 1]`.
pub(crate) fn check_damping(damping: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&damping) {
        return Err(Error::invalid(format!("damping={damping}, expect [0, 1]")));
    }
    Ok(())
}

/// Accepts the open range `(0, 1)`, where iteration is a contraction.
pub(crate) fn check_damping_open(damping: f64) -> Result<()> {
    if !(damping > 0.0 && damping < 1.0) {
        return Err(Error::invalid(format!("damping={damping}, expect (0, 1)")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damping_ranges() {
        assert!(check_damping(0.0).is_ok());
        assert!(check_damping(1.0).is_ok());
        assert!(check_damping(-0.1).is_err());
        assert!(check_damping(f64::NAN).is_err());

        assert!(check_damping_open(0.85).is_ok());
        assert!(check_damping_open(0.0).is_err());
        assert!(check_damping_open(1.0).is_err());
        assert!(check_damping_open(f64::NAN).is_err());
    }

    #[test]
    fn empty_graph_is_rejected() {
        let g = directed::TreeBackedGraph::new();
        let err = check_non_empty(&g).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)), "{err:?}");
    }
}
