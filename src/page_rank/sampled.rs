use super::{transition::Links, *};
use crate::{common::check_damping, *};
use algograph::graph::{QueryableGraph, VertexId};
use rand::{rngs::ThreadRng, Rng};
use std::{cell::RefCell, collections::HashMap};

/// PageRank as the visit frequencies of a random surfer.
pub struct SampledPageRank<R: Rng> {
    links: Links,
    damping: f64,
    samples: usize,
    rng: RefCell<R>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    /// Number of pages the surfer visits, the first one included.
    pub samples: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            samples: DEFAULT_SAMPLES,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: RankTable,
    pub visits: HashMap<VertexId, usize, ahash::RandomState>,
}

impl SampledPageRank<ThreadRng> {
    pub fn new<G: QueryableGraph>(g: &G, config: &Config) -> crate::Result<Self> {
        Self::with_rng(g, config, rand::rng())
    }
}

impl<R: Rng> SampledPageRank<R> {
    pub fn with_rng<G: QueryableGraph>(g: &G, config: &Config, rng: R) -> crate::Result<Self> {
        let links = Links::new(g)?;
        check_damping(config.damping)?;
        if config.samples == 0 {
            return Err(Error::invalid("samples=0, expect at least 1"));
        }
        Ok(Self {
            links,
            damping: config.damping,
            samples: config.samples,
            rng: RefCell::new(rng),
        })
    }
}

impl<R: Rng> PageRank for SampledPageRank<R> {
    type Result = self::Result;

    fn calc(&self) -> crate::Result<Self::Result> {
        let n = self.links.len();
        let mut rng = self.rng.borrow_mut();
        let mut visits = vec![0usize; n];
        // the next-page distribution depends only on the current page
        let mut choices: Vec<Option<WeightedChoice>> = vec![None; n];

        let mut cur = rng.random_range(0..n);
        visits[cur] += 1;
        for _ in 1..self.samples {
            let choice = match &mut choices[cur] {
                Some(choice) => choice,
                slot => slot.insert(WeightedChoice::new(
                    &self.links.distribution(cur, self.damping),
                )?),
            };
            cur = choice.choose(&mut *rng);
            visits[cur] += 1;
        }

        let total = self.samples as f64;
        Ok(Self::Result {
            page_rank: self
                .links
                .to_table(visits.iter().map(|c| *c as f64 / total)),
            visits: self.links.to_table(visits),
        })
    }
}

impl PageRankResult for self::Result {
    fn page_rank(&self) -> &RankTable {
        &self.page_rank
    }

    fn debug<'a, G: QueryableGraph>(&'a self, graph: &'a G) -> impl std::fmt::Debug + 'a {
        ResultDebug {
            graph,
            result: self,
        }
    }
}

pub struct ResultDebug<'a, G: QueryableGraph> {
    graph: &'a G,
    result: &'a self::Result,
}

impl<G: QueryableGraph> std::fmt::Debug for ResultDebug<'_, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.graph.iter_vertices() {
            let (Some(p), Some(c)) = (
                self.result.page_rank.get(&v),
                self.result.visits.get(&v),
            ) else {
                continue;
            };
            writeln!(f, "{v:?}: {p:?}, {c:?}")?;
        }
        Ok(())
    }
}
