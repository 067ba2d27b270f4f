use super::{transition::Links, *};
use crate::{common::check_damping_open, *};
use algograph::graph::QueryableGraph;

/// PageRank by synchronous fixed-point iteration.
pub struct IteratedPageRank {
    links: Links,
    damping: f64,
    epsilon: f64,
    backlinks: Vec<Vec<usize>>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    /// Iteration stops once no page moves by this much in a round.
    pub epsilon: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: RankTable,
    pub rounds: usize,
    pub max_change: f64,
}

impl IteratedPageRank {
    pub fn new<G: QueryableGraph>(g: &G, config: &Config) -> crate::Result<Self> {
        let links = Links::new(g)?;
        let damping = config.damping;
        check_damping_open(damping)?;
        let epsilon = config.epsilon;
        if !(epsilon > 0.0) {
            return Err(Error::invalid(format!("epsilon={epsilon}")));
        }
        let backlinks = links.backlinks();
        Ok(Self {
            links,
            damping,
            epsilon,
            backlinks,
        })
    }
}

impl PageRank for IteratedPageRank {
    type Result = self::Result;

    fn calc(&self) -> crate::Result<Self::Result> {
        let damping = self.damping;
        let n = self.links.len();
        let base = (1.0 - damping) / (n as f64);
        let out_degrees: Vec<f64> = (0..n)
            .map(|u| match self.links.out_links(u).len() {
                0 => n as f64,
                d => d as f64,
            })
            .collect();

        let mut p = vec![1.0 / (n as f64); n];
        let mut r = vec![0.0; n];
        let mut rounds = 0;
        loop {
            rounds += 1;
            let mut max_change: f64 = 0.0;
            for (v, to) in r.iter_mut().enumerate() {
                let inflow: f64 = self.backlinks[v]
                    .iter()
                    .map(|u| p[*u] / out_degrees[*u])
                    .sum();
                *to = base + damping * inflow;
                max_change = max_change.max((*to - p[v]).abs());
            }

            // `p` holds the new ranks from here on
            std::mem::swap(&mut p, &mut r);

            if max_change < self.epsilon {
                return Ok(Self::Result {
                    page_rank: self.links.to_table(p),
                    rounds,
                    max_change,
                });
            }
        }
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
        writeln!(
            f,
            "rounds: {}, max change: {:?}",
            self.result.rounds, self.result.max_change
        )?;
        for v in self.graph.iter_vertices() {
            if let Some(p) = self.result.page_rank.get(&v) {
                writeln!(f, "{v:?}: {p:?}")?;
            }
        }
        Ok(())
    }
}
