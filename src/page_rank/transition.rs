use crate::{
    common::{check_damping, check_non_empty},
    Distribution, Error, Result,
};
use algograph::graph::*;
use std::collections::HashMap;

/// With probability `damping` the surfer follows one of `page`'s links,
/// otherwise it jumps to any page uniformly. A page without links jumps
/// uniformly regardless of `damping`.
pub fn transition<G: QueryableGraph>(
    graph: &G,
    page: VertexId,
    damping: f64,
) -> Result<Distribution> {
    check_damping(damping)?;
    let links = Links::new(graph)?;
    let u = links.index_of(&page)?;
    Ok(links.to_table(links.distribution(u, damping)))
}

/// Dense view of a link graph: pages are numbered `0..n` in vertex order
/// and each page keeps its sorted, deduplicated out-links.
#[derive(Debug, Clone)]
pub(crate) struct Links {
    vertices: Vec<VertexId>,
    index: HashMap<VertexId, usize, ahash::RandomState>,
    out: Vec<Vec<usize>>,
}

impl Links {
    pub fn new<G: QueryableGraph>(g: &G) -> Result<Self> {
        check_non_empty(g)?;
        let vertices: Vec<_> = g.iter_vertices().collect();
        let index: HashMap<_, _, ahash::RandomState> = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (*v, i))
            .collect();
        let out = vertices
            .iter()
            .map(|u| {
                let mut sinks: Vec<_> = g
                    .out_edges(u)
                    .filter_map(|e| index.get(&e.sink).copied())
                    .collect();
                sinks.sort_unstable();
                sinks.dedup();
                sinks
            })
            .collect();
        Ok(Self {
            vertices,
            index,
            out,
        })
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_of(&self, v: &VertexId) -> Result<usize> {
        self.index
            .get(v)
            .copied()
            .ok_or_else(|| Error::invalid(format!("page {v:?} is not in the graph")))
    }

    pub fn out_links(&self, u: usize) -> &[usize] {
        &self.out[u]
    }

    pub fn distribution(&self, u: usize, damping: f64) -> Vec<f64> {
        let n = self.len() as f64;
        let links = self.out_links(u);
        if links.is_empty() {
            return vec![1.0 / n; self.len()];
        }
        let mut probs = vec![(1.0 - damping) / n; self.len()];
        let unit = damping / (links.len() as f64);
        for v in links.iter() {
            probs[*v] += unit;
        }
        probs
    }

    /// Pages linking to each page. A page without links counts as linking
    /// to every page, itself included.
    pub fn backlinks(&self) -> Vec<Vec<usize>> {
        let mut res = vec![vec![]; self.len()];
        for (u, sinks) in self.out.iter().enumerate() {
            if sinks.is_empty() {
                res.iter_mut().for_each(|from| from.push(u));
            } else {
                for v in sinks.iter() {
                    res[*v].push(u);
                }
            }
        }
        res
    }

    pub fn to_table<T, I>(&self, values: I) -> HashMap<VertexId, T, ahash::RandomState>
    where
        I: IntoIterator<Item = T>,
    {
        self.vertices.iter().copied().zip(values).collect()
    }
}
