use crate::{RankTable, Result};
use algograph::graph::*;

pub trait PageRank {
    type Result: PageRankResult;

    fn calc(&self) -> Result<Self::Result>;
}

pub trait PageRankResult {
    fn page_rank(&self) -> &RankTable;
    fn debug<'a, G: QueryableGraph>(&'a self, graph: &'a G) -> impl std::fmt::Debug + 'a;
}
