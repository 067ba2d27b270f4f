mod common;
pub use self::common::*;
mod error;
pub use self::error::{Error, Result};
pub mod corpus;
pub use self::corpus::{crawl, Corpus};

pub mod page_rank;
pub use self::page_rank::{iterate_pagerank, sample_pagerank, transition};
