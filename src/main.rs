//! Ranks the pages of a directory of hyperlinked `.html` files.

use anyhow::{Context, Result};
use clap::Parser;
use corpus_rank::{
    crawl,
    page_rank::{
        iterated, sampled, IteratedPageRank, PageRank, PageRankResult, SampledPageRank,
    },
    Corpus, RankTable, DEFAULT_DAMPING, DEFAULT_EPSILON, DEFAULT_SAMPLES,
};
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pagerank", version, about)]
struct Cli {
    /// Directory holding the `.html` pages
    corpus: PathBuf,

    /// Probability of following a link rather than jumping anywhere
    #[arg(short, long, env = "PAGERANK_DAMPING", default_value_t = DEFAULT_DAMPING)]
    damping: f64,

    /// Pages visited by the random surfer
    #[arg(short = 'n', long, env = "PAGERANK_SAMPLES", default_value_t = DEFAULT_SAMPLES)]
    samples: usize,

    /// Iteration stops once no page moves by this much
    #[arg(long, default_value_t = DEFAULT_EPSILON)]
    epsilon: f64,

    /// Seed of the random surfer, for reproducible sampling
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let corpus = crawl(&cli.corpus)
        .with_context(|| format!("failed to crawl {}", cli.corpus.display()))?;

    let cfg = sampled::Config {
        damping: cli.damping,
        samples: cli.samples,
    };
    let res = match cli.seed {
        Some(seed) => {
            SampledPageRank::with_rng(corpus.graph(), &cfg, StdRng::seed_from_u64(seed))?.calc()?
        }
        None => SampledPageRank::new(corpus.graph(), &cfg)?.calc()?,
    };
    info!(samples = cli.samples, "sampled page rank");
    println!("PageRank Results from Sampling (n = {})", cli.samples);
    print_ranks(&corpus, res.page_rank());

    let cfg = iterated::Config {
        damping: cli.damping,
        epsilon: cli.epsilon,
    };
    let res = IteratedPageRank::new(corpus.graph(), &cfg)?.calc()?;
    info!(
        rounds = res.rounds,
        max_change = res.max_change,
        "iterated page rank"
    );
    println!("PageRank Results from Iteration");
    print_ranks(&corpus, res.page_rank());
    Ok(())
}

fn print_ranks(corpus: &Corpus, ranks: &RankTable) {
    for (page, rank) in corpus.named(ranks) {
        println!("  {page}: {rank:.4}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["pagerank", "corpus0"]).unwrap();
        assert_eq!(cli.corpus, PathBuf::from("corpus0"));
        assert_eq!(cli.damping, DEFAULT_DAMPING);
        assert_eq!(cli.samples, DEFAULT_SAMPLES);
        assert_eq!(cli.epsilon, DEFAULT_EPSILON);
        assert!(cli.seed.is_none());
    }

    #[test]
    fn overrides() {
        let cli = Cli::try_parse_from([
            "pagerank", "corpus1", "-d", "0.5", "-n", "20", "--seed", "7",
        ])
        .unwrap();
        assert_eq!(cli.damping, 0.5);
        assert_eq!(cli.samples, 20);
        assert_eq!(cli.seed, Some(7));
    }

    #[test]
    fn corpus_is_required() {
        assert!(Cli::try_parse_from(["pagerank"]).is_err());
    }
}
