//! Page names and the link graph between them.

use crate::{Error, RankTable, Result};
use algograph::graph::*;
use regex::Regex;
use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    fs,
    path::Path,
    sync::LazyLock,
};
use tracing::{debug, info};

static ANCHOR_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("anchor pattern is valid")
});

/// Self-links and links to unknown names are dropped while building.
#[derive(Debug, Clone)]
pub struct Corpus {
    graph: directed::TreeBackedGraph,
    names: HashMap<VertexId, String, ahash::RandomState>,
    pages: BTreeMap<String, VertexId>,
}

impl Corpus {
    /// Builds a corpus from `(page, links)` pairs. Repeated pages merge
    /// their links.
    pub fn from_links<I, P, L, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut merged: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (page, links) in pages {
            merged
                .entry(page.into())
                .or_default()
                .extend(links.into_iter().map(|l| l.as_ref().to_string()));
        }

        let mut graph = directed::TreeBackedGraph::new();
        let pages: BTreeMap<_, _> = merged
            .keys()
            .map(|name| (name.clone(), graph.add_vertex()))
            .collect();
        for (name, links) in merged.iter() {
            let u = pages[name];
            for link in links.iter().filter(|l| *l != name) {
                if let Some(v) = pages.get(link) {
                    graph.add_edge(u, *v);
                }
            }
        }
        let names = pages.iter().map(|(n, v)| (*v, n.clone())).collect();
        Self {
            graph,
            names,
            pages,
        }
    }

    pub fn graph(&self) -> &directed::TreeBackedGraph {
        &self.graph
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn page(&self, name: &str) -> Option<VertexId> {
        self.pages.get(name).copied()
    }

    pub fn name(&self, page: &VertexId) -> Option<&str> {
        self.names.get(page).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, VertexId)> + '_ {
        self.pages.iter().map(|(n, v)| (n.as_str(), *v))
    }

    pub fn links(&self, name: &str) -> Option<BTreeSet<&str>> {
        let u = self.page(name)?;
        Some(
            self.graph
                .out_edges(&u)
                .filter_map(|e| self.name(&e.sink))
                .collect(),
        )
    }

    /// Re-keys a rank table by page name, sorted by name.
    pub fn named(&self, ranks: &RankTable) -> BTreeMap<&str, f64> {
        ranks
            .iter()
            .filter_map(|(v, p)| Some((self.name(v)?, *p)))
            .collect()
    }
}

/// Reads every `*.html` file directly under `dir` and links pages by the
/// `href` of their anchors. The file name is the page name.
pub fn crawl<P: AsRef<Path>>(dir: P) -> Result<Corpus> {
    let dir = dir.as_ref();
    let mut pages = vec![];
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.ends_with(".html") || !path.is_file() {
            continue;
        }
        let contents = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let links: BTreeSet<String> = ANCHOR_HREF
            .captures_iter(&contents)
            .map(|c| c[1].to_string())
            .collect();
        debug!(page = name, links = links.len(), "parsed page");
        pages.push((name.to_string(), links));
    }
    let corpus = Corpus::from_links(pages);
    info!(dir = %dir.display(), pages = corpus.len(), "crawled corpus");
    Ok(corpus)
}

#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct RandomCorpus(pub Corpus);

#[cfg(test)]
use quickcheck::Arbitrary;

#[cfg(test)]
impl Arbitrary for RandomCorpus {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        const N: usize = 10;

        let n: usize = usize::arbitrary(g) % N + 1;
        let names: Vec<_> = (0..n).map(|i| format!("{i}.html")).collect();
        let pages: Vec<_> = names
            .iter()
            .map(|name| {
                let links: Vec<_> = (0..(usize::arbitrary(g) % (n + 1)))
                    .map(|_| names[usize::arbitrary(g) % n].clone())
                    .collect();
                (name.clone(), links)
            })
            .collect();
        Self(Corpus::from_links(pages))
    }
}
