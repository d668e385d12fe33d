//! Enumerate all [simple paths] between two vertices or two sets of vertices.
//!
//! A simple path never visits a vertex twice, so the enumeration terminates
//! even if the graph has cycles. The number of simple paths can be exponential
//! in the size of the graph, see [`Limits`] for bounding the work.
//!
//! See available parameters [here](AllPathsBuilder#implementations).
//!
//! [simple paths]: https://en.wikipedia.org/wiki/Path_(graph_theory)
//!
//! # Examples
//!
//! ```
//! use pathgraph::{algo::AllPaths, Graph};
//!
//! let mut graph = Graph::new();
//!
//! for city in ["Prague", "Brno", "Vienna", "Bratislava"] {
//!     graph.add_vertex(city, ()).unwrap();
//! }
//!
//! graph
//!     .extend_with_edges([
//!         ("Prague", "Brno", 205),
//!         ("Prague", "Vienna", 333),
//!         ("Brno", "Vienna", 143),
//!         ("Brno", "Bratislava", 130),
//!         ("Vienna", "Bratislava", 80),
//!     ])
//!     .unwrap();
//!
//! let routes = AllPaths::on(&graph).run(&"Prague", &"Bratislava").unwrap();
//!
//! for route in routes.iter() {
//!     println!("{}", route.join(" -> "));
//! }
//!
//! assert_eq!(routes.len(), 3);
//! ```

use std::slice;

mod builder;
mod dfs;

pub use builder::AllPathsBuilder;

/// Simple paths found by the enumeration, each as a sequence of vertex keys
/// from the start vertex to the end vertex, both inclusive.
///
/// Paths are ordered by discovery. The enumeration follows outgoing edges in
/// the order in which they were added to the graph, so a path whose first
/// diverging edge was added earlier comes first.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllPaths<K> {
    paths: Vec<Vec<K>>,
    truncated: bool,
}

impl<K> AllPaths<K> {
    pub fn paths(&self) -> &[Vec<K>] {
        &self.paths
    }

    pub fn into_paths(self) -> Vec<Vec<K>> {
        self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Returns `true` if the enumeration was stopped by the
    /// [path limit](Limits::max_paths) while there were more paths to report.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn iter(&self) -> slice::Iter<'_, Vec<K>> {
        self.paths.iter()
    }
}

impl<K> IntoIterator for AllPaths<K> {
    type Item = Vec<K>;
    type IntoIter = std::vec::IntoIter<Vec<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}

impl<'a, K> IntoIterator for &'a AllPaths<K> {
    type Item = &'a Vec<K>;
    type IntoIter = slice::Iter<'a, Vec<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

/// Bounds on the work done by the enumeration. Unlimited by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    max_paths: Option<usize>,
    max_depth: Option<usize>,
}

impl Limits {
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Stop after this many paths were found. Reaching the limit while there
    /// are more paths marks the result as [truncated](AllPaths::is_truncated).
    pub fn max_paths(self, value: usize) -> Self {
        Self {
            max_paths: Some(value),
            ..self
        }
    }

    /// Report only paths with at most this many edges.
    pub fn max_depth(self, value: usize) -> Self {
        Self {
            max_depth: Some(value),
            ..self
        }
    }

    pub fn get_max_paths(&self) -> Option<usize> {
        self.max_paths
    }

    pub fn get_max_depth(&self) -> Option<usize> {
        self.max_depth
    }
}
