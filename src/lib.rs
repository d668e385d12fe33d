//! Keyed directed graph with enumeration of all simple paths.
//!
//! Vertices are identified by user-chosen keys and carry arbitrary data, edges
//! are directed and carry data too. Between any ordered pair of vertices there
//! is at most one edge.
//!
//! ```
//! use pathgraph::Graph;
//!
//! let mut graph = Graph::new();
//!
//! graph.extend_with_vertices([(1, "a"), (2, "b"), (3, "c")]).unwrap();
//! graph.extend_with_edges([(1, 2, ()), (2, 3, ()), (1, 3, ())]).unwrap();
//!
//! assert_eq!(
//!     graph.find_all_paths(&1, &3).unwrap(),
//!     vec![vec![1, 2, 3], vec![1, 3]]
//! );
//! ```

pub mod algo;
pub mod common;
pub mod core;
pub mod graph;
pub mod infra;

pub use graph::Graph;

pub mod prelude {
    pub use crate::{
        algo::{AllPaths, Limits},
        core::{Error, KeyType},
        graph::Graph,
    };
}
