//! Vertex keys.
//!
//! Vertices of a [`Graph`](crate::Graph) are identified by keys chosen by the
//! user rather than by identifiers generated by the graph. A key can be any
//! type implementing [`KeyType`], which is implemented automatically for every
//! type that satisfies its super traits.

use std::{fmt::Debug, hash::Hash};

/// A unique identification of a vertex in a graph.
///
/// Keys are compared by value, never by reference identity. Two keys that are
/// equal (and therefore hash equally) refer to the same vertex.
///
/// Keys are cloned when they are stored in adjacency lists and when paths are
/// reported, so cheaply clonable types (integers, short strings, `Rc<str>`)
/// are preferable.
pub trait KeyType: Clone + Eq + Hash + Debug {}

impl<T> KeyType for T where T: Clone + Eq + Hash + Debug {}
