use std::{
    fmt,
    ops::{Index, IndexMut},
    slice,
};

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{
    algo::AllPaths,
    core::{
        AddEdgeError, AddVertexError, AllPathsError, EdgeErrorKind, KeyType, Neighbors,
        RemoveEdgeError, Vertex, VertexNotFound,
    },
};

/// Directed graph with user-defined vertex keys.
///
/// Vertices are stored in a single arena in the order in which they were
/// added, and the order is kept when vertices are removed. Edges are stored in
/// the source vertex as a list of target keys with associated data.
///
/// There is at most one edge for each ordered pair of vertices. Adding an edge
/// that already exists replaces its data (see [`Graph::add_edge`]).
#[derive(Debug, Clone)]
pub struct Graph<K, V, E> {
    vertices: Vec<Vertex<K, V, E>>,
    index: FxHashMap<K, usize>,
    edge_count: usize,
}

impl<K, V, E> Default for Graph<K, V, E> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            index: FxHashMap::default(),
            edge_count: 0,
        }
    }
}

impl<K: KeyType, V, E> Graph<K, V, E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            index: FxHashMap::with_capacity_and_hasher(vertex_count, Default::default()),
            edge_count: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains_vertex(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Adds a vertex with the given key.
    ///
    /// Fails if a vertex with the same key already exists, in which case the
    /// graph is left unchanged and the key and data are handed back in the
    /// error.
    pub fn add_vertex(&mut self, key: K, data: V) -> Result<(), AddVertexError<K, V>> {
        if self.index.contains_key(&key) {
            return Err(AddVertexError::new(key, data));
        }

        self.index.insert(key.clone(), self.vertices.len());
        self.vertices.push(Vertex::new(key, data));
        Ok(())
    }

    /// Removes the vertex and all edges incident to it, in both directions.
    pub fn remove_vertex(&mut self, key: &K) -> Result<V, VertexNotFound<K>> {
        let Some(&position) = self.index.get(key) else {
            return Err(VertexNotFound(key.clone()));
        };

        // Detach from all other vertices first, then erase the vertex itself.
        let mut incoming = 0;
        for vertex in self.vertices.iter_mut() {
            if vertex.key() != key && vertex.remove_edge(key).is_some() {
                incoming += 1;
            }
        }

        let vertex = self.vertices.remove(position);
        self.index.remove(key);

        for shifted in &self.vertices[position..] {
            if let Some(i) = self.index.get_mut(shifted.key()) {
                *i -= 1;
            }
        }

        let outgoing = vertex.out_degree();
        self.edge_count -= incoming + outgoing;

        debug!(?key, incoming, outgoing, "removed vertex");

        Ok(vertex.into_data())
    }

    /// Adds an edge from `start` to `end`.
    ///
    /// If the edge already exists, its data is replaced and the previous data
    /// is returned. Fails if any of the endpoints does not exist, in which case
    /// the graph is left unchanged and the data is handed back in the error.
    pub fn add_edge(
        &mut self,
        start: &K,
        end: &K,
        data: E,
    ) -> Result<Option<E>, AddEdgeError<K, E>> {
        let Some(&position) = self.index.get(start) else {
            return Err(AddEdgeError::new(
                start.clone(),
                data,
                EdgeErrorKind::SourceAbsent,
            ));
        };

        if !self.index.contains_key(end) {
            return Err(AddEdgeError::new(
                end.clone(),
                data,
                EdgeErrorKind::DestinationAbsent,
            ));
        }

        let previous = self.vertices[position].add_edge(end.clone(), data);
        if previous.is_none() {
            self.edge_count += 1;
        }

        Ok(previous)
    }

    /// Removes the edge from `start` to `end` and returns its data.
    ///
    /// Returns `Ok(None)` if both vertices exist but are not connected.
    pub fn remove_edge(
        &mut self,
        start: &K,
        end: &K,
    ) -> Result<Option<E>, RemoveEdgeError<K>> {
        let Some(&position) = self.index.get(start) else {
            return Err(RemoveEdgeError::new(start.clone(), EdgeErrorKind::SourceAbsent));
        };

        if !self.index.contains_key(end) {
            return Err(RemoveEdgeError::new(end.clone(), EdgeErrorKind::DestinationAbsent));
        }

        let removed = self.vertices[position].remove_edge(end);
        if removed.is_some() {
            self.edge_count -= 1;
        }

        Ok(removed)
    }

    pub fn vertex(&self, key: &K) -> Option<&V> {
        self.vertex_entry(key).map(Vertex::data)
    }

    pub fn vertex_mut(&mut self, key: &K) -> Option<&mut V> {
        let position = *self.index.get(key)?;
        Some(self.vertices[position].data_mut())
    }

    /// Returns the vertex record with its key, data and outgoing edges.
    pub fn vertex_entry(&self, key: &K) -> Option<&Vertex<K, V, E>> {
        self.index.get(key).map(|&i| &self.vertices[i])
    }

    pub fn edge(&self, start: &K, end: &K) -> Option<&E> {
        self.vertex_entry(start)?.edge(end)
    }

    pub fn edge_mut(&mut self, start: &K, end: &K) -> Option<&mut E> {
        let position = *self.index.get(start)?;
        self.vertices[position].edge_mut(end)
    }

    pub fn contains_edge(&self, start: &K, end: &K) -> bool {
        self.edge(start, end).is_some()
    }

    /// Targets of the outgoing edges of the vertex, in the order in which the
    /// edges were added, or `None` if the vertex does not exist.
    pub fn neighbors(&self, key: &K) -> Option<Neighbors<'_, K, E>> {
        self.vertex_entry(key).map(Vertex::neighbors)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.vertices.iter().map(Vertex::key)
    }

    pub fn vertices(&self) -> slice::Iter<'_, Vertex<K, V, E>> {
        self.vertices.iter()
    }

    /// All edges as `(start, end, data)` triples, grouped by the start vertex.
    pub fn edges(&self) -> impl Iterator<Item = (&K, &K, &E)> + '_ {
        self.vertices.iter().flat_map(|vertex| {
            vertex
                .edges()
                .map(move |(target, data)| (vertex.key(), target, data))
        })
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.index.clear();
        self.edge_count = 0;
    }

    pub fn clear_edges(&mut self) {
        for vertex in self.vertices.iter_mut() {
            vertex.clear_edges();
        }
        self.edge_count = 0;
    }

    /// Adds all vertices from the iterator, stopping at the first duplicate
    /// key. Vertices added before the failure stay in the graph.
    pub fn extend_with_vertices<I>(&mut self, iter: I) -> Result<(), AddVertexError<K, V>>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let iter = iter.into_iter();
        self.vertices.reserve(iter.size_hint().0);

        for (key, data) in iter {
            self.add_vertex(key, data)?;
        }

        Ok(())
    }

    /// Adds all edges from the iterator, stopping at the first edge with a
    /// missing endpoint. Edges added before the failure stay in the graph.
    pub fn extend_with_edges<I>(&mut self, iter: I) -> Result<(), AddEdgeError<K, E>>
    where
        I: IntoIterator<Item = (K, K, E)>,
    {
        for (start, end, data) in iter {
            self.add_edge(&start, &end, data)?;
        }

        Ok(())
    }

    /// Finds all simple paths from `start` to `end`.
    ///
    /// This is a shorthand for `AllPaths::on(self).run(start, end)`. Use
    /// [`AllPaths::on`] for limiting the search or including the trivial path.
    pub fn find_all_paths(&self, start: &K, end: &K) -> Result<Vec<Vec<K>>, AllPathsError<K>> {
        AllPaths::on(self).run(start, end).map(AllPaths::into_paths)
    }

    /// Finds all simple paths for every pair of start and end vertex, in the
    /// order of the pairs.
    pub fn find_all_paths_between_sets<'k, S, T>(
        &self,
        starts: S,
        ends: T,
    ) -> Result<Vec<Vec<K>>, AllPathsError<K>>
    where
        K: 'k,
        S: IntoIterator<Item = &'k K>,
        T: IntoIterator<Item = &'k K>,
    {
        AllPaths::on(self)
            .run_between_sets(starts, ends)
            .map(AllPaths::into_paths)
    }

    pub(crate) fn position(&self, key: &K) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub(crate) fn vertex_at(&self, position: usize) -> &Vertex<K, V, E> {
        &self.vertices[position]
    }

    pub(crate) fn index_len(&self) -> usize {
        self.index.len()
    }
}

impl<K: KeyType, V, E> Index<&K> for Graph<K, V, E> {
    type Output = V;

    /// # Panics
    ///
    /// Panics if the vertex does not exist.
    fn index(&self, key: &K) -> &Self::Output {
        match self.vertex(key) {
            Some(data) => data,
            None => panic!("vertex {key:?} does not exist"),
        }
    }
}

impl<K: KeyType, V, E> IndexMut<&K> for Graph<K, V, E> {
    fn index_mut(&mut self, key: &K) -> &mut Self::Output {
        let Some(&position) = self.index.get(key) else {
            panic!("vertex {key:?} does not exist");
        };
        self.vertices[position].data_mut()
    }
}

/// Lists the vertices in insertion order, one per line, together with their
/// outgoing edges.
///
/// ```text
/// Vertex 1 (one): 2 (a) 3 (b)
/// Vertex 2 (two):
/// ```
impl<K, V, E> fmt::Display for Graph<K, V, E>
where
    K: KeyType + fmt::Display,
    V: fmt::Display,
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in self.vertices.iter() {
            write!(f, "Vertex {} ({}):", vertex.key(), vertex.data())?;
            for (target, data) in vertex.edges() {
                write!(f, " {target} ({data})")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
