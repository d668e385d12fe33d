use std::slice;

use super::key::KeyType;

/// Outgoing edge record of a [`Vertex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<K, E> {
    target: K,
    data: E,
}

impl<K, E> Edge<K, E> {
    pub fn target(&self) -> &K {
        &self.target
    }

    pub fn data(&self) -> &E {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut E {
        &mut self.data
    }
}

/// A vertex of a graph together with its outgoing adjacency.
///
/// Adjacency is stored as keys of the neighbors rather than references to
/// them, so vertices never own or borrow each other. The owning graph
/// guarantees that every target key refers to an existing vertex.
///
/// Edges are kept in the order in which they were first added. There is at
/// most one edge per target, so the sequence of [neighbors](Vertex::neighbors)
/// never contains duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<K, V, E> {
    key: K,
    data: V,
    edges: Vec<Edge<K, E>>,
}

impl<K: KeyType, V, E> Vertex<K, V, E> {
    pub(crate) fn new(key: K, data: V) -> Self {
        Self {
            key,
            data,
            edges: Vec::new(),
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn data(&self) -> &V {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut V {
        &mut self.data
    }

    pub(crate) fn into_data(self) -> V {
        self.data
    }

    pub fn edges(&self) -> Edges<'_, K, E> {
        Edges {
            inner: self.edges.iter(),
        }
    }

    pub fn neighbors(&self) -> Neighbors<'_, K, E> {
        Neighbors {
            inner: self.edges.iter(),
        }
    }

    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, target: &K) -> Option<&E> {
        self.position(target).map(|i| &self.edges[i].data)
    }

    pub fn edge_mut(&mut self, target: &K) -> Option<&mut E> {
        let i = self.position(target)?;
        Some(&mut self.edges[i].data)
    }

    pub(crate) fn neighbor_at(&self, i: usize) -> Option<&K> {
        self.edges.get(i).map(|edge| &edge.target)
    }

    pub fn has_edge(&self, target: &K) -> bool {
        self.position(target).is_some()
    }

    /// Connects this vertex to `target`. If they are already connected, the
    /// edge data is replaced and the previous data is returned. The position of
    /// the edge in the adjacency order does not change in that case.
    pub(crate) fn add_edge(&mut self, target: K, data: E) -> Option<E> {
        match self.position(&target) {
            Some(i) => Some(std::mem::replace(&mut self.edges[i].data, data)),
            None => {
                self.edges.push(Edge { target, data });
                None
            }
        }
    }

    /// Disconnects this vertex from `target`, keeping the order of the
    /// remaining edges. Does nothing if there is no such edge.
    pub(crate) fn remove_edge(&mut self, target: &K) -> Option<E> {
        let i = self.position(target)?;
        Some(self.edges.remove(i).data)
    }

    pub(crate) fn clear_edges(&mut self) {
        self.edges.clear();
    }

    fn position(&self, target: &K) -> Option<usize> {
        self.edges.iter().position(|edge| &edge.target == target)
    }
}

pub struct Edges<'a, K, E> {
    inner: slice::Iter<'a, Edge<K, E>>,
}

impl<'a, K, E> Iterator for Edges<'a, K, E> {
    type Item = (&'a K, &'a E);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|edge| (&edge.target, &edge.data))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, E> ExactSizeIterator for Edges<'_, K, E> {}

pub struct Neighbors<'a, K, E> {
    inner: slice::Iter<'a, Edge<K, E>>,
}

impl<'a, K, E> Iterator for Neighbors<'a, K, E> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|edge| &edge.target)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, E> ExactSizeIterator for Neighbors<'_, K, E> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_appends_in_order() {
        let mut vertex = Vertex::new(1, "one");

        assert_eq!(vertex.add_edge(3, 'c'), None);
        assert_eq!(vertex.add_edge(2, 'b'), None);

        assert_eq!(vertex.neighbors().copied().collect::<Vec<_>>(), vec![3, 2]);
        assert_eq!(
            vertex.edges().map(|(k, e)| (*k, *e)).collect::<Vec<_>>(),
            vec![(3, 'c'), (2, 'b')]
        );
    }

    #[test]
    fn add_edge_twice_replaces_data() {
        let mut vertex = Vertex::new(1, ());

        vertex.add_edge(2, "first");
        vertex.add_edge(3, "other");

        assert_eq!(vertex.add_edge(2, "second"), Some("first"));
        assert_eq!(vertex.out_degree(), 2);
        assert_eq!(vertex.neighbors().copied().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(vertex.edge(&2), Some(&"second"));
    }

    #[test]
    fn remove_edge_keeps_order() {
        let mut vertex = Vertex::new(0, ());

        for target in 1..=4 {
            vertex.add_edge(target, target * 10);
        }

        assert_eq!(vertex.remove_edge(&2), Some(20));
        assert_eq!(
            vertex.neighbors().copied().collect::<Vec<_>>(),
            vec![1, 3, 4]
        );
    }

    #[test]
    fn remove_edge_absent_is_noop() {
        let mut vertex = Vertex::new(0, ());
        vertex.add_edge(1, ());

        assert_eq!(vertex.remove_edge(&5), None);
        assert_eq!(vertex.out_degree(), 1);
    }

    #[test]
    fn self_loop() {
        let mut vertex = Vertex::new(5, ());
        vertex.add_edge(5, ());

        assert!(vertex.has_edge(&5));
        assert_eq!(vertex.neighbors().collect::<Vec<_>>(), vec![&5]);
    }
}
