use std::fmt;

use proptest::{
    prelude::Rng,
    strategy::{NewTree, Strategy, ValueTree},
    test_runner::TestRunner,
};

use crate::graph::Graph;

/// Strategy for graphs with keys `0..n` added in order, `n` being at least one.
pub fn graph<V: Strategy, E: Strategy>(vertex: V, edge: E) -> GraphStrategy<V, E> {
    GraphStrategy::new(vertex, edge)
}

pub struct GraphStrategy<V: Strategy, E: Strategy> {
    vertex: V,
    edge: E,
    params: StrategyParams,
}

impl<V: Strategy, E: Strategy> fmt::Debug for GraphStrategy<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphStrategy")
            .field("vertex", &self.vertex)
            .field("edge", &self.edge)
            .field("params", &self.params)
            .finish()
    }
}

macro_rules! delegate_builder_fn {
    ($name:ident$(, $param:ident: $param_type:ty)*) => {
        #[doc = concat!("See [StrategyParams::", stringify!($name), "](StrategyParams::", stringify!($name), ") for details.")]
        pub fn $name(self, $($param: $param_type),*) -> Self {
            Self {
                params: self.params.$name($($param,)*),
                ..self
            }
        }
    }
}

impl<V: Strategy, E: Strategy> GraphStrategy<V, E> {
    pub fn new(vertex: V, edge: E) -> Self {
        Self::with_params(vertex, edge, StrategyParams::default())
    }

    pub fn with_params(vertex: V, edge: E, params: StrategyParams) -> Self {
        Self {
            vertex,
            edge,
            params,
        }
    }

    delegate_builder_fn!(max_size, max_size: usize);
    delegate_builder_fn!(acyclic);
    delegate_builder_fn!(allow_loops);
    delegate_builder_fn!(density, density: f32);
}

#[derive(Debug, Clone, Copy)]
pub struct StrategyParams {
    max_size: usize,
    acyclic: bool,
    allow_loops: bool,
    // (0, 1] - 1 means no limitation in choosing p, lower values artificially decrease chosen p
    density: f32,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 8,
            acyclic: false,
            allow_loops: false,
            density: 1.0,
        }
    }
}

impl StrategyParams {
    pub fn max_size(self, max_size: usize) -> Self {
        assert!(max_size > 0, "max size must be positive");
        Self { max_size, ..self }
    }

    /// Edges go only from lower to higher keys.
    pub fn acyclic(self) -> Self {
        Self {
            acyclic: true,
            ..self
        }
    }

    pub fn allow_loops(self) -> Self {
        Self {
            allow_loops: true,
            ..self
        }
    }

    pub fn density(self, density: f32) -> Self {
        assert!(
            density > 0.0 && density <= 1.0,
            "density must be in (0, 1] range"
        );
        Self { density, ..self }
    }
}

impl<V: Strategy, E: Strategy> Strategy for GraphStrategy<V, E> {
    type Tree = GraphValueTree<V::Tree, E::Tree>;
    type Value = Graph<u32, V::Value, E::Value>;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        let n = runner.rng().gen_range(1..=self.params.max_size);
        let p = runner.rng().gen::<f32>() * self.params.density;

        let mut vertices = Vec::with_capacity(n);

        while vertices.len() < n {
            vertices.push(self.vertex.new_tree(runner)?);
        }

        let mut pairs = Vec::new();

        for u in 0..n {
            for v in 0..n {
                let allowed = match u.cmp(&v) {
                    std::cmp::Ordering::Less => true,
                    std::cmp::Ordering::Equal => self.params.allow_loops && !self.params.acyclic,
                    std::cmp::Ordering::Greater => !self.params.acyclic,
                };

                if allowed && runner.rng().gen::<f32>() < p {
                    pairs.push((u as u32, v as u32));
                }
            }
        }

        // The insertion order of edges determines the order of enumerated
        // paths, so do not always add them sorted.
        for i in (1..pairs.len()).rev() {
            let j = runner.rng().gen_range(0..=i);
            pairs.swap(i, j);
        }

        let mut edges = Vec::with_capacity(pairs.len());

        for (u, v) in pairs {
            edges.push((u, v, self.edge.new_tree(runner)?));
        }

        let removed = vec![false; edges.len()];

        Ok(GraphValueTree {
            vertices,
            edges,
            removed,
            next: 0,
            last: None,
        })
    }
}

/// Shrinks by removing edges one by one. Vertices are kept so that keys stay
/// equal to insertion positions.
#[derive(Debug, Clone)]
pub struct GraphValueTree<V: ValueTree, E: ValueTree> {
    vertices: Vec<V>,
    edges: Vec<(u32, u32, E)>,
    removed: Vec<bool>,
    next: usize,
    last: Option<usize>,
}

impl<V: ValueTree, E: ValueTree> ValueTree for GraphValueTree<V, E> {
    type Value = Graph<u32, V::Value, E::Value>;

    fn current(&self) -> Self::Value {
        let mut graph = Graph::with_capacity(self.vertices.len());

        for (key, vertex) in self.vertices.iter().enumerate() {
            graph.add_vertex(key as u32, vertex.current()).ok();
        }

        for ((u, v, edge), removed) in self.edges.iter().zip(self.removed.iter()) {
            if !removed {
                graph.add_edge(u, v, edge.current()).ok();
            }
        }

        graph
    }

    fn simplify(&mut self) -> bool {
        while self.next < self.edges.len() {
            let e = self.next;
            self.next += 1;

            if !self.removed[e] {
                self.removed[e] = true;
                self.last = Some(e);
                return true;
            }
        }

        false
    }

    fn complicate(&mut self) -> bool {
        match self.last.take() {
            Some(e) => {
                self.removed[e] = false;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::infra::testing::check_consistency;

    use super::*;

    #[test]
    fn shrinking_removes_edges() {
        let mut runner = TestRunner::deterministic();
        let strategy = graph(Just(()), Just(())).max_size(6).allow_loops();

        let mut tree = strategy.new_tree(&mut runner).unwrap();
        let vertex_count = tree.current().vertex_count();
        let mut edge_count = tree.current().edge_count();

        while tree.simplify() {
            let current = tree.current();

            assert_eq!(current.vertex_count(), vertex_count);
            assert_eq!(current.edge_count(), edge_count - 1);
            edge_count -= 1;
        }

        assert_eq!(edge_count, 0);
    }

    #[test]
    fn complicate_restores_edge() {
        let mut runner = TestRunner::deterministic();
        let strategy = graph(Just(()), Just(())).density(1.0);

        let mut tree = strategy.new_tree(&mut runner).unwrap();
        let original = tree.current().edge_count();

        if tree.simplify() {
            assert!(tree.complicate());
            assert_eq!(tree.current().edge_count(), original);
            assert!(!tree.complicate());
        }
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_strategy_consistent(graph in graph(any::<u8>(), any::<u8>()).allow_loops()) {
            check_consistency(&graph).unwrap();

            let keys = graph.keys().copied().collect::<Vec<_>>();
            prop_assert_eq!(keys, (0..graph.vertex_count() as u32).collect::<Vec<_>>());
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_strategy_acyclic(graph in graph(Just(()), Just(())).acyclic()) {
            for (u, v, _) in graph.edges() {
                prop_assert!(u < v);
            }
        }
    }
}
