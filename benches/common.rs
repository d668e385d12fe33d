#![allow(dead_code)]

use fastrand::Rng;
use pathgraph::Graph;
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_count: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_count,
            p,
        }
    }

    /// Next pair `(v, w)` with `w < v`, sampled with probability `p` per pair.
    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n {
            Some((*v, *w))
        } else {
            None
        }
    }
}

/// Random graph with keys `0..vertex_count`. Edges go from lower to higher
/// keys unless `cyclic` is set, in which case the direction is random.
pub fn pathgraph_random(
    vertex_count: usize,
    density: f32,
    cyclic: bool,
    rng: &mut Rng,
) -> Graph<u32, u32, f32> {
    let mut graph = Graph::with_capacity(vertex_count);

    for key in 0..vertex_count as u32 {
        graph.add_vertex(key, rng.u32(0..100)).ok();
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        let (u, v) = if cyclic && rng.bool() { (u, v) } else { (v, u) };
        graph.add_edge(&(u as u32), &(v as u32), rng.f32()).ok();
    }

    graph
}

pub fn petgraph_from(graph: &Graph<u32, u32, f32>) -> petgraph::Graph<u32, f32, Directed> {
    let mut result = petgraph::Graph::with_capacity(graph.vertex_count(), graph.edge_count());

    for key in graph.keys() {
        result.add_node(*key);
    }

    for (u, v, e) in graph.edges() {
        result.add_edge(NodeIndex::new(*u as usize), NodeIndex::new(*v as usize), *e);
    }

    result
}
