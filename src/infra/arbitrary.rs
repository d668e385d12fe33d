use std::fmt;

use arbitrary::{Arbitrary, Unstructured};

use crate::{
    core::{AddEdgeError, AddVertexError, KeyType, RemoveEdgeError, VertexNotFound},
    graph::Graph,
};

#[derive(Debug, Arbitrary, Clone)]
pub enum MutOp<K, V, E> {
    AddVertex(K, V),
    RemoveVertex(K),
    Clear,
    AddEdge(K, K, E),
    RemoveEdge(K, K),
    ClearEdges,
}

#[derive(Debug, PartialEq)]
pub enum MutOpResult<K, V, E> {
    AddVertex(Result<(), AddVertexError<K, V>>),
    RemoveVertex(Result<V, VertexNotFound<K>>),
    Clear,
    AddEdge(Result<Option<E>, AddEdgeError<K, E>>),
    RemoveEdge(Result<Option<E>, RemoveEdgeError<K>>),
    ClearEdges,
}

impl<K, V, E> MutOpResult<K, V, E> {
    pub fn is_rejected(&self) -> bool {
        matches!(
            self,
            MutOpResult::AddVertex(Err(_))
                | MutOpResult::RemoveVertex(Err(_))
                | MutOpResult::AddEdge(Err(_))
                | MutOpResult::RemoveEdge(Err(_))
        )
    }
}

impl<K: KeyType, V, E> MutOp<K, V, E> {
    pub fn apply(self, graph: &mut Graph<K, V, E>) -> MutOpResult<K, V, E> {
        match self {
            MutOp::AddVertex(key, data) => MutOpResult::AddVertex(graph.add_vertex(key, data)),
            MutOp::RemoveVertex(key) => MutOpResult::RemoveVertex(graph.remove_vertex(&key)),
            MutOp::Clear => {
                graph.clear();
                MutOpResult::Clear
            }
            MutOp::AddEdge(start, end, data) => {
                MutOpResult::AddEdge(graph.add_edge(&start, &end, data))
            }
            MutOp::RemoveEdge(start, end) => {
                MutOpResult::RemoveEdge(graph.remove_edge(&start, &end))
            }
            MutOp::ClearEdges => {
                graph.clear_edges();
                MutOpResult::ClearEdges
            }
        }
    }
}

pub struct MutOpsSeq<K, V, E>(pub Vec<MutOp<K, V, E>>);

impl<K, V, E> IntoIterator for MutOpsSeq<K, V, E> {
    type Item = MutOp<K, V, E>;
    type IntoIter = std::vec::IntoIter<MutOp<K, V, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K, V, E> MutOpsSeq<K, V, E> {
    pub fn replay(self, graph: &mut Graph<K, V, E>)
    where
        K: KeyType,
        V: fmt::Debug,
        E: fmt::Debug,
    {
        println!("let mut graph = Graph::new();");
        println!();

        for op in self {
            match &op {
                MutOp::AddVertex(key, data) => {
                    println!("graph.add_vertex({key:?}, {data:?}).ok();")
                }
                MutOp::RemoveVertex(key) => println!("graph.remove_vertex(&{key:?}).ok();"),
                MutOp::Clear => println!("graph.clear();"),
                MutOp::AddEdge(start, end, data) => {
                    println!("graph.add_edge(&{start:?}, &{end:?}, {data:?}).ok();")
                }
                MutOp::RemoveEdge(start, end) => {
                    println!("graph.remove_edge(&{start:?}, &{end:?}).ok();")
                }
                MutOp::ClearEdges => println!("graph.clear_edges();"),
            }

            op.apply(graph);
        }

        println!();
        println!("check_consistency(&graph).unwrap();");
    }
}

impl<K: fmt::Debug, V: fmt::Debug, E: fmt::Debug> fmt::Debug for MutOpsSeq<K, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq(vec![")?;

        for op in self.0.iter() {
            writeln!(f, "    MutOp::{:?},", op)?;
        }

        writeln!(f, "])")?;
        writeln!(f, ".replay(&mut graph);")?;
        writeln!(f)?;
        writeln!(f, "// paste into `fuzz_replay_mut_ops_seq` and run it with `--ignored`")
    }
}

#[derive(Debug, Clone, Copy)]
enum OpKind {
    AddVertex,
    AddEdge,
    RemoveVertex,
    RemoveEdge,
    Clear,
    ClearEdges,
}

impl OpKind {
    const ALL: [OpKind; 6] = [
        OpKind::AddVertex,
        OpKind::AddEdge,
        OpKind::RemoveVertex,
        OpKind::RemoveEdge,
        OpKind::Clear,
        OpKind::ClearEdges,
    ];
}

/// Tracks the approximate size of the generated graph so that additions
/// dominate while it is small and removals catch up as it grows.
struct Progress {
    vertices: usize,
    edges: usize,
    vertex_target: usize,
    edge_target: usize,
}

impl Progress {
    fn weights(&self, consumed: f64) -> [f64; 6] {
        let vertex_fill = (self.vertices as f64 / self.vertex_target as f64).min(1.0);
        let edge_fill = (self.edges as f64 / self.edge_target as f64).min(1.0);

        let add_vertex = decay(0.4 * vertex_fill + 0.6 * consumed);
        let add_edge = decay(0.6 * edge_fill + 0.4 * consumed);

        [
            add_vertex,
            add_edge,
            (1.0 - add_vertex) * 0.25,
            (1.0 - add_edge) * 0.5,
            0.01,
            0.01,
        ]
    }

    fn record<K, V, E>(&mut self, op: &MutOp<K, V, E>) {
        match op {
            MutOp::AddVertex(_, _) => self.vertices += 1,
            MutOp::RemoveVertex(_) => self.vertices = self.vertices.saturating_sub(1),
            MutOp::Clear => {
                self.vertices = 0;
                self.edges = 0;
            }
            MutOp::AddEdge(_, _, _) => self.edges += 1,
            MutOp::RemoveEdge(_, _) => self.edges = self.edges.saturating_sub(1),
            MutOp::ClearEdges => self.edges = 0,
        }
    }
}

impl<'a, K, V, E> Arbitrary<'a> for MutOpsSeq<K, V, E>
where
    K: Arbitrary<'a>,
    V: Arbitrary<'a>,
    E: Arbitrary<'a>,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let vertex_target: usize = u.int_in_range(10..=200)?;
        let ratio = f64::from(u.int_in_range(0..=100u8)?) / 100.0;

        // Sparse graphs keep the number of simple paths manageable.
        let edge_target = ((vertex_target * 4) as f64 * ratio).round().max(1.0) as usize;

        let mut progress = Progress {
            vertices: 0,
            edges: 0,
            vertex_target,
            edge_target,
        };

        let total = u.len().max(1);
        let mut seq = Vec::with_capacity(vertex_target);

        while !u.is_empty() {
            let consumed = (total - u.len()) as f64 / total as f64;

            let op = pick_kind(u, &progress.weights(consumed)).and_then(|kind| op_of(u, kind));
            let Ok(op) = op else {
                break;
            };

            progress.record(&op);
            seq.push(op);
        }

        Ok(MutOpsSeq(seq))
    }
}

fn pick_kind(u: &mut Unstructured<'_>, weights: &[f64; 6]) -> arbitrary::Result<OpKind> {
    const RESOLUTION: u32 = 10_000;

    let sum = weights.iter().sum::<f64>();
    let point = f64::from(u.int_in_range(0..=RESOLUTION)?) / f64::from(RESOLUTION) * sum;

    let mut acc = 0.0;
    for (kind, weight) in OpKind::ALL.iter().zip(weights) {
        acc += weight;

        if point <= acc {
            return Ok(*kind);
        }
    }

    Ok(OpKind::ClearEdges)
}

fn op_of<'a, K, V, E>(u: &mut Unstructured<'a>, kind: OpKind) -> arbitrary::Result<MutOp<K, V, E>>
where
    K: Arbitrary<'a>,
    V: Arbitrary<'a>,
    E: Arbitrary<'a>,
{
    let op = match kind {
        OpKind::AddVertex => MutOp::AddVertex(u.arbitrary()?, u.arbitrary()?),
        OpKind::AddEdge => MutOp::AddEdge(u.arbitrary()?, u.arbitrary()?, u.arbitrary()?),
        OpKind::RemoveVertex => MutOp::RemoveVertex(u.arbitrary()?),
        OpKind::RemoveEdge => MutOp::RemoveEdge(u.arbitrary()?, u.arbitrary()?),
        OpKind::Clear => MutOp::Clear,
        OpKind::ClearEdges => MutOp::ClearEdges,
    };

    Ok(op)
}

// decay(0) = 1, decay(1) ~= 0.152
fn decay(x: f64) -> f64 {
    (x + 1.0).powf(-std::f64::consts::E)
}

#[cfg(test)]
mod tests {
    use fastrand::Rng;

    use crate::infra::testing::{check_consistency, check_paths};

    use super::*;

    fn sequences() -> impl Iterator<Item = MutOpsSeq<u8, u8, u8>> {
        [500, 2000, 5000].into_iter().flat_map(|size| {
            [0, 3, 7, 13, 42, 123].into_iter().map(move |seed| {
                let mut rng = Rng::with_seed(seed);
                let raw = std::iter::repeat_with(|| rng.u8(..))
                    .take(size)
                    .collect::<Vec<_>>();

                let mut u = Unstructured::new(&raw);
                let seq: MutOpsSeq<u8, u8, u8> = u.arbitrary().unwrap();
                seq
            })
        })
    }

    #[test]
    fn mut_ops_seq_arbitrary_sanity() {
        for seq in sequences() {
            assert!(!seq.0.is_empty());
            assert!(seq.0.iter().any(|op| matches!(op, MutOp::AddVertex(_, _))));
        }
    }

    #[test]
    fn mut_ops_keep_graph_consistent() {
        for seq in sequences() {
            let mut graph = Graph::new();

            for op in seq {
                let vertex_count = graph.vertex_count();
                let edge_count = graph.edge_count();

                let result = op.apply(&mut graph);

                if result.is_rejected() {
                    assert_eq!(graph.vertex_count(), vertex_count);
                    assert_eq!(graph.edge_count(), edge_count);
                }

                check_consistency(&graph)
                    .as_ref()
                    .map_err(ToString::to_string)
                    .unwrap();
            }
        }
    }

    #[test]
    fn mut_ops_results() {
        let mut graph = Graph::new();

        assert_eq!(
            MutOp::<u8, char, u8>::AddVertex(1, 'a').apply(&mut graph),
            MutOpResult::AddVertex(Ok(()))
        );
        assert!(MutOp::AddVertex(1, 'b').apply(&mut graph).is_rejected());
        assert!(MutOp::AddEdge(1, 2, 0).apply(&mut graph).is_rejected());
        assert_eq!(
            MutOp::RemoveVertex(1).apply(&mut graph),
            MutOpResult::RemoveVertex(Ok('a'))
        );
    }

    #[test]
    fn mut_ops_paths_stay_simple() {
        for seq in sequences().take(6) {
            let mut graph = Graph::new();

            for op in seq {
                op.apply(&mut graph);
            }

            let keys = graph.keys().copied().take(4).collect::<Vec<_>>();

            for start in keys.iter() {
                for end in keys.iter() {
                    let paths = crate::algo::AllPaths::on(&graph)
                        .max_paths(1000)
                        .max_depth(5)
                        .run(start, end)
                        .unwrap();
                    check_paths(&graph, start, end, paths.paths()).unwrap();
                }
            }
        }
    }

    #[test]
    #[ignore = "placeholder for fuzz findings"]
    fn fuzz_replay_mut_ops_seq() {
        let mut graph = Graph::new();

        MutOpsSeq(vec![
            MutOp::AddVertex(0u8, 0u8),
            MutOp::AddEdge(0, 0, 0),
            MutOp::ClearEdges,
            MutOp::RemoveEdge(0, 0),
        ])
        .replay(&mut graph);

        panic!("check_consistency is required for reproduction");
    }
}
