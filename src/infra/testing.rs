use std::collections::HashSet;

use thiserror::Error;

use crate::{core::KeyType, graph::Graph};

pub fn create_complete(vertex_count: u32) -> Graph<u32, (), ()> {
    let mut graph = Graph::with_capacity(vertex_count as usize);

    for u in 0..vertex_count {
        graph.add_vertex(u, ()).ok();
    }

    for u in 0..vertex_count {
        for v in 0..vertex_count {
            if u != v {
                graph.add_edge(&u, &v, ()).ok();
            }
        }
    }

    graph
}

pub fn create_path(vertex_count: u32) -> Graph<u32, (), ()> {
    let mut graph = Graph::with_capacity(vertex_count as usize);

    for u in 0..vertex_count {
        graph.add_vertex(u, ()).ok();

        if u > 0 {
            graph.add_edge(&(u - 1), &u, ()).ok();
        }
    }

    graph
}

/// Layered graph in which every vertex of a layer is connected to every
/// vertex of the next layer, with a single source before the first layer and a
/// single sink after the last one. There are `width^depth` paths from the
/// source to the sink.
pub fn create_layered(depth: u32, width: u32) -> Graph<u32, (), ()> {
    let mut graph = Graph::new();
    let source = 0;
    let sink = depth * width + 1;

    graph.add_vertex(source, ()).ok();
    for layer in 0..depth {
        for i in 0..width {
            graph.add_vertex(layer * width + i + 1, ()).ok();
        }
    }
    graph.add_vertex(sink, ()).ok();

    for i in 0..width {
        graph.add_edge(&source, &(i + 1), ()).ok();
        graph.add_edge(&((depth - 1) * width + i + 1), &sink, ()).ok();
    }

    for layer in 1..depth {
        for i in 0..width {
            for j in 0..width {
                let u = (layer - 1) * width + i + 1;
                let v = layer * width + j + 1;
                graph.add_edge(&u, &v, ()).ok();
            }
        }
    }

    graph
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError<K> {
    #[error("index size ({0}) is not equal to vertex count ({1})")]
    IndexVertexCountMismatch(usize, usize),
    #[error("vertex {0:?} is indexed at wrong position")]
    IndexPositionInvalid(K),
    #[error("edge {0:?} -> {1:?} points to a vertex that does not exist")]
    DanglingEdge(K, K),
    #[error("edge {0:?} -> {1:?} is stored more than once")]
    DuplicateEdge(K, K),
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("sum of out degrees ({0}) is not equal to edge count ({1})")]
    DegreeSumMismatch(usize, usize),
}

pub fn check_consistency<K, V, E>(graph: &Graph<K, V, E>) -> Result<(), ConsistencyCheckError<K>>
where
    K: KeyType,
{
    fn cmp<F, E>(actual: usize, expected: usize, error: F) -> Result<(), E>
    where
        F: FnOnce(usize, usize) -> E,
    {
        if actual == expected {
            Ok(())
        } else {
            Err(error(actual, expected))
        }
    }

    let vertex_count = graph.vertex_count();

    cmp(
        graph.index_len(),
        vertex_count,
        ConsistencyCheckError::IndexVertexCountMismatch,
    )?;

    for (i, vertex) in graph.vertices().enumerate() {
        if graph.position(vertex.key()) != Some(i) {
            return Err(ConsistencyCheckError::IndexPositionInvalid(
                vertex.key().clone(),
            ));
        }

        let mut targets = HashSet::new();

        for target in vertex.neighbors() {
            if !graph.contains_vertex(target) {
                return Err(ConsistencyCheckError::DanglingEdge(
                    vertex.key().clone(),
                    target.clone(),
                ));
            }

            if !targets.insert(target) {
                return Err(ConsistencyCheckError::DuplicateEdge(
                    vertex.key().clone(),
                    target.clone(),
                ));
            }
        }
    }

    let edge_count = graph.edge_count();

    cmp(
        graph.edges().count(),
        edge_count,
        ConsistencyCheckError::EdgesEdgeCountMismatch,
    )?;

    cmp(
        graph.vertices().map(|vertex| vertex.out_degree()).sum(),
        edge_count,
        ConsistencyCheckError::DegreeSumMismatch,
    )?;

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathCheckError<K> {
    #[error("path {0:?} is empty")]
    Empty(usize),
    #[error("path {0:?} does not start at {1:?}")]
    WrongStart(usize, K),
    #[error("path {0:?} does not end at {1:?}")]
    WrongEnd(usize, K),
    #[error("path {0:?} visits {1:?} more than once")]
    NotSimple(usize, K),
    #[error("path {0:?} uses edge {1:?} -> {2:?} that does not exist")]
    MissingEdge(usize, K, K),
    #[error("path {0:?} is reported more than once")]
    Duplicate(usize),
}

/// Checks that every path goes from `start` to `end` along existing edges,
/// never visits a vertex twice and that no path is reported twice. Paths are
/// identified by their position in `paths`.
pub fn check_paths<K, V, E>(
    graph: &Graph<K, V, E>,
    start: &K,
    end: &K,
    paths: &[Vec<K>],
) -> Result<(), PathCheckError<K>>
where
    K: KeyType,
{
    let mut seen = HashSet::new();

    for (i, path) in paths.iter().enumerate() {
        let (Some(first), Some(last)) = (path.first(), path.last()) else {
            return Err(PathCheckError::Empty(i));
        };

        if first != start {
            return Err(PathCheckError::WrongStart(i, start.clone()));
        }

        if last != end {
            return Err(PathCheckError::WrongEnd(i, end.clone()));
        }

        let mut visited = HashSet::new();
        for key in path {
            if !visited.insert(key) {
                return Err(PathCheckError::NotSimple(i, key.clone()));
            }
        }

        for pair in path.windows(2) {
            if !graph.contains_edge(&pair[0], &pair[1]) {
                return Err(PathCheckError::MissingEdge(
                    i,
                    pair[0].clone(),
                    pair[1].clone(),
                ));
            }
        }

        if !seen.insert(path) {
            return Err(PathCheckError::Duplicate(i));
        }
    }

    Ok(())
}
