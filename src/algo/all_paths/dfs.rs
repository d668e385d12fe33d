use std::ops::ControlFlow;

use fixedbitset::FixedBitSet;
use tracing::{debug, trace};

use crate::{
    common::VisitSet,
    core::{AllPathsError, KeyType},
    graph::Graph,
};

use super::{AllPaths, Limits};

struct Frame {
    vertex: usize,
    next_edge: usize,
}

/// Depth-first enumeration of simple paths over arena positions.
///
/// The frames on the stack are exactly the vertices of the current path and
/// the visited set contains exactly these vertices. Every frame is pushed and
/// marked in [`enter`](Search::enter) and popped and unmarked in
/// [`leave`](Search::leave), so a vertex is excluded only from the branch that
/// currently goes through it.
pub(super) struct Search<'a, K, V, E> {
    graph: &'a Graph<K, V, E>,
    limits: Limits,
    include_trivial: bool,
    stack: Vec<Frame>,
    visited: FixedBitSet,
    paths: Vec<Vec<K>>,
    truncated: bool,
}

impl<'a, K, V, E> Search<'a, K, V, E>
where
    K: KeyType,
{
    pub fn new(graph: &'a Graph<K, V, E>, limits: Limits, include_trivial: bool) -> Self {
        Self {
            graph,
            limits,
            include_trivial,
            stack: Vec::new(),
            visited: FixedBitSet::with_capacity(graph.vertex_count()),
            paths: Vec::new(),
            truncated: false,
        }
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn run(&mut self, start: &K, end: &K) -> Result<(), AllPathsError<K>> {
        let start_pos = self
            .graph
            .position(start)
            .ok_or_else(|| AllPathsError::StartNotFound(start.clone()))?;
        let end_pos = self
            .graph
            .position(end)
            .ok_or_else(|| AllPathsError::EndNotFound(end.clone()))?;

        let found_before = self.paths.len();
        debug!(?start, ?end, limits = ?self.limits, "enumerating paths");

        if self.search(start_pos, end_pos).is_break() {
            debug!(
                ?start,
                ?end,
                max_paths = ?self.limits.max_paths,
                "path limit reached, enumeration truncated"
            );
        }

        // Unwind whatever is left after an early stop.
        self.stack.clear();
        self.visited.reset_visited();

        debug!(
            ?start,
            ?end,
            found = self.paths.len() - found_before,
            "paths enumerated"
        );

        Ok(())
    }

    pub fn finish(self) -> AllPaths<K> {
        AllPaths {
            paths: self.paths,
            truncated: self.truncated,
        }
    }

    fn search(&mut self, start: usize, goal: usize) -> ControlFlow<()> {
        if start == goal {
            // The trivial path is the only simple path from a vertex to
            // itself.
            return if self.include_trivial {
                self.enter(start);
                let flow = self.record();
                self.leave();
                flow
            } else {
                ControlFlow::Continue(())
            };
        }

        let graph = self.graph;
        self.enter(start);

        loop {
            // Number of edges of the current path.
            let depth = match self.stack.len() {
                0 => break,
                len => len - 1,
            };
            let exhausted = self.limits.max_depth.is_some_and(|max| depth >= max);

            let Some(frame) = self.stack.last_mut() else {
                break;
            };

            let next = if exhausted {
                None
            } else {
                graph.vertex_at(frame.vertex).neighbor_at(frame.next_edge)
            };

            let Some(neighbor) = next else {
                self.leave();
                continue;
            };

            frame.next_edge += 1;

            let Some(next) = graph.position(neighbor) else {
                continue;
            };

            if self.visited.is_visited(&next) {
                continue;
            }

            self.enter(next);

            if next == goal {
                let flow = self.record();
                self.leave();

                if flow.is_break() {
                    return flow;
                }
            }
        }

        ControlFlow::Continue(())
    }

    fn enter(&mut self, vertex: usize) {
        self.visited.visit(vertex);
        self.stack.push(Frame {
            vertex,
            next_edge: 0,
        });
    }

    fn leave(&mut self) {
        if let Some(frame) = self.stack.pop() {
            self.visited.unvisit(&frame.vertex);
        }
    }

    fn record(&mut self) -> ControlFlow<()> {
        if let Some(max_paths) = self.limits.max_paths {
            if self.paths.len() >= max_paths {
                self.truncated = true;
                return ControlFlow::Break(());
            }
        }

        let graph = self.graph;
        let path = self
            .stack
            .iter()
            .map(|frame| graph.vertex_at(frame.vertex).key().clone())
            .collect::<Vec<_>>();

        trace!(?path, "found path");
        self.paths.push(path);

        ControlFlow::Continue(())
    }
}
