use crate::{
    core::{AllPathsError, KeyType},
    graph::Graph,
};

use super::{dfs::Search, AllPaths, Limits};

/// Builder for [`AllPaths`].
pub struct AllPathsBuilder<'a, K, V, E> {
    graph: &'a Graph<K, V, E>,
    limits: Limits,
    include_trivial: bool,
}

impl<K> AllPaths<K>
where
    K: KeyType,
{
    /// Starts configuring the enumeration on the graph.
    pub fn on<V, E>(graph: &Graph<K, V, E>) -> AllPathsBuilder<'_, K, V, E> {
        AllPathsBuilder {
            graph,
            limits: Limits::default(),
            include_trivial: false,
        }
    }
}

impl<'a, K, V, E> AllPathsBuilder<'a, K, V, E>
where
    K: KeyType,
{
    /// Reports the path consisting only of the start vertex when the start
    /// and end vertex are the same.
    pub fn include_trivial(self) -> Self {
        Self {
            include_trivial: true,
            ..self
        }
    }

    /// Stops the enumeration after `max_paths` paths were found.
    pub fn max_paths(self, max_paths: usize) -> Self {
        Self {
            limits: self.limits.max_paths(max_paths),
            ..self
        }
    }

    /// Ignores paths with more than `max_depth` edges.
    pub fn max_depth(self, max_depth: usize) -> Self {
        Self {
            limits: self.limits.max_depth(max_depth),
            ..self
        }
    }

    pub fn limits(self, limits: Limits) -> Self {
        Self { limits, ..self }
    }

    /// Runs the enumeration between a single pair of vertices.
    pub fn run(self, start: &K, end: &K) -> Result<AllPaths<K>, AllPathsError<K>> {
        let mut search = Search::new(self.graph, self.limits, self.include_trivial);
        search.run(start, end)?;
        Ok(search.finish())
    }

    /// Runs the enumeration for every pair from the cartesian product of
    /// `starts` and `ends`. The paths are ordered by the pairs, the end vertex
    /// changing faster.
    ///
    /// All keys are checked for existence before the enumeration starts. The
    /// [path limit](Limits::max_paths) applies to the total number of paths.
    pub fn run_between_sets<'k, S, T>(
        self,
        starts: S,
        ends: T,
    ) -> Result<AllPaths<K>, AllPathsError<K>>
    where
        K: 'k,
        S: IntoIterator<Item = &'k K>,
        T: IntoIterator<Item = &'k K>,
    {
        let starts = starts.into_iter().collect::<Vec<_>>();
        let ends = ends.into_iter().collect::<Vec<_>>();

        if let Some(start) = starts.iter().find(|k| !self.graph.contains_vertex(k)) {
            return Err(AllPathsError::StartNotFound((*start).clone()));
        }

        if let Some(end) = ends.iter().find(|k| !self.graph.contains_vertex(k)) {
            return Err(AllPathsError::EndNotFound((*end).clone()));
        }

        let mut search = Search::new(self.graph, self.limits, self.include_trivial);

        'pairs: for start in starts.iter() {
            for end in ends.iter() {
                search.run(start, end)?;

                if search.is_truncated() {
                    break 'pairs;
                }
            }
        }

        Ok(search.finish())
    }
}
