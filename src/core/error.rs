use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("adding vertex {key:?} failed: {kind}")]
pub struct AddVertexError<K, V> {
    pub key: K,
    pub data: V,
    pub kind: AddVertexErrorKind,
}

impl<K, V> AddVertexError<K, V> {
    pub fn new(key: K, data: V) -> Self {
        Self {
            key,
            data,
            kind: AddVertexErrorKind::DuplicateKey,
        }
    }

    /// Takes back the key and the data that were rejected.
    pub fn into_inner(self) -> (K, V) {
        (self.key, self.data)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddVertexErrorKind {
    DuplicateKey,
}

impl fmt::Display for AddVertexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddVertexErrorKind::DuplicateKey => "a vertex with the same key already exists",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("vertex {0:?} does not exist")]
pub struct VertexNotFound<K>(pub K);

#[derive(Debug, Error, PartialEq)]
#[error("adding edge failed: {kind} ({key:?})")]
pub struct AddEdgeError<K, E> {
    /// The key that was not found.
    pub key: K,
    pub data: E,
    pub kind: EdgeErrorKind,
}

impl<K, E> AddEdgeError<K, E> {
    pub fn new(key: K, data: E, kind: EdgeErrorKind) -> Self {
        Self { key, data, kind }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("removing edge failed: {kind} ({key:?})")]
pub struct RemoveEdgeError<K> {
    /// The key that was not found.
    pub key: K,
    pub kind: EdgeErrorKind,
}

impl<K> RemoveEdgeError<K> {
    pub fn new(key: K, kind: EdgeErrorKind) -> Self {
        Self { key, kind }
    }
}

/// Reason why an operation on an edge was rejected. Both variants mean that an
/// endpoint of the edge is not in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeErrorKind {
    SourceAbsent,
    DestinationAbsent,
}

impl fmt::Display for EdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            EdgeErrorKind::SourceAbsent => "source does not exist",
            EdgeErrorKind::DestinationAbsent => "destination does not exist",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AllPathsError<K> {
    #[error("start vertex {0:?} does not exist")]
    StartNotFound(K),
    #[error("end vertex {0:?} does not exist")]
    EndNotFound(K),
}

/// Any error produced by the graph, with the rejected payloads dropped.
///
/// Useful when a caller wants to propagate failures of different operations
/// with `?` into a single error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error<K> {
    #[error("vertex {0:?} already exists")]
    DuplicateKey(K),
    #[error("vertex {0:?} does not exist")]
    NotFound(K),
}

impl<K> Error<K> {
    pub fn key(&self) -> &K {
        match self {
            Error::DuplicateKey(key) | Error::NotFound(key) => key,
        }
    }
}

impl<K, V> From<AddVertexError<K, V>> for Error<K> {
    fn from(error: AddVertexError<K, V>) -> Self {
        Error::DuplicateKey(error.key)
    }
}

impl<K> From<VertexNotFound<K>> for Error<K> {
    fn from(error: VertexNotFound<K>) -> Self {
        Error::NotFound(error.0)
    }
}

impl<K, E> From<AddEdgeError<K, E>> for Error<K> {
    fn from(error: AddEdgeError<K, E>) -> Self {
        Error::NotFound(error.key)
    }
}

impl<K> From<RemoveEdgeError<K>> for Error<K> {
    fn from(error: RemoveEdgeError<K>) -> Self {
        Error::NotFound(error.key)
    }
}

impl<K> From<AllPathsError<K>> for Error<K> {
    fn from(error: AllPathsError<K>) -> Self {
        match error {
            AllPathsError::StartNotFound(key) | AllPathsError::EndNotFound(key) => {
                Error::NotFound(key)
            }
        }
    }
}
