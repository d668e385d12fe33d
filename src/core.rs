pub mod error;
pub mod key;
pub mod vertex;

pub use error::*;
pub use key::KeyType;
pub use vertex::{Edge, Edges, Neighbors, Vertex};
