pub mod all_paths;

pub use all_paths::{AllPaths, Limits};
