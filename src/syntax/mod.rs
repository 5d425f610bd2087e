//! Declarations and the graph assembled from them.

pub mod builder;
pub mod types;

pub use builder::GraphBuilder;
pub use types::{Direction, EdgeDecl, Graph, NodeDecl, NodeShape};
