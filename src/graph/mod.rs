//! Graph construction, validation, and scheduling for the export pipeline.
//!
//! All representations here are transient: adjacency lists are rebuilt fresh
//! from the diagram snapshot on every export and discarded afterwards.

mod build;
mod toposort;
mod validate;

pub use build::{adjacency, AdjacencyList, NodeIndexMap};
pub use toposort::topological_sort;
pub use validate::{
    is_one_connected_component, is_root_node, root_nodes, roots_are_input_layers,
};
