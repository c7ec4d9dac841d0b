//! # netsketch
//!
//! Core library of a visual neural-network diagram editor: it turns a
//! user-drawn diagram of typed layer nodes and directed edges into generated
//! deep-learning framework source code.
//!
//! The GUI — scenes, toolbars, dialogs, arrow geometry — is an external
//! collaborator. This crate owns the model-graph pipeline: adjacency-list
//! construction, structural validation (single connected component,
//! acyclicity, input-layer roots), deterministic topological scheduling, and
//! per-layer code emission into a framework source template.
//!
//! ## Example
//!
//! ```
//! use netsketch::prelude::*;
//!
//! let mut diagram = Diagram::new();
//! let input = diagram.add_node(Box::new(InputLayer::new().with_name("features")));
//! let hidden = diagram.add_node(Box::new(
//!     DenseLayerConfig::new()
//!         .with_units(8)
//!         .with_activation(Activation::Relu)
//!         .with_name("hidden")
//!         .init(),
//! ));
//! diagram.connect(input, hidden);
//!
//! let source = export("Keras", &diagram).unwrap().unwrap();
//! assert!(source.contains("tf.keras.layers.Dense(units=8, activation=relu"));
//! assert!(source.contains("self.hidden_output = hidden(self.features)"));
//! ```

pub mod diagram;
pub mod errors;
pub mod export;
pub mod frameworks;
pub mod graph;

// Re-exports for convenience
pub use diagram::{Diagram, DiagramNode, Edge, NodeId};
pub use errors::EvalError;
pub use export::export;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::diagram::{Diagram, DiagramNode, Edge, NodeId};
    pub use crate::errors::EvalError;
    pub use crate::export::export;
    pub use crate::frameworks::keras::{Activation, DenseLayer, DenseLayerConfig, InputLayer};
    pub use crate::frameworks::{registry, Framework, Layer, LayerKind, LayerShape};
}
