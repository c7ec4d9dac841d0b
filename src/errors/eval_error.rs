//! Model-graph evaluation error types.

use thiserror::Error;

/// Errors that can occur while evaluating and exporting a model graph.
///
/// The first three variants are diagram errors: the caller presents their
/// message and the user fixes the diagram. Retrying without an edit would
/// reproduce the identical failure, so the pipeline never retries. The
/// remaining variants indicate registry or index-map misuse and should never
/// surface given correct caller usage.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The diagram graph is not a single connected component.
    #[error("Your model's graph has more than one single connected component.\nMake sure to solve this problem by connecting all graph components correctly.")]
    MultipleComponents,

    /// The directed graph admits no topological order.
    #[error("Your model's graph has one or more cycles.\nMake sure to solve this problem by remove any cycle in your graph.")]
    Cycle,

    /// A root node carries a layer kind that is not a graph source.
    #[error("Your model's graph has one or more root nodes that are not input layers.\nMake sure to solve this problem by changing all root nodes to input layers.")]
    RootNotInput,

    /// The requested framework is not registered.
    #[error("Unknown framework: {name}")]
    UnknownFramework { name: String },

    /// An edge endpoint is missing from the node index map.
    #[error("Edge endpoint does not belong to the diagram snapshot")]
    UnknownNode,

    /// The framework template could not be rendered.
    #[error("Invalid framework template: {message}")]
    Template { message: String },
}

impl EvalError {
    /// True for diagram errors the user can fix by editing the model graph.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::MultipleComponents | Self::Cycle | Self::RootNotInput
        )
    }
}
