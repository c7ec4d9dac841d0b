//! Error types surfaced by the export pipeline.

mod eval_error;

pub use eval_error::EvalError;
