//! Keras framework layers.
//!
//! The layer kinds registered for the `Keras` framework, together with the
//! source template the emitter fills in. Generated code targets the
//! `tf.keras` subclassing API.

mod activation;
mod dense_layer;
mod input_layer;

pub use activation::Activation;
pub use dense_layer::{DenseLayer, DenseLayerConfig};
pub use input_layer::InputLayer;

use std::sync::atomic::{AtomicUsize, Ordering};

/// Framework source template with the two code-block slots.
pub(crate) const MODEL_TEMPLATE: &str = include_str!("model_template.py");

/// Global counter feeding generated instance names.
static INSTANCE_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Returns the next free suffix for a generated instance name.
pub(crate) fn next_instance_id() -> usize {
    INSTANCE_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Renders a bool as a Python literal.
pub(crate) fn python_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}
