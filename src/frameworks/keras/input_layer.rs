//! Keras input layer: the entry point for data into the generated model.

use crate::frameworks::{Layer, LayerShape};

use super::next_instance_id;

/// Graph-source layer kind.
///
/// The only kind that may legitimately sit at a root of the model graph. Its
/// definition is the bare instance name and it never wires to a parent.
pub struct InputLayer {
    instance_name: String,
}

impl InputLayer {
    /// Kind name shown on the palette and the node.
    pub const DISPLAY_NAME: &'static str = "Input Layer";

    /// Creates an input layer with a fresh generated instance name.
    pub fn new() -> Self {
        Self {
            instance_name: format!("input_{}", next_instance_id()),
        }
    }

    /// Replaces the generated instance name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.instance_name = name.into();
        self
    }
}

impl Default for InputLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Layer for InputLayer {
    fn kind_name(&self) -> &'static str {
        Self::DISPLAY_NAME
    }

    fn shape(&self) -> LayerShape {
        LayerShape::Parallelogram
    }

    fn instance_name(&self) -> &str {
        &self.instance_name
    }

    fn is_input(&self) -> bool {
        true
    }

    fn definition(&self) -> String {
        self.instance_name.clone()
    }

    fn connections(&self, _parents: &[&dyn Layer], _is_root: &[bool]) -> String {
        String::new()
    }
}
