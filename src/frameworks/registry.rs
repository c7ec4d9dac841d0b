//! Process-wide registry of frameworks and their layer kinds.
//!
//! Initialized once at startup and read-only afterwards. The registry stores
//! constructors rather than instances: every placement on the diagram builds
//! a fresh layer with a freshly generated instance name.

use once_cell::sync::Lazy;

use crate::errors::EvalError;

use super::keras;
use super::Layer;

/// A registered layer kind.
pub struct LayerKind {
    name: &'static str,
    construct: fn() -> Box<dyn Layer>,
}

impl LayerKind {
    /// Returns the kind's display name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Builds a fresh layer instance of this kind.
    pub fn instantiate(&self) -> Box<dyn Layer> {
        (self.construct)()
    }
}

/// A target framework: its ordered layer kinds and its source template.
pub struct Framework {
    name: &'static str,
    layers: Vec<LayerKind>,
    template: &'static str,
}

impl Framework {
    /// Returns the framework's registered name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Layer kinds in registration order.
    ///
    /// The order is significant: it drives the palette display and the
    /// numeric item type the editor uses at insertion time.
    pub fn layers(&self) -> &[LayerKind] {
        &self.layers
    }

    /// Position of a kind within this framework's palette.
    pub fn layer_index(&self, kind_name: &str) -> Option<usize> {
        self.layers.iter().position(|kind| kind.name == kind_name)
    }

    /// Builds a fresh instance of the kind at `index`.
    pub fn instantiate(&self, index: usize) -> Option<Box<dyn Layer>> {
        self.layers.get(index).map(LayerKind::instantiate)
    }

    /// The framework's source template with its two code-block slots.
    pub fn template(&self) -> &'static str {
        self.template
    }
}

static REGISTRY: Lazy<Vec<Framework>> = Lazy::new(|| {
    vec![Framework {
        name: "Keras",
        layers: vec![
            LayerKind {
                name: keras::InputLayer::DISPLAY_NAME,
                construct: || Box::new(keras::InputLayer::new()),
            },
            LayerKind {
                name: keras::DenseLayer::DISPLAY_NAME,
                construct: || Box::new(keras::DenseLayer::new()),
            },
        ],
        template: keras::MODEL_TEMPLATE,
    }]
});

/// Framework names in registration order.
pub fn framework_names() -> Vec<&'static str> {
    REGISTRY.iter().map(Framework::name).collect()
}

/// Framework names sorted alphabetically for display.
pub fn sorted_framework_names() -> Vec<&'static str> {
    let mut names = framework_names();
    names.sort_unstable();
    names
}

/// Looks up a framework by its registered name.
pub fn framework(name: &str) -> Result<&'static Framework, EvalError> {
    REGISTRY
        .iter()
        .find(|framework| framework.name == name)
        .ok_or_else(|| EvalError::UnknownFramework {
            name: name.to_string(),
        })
}
