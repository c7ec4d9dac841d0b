//! Keras dense (fully connected) layer.

use crate::frameworks::{Layer, LayerShape};

use super::{next_instance_id, python_bool, Activation};

/// Configuration for a [`DenseLayer`].
///
/// Defaults match what the editor pre-fills in the layer's properties
/// dialog: 32 units, linear activation, no bias.
#[derive(Debug, Clone)]
pub struct DenseLayerConfig {
    /// Output dimensionality of the layer.
    pub units: usize,
    /// Activation applied after the linear transformation.
    pub activation: Activation,
    /// Whether the layer uses a bias vector.
    pub use_bias: bool,
    /// Explicit instance name; a fresh one is generated when absent.
    pub instance_name: Option<String>,
}

impl DenseLayerConfig {
    /// Creates a configuration with the dialog defaults.
    pub fn new() -> Self {
        Self {
            units: 32,
            activation: Activation::Linear,
            use_bias: false,
            instance_name: None,
        }
    }

    /// Sets the number of units.
    pub fn with_units(mut self, units: usize) -> Self {
        self.units = units;
        self
    }

    /// Sets the activation function.
    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    /// Sets the use-bias flag.
    pub fn with_use_bias(mut self, use_bias: bool) -> Self {
        self.use_bias = use_bias;
        self
    }

    /// Sets an explicit instance name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.instance_name = Some(name.into());
        self
    }

    /// Builds the layer instance.
    pub fn init(&self) -> DenseLayer {
        DenseLayer {
            instance_name: self
                .instance_name
                .clone()
                .unwrap_or_else(|| format!("dense_{}", next_instance_id())),
            units: self.units,
            activation: self.activation,
            use_bias: self.use_bias,
        }
    }
}

impl Default for DenseLayerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Fully connected layer kind.
pub struct DenseLayer {
    instance_name: String,
    units: usize,
    activation: Activation,
    use_bias: bool,
}

impl DenseLayer {
    /// Kind name shown on the palette and the node.
    pub const DISPLAY_NAME: &'static str = "Dense Layer";

    /// Creates a dense layer with the dialog defaults and a fresh name.
    pub fn new() -> Self {
        DenseLayerConfig::new().init()
    }

    /// Returns the configured number of units.
    pub fn units(&self) -> usize {
        self.units
    }

    /// Returns the configured activation.
    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Returns the configured use-bias flag.
    pub fn use_bias(&self) -> bool {
        self.use_bias
    }

    /// Wiring statement for a parent that is a graph root.
    fn root_connection(&self, parent: &dyn Layer) -> String {
        format!(
            "    self.{name}_output = {name}(self.{parent})",
            name = self.instance_name,
            parent = parent.instance_name(),
        )
    }

    /// Wiring statement for a parent that is itself a produced value.
    fn chained_connection(&self, parent: &dyn Layer) -> String {
        format!(
            "    self.{name}_output = {name}(self.{parent})",
            name = self.instance_name,
            parent = parent.instance_name(),
        )
    }
}

impl Default for DenseLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Layer for DenseLayer {
    fn kind_name(&self) -> &'static str {
        Self::DISPLAY_NAME
    }

    fn shape(&self) -> LayerShape {
        LayerShape::Rectangle
    }

    fn instance_name(&self) -> &str {
        &self.instance_name
    }

    fn definition(&self) -> String {
        format!(
            "    self.{name} = tf.keras.layers.Dense(units={units}, activation={activation}, use_bias={use_bias})",
            name = self.instance_name,
            units = self.units,
            activation = self.activation.as_keras_name(),
            use_bias = python_bool(self.use_bias),
        )
    }

    fn connections(&self, parents: &[&dyn Layer], is_root: &[bool]) -> String {
        let mut statements = Vec::with_capacity(parents.len());

        for (parent, root) in parents.iter().zip(is_root.iter()) {
            let statement = if *root {
                self.root_connection(*parent)
            } else {
                self.chained_connection(*parent)
            };
            statements.push(statement);
        }

        statements.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frameworks::keras::InputLayer;

    #[test]
    fn test_config_defaults() {
        let config = DenseLayerConfig::new();
        assert_eq!(config.units, 32);
        assert_eq!(config.activation, Activation::Linear);
        assert!(!config.use_bias);
        assert!(config.instance_name.is_none());
    }

    #[test]
    fn test_config_builds_layer() {
        let layer = DenseLayerConfig::new()
            .with_units(64)
            .with_activation(Activation::Relu)
            .with_use_bias(true)
            .with_name("hidden")
            .init();

        assert_eq!(layer.units(), 64);
        assert_eq!(layer.activation(), Activation::Relu);
        assert!(layer.use_bias());
        assert_eq!(layer.instance_name(), "hidden");
    }

    #[test]
    fn test_definition_renders_python_literals() {
        let layer = DenseLayerConfig::new().with_name("hidden").init();
        assert_eq!(
            layer.definition(),
            "    self.hidden = tf.keras.layers.Dense(units=32, activation=linear, use_bias=False)"
        );
    }

    #[test]
    fn test_connections_one_statement_per_parent() {
        let parent_a = InputLayer::new().with_name("alpha");
        let parent_b = DenseLayerConfig::new().with_name("beta").init();
        let layer = DenseLayerConfig::new().with_name("gamma").init();

        let block = layer.connections(&[&parent_a, &parent_b], &[true, false]);
        assert_eq!(
            block,
            "    self.gamma_output = gamma(self.alpha)\n    self.gamma_output = gamma(self.beta)"
        );
    }

    #[test]
    fn test_connections_empty_without_parents() {
        let layer = DenseLayer::new();
        assert!(layer.connections(&[], &[]).is_empty());
    }

    #[test]
    fn test_generated_names_are_unique() {
        let layer1 = DenseLayer::new();
        let layer2 = DenseLayer::new();
        assert_ne!(layer1.instance_name(), layer2.instance_name());
        assert!(layer1.instance_name().starts_with("dense_"));
    }
}
