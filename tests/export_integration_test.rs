//! Integration tests driving the full export pipeline: diagram construction,
//! structural validation, scheduling, and source emission.

use netsketch::export;
use netsketch::frameworks::keras::{DenseLayerConfig, InputLayer};
use netsketch::{Diagram, EvalError, NodeId};

const FRAMEWORK: &str = "Keras";

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn input_node(diagram: &mut Diagram, name: &str) -> NodeId {
    diagram.add_node(Box::new(InputLayer::new().with_name(name)))
}

fn dense_node(diagram: &mut Diagram, name: &str) -> NodeId {
    diagram.add_node(Box::new(DenseLayerConfig::new().with_name(name).init()))
}

#[test]
fn test_empty_diagram_exports_nothing() {
    let diagram = Diagram::new();
    let result = export(FRAMEWORK, &diagram).expect("empty diagram is not an error");
    assert!(result.is_none());
}

#[test]
fn test_single_input_node() {
    init_logging();

    let mut diagram = Diagram::new();
    input_node(&mut diagram, "features");

    let source = export(FRAMEWORK, &diagram)
        .expect("single input node should export")
        .expect("non-empty diagram should produce source");

    assert!(source.contains("\nfeatures\n"));
    // No connections: the call body stays empty.
    assert!(source.ends_with("    def call(self, inputs):\n\n"));
}

#[test]
fn test_disconnected_diagram_is_rejected() {
    let mut diagram = Diagram::new();
    input_node(&mut diagram, "alpha");
    input_node(&mut diagram, "beta");

    let error = export(FRAMEWORK, &diagram).expect_err("two components should fail");
    assert!(matches!(error, EvalError::MultipleComponents));
    assert!(error.is_user_error());
}

#[test]
fn test_two_cycle_is_rejected() {
    let mut diagram = Diagram::new();
    let a = dense_node(&mut diagram, "alpha");
    let b = dense_node(&mut diagram, "beta");
    diagram.connect(a, b);
    diagram.connect(b, a);

    let error = export(FRAMEWORK, &diagram).expect_err("cyclic graph should fail");
    assert!(matches!(error, EvalError::Cycle));
}

#[test]
fn test_linear_chain_export() {
    init_logging();

    let mut diagram = Diagram::new();
    let a = input_node(&mut diagram, "alpha");
    let b = dense_node(&mut diagram, "beta");
    let c = dense_node(&mut diagram, "gamma");
    diagram.connect(a, b);
    diagram.connect(b, c);

    let source = export(FRAMEWORK, &diagram).unwrap().unwrap();

    let expected = [
        "import tensorflow as tf",
        "",
        "",
        "class GeneratedModel(tf.keras.Model):",
        "    def __init__(self):",
        "        super(GeneratedModel, self).__init__()",
        "alpha",
        "    self.beta = tf.keras.layers.Dense(units=32, activation=linear, use_bias=False)",
        "    self.gamma = tf.keras.layers.Dense(units=32, activation=linear, use_bias=False)",
        "",
        "    def call(self, inputs):",
        "    self.beta_output = beta(self.alpha)",
        "    self.gamma_output = gamma(self.beta)",
        "",
    ]
    .join("\n");

    assert_eq!(source, expected);
}

#[test]
fn test_diamond_export_order() {
    let mut diagram = Diagram::new();
    let a = input_node(&mut diagram, "alpha");
    let b = dense_node(&mut diagram, "beta");
    let c = dense_node(&mut diagram, "gamma");
    let d = dense_node(&mut diagram, "delta");
    diagram.connect(a, b);
    diagram.connect(a, c);
    diagram.connect(b, d);
    diagram.connect(c, d);

    let source = export(FRAMEWORK, &diagram).unwrap().unwrap();

    // Definitions follow the evaluation order: alpha before beta and gamma,
    // beta before gamma (index tie-break), both before delta.
    let alpha = source.find("\nalpha\n").expect("alpha definition");
    let beta = source.find("self.beta =").expect("beta definition");
    let gamma = source.find("self.gamma =").expect("gamma definition");
    let delta = source.find("self.delta =").expect("delta definition");
    assert!(alpha < beta);
    assert!(beta < gamma);
    assert!(gamma < delta);

    // Delta wires to both parents, in ascending parent-index order.
    assert!(source.contains(
        "    self.delta_output = delta(self.beta)\n    self.delta_output = delta(self.gamma)"
    ));
}

#[test]
fn test_dense_root_is_rejected() {
    let mut diagram = Diagram::new();
    let a = dense_node(&mut diagram, "alpha");
    let b = dense_node(&mut diagram, "beta");
    diagram.connect(a, b);

    let error = export(FRAMEWORK, &diagram).expect_err("non-input root should fail");
    assert!(matches!(error, EvalError::RootNotInput));
}

#[test]
fn test_isolated_dense_node_is_rejected() {
    let mut diagram = Diagram::new();
    dense_node(&mut diagram, "alpha");

    let error = export(FRAMEWORK, &diagram).expect_err("non-input root should fail");
    assert!(matches!(error, EvalError::RootNotInput));
}

#[test]
fn test_export_is_idempotent() {
    let mut diagram = Diagram::new();
    let a = input_node(&mut diagram, "alpha");
    let b = dense_node(&mut diagram, "beta");
    diagram.connect(a, b);

    let first = export(FRAMEWORK, &diagram).unwrap().unwrap();
    let second = export(FRAMEWORK, &diagram).unwrap().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unknown_framework_is_rejected() {
    let mut diagram = Diagram::new();
    input_node(&mut diagram, "alpha");

    let error = export("Torch", &diagram).expect_err("unregistered framework should fail");
    assert!(matches!(error, EvalError::UnknownFramework { ref name } if name == "Torch"));
    assert!(!error.is_user_error());
}

#[test]
fn test_error_messages_are_user_facing() {
    assert!(EvalError::MultipleComponents
        .to_string()
        .contains("more than one single connected component"));
    assert!(EvalError::Cycle.to_string().contains("one or more cycles"));
    assert!(EvalError::RootNotInput
        .to_string()
        .contains("root nodes that are not input layers"));
}

#[test]
fn test_template_literal_text_passes_through() {
    let mut diagram = Diagram::new();
    input_node(&mut diagram, "alpha");

    let source = export(FRAMEWORK, &diagram).unwrap().unwrap();
    assert!(source.starts_with("import tensorflow as tf\n"));
    assert!(source.contains("class GeneratedModel(tf.keras.Model):"));
}
