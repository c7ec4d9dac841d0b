//! Model-graph evaluation and source-code emission.
//!
//! The single entry point the editor calls when the user exports a diagram:
//! build the derived graphs, validate them, compute the evaluation order,
//! and render the layer code into the framework template.

use std::collections::HashMap;

use log::{debug, warn};
use strfmt::strfmt;

use crate::diagram::{Diagram, DiagramNode};
use crate::errors::EvalError;
use crate::frameworks::{registry, Layer};
use crate::graph::{
    adjacency, is_one_connected_component, is_root_node, root_nodes, roots_are_input_layers,
    topological_sort, AdjacencyList, NodeIndexMap,
};

/// Template slot receiving the joined layer-definition block.
const DEFINITIONS_SLOT: &str = "layer_definitions";

/// Template slot receiving the joined model-connections block.
const CONNECTIONS_SLOT: &str = "model_connections";

/// Evaluates the diagram and renders it as framework source code.
///
/// Returns `Ok(None)` for an empty diagram — nothing to export is not an
/// error. Validation and scheduling failures surface as classified
/// [`EvalError`]s with no partial output; persisting the returned text is
/// the caller's concern.
pub fn export(framework_name: &str, diagram: &Diagram) -> Result<Option<String>, EvalError> {
    let nodes = diagram.nodes();
    if nodes.is_empty() {
        debug!("export skipped: empty diagram");
        return Ok(None);
    }

    let mapping = NodeIndexMap::new(nodes);
    let directed = adjacency(nodes, diagram.edges(), &mapping, false)?;
    let bidirectional = adjacency(nodes, diagram.edges(), &mapping, true)?;

    if !is_one_connected_component(&bidirectional) {
        warn!("export aborted: diagram is not a single connected component");
        return Err(EvalError::MultipleComponents);
    }

    let roots = root_nodes(&directed);
    if !roots_are_input_layers(nodes, &roots) {
        warn!("export aborted: root node is not an input layer");
        return Err(EvalError::RootNotInput);
    }

    let order = topological_sort(&directed).ok_or(EvalError::Cycle)?;
    debug!("evaluation order covers {} node(s)", order.len());

    let definitions = layer_definitions(nodes, &order);
    let connections = model_connections(nodes, &directed, &order);

    let framework = registry::framework(framework_name)?;
    let source = render_template(framework.template(), &definitions, &connections)?;

    Ok(Some(source))
}

/// Joins each node's definition statement in evaluation order.
fn layer_definitions(nodes: &[DiagramNode], order: &[usize]) -> String {
    order
        .iter()
        .map(|&node| nodes[node].layer().definition())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Joins each node's connection statements in evaluation order.
///
/// A node's parents are its direct predecessors in ascending index order;
/// the parallel flag list marks which of those parents are themselves roots.
/// Empty per-node blocks are skipped.
fn model_connections(nodes: &[DiagramNode], directed: &AdjacencyList, order: &[usize]) -> String {
    let mut blocks = Vec::new();

    for &node in order {
        let parents: Vec<usize> = (0..directed.len())
            .filter(|&parent| directed[parent].contains(&node))
            .collect();

        let parent_layers: Vec<&dyn Layer> = parents
            .iter()
            .map(|&parent| nodes[parent].layer())
            .collect();
        let parent_is_root: Vec<bool> = parents
            .iter()
            .map(|&parent| is_root_node(directed, parent))
            .collect();

        let block = nodes[node]
            .layer()
            .connections(&parent_layers, &parent_is_root);
        if !block.is_empty() {
            blocks.push(block);
        }
    }

    blocks.join("\n")
}

/// Substitutes the two assembled code blocks into the framework template.
fn render_template(
    template: &str,
    definitions: &str,
    connections: &str,
) -> Result<String, EvalError> {
    let mut values = HashMap::new();
    values.insert(DEFINITIONS_SLOT.to_string(), definitions.to_string());
    values.insert(CONNECTIONS_SLOT.to_string(), connections.to_string());

    strfmt(template, &values).map_err(|err| EvalError::Template {
        message: err.to_string(),
    })
}
