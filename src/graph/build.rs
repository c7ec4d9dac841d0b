//! Adjacency-list construction from diagram nodes and edges.

use std::collections::HashMap;

use crate::diagram::{DiagramNode, Edge, NodeId};
use crate::errors::EvalError;

/// Adjacency-list graph representation: `adj[v]` holds the successors of `v`.
pub type AdjacencyList = Vec<Vec<usize>>;

/// Bijection from node identity to a dense index in `[0, N)`.
///
/// Built once per export and shared by every derived graph, so index
/// assignment stays stable for the duration of the call.
pub struct NodeIndexMap {
    indices: HashMap<NodeId, usize>,
}

impl NodeIndexMap {
    /// Assigns each node its position within `nodes`.
    pub fn new(nodes: &[DiagramNode]) -> Self {
        let indices = nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (node.id(), index))
            .collect();
        Self { indices }
    }

    /// Number of mapped nodes.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True when no nodes are mapped.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Resolves a node ID to its dense index.
    ///
    /// A miss means an edge references a node outside the snapshot — a
    /// caller bug, not a diagram error.
    pub fn index_of(&self, id: NodeId) -> Result<usize, EvalError> {
        self.indices.get(&id).copied().ok_or(EvalError::UnknownNode)
    }
}

/// Builds an adjacency-list graph from the given nodes and edges.
///
/// Each edge appends `index(end)` to the entry of `index(start)`; with
/// `bidirectional` set the reverse direction is added as well (that view is
/// only meaningful for connectivity checking). Nodes without incident edges
/// keep empty entries, so the output length always equals the node count.
pub fn adjacency(
    nodes: &[DiagramNode],
    edges: &[Edge],
    mapping: &NodeIndexMap,
    bidirectional: bool,
) -> Result<AdjacencyList, EvalError> {
    let mut graph: AdjacencyList = vec![Vec::new(); nodes.len()];

    for edge in edges {
        let start = mapping.index_of(edge.start())?;
        let end = mapping.index_of(edge.end())?;

        graph[start].push(end);
        if bidirectional {
            graph[end].push(start);
        }
    }

    Ok(graph)
}
