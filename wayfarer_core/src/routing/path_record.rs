use serde::{Deserialize, Serialize};

use crate::error::PathError;
use crate::graph::Graph;
use crate::types::NodeId;
use crate::weighting::Mode;

use super::path::Path;

/// Node list form of a [`Path`], bound to the graph it was computed on.
///
/// `destination` is `None` only for a path made of a single node and no arc.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRecord {
    pub graph_id: String,
    pub origin: NodeId,
    pub destination: Option<NodeId>,
    pub intermediate_nodes: Vec<NodeId>,
}

impl PathRecord {
    /// `None` for an empty path.
    pub fn from_path(path: &Path<'_>) -> Option<Self> {
        let nodes = path.nodes();
        let (&origin, rest) = nodes.split_first()?;
        let (destination, intermediate_nodes) = match rest.split_last() {
            Some((&destination, intermediate)) => (Some(destination), intermediate.to_vec()),
            None => (None, Vec::new()),
        };

        Some(PathRecord {
            graph_id: path.graph().id().to_string(),
            origin,
            destination,
            intermediate_nodes,
        })
    }

    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes = Vec::with_capacity(self.intermediate_nodes.len() + 2);
        nodes.push(self.origin);
        nodes.extend_from_slice(&self.intermediate_nodes);
        nodes.extend(self.destination);
        nodes
    }

    /// Rebuilds the path on `graph`, choosing shortest or fastest arcs
    /// between consecutive nodes according to `mode`.
    pub fn to_path<'g>(&self, graph: &'g Graph, mode: Mode) -> Result<Path<'g>, PathError> {
        if graph.id() != self.graph_id {
            return Err(PathError::GraphMismatch {
                expected: graph.id().to_string(),
                found: self.graph_id.clone(),
            });
        }

        let nodes = self.nodes();
        match mode {
            Mode::Length => Path::from_nodes_shortest(graph, &nodes),
            Mode::Time => Path::from_nodes_fastest(graph, &nodes),
        }
    }

    pub fn to_json(&self) -> Result<String, PathError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, PathError> {
        Ok(serde_json::from_str(json)?)
    }
}
