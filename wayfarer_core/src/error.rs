use thiserror::Error;

use crate::types::{ArcId, NodeId, RoadInformationId};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PriorityQueueError {
    #[error("Priority queue is empty")]
    EmptyQueue,
    #[error("Element {0} is not in the priority queue")]
    ElementNotFound(usize),
    #[error("Element {0} already exists in the priority queue")]
    ElementAlreadyExists(usize),
}

#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("Node {0} does not exist in the graph")]
    UnknownNode(NodeId),
    #[error("Road information {0} does not exist in the graph")]
    UnknownRoadInformation(RoadInformationId),
    #[error("Arc from {origin} to {destination} has an invalid length {length}")]
    InvalidLength {
        origin: NodeId,
        destination: NodeId,
        length: f64,
    },
}

#[derive(Error, Debug)]
pub enum PathError {
    #[error("Arc {0} does not belong to the graph")]
    UnknownArc(ArcId),
    #[error("Node {0} does not belong to the graph")]
    UnknownNode(NodeId),
    #[error("Arc at position {index} starts at node {found}, expected node {expected}")]
    NonContiguous {
        index: usize,
        expected: NodeId,
        found: NodeId,
    },
    #[error("A path cannot be built from an empty list of arcs")]
    NoArcs,
    #[error("No arc links node {origin} to node {destination}")]
    NoArcBetween { origin: NodeId, destination: NodeId },
    #[error("Path belongs to graph '{found}', expected graph '{expected}'")]
    GraphMismatch { expected: String, found: String },
    #[error("Failed to (de)serialize path record")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum RoutingError {
    #[error("Node {0} is not a valid node of the graph")]
    InvalidNode(NodeId),
    #[error("Node {0} has no label")]
    MissingLabel(NodeId),
    #[error("Predecessor chain of node {0} does not lead back to the origin")]
    PredecessorCycle(NodeId),
    #[error(transparent)]
    Queue(#[from] PriorityQueueError),
    #[error(transparent)]
    Path(#[from] PathError),
}
