use std::cmp::Ordering;

use crate::priority_queue::HeapItem;
use crate::types::{ArcId, NodeId};

/// Search state of one node during one run.
///
/// `estimate` is the heuristic cost from the node to the destination. It is
/// fixed when the label is created and is zero for plain Dijkstra.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    node: NodeId,
    cost: f64,
    estimate: f64,
    parent_arc: Option<ArcId>,
    marked: bool,
    in_heap: bool,
}

impl Label {
    pub fn new(node: NodeId, estimate: f64) -> Self {
        Label {
            node,
            cost: f64::INFINITY,
            estimate,
            parent_arc: None,
            marked: false,
            in_heap: false,
        }
    }

    pub fn origin(node: NodeId, estimate: f64) -> Self {
        Label {
            cost: 0.0,
            ..Label::new(node, estimate)
        }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Best cost found so far from the origin.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn estimate(&self) -> f64 {
        self.estimate
    }

    pub fn total_cost(&self) -> f64 {
        self.cost + self.estimate
    }

    pub fn parent_arc(&self) -> Option<ArcId> {
        self.parent_arc
    }

    pub fn is_marked(&self) -> bool {
        self.marked
    }

    pub fn is_in_heap(&self) -> bool {
        self.in_heap
    }

    pub(crate) fn mark(&mut self) {
        self.marked = true;
    }

    pub(crate) fn set_in_heap(&mut self, in_heap: bool) {
        self.in_heap = in_heap;
    }

    pub(crate) fn update(&mut self, cost: f64, parent_arc: ArcId) {
        self.cost = cost;
        self.parent_arc = Some(parent_arc);
    }

    pub(crate) fn entry(&self) -> LabelEntry {
        LabelEntry {
            node: self.node,
            total_cost: self.total_cost(),
            estimate: self.estimate,
        }
    }
}

/// Snapshot of a label's priority, stored in the heap.
#[derive(Copy, Clone, Debug)]
pub(crate) struct LabelEntry {
    node: NodeId,
    total_cost: f64,
    estimate: f64,
}

impl LabelEntry {
    pub(crate) fn node(&self) -> NodeId {
        self.node
    }
}

impl PartialEq for LabelEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for LabelEntry {}

impl PartialOrd for LabelEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LabelEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // On equal totals, the label closer to the destination comes first
        self.total_cost
            .total_cmp(&other.total_cost)
            .then_with(|| self.estimate.total_cmp(&other.estimate))
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl HeapItem for LabelEntry {
    fn heap_key(&self) -> usize {
        self.node
    }
}
