use std::cell::OnceCell;
use std::fmt;

use crate::arc::ArcRef;
use crate::error::{PathError, RoutingError};
use crate::graph::Graph;
use crate::types::{ArcId, NodeId};
use crate::weighting::Weighting;

/// Sequence of contiguous arcs of one graph. A path may also be empty, or be
/// made of a single node and no arc.
#[derive(Clone)]
pub struct Path<'g> {
    graph: &'g Graph,
    origin: Option<NodeId>,
    arcs: Vec<ArcId>,

    length: OnceCell<f64>,
    minimum_travel_time: OnceCell<f64>,
}

impl<'g> Path<'g> {
    pub fn empty(graph: &'g Graph) -> Self {
        Path {
            graph,
            origin: None,
            arcs: Vec::new(),
            length: OnceCell::new(),
            minimum_travel_time: OnceCell::new(),
        }
    }

    pub fn single_node(graph: &'g Graph, node: NodeId) -> Result<Self, PathError> {
        if !graph.contains_node(node) {
            return Err(PathError::UnknownNode(node));
        }

        Ok(Path {
            origin: Some(node),
            ..Path::empty(graph)
        })
    }

    pub fn new(graph: &'g Graph, arcs: Vec<ArcId>) -> Result<Self, PathError> {
        let Some(&first) = arcs.first() else {
            return Err(PathError::NoArcs);
        };

        let origin = graph
            .get_arc(first)
            .ok_or(PathError::UnknownArc(first))?
            .origin();

        let mut expected = origin;
        for (index, &arc_id) in arcs.iter().enumerate() {
            let arc = graph.get_arc(arc_id).ok_or(PathError::UnknownArc(arc_id))?;
            if arc.origin() != expected {
                return Err(PathError::NonContiguous {
                    index,
                    expected,
                    found: arc.origin(),
                });
            }
            expected = arc.destination();
        }

        Ok(Path {
            origin: Some(origin),
            arcs,
            ..Path::empty(graph)
        })
    }

    /// Walks predecessor arcs back from `destination` to `origin`.
    pub(crate) fn from_predecessors<F>(
        graph: &'g Graph,
        origin: NodeId,
        destination: NodeId,
        predecessor: F,
    ) -> Result<Self, RoutingError>
    where
        F: Fn(NodeId) -> Option<ArcId>,
    {
        let mut arcs = Vec::new();
        let mut node = destination;

        while node != origin {
            let Some(arc) = predecessor(node) else {
                return Err(RoutingError::PredecessorCycle(destination));
            };
            arcs.push(arc);
            if arcs.len() > graph.node_count() {
                return Err(RoutingError::PredecessorCycle(destination));
            }
            node = graph.arc(arc).origin();
        }

        if arcs.is_empty() {
            return Ok(Path::single_node(graph, origin)?);
        }

        arcs.reverse();
        Ok(Path::new(graph, arcs)?)
    }

    /// Builds a path through `nodes`, taking the shortest arc between each
    /// pair of consecutive nodes.
    pub fn from_nodes_shortest(graph: &'g Graph, nodes: &[NodeId]) -> Result<Self, PathError> {
        Self::from_nodes(graph, nodes, |arc| arc.length())
    }

    /// Builds a path through `nodes`, taking the fastest arc between each
    /// pair of consecutive nodes.
    pub fn from_nodes_fastest(graph: &'g Graph, nodes: &[NodeId]) -> Result<Self, PathError> {
        Self::from_nodes(graph, nodes, |arc| arc.minimum_travel_time())
    }

    fn from_nodes<F>(graph: &'g Graph, nodes: &[NodeId], cost: F) -> Result<Self, PathError>
    where
        F: Fn(&ArcRef<'g>) -> f64,
    {
        match nodes {
            [] => return Ok(Path::empty(graph)),
            [node] => return Path::single_node(graph, *node),
            _ => {}
        }

        let mut arcs = Vec::with_capacity(nodes.len() - 1);
        for pair in nodes.windows(2) {
            let (origin, destination) = (pair[0], pair[1]);
            if !graph.contains_node(origin) {
                return Err(PathError::UnknownNode(origin));
            }
            if !graph.contains_node(destination) {
                return Err(PathError::UnknownNode(destination));
            }

            let best = graph
                .outgoing_arcs(origin)
                .filter(|arc| arc.destination() == destination)
                .min_by(|a, b| cost(a).total_cmp(&cost(b)))
                .ok_or(PathError::NoArcBetween {
                    origin,
                    destination,
                })?;

            arcs.push(best.id());
        }

        Path::new(graph, arcs)
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn is_empty(&self) -> bool {
        self.origin.is_none()
    }

    pub fn origin(&self) -> Option<NodeId> {
        self.origin
    }

    pub fn destination(&self) -> Option<NodeId> {
        match self.arcs.last() {
            Some(&arc) => Some(self.graph.arc(arc).destination()),
            None => self.origin,
        }
    }

    pub fn arc_ids(&self) -> &[ArcId] {
        &self.arcs
    }

    pub fn arcs(&self) -> impl Iterator<Item = ArcRef<'g>> + '_ {
        self.arcs.iter().map(|&arc| self.graph.arc(arc))
    }

    /// Number of nodes on the path.
    pub fn size(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.arcs.len() + 1
        }
    }

    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes = Vec::with_capacity(self.size());
        nodes.extend(self.origin);
        nodes.extend(self.arcs().map(|arc| arc.destination()));
        nodes
    }

    /// Checks that consecutive arcs share a node.
    pub fn is_valid(&self) -> bool {
        let Some(origin) = self.origin else {
            return self.arcs.is_empty();
        };

        let mut expected = origin;
        for arc in self.arcs() {
            if arc.origin() != expected {
                return false;
            }
            expected = arc.destination();
        }

        true
    }

    /// Total length in meters.
    pub fn length(&self) -> f64 {
        *self
            .length
            .get_or_init(|| self.arcs().fold(0.0, |total, arc| total + arc.length()))
    }

    /// Seconds to travel the path at `speed` km/h.
    pub fn travel_time(&self, speed: f64) -> f64 {
        self.arcs()
            .fold(0.0, |total, arc| total + arc.travel_time(speed))
    }

    /// Seconds to travel the path at the speed of each road.
    pub fn minimum_travel_time(&self) -> f64 {
        *self
            .minimum_travel_time
            .get_or_init(|| {
                self.arcs()
                    .fold(0.0, |total, arc| total + arc.minimum_travel_time())
            })
    }

    pub fn cost(&self, weighting: &dyn Weighting) -> f64 {
        self.arcs()
            .fold(0.0, |total, arc| total + weighting.cost(arc))
    }
}

impl fmt::Debug for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Path")
            .field("graph", &self.graph.id())
            .field("origin", &self.origin)
            .field("arcs", &self.arcs)
            .finish()
    }
}
