use std::fmt;

use crate::arc::{ArcRef, GraphArc};
use crate::geopoint::GeoPoint;
use crate::graph_statistics::GraphStatistics;
use crate::road_information::RoadInformation;
use crate::types::{ArcId, NodeId, RoadInformationId};

#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    point: GeoPoint,
    outgoing_arcs: Vec<ArcId>,
}

impl Node {
    pub(crate) fn new(id: NodeId, point: GeoPoint) -> Self {
        Node {
            id,
            point,
            outgoing_arcs: Vec::new(),
        }
    }

    pub(crate) fn push_arc(&mut self, arc: ArcId) {
        self.outgoing_arcs.push(arc);
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn point(&self) -> &GeoPoint {
        &self.point
    }

    pub fn outgoing_arc_ids(&self) -> &[ArcId] {
        &self.outgoing_arcs
    }

    pub fn has_successors(&self) -> bool {
        !self.outgoing_arcs.is_empty()
    }
}

/// Immutable road network. Node ids are the indices of the nodes, arcs are
/// owned by the graph and listed by their origin node.
pub struct Graph {
    id: String,
    name: String,
    nodes: Vec<Node>,
    pub(crate) arcs: Vec<GraphArc>,
    pub(crate) road_informations: Vec<RoadInformation>,
    statistics: GraphStatistics,
}

impl Graph {
    pub(crate) fn new(
        id: String,
        name: String,
        nodes: Vec<Node>,
        arcs: Vec<GraphArc>,
        road_informations: Vec<RoadInformation>,
    ) -> Self {
        let mut graph = Graph {
            id,
            name,
            nodes,
            arcs,
            road_informations,
            statistics: GraphStatistics::default(),
        };
        graph.statistics = GraphStatistics::compute(&graph);
        graph
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        node < self.nodes.len()
    }

    /// Panics if `node` is not a node of this graph, see [`Graph::get_node`].
    pub fn node(&self, node: NodeId) -> &Node {
        &self.nodes[node]
    }

    pub fn get_node(&self, node: NodeId) -> Option<&Node> {
        self.nodes.get(node)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Panics if `arc` is not an arc of this graph, see [`Graph::get_arc`].
    pub fn arc(&self, arc: ArcId) -> ArcRef<'_> {
        assert!(arc < self.arcs.len(), "arc {} out of bounds", arc);
        ArcRef::new(self, arc)
    }

    pub fn get_arc(&self, arc: ArcId) -> Option<ArcRef<'_>> {
        (arc < self.arcs.len()).then(|| ArcRef::new(self, arc))
    }

    pub fn arcs(&self) -> impl Iterator<Item = ArcRef<'_>> {
        (0..self.arcs.len()).map(move |arc| ArcRef::new(self, arc))
    }

    pub fn outgoing_arcs(&self, node: NodeId) -> impl Iterator<Item = ArcRef<'_>> {
        self.nodes[node]
            .outgoing_arcs
            .iter()
            .map(move |&arc| ArcRef::new(self, arc))
    }

    pub fn road_information(&self, id: RoadInformationId) -> Option<&RoadInformation> {
        self.road_informations.get(id)
    }

    pub fn road_information_count(&self) -> usize {
        self.road_informations.len()
    }

    pub fn statistics(&self) -> &GraphStatistics {
        &self.statistics
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("nodes", &self.nodes.len())
            .field("arcs", &self.arcs.len())
            .finish()
    }
}
