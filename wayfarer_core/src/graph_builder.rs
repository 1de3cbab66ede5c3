use fxhash::FxHashMap;

use crate::arc::{ArcData, ArcKind, GraphArc};
use crate::error::GraphError;
use crate::geopoint::{GeoPoint, compute_geometry_distance};
use crate::graph::{Graph, Node};
use crate::road_information::RoadInformation;
use crate::types::{ArcId, NodeId, RoadInformationId};

/// Arcs created for one road by [`GraphBuilder::add_road`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RoadArcs {
    pub forward: ArcId,
    pub backward: Option<ArcId>,
}

/// Construction API for [`Graph`]. Map readers feed nodes, road information
/// and roads, then call [`GraphBuilder::build`].
pub struct GraphBuilder {
    id: String,
    name: String,
    nodes: Vec<Node>,
    arcs: Vec<GraphArc>,
    road_informations: Vec<RoadInformation>,
    interned: FxHashMap<RoadInformation, RoadInformationId>,
}

impl GraphBuilder {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        GraphBuilder {
            id: id.into(),
            name: name.into(),
            nodes: Vec::new(),
            arcs: Vec::new(),
            road_informations: Vec::new(),
            interned: FxHashMap::default(),
        }
    }

    pub fn with_capacity(
        id: impl Into<String>,
        name: impl Into<String>,
        nodes: usize,
        arcs: usize,
    ) -> Self {
        let mut builder = GraphBuilder::new(id, name);
        builder.nodes.reserve_exact(nodes);
        builder.arcs.reserve_exact(arcs);
        builder
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn add_node(&mut self, point: GeoPoint) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::new(id, point));
        id
    }

    /// Returns the id of an identical record if one was already added.
    pub fn add_road_information(&mut self, road_information: RoadInformation) -> RoadInformationId {
        if let Some(&id) = self.interned.get(&road_information) {
            return id;
        }

        let id = self.road_informations.len();
        self.road_informations.push(road_information.clone());
        self.interned.insert(road_information, id);
        id
    }

    /// Adds a single directed arc. `length` defaults to the length of the
    /// polyline through `intermediate_points`.
    pub fn add_arc(
        &mut self,
        origin: NodeId,
        destination: NodeId,
        road_information: RoadInformationId,
        intermediate_points: Vec<GeoPoint>,
        length: Option<f64>,
    ) -> Result<ArcId, GraphError> {
        let data = self.arc_data(
            origin,
            destination,
            road_information,
            intermediate_points,
            length,
        )?;

        Ok(self.push_arc(GraphArc {
            origin,
            destination,
            kind: ArcKind::Forward { data, twin: None },
        }))
    }

    /// Adds a road. Two-way roads get a backward arc sharing the data of the
    /// forward one.
    pub fn add_road(
        &mut self,
        origin: NodeId,
        destination: NodeId,
        road_information: RoadInformationId,
        intermediate_points: Vec<GeoPoint>,
        length: Option<f64>,
    ) -> Result<RoadArcs, GraphError> {
        let forward = self.add_arc(
            origin,
            destination,
            road_information,
            intermediate_points,
            length,
        )?;

        if self.road_informations[road_information].is_one_way() {
            return Ok(RoadArcs {
                forward,
                backward: None,
            });
        }

        let backward = self.push_arc(GraphArc {
            origin: destination,
            destination: origin,
            kind: ArcKind::Backward { twin: forward },
        });

        if let ArcKind::Forward { twin, .. } = &mut self.arcs[forward].kind {
            *twin = Some(backward);
        }

        Ok(RoadArcs {
            forward,
            backward: Some(backward),
        })
    }

    pub fn build(self) -> Graph {
        Graph::new(
            self.id,
            self.name,
            self.nodes,
            self.arcs,
            self.road_informations,
        )
    }

    fn push_arc(&mut self, arc: GraphArc) -> ArcId {
        let id = self.arcs.len();
        self.nodes[arc.origin].push_arc(id);
        self.arcs.push(arc);
        id
    }

    fn arc_data(
        &self,
        origin: NodeId,
        destination: NodeId,
        road_information: RoadInformationId,
        intermediate_points: Vec<GeoPoint>,
        length: Option<f64>,
    ) -> Result<ArcData, GraphError> {
        let origin_point = *self
            .nodes
            .get(origin)
            .ok_or(GraphError::UnknownNode(origin))?
            .point();
        let destination_point = *self
            .nodes
            .get(destination)
            .ok_or(GraphError::UnknownNode(destination))?
            .point();

        if road_information >= self.road_informations.len() {
            return Err(GraphError::UnknownRoadInformation(road_information));
        }

        let mut points = Vec::with_capacity(intermediate_points.len() + 2);
        points.push(origin_point);
        points.extend(intermediate_points);
        points.push(destination_point);

        let length = length.unwrap_or_else(|| compute_geometry_distance(&points));
        if !length.is_finite() || length < 0.0 {
            return Err(GraphError::InvalidLength {
                origin,
                destination,
                length,
            });
        }

        Ok(ArcData {
            length,
            road_information,
            points,
        })
    }
}
