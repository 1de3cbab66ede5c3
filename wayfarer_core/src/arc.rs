use std::fmt;

use crate::constants::KMH_TO_METERS_PER_SECOND;
use crate::geopoint::GeoPoint;
use crate::graph::Graph;
use crate::road_information::RoadInformation;
use crate::types::{ArcId, NodeId, RoadInformationId};

#[derive(Debug)]
pub(crate) struct ArcData {
    pub(crate) length: f64,
    pub(crate) road_information: RoadInformationId,
    /// Full polyline, from the origin point to the destination point.
    pub(crate) points: Vec<GeoPoint>,
}

/// Backward arcs of two-way roads hold no data of their own, they read
/// through their forward twin with origin and destination swapped.
#[derive(Debug)]
pub(crate) enum ArcKind {
    Forward {
        data: ArcData,
        twin: Option<ArcId>,
    },
    Backward {
        twin: ArcId,
    },
}

#[derive(Debug)]
pub(crate) struct GraphArc {
    pub(crate) origin: NodeId,
    pub(crate) destination: NodeId,
    pub(crate) kind: ArcKind,
}

/// Read-only view of an arc of a [`Graph`].
#[derive(Copy, Clone)]
pub struct ArcRef<'g> {
    graph: &'g Graph,
    id: ArcId,
}

impl<'g> ArcRef<'g> {
    pub(crate) fn new(graph: &'g Graph, id: ArcId) -> Self {
        ArcRef { graph, id }
    }

    fn raw(&self) -> &'g GraphArc {
        &self.graph.arcs[self.id]
    }

    fn data(&self) -> &'g ArcData {
        match &self.raw().kind {
            ArcKind::Forward { data, .. } => data,
            ArcKind::Backward { twin } => match &self.graph.arcs[*twin].kind {
                ArcKind::Forward { data, .. } => data,
                ArcKind::Backward { .. } => unreachable!("backward arc {} twinned with a backward arc", self.id),
            },
        }
    }

    pub fn id(&self) -> ArcId {
        self.id
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn origin(&self) -> NodeId {
        self.raw().origin
    }

    pub fn destination(&self) -> NodeId {
        self.raw().destination
    }

    /// Length in meters.
    pub fn length(&self) -> f64 {
        self.data().length
    }

    pub fn road_information(&self) -> &'g RoadInformation {
        &self.graph.road_informations[self.data().road_information]
    }

    pub fn is_backward(&self) -> bool {
        matches!(self.raw().kind, ArcKind::Backward { .. })
    }

    /// The other direction of the same road, if the road is two-way.
    pub fn reverse(&self) -> Option<ArcRef<'g>> {
        match self.raw().kind {
            ArcKind::Forward { twin, .. } => twin.map(|twin| ArcRef::new(self.graph, twin)),
            ArcKind::Backward { twin } => Some(ArcRef::new(self.graph, twin)),
        }
    }

    /// Polyline of the arc in travel direction, endpoints included.
    pub fn points(&self) -> Vec<GeoPoint> {
        let points = &self.data().points;
        if self.is_backward() {
            points.iter().rev().copied().collect()
        } else {
            points.clone()
        }
    }

    /// Seconds needed to travel the arc at `speed` km/h.
    pub fn travel_time(&self, speed: f64) -> f64 {
        self.length() / (speed * KMH_TO_METERS_PER_SECOND)
    }

    /// Seconds needed to travel the arc at the road speed.
    pub fn minimum_travel_time(&self) -> f64 {
        self.travel_time(self.road_information().speed())
    }
}

impl PartialEq for ArcRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.id == other.id
    }
}

impl Eq for ArcRef<'_> {}

impl fmt::Debug for ArcRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArcRef")
            .field("id", &self.id)
            .field("origin", &self.origin())
            .field("destination", &self.destination())
            .field("length", &self.length())
            .finish()
    }
}
