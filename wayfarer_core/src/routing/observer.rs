use tracing::{info, trace};

use crate::geopoint::GeoPoint;
use crate::graph::Node;
use crate::types::NodeId;

/// Receives the progress of a shortest path search.
///
/// Callbacks come in order: `origin_processed` once, then `node_reached` and
/// `node_marked` as the search goes, then `destination_reached` once if the
/// destination is found.
pub trait ShortestPathObserver {
    fn origin_processed(&mut self, node: &Node);

    /// A node got a finite cost for the first time.
    fn node_reached(&mut self, node: &Node);

    /// The cost of a node is final.
    fn node_marked(&mut self, node: &Node);

    fn destination_reached(&mut self, node: &Node);
}

impl<O> ShortestPathObserver for &mut O
where
    O: ShortestPathObserver + ?Sized,
{
    fn origin_processed(&mut self, node: &Node) {
        (**self).origin_processed(node)
    }

    fn node_reached(&mut self, node: &Node) {
        (**self).node_reached(node)
    }

    fn node_marked(&mut self, node: &Node) {
        (**self).node_marked(node)
    }

    fn destination_reached(&mut self, node: &Node) {
        (**self).destination_reached(node)
    }
}

/// Text observer, writes search progress to the log.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl ShortestPathObserver for TracingObserver {
    fn origin_processed(&mut self, node: &Node) {
        info!(node = node.id(), "origin processed");
    }

    fn node_reached(&mut self, node: &Node) {
        trace!(node = node.id(), "node reached");
    }

    fn node_marked(&mut self, node: &Node) {
        trace!(node = node.id(), "node marked");
    }

    fn destination_reached(&mut self, node: &Node) {
        info!(node = node.id(), "destination reached");
    }
}

/// Collects the points touched by a search, for drawing.
#[derive(Debug, Default)]
pub struct PointCollector {
    origin: Option<GeoPoint>,
    destination: Option<GeoPoint>,
    reached: Vec<GeoPoint>,
    marked: Vec<GeoPoint>,
}

impl PointCollector {
    pub fn origin(&self) -> Option<GeoPoint> {
        self.origin
    }

    pub fn destination(&self) -> Option<GeoPoint> {
        self.destination
    }

    pub fn reached(&self) -> &[GeoPoint] {
        &self.reached
    }

    pub fn marked(&self) -> &[GeoPoint] {
        &self.marked
    }
}

impl ShortestPathObserver for PointCollector {
    fn origin_processed(&mut self, node: &Node) {
        self.origin = Some(*node.point());
    }

    fn node_reached(&mut self, node: &Node) {
        self.reached.push(*node.point());
    }

    fn node_marked(&mut self, node: &Node) {
        self.marked.push(*node.point());
    }

    fn destination_reached(&mut self, node: &Node) {
        self.destination = Some(*node.point());
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchEvent {
    OriginProcessed(NodeId),
    NodeReached(NodeId),
    NodeMarked(NodeId),
    DestinationReached(NodeId),
}

/// Keeps every event in order.
#[derive(Debug, Default)]
pub struct EventRecorder {
    events: Vec<SearchEvent>,
}

impl EventRecorder {
    pub fn events(&self) -> &[SearchEvent] {
        &self.events
    }
}

impl ShortestPathObserver for EventRecorder {
    fn origin_processed(&mut self, node: &Node) {
        self.events.push(SearchEvent::OriginProcessed(node.id()));
    }

    fn node_reached(&mut self, node: &Node) {
        self.events.push(SearchEvent::NodeReached(node.id()));
    }

    fn node_marked(&mut self, node: &Node) {
        self.events.push(SearchEvent::NodeMarked(node.id()));
    }

    fn destination_reached(&mut self, node: &Node) {
        self.events.push(SearchEvent::DestinationReached(node.id()));
    }
}

/// Observers attached to one algorithm run.
#[derive(Default)]
pub(crate) struct Observers<'o> {
    observers: Vec<Box<dyn ShortestPathObserver + 'o>>,
}

impl<'o> Observers<'o> {
    pub(crate) fn push(&mut self, observer: Box<dyn ShortestPathObserver + 'o>) {
        self.observers.push(observer);
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }

    pub(crate) fn notify_origin_processed(&mut self, node: &Node) {
        self.observers
            .iter_mut()
            .for_each(|observer| observer.origin_processed(node));
    }

    pub(crate) fn notify_node_reached(&mut self, node: &Node) {
        self.observers
            .iter_mut()
            .for_each(|observer| observer.node_reached(node));
    }

    pub(crate) fn notify_node_marked(&mut self, node: &Node) {
        self.observers
            .iter_mut()
            .for_each(|observer| observer.node_marked(node));
    }

    pub(crate) fn notify_destination_reached(&mut self, node: &Node) {
        self.observers
            .iter_mut()
            .for_each(|observer| observer.destination_reached(node));
    }
}
