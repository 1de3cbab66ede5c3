use std::fmt;
use std::time::Duration;

use crate::error::RoutingError;
use crate::graph::Graph;
use crate::types::NodeId;
use crate::weighting::{Mode, Weighting};

use super::observer::ShortestPathObserver;
use super::path::Path;

/// Input of a shortest path run.
#[derive(Clone, Copy)]
pub struct ShortestPathData<'g> {
    graph: &'g Graph,
    origin: NodeId,
    destination: NodeId,
    weighting: &'g dyn Weighting,
}

impl<'g> ShortestPathData<'g> {
    pub fn new(
        graph: &'g Graph,
        origin: NodeId,
        destination: NodeId,
        weighting: &'g dyn Weighting,
    ) -> Self {
        ShortestPathData {
            graph,
            origin,
            destination,
            weighting,
        }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn origin(&self) -> NodeId {
        self.origin
    }

    pub fn destination(&self) -> NodeId {
        self.destination
    }

    pub fn weighting(&self) -> &'g dyn Weighting {
        self.weighting
    }

    pub fn mode(&self) -> Mode {
        self.weighting.mode()
    }

    pub(crate) fn validate(&self) -> Result<(), RoutingError> {
        for node in [self.origin, self.destination] {
            if !self.graph.contains_node(node) {
                return Err(RoutingError::InvalidNode(node));
            }
        }

        Ok(())
    }
}

impl fmt::Debug for ShortestPathData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortestPathData")
            .field("graph", &self.graph.id())
            .field("origin", &self.origin)
            .field("destination", &self.destination)
            .field("mode", &self.mode())
            .finish()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Unknown,
    Infeasible,
    Feasible,
    Optimal,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Heap pops for label-setting searches, full passes for Bellman-Ford.
    pub iterations: usize,
    pub reached_nodes: usize,
    pub marked_nodes: usize,
}

/// Result of a run. `path` and `cost` are set only for feasible runs.
#[derive(Clone, Debug)]
pub struct ShortestPathSolution<'g> {
    data: ShortestPathData<'g>,
    algorithm: &'static str,
    status: Status,
    solving_time: Duration,
    path: Option<Path<'g>>,
    cost: Option<f64>,
    statistics: SearchStatistics,
}

impl<'g> ShortestPathSolution<'g> {
    pub(crate) fn infeasible(
        data: ShortestPathData<'g>,
        algorithm: &'static str,
        solving_time: Duration,
        statistics: SearchStatistics,
    ) -> Self {
        ShortestPathSolution {
            data,
            algorithm,
            status: Status::Infeasible,
            solving_time,
            path: None,
            cost: None,
            statistics,
        }
    }

    pub(crate) fn optimal(
        data: ShortestPathData<'g>,
        algorithm: &'static str,
        solving_time: Duration,
        statistics: SearchStatistics,
        path: Path<'g>,
        cost: f64,
    ) -> Self {
        ShortestPathSolution {
            data,
            algorithm,
            status: Status::Optimal,
            solving_time,
            path: Some(path),
            cost: Some(cost),
            statistics,
        }
    }

    pub fn data(&self) -> &ShortestPathData<'g> {
        &self.data
    }

    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_feasible(&self) -> bool {
        matches!(self.status, Status::Feasible | Status::Optimal)
    }

    pub fn solving_time(&self) -> Duration {
        self.solving_time
    }

    pub fn path(&self) -> Option<&Path<'g>> {
        self.path.as_ref()
    }

    /// Cost of the path under the weighting of the run, in meters or seconds.
    pub fn cost(&self) -> Option<f64> {
        self.cost
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }
}

impl fmt::Display for ShortestPathSolution<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let origin = self.data.origin();
        let destination = self.data.destination();

        match (&self.path, self.cost) {
            (Some(path), Some(cost)) => {
                let cost = match self.data.mode() {
                    Mode::Length => format!("{:.2} meters", cost),
                    Mode::Time => format!("{:.2} seconds", cost),
                };
                write!(
                    f,
                    "{}: found a path from node #{} to node #{}, {} ({} arcs) in {:?}",
                    self.algorithm,
                    origin,
                    destination,
                    cost,
                    path.arc_ids().len(),
                    self.solving_time
                )
            }
            _ => write!(
                f,
                "{}: no path from node #{} to node #{} ({:?}) in {:?}",
                self.algorithm, origin, destination, self.status, self.solving_time
            ),
        }
    }
}

/// A shortest path algorithm bound to one [`ShortestPathData`].
///
/// `'g` is the lifetime of the graph and weighting, `'o` the lifetime of the
/// attached observers.
pub trait ShortestPathAlgorithm<'g, 'o> {
    fn name(&self) -> &'static str;

    fn data(&self) -> &ShortestPathData<'g>;

    /// Observers must be added before [`ShortestPathAlgorithm::run`].
    fn add_observer(&mut self, observer: Box<dyn ShortestPathObserver + 'o>);

    fn run(&mut self) -> Result<ShortestPathSolution<'g>, RoutingError>;
}
