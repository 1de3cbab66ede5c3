use crate::constants::KMH_TO_METERS_PER_SECOND;
use crate::graph::Graph;
use crate::types::NodeId;
use crate::weighting::{Mode, Weighting};

/// Lower bound of the cost from `node` to `destination`. Estimates must never
/// exceed the real cost for the search to stay optimal.
pub trait AStarHeuristic {
    fn estimate(&self, graph: &Graph, node: NodeId, destination: NodeId) -> f64;
}

pub struct ZeroHeuristic;

impl AStarHeuristic for ZeroHeuristic {
    #[inline(always)]
    fn estimate(&self, _graph: &Graph, _node: NodeId, _destination: NodeId) -> f64 {
        0.0
    }
}

/// Great-circle distance to the destination. In time mode the distance is
/// divided by the highest speed an allowed arc can be travelled at.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GreatCircleHeuristic {
    /// Meters per cost unit: 1 in length mode, a speed in m/s in time mode.
    meters_per_unit: f64,
}

impl GreatCircleHeuristic {
    pub fn length() -> Self {
        GreatCircleHeuristic {
            meters_per_unit: 1.0,
        }
    }

    /// `maximum_speed` in km/h. A speed of zero makes every estimate zero.
    pub fn time(maximum_speed: f64) -> Self {
        let meters_per_unit = if maximum_speed > 0.0 {
            maximum_speed * KMH_TO_METERS_PER_SECOND
        } else {
            f64::INFINITY
        };

        GreatCircleHeuristic { meters_per_unit }
    }

    /// Heuristic matching the mode of `weighting`. In time mode the speed
    /// bound is the lowest of the graph maximum speed and the weighting cap.
    pub fn for_weighting(graph: &Graph, weighting: &dyn Weighting) -> Self {
        match weighting.mode() {
            Mode::Length => Self::length(),
            Mode::Time => {
                let graph_speed = graph.statistics().maximum_speed().unwrap_or(0.0);
                let speed = weighting
                    .maximum_speed()
                    .map_or(graph_speed, |cap| graph_speed.min(cap));
                Self::time(speed)
            }
        }
    }
}

impl AStarHeuristic for GreatCircleHeuristic {
    fn estimate(&self, graph: &Graph, node: NodeId, destination: NodeId) -> f64 {
        let from = graph.node(node).point();
        let to = graph.node(destination).point();

        from.haversine_distance(to) / self.meters_per_unit
    }
}
