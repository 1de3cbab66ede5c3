use tracing::debug;

use crate::error::RoutingError;
use crate::stopwatch::Stopwatch;
use crate::types::ArcId;

use super::observer::{Observers, ShortestPathObserver};
use super::path::Path;
use super::shortest_path_algorithm::{
    SearchStatistics, ShortestPathAlgorithm, ShortestPathData, ShortestPathSolution,
};

/// https://en.wikipedia.org/wiki/Bellman%E2%80%93Ford_algorithm
///
/// Relaxes every allowed arc at most once per node, and stops as soon as a
/// full pass improves nothing. Negative cycles are not detected. Nodes are
/// never settled, so observers get no `node_marked` call.
pub struct BellmanFord<'g, 'o> {
    data: ShortestPathData<'g>,
    observers: Observers<'o>,
}

impl<'g> BellmanFord<'g, '_> {
    pub fn new(data: ShortestPathData<'g>) -> Self {
        BellmanFord {
            data,
            observers: Observers::default(),
        }
    }
}

impl<'g, 'o> ShortestPathAlgorithm<'g, 'o> for BellmanFord<'g, 'o> {
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn data(&self) -> &ShortestPathData<'g> {
        &self.data
    }

    fn add_observer(&mut self, observer: Box<dyn ShortestPathObserver + 'o>) {
        self.observers.push(observer);
    }

    fn run(&mut self) -> Result<ShortestPathSolution<'g>, RoutingError> {
        self.data.validate()?;

        let stopwatch = Stopwatch::new(self.name());
        let graph = self.data.graph();
        let weighting = self.data.weighting();
        let origin = self.data.origin();
        let destination = self.data.destination();

        let mut distances = vec![f64::INFINITY; graph.node_count()];
        let mut predecessors: Vec<Option<ArcId>> = vec![None; graph.node_count()];
        let mut statistics = SearchStatistics::default();

        distances[origin] = 0.0;
        self.observers.notify_origin_processed(graph.node(origin));

        for _ in 0..graph.node_count() {
            statistics.iterations += 1;
            let mut found = false;

            for node in graph.nodes() {
                let distance = distances[node.id()];
                if distance == f64::INFINITY {
                    continue;
                }

                for arc in graph.outgoing_arcs(node.id()) {
                    if !weighting.is_allowed(arc) {
                        continue;
                    }

                    let successor = arc.destination();
                    let candidate = distance + weighting.cost(arc);
                    if candidate < distances[successor] {
                        if distances[successor] == f64::INFINITY {
                            statistics.reached_nodes += 1;
                            self.observers.notify_node_reached(graph.node(successor));
                        }

                        distances[successor] = candidate;
                        predecessors[successor] = Some(arc.id());
                        found = true;
                    }
                }
            }

            if !found {
                break;
            }
        }

        let feasible = destination == origin || predecessors[destination].is_some();

        debug!(
            algorithm = self.name(),
            passes = statistics.iterations,
            reached = statistics.reached_nodes,
            feasible,
            "label-correcting search finished"
        );

        if !feasible {
            stopwatch.report();
            return Ok(ShortestPathSolution::infeasible(
                self.data,
                self.name(),
                stopwatch.elapsed(),
                statistics,
            ));
        }

        self.observers
            .notify_destination_reached(graph.node(destination));

        let path = Path::from_predecessors(graph, origin, destination, |node| predecessors[node])?;

        stopwatch.report();

        Ok(ShortestPathSolution::optimal(
            self.data,
            self.name(),
            stopwatch.elapsed(),
            statistics,
            path,
            distances[destination],
        ))
    }
}
