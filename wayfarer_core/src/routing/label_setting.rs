use tracing::debug;

use crate::error::RoutingError;
use crate::priority_queue::BinaryHeap;
use crate::stopwatch::Stopwatch;

use super::astar_heuristic::AStarHeuristic;
use super::label::{Label, LabelEntry};
use super::observer::{Observers, ShortestPathObserver};
use super::path::Path;
use super::shortest_path_algorithm::{
    SearchStatistics, ShortestPathAlgorithm, ShortestPathData, ShortestPathSolution,
};

/// Label-setting search ordered by realized cost plus a heuristic estimate.
///
/// With a zero heuristic this is Dijkstra, with an admissible one it is A*.
/// Labels and heap are allocated per run, so one graph can be searched by
/// several runs at the same time.
pub struct LabelSettingSearch<'g, 'o, H>
where
    H: AStarHeuristic,
{
    data: ShortestPathData<'g>,
    heuristic: H,
    name: &'static str,
    observers: Observers<'o>,
}

impl<'g, 'o, H> LabelSettingSearch<'g, 'o, H>
where
    H: AStarHeuristic,
{
    pub(crate) fn with_name(data: ShortestPathData<'g>, heuristic: H, name: &'static str) -> Self {
        LabelSettingSearch {
            data,
            heuristic,
            name,
            observers: Observers::default(),
        }
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    fn search(&mut self) -> Result<ShortestPathSolution<'g>, RoutingError> {
        self.data.validate()?;

        let stopwatch = Stopwatch::new(self.name);
        let graph = self.data.graph();
        let weighting = self.data.weighting();
        let origin = self.data.origin();
        let destination = self.data.destination();

        let mut labels: Vec<Option<Label>> = vec![None; graph.node_count()];
        let mut heap: BinaryHeap<LabelEntry> = BinaryHeap::with_capacity(graph.node_count());
        let mut statistics = SearchStatistics::default();

        let mut origin_label =
            Label::origin(origin, self.heuristic.estimate(graph, origin, destination));
        heap.insert(origin_label.entry())?;
        origin_label.set_in_heap(true);
        labels[origin] = Some(origin_label);
        self.observers.notify_origin_processed(graph.node(origin));

        let mut found = false;
        while !heap.is_empty() {
            let node = heap.delete_min()?.node();
            statistics.iterations += 1;

            let label = labels[node]
                .as_mut()
                .ok_or(RoutingError::MissingLabel(node))?;
            label.set_in_heap(false);
            label.mark();
            let cost = label.cost();

            statistics.marked_nodes += 1;
            self.observers.notify_node_marked(graph.node(node));

            if node == destination {
                found = true;
                break;
            }

            for arc in graph.outgoing_arcs(node) {
                if !weighting.is_allowed(arc) {
                    continue;
                }

                let successor = arc.destination();
                if labels[successor].is_none() {
                    statistics.reached_nodes += 1;
                    self.observers.notify_node_reached(graph.node(successor));

                    let estimate = self.heuristic.estimate(graph, successor, destination);
                    labels[successor] = Some(Label::new(successor, estimate));
                }

                let label = labels[successor]
                    .as_mut()
                    .ok_or(RoutingError::MissingLabel(successor))?;
                if label.is_marked() {
                    continue;
                }

                let candidate = cost + weighting.cost(arc);
                if candidate < label.cost() {
                    if label.is_in_heap() {
                        heap.remove(&label.entry())?;
                    }
                    label.update(candidate, arc.id());
                    heap.insert(label.entry())?;
                    label.set_in_heap(true);
                }
            }
        }

        debug!(
            algorithm = self.name,
            iterations = statistics.iterations,
            reached = statistics.reached_nodes,
            marked = statistics.marked_nodes,
            found,
            "label-setting search finished"
        );

        if !found {
            stopwatch.report();
            return Ok(ShortestPathSolution::infeasible(
                self.data,
                self.name,
                stopwatch.elapsed(),
                statistics,
            ));
        }

        self.observers
            .notify_destination_reached(graph.node(destination));

        let path = Path::from_predecessors(graph, origin, destination, |node| {
            labels[node].as_ref().and_then(Label::parent_arc)
        })?;
        let cost = labels[destination]
            .as_ref()
            .map(Label::cost)
            .ok_or(RoutingError::MissingLabel(destination))?;

        stopwatch.report();

        Ok(ShortestPathSolution::optimal(
            self.data,
            self.name,
            stopwatch.elapsed(),
            statistics,
            path,
            cost,
        ))
    }
}

impl<'g, 'o, H> ShortestPathAlgorithm<'g, 'o> for LabelSettingSearch<'g, 'o, H>
where
    H: AStarHeuristic,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn data(&self) -> &ShortestPathData<'g> {
        &self.data
    }

    fn add_observer(&mut self, observer: Box<dyn ShortestPathObserver + 'o>) {
        self.observers.push(observer);
    }

    fn run(&mut self) -> Result<ShortestPathSolution<'g>, RoutingError> {
        debug!(
            algorithm = self.name,
            origin = self.data.origin(),
            destination = self.data.destination(),
            mode = %self.data.mode(),
            observers = self.observers.len(),
            "running shortest path search"
        );

        self.search()
    }
}
