use geo_types::{Rect, coord};

use crate::graph::Graph;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphStatistics {
    bounding_box: Option<Rect<f64>>,
    node_count: usize,
    arc_count: usize,
    one_way_road_count: usize,
    two_way_road_count: usize,
    maximum_speed: Option<f64>,
    maximum_length: f64,
    total_length: f64,
}

impl GraphStatistics {
    pub(crate) fn compute(graph: &Graph) -> Self {
        let mut statistics = GraphStatistics {
            node_count: graph.node_count(),
            arc_count: graph.arc_count(),
            ..Default::default()
        };

        let mut points = graph.nodes().iter().map(|node| node.point());
        if let Some(first) = points.next() {
            let (mut min_x, mut min_y, mut max_x, mut max_y) =
                (first.lng, first.lat, first.lng, first.lat);
            for point in points {
                min_x = min_x.min(point.lng);
                min_y = min_y.min(point.lat);
                max_x = max_x.max(point.lng);
                max_y = max_y.max(point.lat);
            }
            statistics.bounding_box = Some(Rect::new(
                coord! { x: min_x, y: min_y },
                coord! { x: max_x, y: max_y },
            ));
        }

        for arc in graph.arcs() {
            let speed = arc.road_information().speed();
            if speed > statistics.maximum_speed.unwrap_or(0.0) {
                statistics.maximum_speed = Some(speed);
            }

            statistics.maximum_length = statistics.maximum_length.max(arc.length());

            // Count each physical road once, from its forward arc
            if arc.is_backward() {
                continue;
            }

            statistics.total_length += arc.length();
            if arc.reverse().is_some() {
                statistics.two_way_road_count += 1;
            } else {
                statistics.one_way_road_count += 1;
            }
        }

        statistics
    }

    pub fn bounding_box(&self) -> Option<Rect<f64>> {
        self.bounding_box
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn arc_count(&self) -> usize {
        self.arc_count
    }

    pub fn one_way_road_count(&self) -> usize {
        self.one_way_road_count
    }

    pub fn two_way_road_count(&self) -> usize {
        self.two_way_road_count
    }

    /// Highest road speed of the graph in km/h, `None` if no arc can be driven.
    pub fn maximum_speed(&self) -> Option<f64> {
        self.maximum_speed
    }

    pub fn maximum_length(&self) -> f64 {
        self.maximum_length
    }

    /// Sum of the lengths of all roads, two-way roads counted once.
    pub fn total_length(&self) -> f64 {
        self.total_length
    }
}
