use super::astar_heuristic::{AStarHeuristic, GreatCircleHeuristic};
use super::label_setting::LabelSettingSearch;
use super::shortest_path_algorithm::ShortestPathData;

/// https://en.wikipedia.org/wiki/A*_search_algorithm
pub type AStar<'g, 'o, H> = LabelSettingSearch<'g, 'o, H>;

impl<'g> AStar<'g, '_, GreatCircleHeuristic> {
    /// A* guided by the great-circle distance, scaled to the mode of the
    /// weighting.
    pub fn new(data: ShortestPathData<'g>) -> Self {
        let heuristic = GreatCircleHeuristic::for_weighting(data.graph(), data.weighting());
        Self::with_heuristic(data, heuristic)
    }
}

impl<'g, H> AStar<'g, '_, H>
where
    H: AStarHeuristic,
{
    /// The heuristic must never overestimate the remaining cost, or the
    /// returned path may not be the shortest.
    pub fn with_heuristic(data: ShortestPathData<'g>, heuristic: H) -> Self {
        LabelSettingSearch::with_name(data, heuristic, "A*")
    }
}
