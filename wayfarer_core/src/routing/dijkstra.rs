use super::astar_heuristic::ZeroHeuristic;
use super::label_setting::LabelSettingSearch;
use super::shortest_path_algorithm::ShortestPathData;

pub struct Dijkstra;

/// Dijkstra is simply the label-setting search with a zero heuristic
impl Dijkstra {
    #[allow(clippy::new_ret_no_self)]
    pub fn new<'g, 'o>(data: ShortestPathData<'g>) -> LabelSettingSearch<'g, 'o, ZeroHeuristic> {
        LabelSettingSearch::with_name(data, ZeroHeuristic, "Dijkstra")
    }
}
