pub mod astar;
pub mod astar_heuristic;
pub mod bellman_ford;
pub mod dijkstra;
pub mod label;
mod label_setting;
pub mod observer;
pub mod path;
pub mod path_record;
pub mod shortest_path_algorithm;

pub use label_setting::LabelSettingSearch;
