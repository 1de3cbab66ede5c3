pub mod access_restrictions;
pub mod arc;
pub mod constants;
pub mod error;
pub mod geopoint;
pub mod graph;
pub mod graph_builder;
pub mod graph_statistics;
pub mod priority_queue;
pub mod road_information;
pub mod routing;
pub mod stopwatch;
pub mod types;
pub mod weighting;

#[cfg(test)]
pub(crate) mod test_graph_utils;
