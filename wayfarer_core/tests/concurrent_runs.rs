mod test_utils;

use rayon::prelude::*;
use wayfarer_core::{
    routing::{
        astar::AStar,
        bellman_ford::BellmanFord,
        dijkstra::Dijkstra,
        shortest_path_algorithm::{ShortestPathAlgorithm, ShortestPathData},
    },
    types::ArcId,
    weighting::find_weighting_profile,
};

use test_utils::{random_graph, random_pairs};

fn dijkstra_arcs(data: ShortestPathData<'_>) -> Option<Vec<ArcId>> {
    Dijkstra::new(data)
        .run()
        .unwrap()
        .path()
        .map(|path| path.arc_ids().to_vec())
}

#[test]
fn test_parallel_runs_match_sequential_runs() {
    let graph = random_graph(21, 120, 320);
    let profile = find_weighting_profile("fastest").unwrap();
    let pairs = random_pairs(22, graph.node_count(), 200);

    let sequential: Vec<_> = pairs
        .iter()
        .map(|&(origin, destination)| {
            dijkstra_arcs(ShortestPathData::new(
                &graph,
                origin,
                destination,
                profile.weighting(),
            ))
        })
        .collect();

    let parallel: Vec<_> = pairs
        .par_iter()
        .map(|&(origin, destination)| {
            dijkstra_arcs(ShortestPathData::new(
                &graph,
                origin,
                destination,
                profile.weighting(),
            ))
        })
        .collect();

    assert_eq!(sequential, parallel);
}

#[test]
fn test_algorithms_race_on_same_query() {
    let graph = random_graph(5, 100, 260);
    let profile = find_weighting_profile("shortest-car").unwrap();

    for (origin, destination) in random_pairs(6, graph.node_count(), 30) {
        let data = ShortestPathData::new(&graph, origin, destination, profile.weighting());

        let ((dijkstra, astar), bellman_ford) = rayon::join(
            || {
                rayon::join(
                    || Dijkstra::new(data).run().unwrap().cost(),
                    || AStar::new(data).run().unwrap().cost(),
                )
            },
            || BellmanFord::new(data).run().unwrap().cost(),
        );

        match (dijkstra, astar, bellman_ford) {
            (Some(dijkstra), Some(astar), Some(bellman_ford)) => {
                assert!((dijkstra - astar).abs() < 1e-6);
                assert!((dijkstra - bellman_ford).abs() < 1e-6);
            }
            (None, None, None) => {}
            other => panic!("algorithms disagree on {origin} -> {destination}: {other:?}"),
        }
    }
}
