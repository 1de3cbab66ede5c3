#![allow(dead_code)]

use rand::{Rng, SeedableRng, rngs::StdRng};
use wayfarer_core::{
    access_restrictions::{AccessMode, AccessRestriction, AccessRestrictions},
    geopoint::GeoPoint,
    graph::Graph,
    graph_builder::GraphBuilder,
    road_information::{RoadInformation, RoadType},
    routing::observer::SearchEvent,
    types::NodeId,
};

fn road_catalog() -> Vec<RoadInformation> {
    vec![
        RoadInformation::new(
            RoadType::Motorway,
            AccessRestrictions::new()
                .with(AccessMode::Motorcar, AccessRestriction::Allowed)
                .with_modes(
                    &[AccessMode::Foot, AccessMode::Bicycle],
                    AccessRestriction::Forbidden,
                ),
            true,
            120,
            "E40",
        ),
        RoadInformation::new(
            RoadType::Primary,
            AccessRestrictions::allowed_for_all(),
            false,
            70,
            "Chaussée de Louvain",
        ),
        RoadInformation::new(
            RoadType::Residential,
            AccessRestrictions::new(),
            false,
            0,
            "Rue Royale",
        ),
        RoadInformation::new(
            RoadType::Residential,
            AccessRestrictions::new(),
            true,
            30,
            "Rue Neuve",
        ),
        RoadInformation::new(
            RoadType::Pedestrian,
            AccessRestrictions::new().with(AccessMode::Motorcar, AccessRestriction::Forbidden),
            false,
            0,
            "Grand-Place",
        ),
        RoadInformation::new(
            RoadType::Track,
            AccessRestrictions::new().with(AccessMode::Motorcar, AccessRestriction::Private),
            false,
            0,
            "",
        ),
        RoadInformation::new(
            RoadType::Coastline,
            AccessRestrictions::new(),
            false,
            0,
            "",
        ),
    ]
}

/// Random road network around Brussels. Road lengths are at least the
/// great-circle distance between their ends, so A* heuristics stay
/// admissible.
pub fn random_graph(seed: u64, nodes: usize, roads: usize) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder =
        GraphBuilder::with_capacity(format!("random-{seed}"), "Random graph", nodes, roads * 2);

    let points: Vec<GeoPoint> = (0..nodes)
        .map(|_| {
            GeoPoint::new(
                rng.random_range(4.30..4.45),
                rng.random_range(50.80..50.90),
            )
        })
        .collect();
    for point in &points {
        builder.add_node(*point);
    }

    let road_informations: Vec<_> = road_catalog()
        .into_iter()
        .map(|road| builder.add_road_information(road))
        .collect();

    for _ in 0..roads {
        let origin = rng.random_range(0..nodes);
        let destination = rng.random_range(0..nodes);
        if origin == destination {
            continue;
        }

        let road = road_informations[rng.random_range(0..road_informations.len())];
        let detour = rng.random_range(1.0..1.6);
        let length = points[origin].haversine_distance(&points[destination]) * detour;

        builder
            .add_road(origin, destination, road, vec![], Some(length))
            .unwrap();
    }

    builder.build()
}

pub fn random_pairs(seed: u64, nodes: usize, count: usize) -> Vec<(NodeId, NodeId)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (rng.random_range(0..nodes), rng.random_range(0..nodes)))
        .collect()
}

/// Checks the observer protocol of a run from `origin` to `destination`.
pub fn assert_notification_order(
    events: &[SearchEvent],
    origin: NodeId,
    destination: NodeId,
    feasible: bool,
    marks_nodes: bool,
) {
    assert_eq!(events.first(), Some(&SearchEvent::OriginProcessed(origin)));
    assert_eq!(
        events
            .iter()
            .filter(|event| matches!(event, SearchEvent::OriginProcessed(_)))
            .count(),
        1
    );

    let reached: Vec<_> = events
        .iter()
        .filter_map(|event| match event {
            SearchEvent::NodeReached(node) => Some(*node),
            _ => None,
        })
        .collect();
    let mut unique = reached.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), reached.len(), "node reached twice");

    let destination_events: Vec<_> = events
        .iter()
        .enumerate()
        .filter(|(_, event)| matches!(event, SearchEvent::DestinationReached(_)))
        .collect();

    if !feasible {
        assert!(destination_events.is_empty());
        return;
    }

    assert_eq!(destination_events.len(), 1);
    let (index, event) = destination_events[0];
    assert_eq!(*event, SearchEvent::DestinationReached(destination));
    assert_eq!(index, events.len() - 1);

    if marks_nodes {
        assert!(
            events[..index].contains(&SearchEvent::NodeMarked(destination)),
            "destination reached before being marked"
        );
    }
}
