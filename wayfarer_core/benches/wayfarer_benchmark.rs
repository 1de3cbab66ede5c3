use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use wayfarer_core::{
    access_restrictions::AccessRestrictions,
    geopoint::GeoPoint,
    graph::Graph,
    graph_builder::GraphBuilder,
    priority_queue::{BinaryHeap, HeapItem},
    road_information::{RoadInformation, RoadType},
    routing::{
        astar::AStar,
        bellman_ford::BellmanFord,
        dijkstra::Dijkstra,
        shortest_path_algorithm::{ShortestPathAlgorithm, ShortestPathData},
    },
    weighting::{LengthWeighting, TimeWeighting},
};

const SIZE: usize = 60;

fn grid_graph() -> Graph {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut builder = GraphBuilder::with_capacity("bench-grid", "Bench grid", SIZE * SIZE, 0);

    for row in 0..SIZE {
        for column in 0..SIZE {
            builder.add_node(GeoPoint::new(
                4.3 + column as f64 * 0.002,
                50.8 + row as f64 * 0.002,
            ));
        }
    }

    let roads: Vec<_> = [
        (RoadType::Primary, 70),
        (RoadType::Residential, 30),
        (RoadType::Service, 0),
    ]
    .into_iter()
    .map(|(road_type, max_speed)| {
        builder.add_road_information(RoadInformation::new(
            road_type,
            AccessRestrictions::allowed_for_all(),
            false,
            max_speed,
            "",
        ))
    })
    .collect();

    for row in 0..SIZE {
        for column in 0..SIZE {
            let node = row * SIZE + column;
            if column + 1 < SIZE {
                let road = roads[rng.random_range(0..roads.len())];
                builder.add_road(node, node + 1, road, vec![], None).unwrap();
            }
            if row + 1 < SIZE {
                let road = roads[rng.random_range(0..roads.len())];
                builder.add_road(node, node + SIZE, road, vec![], None).unwrap();
            }
        }
    }

    builder.build()
}

fn shortest_path_benchmark(c: &mut Criterion) {
    let graph = grid_graph();
    let length = LengthWeighting::all_roads();
    let time = TimeWeighting::all_roads();
    let destination = graph.node_count() - 1;

    let shortest = ShortestPathData::new(&graph, 0, destination, &length);
    let fastest = ShortestPathData::new(&graph, 0, destination, &time);

    c.bench_function("Dijkstra shortest", |b| {
        b.iter(|| black_box(Dijkstra::new(shortest).run().unwrap()))
    });
    c.bench_function("A* shortest", |b| {
        b.iter(|| black_box(AStar::new(shortest).run().unwrap()))
    });
    c.bench_function("Dijkstra fastest", |b| {
        b.iter(|| black_box(Dijkstra::new(fastest).run().unwrap()))
    });
    c.bench_function("A* fastest", |b| {
        b.iter(|| black_box(AStar::new(fastest).run().unwrap()))
    });

    let mut group = c.benchmark_group("Bellman-Ford");
    group.sample_size(10);
    group.bench_function("Bellman-Ford shortest", |b| {
        b.iter(|| black_box(BellmanFord::new(shortest).run().unwrap()))
    });
    group.finish();
}

#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct Item(u64, usize);

impl HeapItem for Item {
    fn heap_key(&self) -> usize {
        self.1
    }
}

fn priority_queue_benchmark(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(7);
    let priorities: Vec<u64> = (0..10_000).map(|_| rng.random_range(0..1_000_000)).collect();

    c.bench_function("BinaryHeap insert + delete_min", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::with_capacity(priorities.len());
            for (key, &priority) in priorities.iter().enumerate() {
                heap.insert(Item(priority, key)).unwrap();
            }
            while let Ok(item) = heap.delete_min() {
                black_box(item);
            }
        })
    });

    c.bench_function("BinaryHeap remove", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::with_capacity(priorities.len());
            for (key, &priority) in priorities.iter().enumerate() {
                heap.insert(Item(priority, key)).unwrap();
            }
            for (key, &priority) in priorities.iter().enumerate().step_by(3) {
                black_box(heap.remove(&Item(priority, key)).unwrap());
            }
        })
    });
}

criterion_group!(benches, shortest_path_benchmark, priority_queue_benchmark);
criterion_main!(benches);
