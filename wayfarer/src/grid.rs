use rand::{Rng, SeedableRng, rngs::StdRng};
use wayfarer_core::{
    access_restrictions::{AccessMode, AccessRestriction, AccessRestrictions},
    error::GraphError,
    geopoint::GeoPoint,
    graph::Graph,
    graph_builder::GraphBuilder,
    road_information::{RoadInformation, RoadType},
    types::{NodeId, RoadInformationId},
};

const ORIGIN: GeoPoint = GeoPoint {
    lng: 4.3517,
    lat: 50.8503,
};

/// Degrees between two grid lines, about 100 m.
const SPACING: f64 = 0.001;

/// One motorway every `MOTORWAY_EVERY` rows, one avenue every
/// `AVENUE_EVERY` columns.
const MOTORWAY_EVERY: usize = 8;
const AVENUE_EVERY: usize = 6;

struct Roads {
    motorway: RoadInformationId,
    avenue: RoadInformationId,
    residential: RoadInformationId,
    pedestrian: RoadInformationId,
    track: RoadInformationId,
}

impl Roads {
    fn register(builder: &mut GraphBuilder) -> Self {
        let motorway = RoadInformation::new(
            RoadType::Motorway,
            AccessRestrictions::new()
                .with_modes(&AccessMode::ALL, AccessRestriction::Forbidden)
                .with_modes(
                    &[AccessMode::Motorcar, AccessMode::HeavyGoods, AccessMode::Motorcycle],
                    AccessRestriction::Allowed,
                ),
            true,
            110,
            "Ring",
        );
        let avenue = RoadInformation::new(
            RoadType::Primary,
            AccessRestrictions::allowed_for_all(),
            false,
            50,
            "Avenue",
        );
        let residential = RoadInformation::new(
            RoadType::Residential,
            AccessRestrictions::new(),
            false,
            0,
            "Street",
        );
        let pedestrian = RoadInformation::new(
            RoadType::Pedestrian,
            AccessRestrictions::new().with(AccessMode::Motorcar, AccessRestriction::Forbidden),
            false,
            0,
            "Promenade",
        );
        let track = RoadInformation::new(
            RoadType::Track,
            AccessRestrictions::new().with(AccessMode::Motorcar, AccessRestriction::Private),
            false,
            0,
            "Track",
        );

        Roads {
            motorway: builder.add_road_information(motorway),
            avenue: builder.add_road_information(avenue),
            residential: builder.add_road_information(residential),
            pedestrian: builder.add_road_information(pedestrian),
            track: builder.add_road_information(track),
        }
    }

    /// Road of a minor street, `None` when the street is missing.
    fn pick_minor(&self, rng: &mut StdRng) -> Option<RoadInformationId> {
        match rng.random_range(0..100) {
            0..60 => Some(self.residential),
            60..75 => Some(self.pedestrian),
            75..85 => Some(self.track),
            _ => None,
        }
    }
}

/// Generates a `rows` x `columns` road grid. The same seed always gives the
/// same graph.
pub fn generate(rows: usize, columns: usize, seed: u64) -> Result<Graph, GraphError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder = GraphBuilder::with_capacity(
        format!("grid-{rows}x{columns}-{seed}"),
        format!("Road grid {rows}x{columns} (seed {seed})"),
        rows * columns,
        rows * columns * 4,
    );

    let jitter = SPACING / 5.0;
    let mut points = Vec::with_capacity(rows * columns);
    for row in 0..rows {
        for column in 0..columns {
            let point = GeoPoint::new(
                ORIGIN.lng + column as f64 * SPACING + rng.random_range(-jitter..jitter),
                ORIGIN.lat + row as f64 * SPACING + rng.random_range(-jitter..jitter),
            );
            builder.add_node(point);
            points.push(point);
        }
    }

    let roads = Roads::register(&mut builder);
    let node = |row: usize, column: usize| -> NodeId { row * columns + column };

    for row in 0..rows {
        for column in 0..columns.saturating_sub(1) {
            let (west, east) = (node(row, column), node(row, column + 1));

            if row % MOTORWAY_EVERY == 0 {
                // Motorways alternate between eastbound and westbound
                let (origin, destination) = if row % (2 * MOTORWAY_EVERY) == 0 {
                    (west, east)
                } else {
                    (east, west)
                };
                builder.add_road(origin, destination, roads.motorway, vec![], None)?;
            } else if let Some(road) = roads.pick_minor(&mut rng) {
                let bent = bend(&points[west], &points[east], &mut rng);
                builder.add_road(west, east, road, bent, None)?;
            }
        }
    }

    for column in 0..columns {
        for row in 0..rows.saturating_sub(1) {
            let (south, north) = (node(row, column), node(row + 1, column));

            let road = if column % AVENUE_EVERY == 0 {
                Some(roads.avenue)
            } else {
                roads.pick_minor(&mut rng)
            };

            if let Some(road) = road {
                builder.add_road(south, north, road, vec![], None)?;
            }
        }
    }

    Ok(builder.build())
}

/// Sometimes bends a street through a point off the straight line.
fn bend(from: &GeoPoint, to: &GeoPoint, rng: &mut StdRng) -> Vec<GeoPoint> {
    if !rng.random_bool(0.3) {
        return vec![];
    }

    let offset = rng.random_range(-SPACING / 4.0..SPACING / 4.0);
    vec![GeoPoint::new(
        (from.lng + to.lng) / 2.0,
        (from.lat + to.lat) / 2.0 + offset,
    )]
}
