#[cfg(test)]
pub mod test_graph {

    use crate::{
        access_restrictions::{AccessMode, AccessRestriction, AccessRestrictions},
        geopoint::GeoPoint,
        graph::Graph,
        graph_builder::GraphBuilder,
        road_information::{RoadInformation, RoadType},
        types::{ArcId, NodeId},
    };

    pub fn kilometers(value: f64) -> f64 {
        value * 1000.0
    }

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub enum RomaniaGraphCity {
        Arad = 0,
        Bucharest = 1,
        Craiova = 2,
        Dobreta = 3,
        Eforie = 4,
        Fagaras = 5,
        Giurgiu = 6,
        Hirsova = 7,
        Iasi = 8,
        Lugoj = 9,
        Mehadia = 10,
        Neamt = 11,
        Oradea = 12,
        Pitesti = 13,
        RimnicuVilcea = 14,
        Sibiu = 15,
        Timisoara = 16,
        Urziceni = 17,
        Vaslui = 18,
        Zerind = 19,
    }

    impl From<RomaniaGraphCity> for usize {
        fn from(value: RomaniaGraphCity) -> Self {
            value as usize
        }
    }

    // Coordinates are pulled towards the center of the map so that the
    // great-circle distance of every road stays below its length.
    fn get_romania_graph_cities() -> Vec<(RomaniaGraphCity, GeoPoint)> {
        vec![
            (RomaniaGraphCity::Arad, GeoPoint::new(23.1562, 45.8433)),
            (RomaniaGraphCity::Bucharest, GeoPoint::new(25.5512, 44.9634)),
            (RomaniaGraphCity::Craiova, GeoPoint::new(24.3974, 44.9151)),
            (RomaniaGraphCity::Dobreta, GeoPoint::new(23.8299, 45.0684)),
            (RomaniaGraphCity::Eforie, GeoPoint::new(26.8163, 44.779)),
            (RomaniaGraphCity::Fagaras, GeoPoint::new(24.9866, 45.6708)),
            (RomaniaGraphCity::Giurgiu, GeoPoint::new(25.4849, 44.7019)),
            (RomaniaGraphCity::Hirsova, GeoPoint::new(26.4729, 45.0947)),
            (RomaniaGraphCity::Iasi, GeoPoint::new(26.3007, 46.3293)),
            (RomaniaGraphCity::Lugoj, GeoPoint::new(23.4515, 45.5943)),
            (RomaniaGraphCity::Mehadia, GeoPoint::new(23.6823, 45.202)),
            (RomaniaGraphCity::Neamt, GeoPoint::new(25.6793, 46.3518)),
            (RomaniaGraphCity::Oradea, GeoPoint::new(23.4595, 46.2733)),
            (RomaniaGraphCity::Pitesti, GeoPoint::new(24.9346, 45.1782)),
            (
                RomaniaGraphCity::RimnicuVilcea,
                GeoPoint::new(24.6846, 45.2998),
            ),
            (RomaniaGraphCity::Sibiu, GeoPoint::new(24.5628, 45.6491)),
            (RomaniaGraphCity::Timisoara, GeoPoint::new(23.1044, 45.6244)),
            (RomaniaGraphCity::Urziceni, GeoPoint::new(25.8226, 45.109)),
            (RomaniaGraphCity::Vaslui, GeoPoint::new(26.3638, 46.0704)),
            (RomaniaGraphCity::Zerind, GeoPoint::new(23.2585, 46.0623)),
        ]
    }

    // https://user-images.githubusercontent.com/43790152/97784960-1a142580-1bc4-11eb-9070-39c03eb16df2.png
    fn get_romania_graph_roads() -> Vec<(RomaniaGraphCity, RomaniaGraphCity, f64)> {
        use RomaniaGraphCity::*;

        vec![
            (Oradea, Zerind, kilometers(71.0)),
            (Oradea, Sibiu, kilometers(151.0)),
            (Zerind, Arad, kilometers(75.0)),
            (Arad, Sibiu, kilometers(140.0)),
            (Arad, Timisoara, kilometers(118.0)),
            (Timisoara, Lugoj, kilometers(111.0)),
            (Lugoj, Mehadia, kilometers(70.0)),
            (Mehadia, Dobreta, kilometers(75.0)),
            (Dobreta, Craiova, kilometers(120.0)),
            (Craiova, RimnicuVilcea, kilometers(146.0)),
            (Craiova, Pitesti, kilometers(138.0)),
            (RimnicuVilcea, Pitesti, kilometers(97.0)),
            (RimnicuVilcea, Sibiu, kilometers(80.0)),
            (Sibiu, Fagaras, kilometers(99.0)),
            (Fagaras, Bucharest, kilometers(211.0)),
            (Pitesti, Bucharest, kilometers(101.0)),
            (Bucharest, Giurgiu, kilometers(90.0)),
            (Bucharest, Urziceni, kilometers(85.0)),
            (Urziceni, Hirsova, kilometers(98.0)),
            (Hirsova, Eforie, kilometers(86.0)),
            (Urziceni, Vaslui, kilometers(142.0)),
            (Vaslui, Iasi, kilometers(92.0)),
            (Iasi, Neamt, kilometers(87.0)),
        ]
    }

    /// Two-way primary roads open to every mode, at 90 km/h.
    pub fn create_romania_graph() -> Graph {
        let mut builder = GraphBuilder::new("romania", "Romania");

        for (city, point) in get_romania_graph_cities() {
            let node = builder.add_node(point);
            assert_eq!(node, usize::from(city));
        }

        let road = builder.add_road_information(RoadInformation::new(
            RoadType::Primary,
            AccessRestrictions::allowed_for_all(),
            false,
            90,
            "",
        ));

        for (origin, destination, length) in get_romania_graph_roads() {
            builder
                .add_road(
                    origin.into(),
                    destination.into(),
                    road,
                    vec![],
                    Some(length),
                )
                .unwrap();
        }

        builder.build()
    }

    /// One-way arcs, open to cars only:
    ///
    /// ```text
    /// A -> B  10 m
    /// A -> C  15 m
    /// B -> C  10 m
    /// C -> D  20 m, 10 m, and 15 m at 20 km/h
    /// D -> A  15 m
    /// ```
    ///
    /// Arcs run at 10 km/h unless stated. E has no arc.
    pub struct FiveNodeGraph {
        pub graph: Graph,
        pub a2b: ArcId,
        pub a2c: ArcId,
        pub b2c: ArcId,
        pub c2d_1: ArcId,
        pub c2d_2: ArcId,
        pub c2d_3: ArcId,
        pub d2a: ArcId,
    }

    impl FiveNodeGraph {
        pub const A: NodeId = 0;
        pub const B: NodeId = 1;
        pub const C: NodeId = 2;
        pub const D: NodeId = 3;
        pub const E: NodeId = 4;

        pub fn new() -> Self {
            Self::build(Self::cars_only())
        }

        /// Same graph with A -> C closed to cars and open to every other mode.
        pub fn with_a2c_closed_to_cars() -> Self {
            let restrictions = AccessRestrictions::allowed_for_all()
                .with(AccessMode::Motorcar, AccessRestriction::Forbidden);
            Self::build(restrictions)
        }

        fn cars_only() -> AccessRestrictions {
            AccessRestrictions::new()
                .with_modes(&AccessMode::ALL, AccessRestriction::Forbidden)
                .with(AccessMode::Motorcar, AccessRestriction::Allowed)
        }

        fn build(a2c_restrictions: AccessRestrictions) -> Self {
            let mut builder = GraphBuilder::new("five-nodes", "Five nodes");

            // Nodes sit within a couple of meters from each other
            let a = builder.add_node(GeoPoint::new(4.35, 50.85));
            let b = builder.add_node(GeoPoint::new(4.35001, 50.85));
            let c = builder.add_node(GeoPoint::new(4.35001, 50.85001));
            let d = builder.add_node(GeoPoint::new(4.35, 50.85001));
            builder.add_node(GeoPoint::new(4.35002, 50.85002));

            let slow = builder.add_road_information(Self::road(Self::cars_only(), 10));
            let fast = builder.add_road_information(Self::road(Self::cars_only(), 20));
            let a2c_road = builder.add_road_information(Self::road(a2c_restrictions, 10));

            let mut arc = |origin, destination, road, length| {
                builder
                    .add_arc(origin, destination, road, vec![], Some(length))
                    .unwrap()
            };

            let a2b = arc(a, b, slow, 10.0);
            let a2c = arc(a, c, a2c_road, 15.0);
            let b2c = arc(b, c, slow, 10.0);
            let c2d_1 = arc(c, d, slow, 20.0);
            let c2d_2 = arc(c, d, slow, 10.0);
            let c2d_3 = arc(c, d, fast, 15.0);
            let d2a = arc(d, a, slow, 15.0);

            FiveNodeGraph {
                graph: builder.build(),
                a2b,
                a2c,
                b2c,
                c2d_1,
                c2d_2,
                c2d_3,
                d2a,
            }
        }

        fn road(access_restrictions: AccessRestrictions, max_speed: u16) -> RoadInformation {
            RoadInformation::new(
                RoadType::Residential,
                access_restrictions,
                true,
                max_speed,
                "",
            )
        }
    }
}
