use std::fmt;

use crate::access_restrictions::AccessMode;
use crate::arc::ArcRef;
use crate::constants::PEDESTRIAN_SPEED_KMH;
use crate::road_information::RoadType;

/// What a [`Weighting`] cost measures: meters or seconds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Length,
    Time,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Length => write!(f, "length"),
            Mode::Time => write!(f, "time"),
        }
    }
}

/// Cost policy of a search: which arcs may be used and what they cost.
///
/// Costs of allowed arcs must be finite and non-negative. Algorithms rely on
/// this and do not check it.
pub trait Weighting: Send + Sync {
    fn is_allowed(&self, arc: ArcRef<'_>) -> bool;

    fn cost(&self, arc: ArcRef<'_>) -> f64;

    fn mode(&self) -> Mode;

    /// Upper bound in km/h on the speed the policy travels at, if it has one.
    fn maximum_speed(&self) -> Option<f64> {
        None
    }
}

/// Length in meters, optionally restricted to roads open to one mode.
#[derive(Copy, Clone, Debug, Default)]
pub struct LengthWeighting {
    access_mode: Option<AccessMode>,
}

impl LengthWeighting {
    pub fn all_roads() -> Self {
        LengthWeighting { access_mode: None }
    }

    pub fn for_mode(access_mode: AccessMode) -> Self {
        LengthWeighting {
            access_mode: Some(access_mode),
        }
    }
}

impl Weighting for LengthWeighting {
    fn is_allowed(&self, arc: ArcRef<'_>) -> bool {
        self.access_mode.is_none_or(|mode| {
            arc.road_information()
                .access_restrictions()
                .is_accessible_for(mode)
        })
    }

    fn cost(&self, arc: ArcRef<'_>) -> f64 {
        arc.length()
    }

    fn mode(&self) -> Mode {
        Mode::Length
    }
}

/// Travel time in seconds at the road speed, optionally capped and
/// restricted to roads open to one mode.
#[derive(Clone, Debug, Default)]
pub struct TimeWeighting {
    access_mode: Option<AccessMode>,
    speed_cap: Option<f64>,
    excluded_road_types: Vec<RoadType>,
}

impl TimeWeighting {
    pub fn all_roads() -> Self {
        TimeWeighting::default()
    }

    pub fn car() -> Self {
        TimeWeighting {
            access_mode: Some(AccessMode::Motorcar),
            ..Default::default()
        }
    }

    pub fn pedestrian() -> Self {
        TimeWeighting {
            access_mode: Some(AccessMode::Foot),
            speed_cap: Some(PEDESTRIAN_SPEED_KMH),
            excluded_road_types: vec![
                RoadType::Motorway,
                RoadType::MotorwayLink,
                RoadType::Trunk,
                RoadType::TrunkLink,
            ],
        }
    }

    pub fn with_speed_cap(mut self, speed_cap: f64) -> Self {
        self.speed_cap = Some(speed_cap);
        self
    }

    fn speed(&self, arc: ArcRef<'_>) -> f64 {
        let speed = arc.road_information().speed();
        match self.speed_cap {
            Some(cap) => speed.min(cap),
            None => speed,
        }
    }
}

impl Weighting for TimeWeighting {
    fn is_allowed(&self, arc: ArcRef<'_>) -> bool {
        let road_information = arc.road_information();

        if self.excluded_road_types.contains(&road_information.road_type()) {
            return false;
        }

        let accessible = self.access_mode.is_none_or(|mode| {
            road_information
                .access_restrictions()
                .is_accessible_for(mode)
        });

        accessible && self.speed(arc) > 0.0
    }

    fn cost(&self, arc: ArcRef<'_>) -> f64 {
        arc.travel_time(self.speed(arc))
    }

    fn mode(&self) -> Mode {
        Mode::Time
    }

    fn maximum_speed(&self) -> Option<f64> {
        self.speed_cap
    }
}

/// A named entry of the weighting catalog.
pub struct WeightingProfile {
    key: &'static str,
    description: &'static str,
    weighting: Box<dyn Weighting>,
}

impl WeightingProfile {
    pub fn new(key: &'static str, description: &'static str, weighting: Box<dyn Weighting>) -> Self {
        WeightingProfile {
            key,
            description,
            weighting,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn weighting(&self) -> &dyn Weighting {
        self.weighting.as_ref()
    }
}

impl fmt::Debug for WeightingProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeightingProfile")
            .field("key", &self.key)
            .field("mode", &self.weighting.mode())
            .finish()
    }
}

pub fn weighting_profiles() -> Vec<WeightingProfile> {
    vec![
        WeightingProfile::new(
            "shortest",
            "Shortest path, all roads allowed",
            Box::new(LengthWeighting::all_roads()),
        ),
        WeightingProfile::new(
            "shortest-car",
            "Shortest path, only roads open for cars",
            Box::new(LengthWeighting::for_mode(AccessMode::Motorcar)),
        ),
        WeightingProfile::new(
            "fastest",
            "Fastest path, all roads allowed",
            Box::new(TimeWeighting::all_roads()),
        ),
        WeightingProfile::new(
            "fastest-car",
            "Fastest path, only roads open for cars",
            Box::new(TimeWeighting::car()),
        ),
        WeightingProfile::new(
            "pedestrian",
            "Fastest path for pedestrian",
            Box::new(TimeWeighting::pedestrian()),
        ),
    ]
}

pub fn find_weighting_profile(key: &str) -> Option<WeightingProfile> {
    weighting_profiles()
        .into_iter()
        .find(|profile| profile.key() == key)
}
