use crate::access_restrictions::AccessRestrictions;
use crate::constants::NO_SPEED_LIMIT;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RoadType {
    Motorway,
    MotorwayLink,
    Trunk,
    TrunkLink,
    Primary,
    PrimaryLink,
    Secondary,
    SecondaryLink,
    Tertiary,
    TertiaryLink,
    Unclassified,
    Residential,
    LivingStreet,
    Service,
    Roundabout,
    Road,
    Track,
    Pedestrian,
    Cycleway,
    Coastline,
}

impl RoadType {
    /// Speed assumed when a road carries no speed limit, in km/h.
    pub fn default_speed(&self) -> u16 {
        match self {
            RoadType::Motorway => 120,
            RoadType::MotorwayLink => 70,

            RoadType::Trunk => 70,
            RoadType::TrunkLink => 70,

            RoadType::Primary => 60,
            RoadType::PrimaryLink => 60,

            RoadType::Secondary => 50,
            RoadType::SecondaryLink => 40,

            RoadType::Tertiary => 30,
            RoadType::TertiaryLink => 30,

            RoadType::Unclassified => 30,
            RoadType::Residential => 30,
            RoadType::LivingStreet => 5,
            RoadType::Service => 20,
            RoadType::Roundabout => 30,

            RoadType::Road => 20,
            RoadType::Track => 15,

            RoadType::Pedestrian => 5,
            RoadType::Cycleway => 15,

            RoadType::Coastline => 0,
        }
    }
}

/// Road metadata shared by every arc of a road.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RoadInformation {
    road_type: RoadType,
    access_restrictions: AccessRestrictions,
    one_way: bool,
    max_speed: u16,
    name: String,
}

impl RoadInformation {
    pub fn new(
        road_type: RoadType,
        access_restrictions: AccessRestrictions,
        one_way: bool,
        max_speed: u16,
        name: impl Into<String>,
    ) -> Self {
        RoadInformation {
            road_type,
            access_restrictions,
            one_way,
            max_speed,
            name: name.into(),
        }
    }

    pub fn road_type(&self) -> RoadType {
        self.road_type
    }

    pub fn access_restrictions(&self) -> &AccessRestrictions {
        &self.access_restrictions
    }

    pub fn is_one_way(&self) -> bool {
        self.one_way
    }

    /// Posted speed limit in km/h, `None` when unknown.
    pub fn max_speed(&self) -> Option<u16> {
        if self.max_speed == NO_SPEED_LIMIT {
            None
        } else {
            Some(self.max_speed)
        }
    }

    /// Speed used for travel times: the speed limit, or the road type default.
    pub fn speed(&self) -> f64 {
        self.max_speed()
            .unwrap_or_else(|| self.road_type.default_speed()) as f64
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
