pub(crate) const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Speed limit value meaning "no known limit".
pub const NO_SPEED_LIMIT: u16 = 0;

/// Walking speed used to cap pedestrian travel times, in km/h.
pub const PEDESTRIAN_SPEED_KMH: f64 = 5.0;

pub(crate) const KMH_TO_METERS_PER_SECOND: f64 = 1.0 / 3.6;
