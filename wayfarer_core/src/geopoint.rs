use serde::{Deserialize, Serialize};

use crate::constants::EARTH_RADIUS_METERS;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lng: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lng: f64, lat: f64) -> Self {
        GeoPoint { lng, lat }
    }

    /// Great-circle distance to `other`, in meters.
    pub fn haversine_distance(&self, other: &GeoPoint) -> f64 {
        haversine_distance(self.lat, self.lng, other.lat, other.lng)
    }
}

impl From<GeoPoint> for geo_types::Point<f64> {
    fn from(value: GeoPoint) -> Self {
        geo_types::Point::new(value.lng, value.lat)
    }
}

impl From<geo_types::Coord<f64>> for GeoPoint {
    fn from(value: geo_types::Coord<f64>) -> Self {
        GeoPoint::new(value.x, value.y)
    }
}

pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lon1_rad = lon1.to_radians();
    let lat2_rad = lat2.to_radians();
    let lon2_rad = lon2.to_radians();

    let delta_lat = lat2_rad - lat1_rad;
    let delta_lon = lon2_rad - lon1_rad;

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Length of a polyline, in meters.
pub fn compute_geometry_distance(geometry: &[GeoPoint]) -> f64 {
    geometry
        .windows(2)
        .fold(0.0, |total, pair| total + pair[0].haversine_distance(&pair[1]))
}
