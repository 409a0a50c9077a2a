use crate::error::{Result, WisataError};
use crate::model::GeoPoint;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mean Earth radius (IUGG).
const EARTH_RADIUS_KM: f64 = 6371.0088;

/// How nearest-K measures the gap between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Euclidean distance on raw degrees. Only meaningful for ranking within
    /// a city-sized area; the unit is "degrees", not a length.
    #[default]
    Planar,
    /// Great-circle distance in kilometres.
    Haversine,
}

impl DistanceMetric {
    pub fn distance(&self, a: GeoPoint, b: GeoPoint) -> f64 {
        match self {
            DistanceMetric::Planar => planar(a, b),
            DistanceMetric::Haversine => haversine_km(a, b),
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceMetric::Planar => f.write_str("planar"),
            DistanceMetric::Haversine => f.write_str("haversine"),
        }
    }
}

impl FromStr for DistanceMetric {
    type Err = WisataError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "planar" => Ok(DistanceMetric::Planar),
            "haversine" => Ok(DistanceMetric::Haversine),
            other => Err(WisataError::InvalidInput(format!(
                "Unknown distance metric: {} (expected planar or haversine)",
                other
            ))),
        }
    }
}

pub fn planar(a: GeoPoint, b: GeoPoint) -> f64 {
    ((a.lat - b.lat).powi(2) + (a.lon - b.lon).powi(2)).sqrt()
}

pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let (lat1, lat2) = (a.lat.to_radians(), b.lat.to_radians());
    let dlat = lat2 - lat1;
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}
