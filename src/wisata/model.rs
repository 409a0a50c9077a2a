use crate::error::{Result, WisataError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A single tourist-site entry in the catalog.
///
/// `created_at` and `updated_at` are bookkeeping for the store and the CLI;
/// they are never part of a query result (see [`crate::query::projection`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    pub id: String,
    pub name: String,
    #[serde(default, alias = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub lat: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub lon: Option<f64>,
    #[serde(
        default,
        alias = "environment_classes",
        skip_serializing_if = "Option::is_none"
    )]
    pub environment_class: Option<String>,
    #[serde(
        default,
        alias = "scenery_classes",
        skip_serializing_if = "Option::is_none"
    )]
    pub scenery_class: Option<String>,
    #[serde(
        default,
        alias = "category_classes",
        skip_serializing_if = "Option::is_none"
    )]
    pub category_class: Option<String>,
    #[serde(default = "now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "now")]
    pub updated_at: DateTime<Utc>,
}

fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Older documents carry placeholders such as `"No rating"` where a number
/// belongs. Anything that is not a finite JSON number reads as absent.
fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| v.as_f64())
        .filter(|n| n.is_finite()))
}

impl Attraction {
    /// New record with a generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name)
    }

    /// New record with a caller-supplied id.
    pub fn with_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            photo: None,
            rating: None,
            description: None,
            lat: None,
            lon: None,
            environment_class: None,
            scenery_class: None,
            category_class: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn rated(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn located(mut self, lat: f64, lon: f64) -> Self {
        self.lat = Some(lat);
        self.lon = Some(lon);
        self
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn classed(mut self, axis: Axis, value: impl Into<String>) -> Self {
        let value = value.into();
        match axis {
            Axis::Name => self.name = value,
            Axis::Environment => self.environment_class = Some(value),
            Axis::Scenery => self.scenery_class = Some(value),
            Axis::Category => self.category_class = Some(value),
        }
        self
    }

    /// The value this record holds on a filterable axis.
    pub fn axis_value(&self, axis: Axis) -> Option<&str> {
        match axis {
            Axis::Name => Some(self.name.as_str()),
            Axis::Environment => self.environment_class.as_deref(),
            Axis::Scenery => self.scenery_class.as_deref(),
            Axis::Category => self.category_class.as_deref(),
        }
    }

    /// Coordinates, only when both are present and in range.
    pub fn location(&self) -> Option<GeoPoint> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => GeoPoint::new(lat, lon).ok(),
            _ => None,
        }
    }
}

/// A partial update. `None` means "leave the stored value alone".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttractionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub lat: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub lon: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenery_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_class: Option<String>,
}

impl AttractionPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge the supplied fields into `record`. The id is never touched.
    ///
    /// Returns whether anything was written.
    pub fn apply_to(&self, record: &mut Attraction) -> bool {
        fn merge<T: Clone>(slot: &mut T, value: &Option<T>) -> bool {
            match value {
                Some(v) => {
                    *slot = v.clone();
                    true
                }
                None => false,
            }
        }
        fn merge_opt<T: Clone>(slot: &mut Option<T>, value: &Option<T>) -> bool {
            match value {
                Some(v) => {
                    *slot = Some(v.clone());
                    true
                }
                None => false,
            }
        }

        let mut changed = merge(&mut record.name, &self.name);
        changed |= merge_opt(&mut record.photo, &self.photo);
        changed |= merge_opt(&mut record.rating, &self.rating.filter(|r| r.is_finite()));
        changed |= merge_opt(&mut record.description, &self.description);
        changed |= merge_opt(&mut record.lat, &self.lat.filter(|v| v.is_finite()));
        changed |= merge_opt(&mut record.lon, &self.lon.filter(|v| v.is_finite()));
        changed |= merge_opt(&mut record.environment_class, &self.environment_class);
        changed |= merge_opt(&mut record.scenery_class, &self.scenery_class);
        changed |= merge_opt(&mut record.category_class, &self.category_class);

        if changed {
            record.updated_at = Utc::now();
        }
        changed
    }
}

/// One of the filterable fields of an [`Attraction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Name,
    Environment,
    Scenery,
    Category,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::Name, Axis::Environment, Axis::Scenery, Axis::Category];

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Name => "name",
            Axis::Environment => "environment",
            Axis::Scenery => "scenery",
            Axis::Category => "category",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = WisataError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "name" => Ok(Axis::Name),
            "environment" | "environment_class" | "environment_classes" => Ok(Axis::Environment),
            "scenery" | "scenery_class" | "scenery_classes" => Ok(Axis::Scenery),
            "category" | "category_class" | "category_classes" => Ok(Axis::Category),
            other => Err(WisataError::InvalidInput(format!("Unknown axis: {}", other))),
        }
    }
}

/// A validated latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(WisataError::InvalidCoordinate(format!(
                "latitude out of range: {}",
                lat
            )));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(WisataError::InvalidCoordinate(format!(
                "longitude out of range: {}",
                lon
            )));
        }
        Ok(Self { lat, lon })
    }

    /// Range-check whichever coordinates are present, as for a stored record.
    pub fn check(lat: Option<f64>, lon: Option<f64>) -> Result<()> {
        Self::new(lat.unwrap_or(0.0), lon.unwrap_or(0.0)).map(|_| ())
    }

    /// Parse a query point from raw text, as it arrives from a request.
    pub fn parse(lat: Option<&str>, lon: Option<&str>) -> Result<Self> {
        let lat = parse_degrees("lat", lat)?;
        let lon = parse_degrees("lng", lon)?;
        Self::new(lat, lon)
    }
}

fn parse_degrees(label: &str, raw: Option<&str>) -> Result<f64> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| WisataError::InvalidCoordinate(format!("{} is required", label)))?;
    raw.parse::<f64>()
        .map_err(|_| WisataError::InvalidCoordinate(format!("{} is not a number: {}", label, raw)))
}
