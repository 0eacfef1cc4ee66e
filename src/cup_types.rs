use std::fmt;

use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer};

use crate::options::TaskOptions;

/// A complete set of waypoints and tasks to be written as one CUP file.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct CupDocument {
    pub waypoints: Vec<Waypoint>,
    pub tasks: Vec<Task>,
}

/// A single waypoint record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    pub name: String,
    #[serde(default, alias = "code")]
    pub short_name: String,
    /// IANA top level domain country code.
    #[serde(default)]
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub elevation: Option<Distance>,
    #[serde(default)]
    pub style: WaypointStyle,
    /// Runway heading, landable sites only. Written as given, so `"090"`
    /// keeps its leading zero.
    #[serde(default, deserialize_with = "number_or_text")]
    pub runway_direction: Option<String>,
    #[serde(default)]
    pub runway_length: Option<Distance>,
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub description: String,
}

impl Waypoint {
    pub fn new(
        name: impl Into<String>,
        short_name: impl Into<String>,
        country: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            name: name.into(),
            short_name: short_name.into(),
            country: country.into(),
            latitude,
            longitude,
            elevation: None,
            style: WaypointStyle::NORMAL,
            runway_direction: None,
            runway_length: None,
            frequency: String::new(),
            description: String::new(),
        }
    }

    pub fn with_elevation(mut self, elevation: impl Into<Distance>) -> Self {
        self.elevation = Some(elevation.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<WaypointStyle>) -> Self {
        self.style = style.into();
        self
    }

    pub fn with_runway(
        mut self,
        direction: impl fmt::Display,
        length: impl Into<Distance>,
    ) -> Self {
        self.runway_direction = Some(direction.to_string());
        self.runway_length = Some(length.into());
        self
    }

    pub fn with_frequency(mut self, frequency: impl Into<String>) -> Self {
        self.frequency = frequency.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawField {
    Number(u64),
    Text(String),
}

fn number_or_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<RawField>::deserialize(d)?.map(|field| match field {
        RawField::Number(n) => n.to_string(),
        RawField::Text(s) => s,
    }))
}

/// Waypoint category code. The set of valid codes is defined by SeeYou;
/// the writer only renders the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct WaypointStyle(pub u8);

impl WaypointStyle {
    pub const NORMAL: Self = Self(1);
}

impl Default for WaypointStyle {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl From<u8> for WaypointStyle {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl fmt::Display for WaypointStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A task: a description and the names of previously written waypoints.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Task {
    pub description: String,
    pub waypoints: Vec<String>,
    pub options: Option<TaskOptions>,
}

/// Numeric part of a distance. The variant decides how it is rendered.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Magnitude {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl From<i64> for Magnitude {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for Magnitude {
    fn from(v: i32) -> Self {
        Self::Integer(v.into())
    }
}

impl From<u32> for Magnitude {
    fn from(v: u32) -> Self {
        Self::Integer(v.into())
    }
}

impl From<f64> for Magnitude {
    fn from(v: f64) -> Self {
        Self::Decimal(v)
    }
}

impl From<&str> for Magnitude {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Magnitude {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// A distance or altitude with its unit suffix (e.g. `m`, `km`, `ft`, `nm`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "DistanceRepr")]
pub struct Distance {
    pub magnitude: Magnitude,
    pub unit: String,
}

impl Distance {
    pub const DEFAULT_UNIT: &'static str = "m";

    pub fn new(magnitude: impl Into<Magnitude>, unit: impl Into<String>) -> Self {
        Self {
            magnitude: magnitude.into(),
            unit: unit.into(),
        }
    }

    pub fn meters(magnitude: impl Into<Magnitude>) -> Self {
        Self::new(magnitude, Self::DEFAULT_UNIT)
    }
}

impl From<i64> for Distance {
    fn from(v: i64) -> Self {
        Self::meters(v)
    }
}

impl From<i32> for Distance {
    fn from(v: i32) -> Self {
        Self::meters(v)
    }
}

impl From<u32> for Distance {
    fn from(v: u32) -> Self {
        Self::meters(v)
    }
}

impl From<f64> for Distance {
    fn from(v: f64) -> Self {
        Self::meters(v)
    }
}

impl From<&str> for Distance {
    fn from(v: &str) -> Self {
        Self::meters(v)
    }
}

impl<M: Into<Magnitude>, U: Into<String>> From<(M, U)> for Distance {
    fn from((magnitude, unit): (M, U)) -> Self {
        Self::new(magnitude, unit)
    }
}

/// Accepted input shapes: `300`, `300.0`, `"300"`, `[0.7, "km"]` or
/// `{"value": 0.7, "unit": "km"}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum DistanceRepr {
    Bare(Magnitude),
    Pair(Magnitude, String),
    Object {
        value: Magnitude,
        #[serde(default = "default_unit")]
        unit: String,
    },
}

fn default_unit() -> String {
    Distance::DEFAULT_UNIT.to_string()
}

impl From<DistanceRepr> for Distance {
    fn from(repr: DistanceRepr) -> Self {
        match repr {
            DistanceRepr::Bare(magnitude) => Self::meters(magnitude),
            DistanceRepr::Pair(magnitude, unit)
            | DistanceRepr::Object {
                value: magnitude,
                unit,
            } => Self::new(magnitude, unit),
        }
    }
}

/// Wall-clock time of day, e.g. the opening time of the start line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum TimeOfDay {
    Structured(NaiveTime),
    Preformatted(String),
}

impl From<NaiveTime> for TimeOfDay {
    fn from(t: NaiveTime) -> Self {
        Self::Structured(t)
    }
}

impl From<NaiveDateTime> for TimeOfDay {
    fn from(dt: NaiveDateTime) -> Self {
        Self::Structured(dt.time())
    }
}

impl From<&str> for TimeOfDay {
    fn from(s: &str) -> Self {
        Self::Preformatted(s.to_string())
    }
}

impl From<String> for TimeOfDay {
    fn from(s: String) -> Self {
        Self::Preformatted(s)
    }
}

/// Length of time, e.g. the designated task time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "DurationRepr")]
pub enum TaskDuration {
    Structured(Duration),
    Preformatted(String),
}

impl From<Duration> for TaskDuration {
    fn from(d: Duration) -> Self {
        Self::Structured(d)
    }
}

impl From<&str> for TaskDuration {
    fn from(s: &str) -> Self {
        Self::Preformatted(s.to_string())
    }
}

impl From<String> for TaskDuration {
    fn from(s: String) -> Self {
        Self::Preformatted(s)
    }
}

/// Durations arrive either as whole seconds or as preformatted text.
#[derive(Deserialize)]
#[serde(untagged)]
enum DurationRepr {
    Seconds(i64),
    Text(String),
}

impl TryFrom<DurationRepr> for TaskDuration {
    type Error = String;

    fn try_from(repr: DurationRepr) -> Result<Self, Self::Error> {
        match repr {
            DurationRepr::Seconds(s) => Duration::try_seconds(s)
                .map(Self::Structured)
                .ok_or_else(|| format!("duration of {s} seconds is out of range")),
            DurationRepr::Text(s) => Ok(Self::Preformatted(s)),
        }
    }
}
