//! Unit-carrying scalar wrappers shared by every decoded value object.
//!
//! Reports mix knots, metres per second, statute miles, feet and inches of
//! mercury freely. Values are kept in the unit they were reported in and can be
//! converted to SI on demand, so nothing is lost when a report is re-encoded.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit of a reported wind speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedUnit {
    Knots,
    MetresPerSecond,
    KilometresPerHour,
}

impl SpeedUnit {
    pub(crate) fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "KT" => Some(SpeedUnit::Knots),
            "MPS" => Some(SpeedUnit::MetresPerSecond),
            "KMH" | "KPH" => Some(SpeedUnit::KilometresPerHour),
            _ => None,
        }
    }

    fn metres_per_second_factor(self) -> f64 {
        match self {
            SpeedUnit::Knots => 0.514444,
            SpeedUnit::MetresPerSecond => 1.0,
            SpeedUnit::KilometresPerHour => 0.277778,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            SpeedUnit::Knots => "kt",
            SpeedUnit::MetresPerSecond => "m/s",
            SpeedUnit::KilometresPerHour => "km/h",
        }
    }
}

/// A speed together with the unit it was reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Speed {
    value: u16,
    unit: SpeedUnit,
}

impl Speed {
    pub fn new(value: u16, unit: SpeedUnit) -> Self {
        Self { value, unit }
    }

    pub fn value(&self) -> u16 {
        self.value
    }

    pub fn unit(&self) -> SpeedUnit {
        self.unit
    }

    /// Speed in metres per second, rounded to two decimals.
    pub fn metres_per_second(&self) -> f64 {
        round_to(f64::from(self.value) * self.unit.metres_per_second_factor(), 2)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}

/// Unit of a reported distance or height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    Millimetres,
    Metres,
    Kilometres,
    StatuteMiles,
    Feet,
}

impl DistanceUnit {
    fn metres_factor(self) -> f64 {
        match self {
            DistanceUnit::Millimetres => 0.001,
            DistanceUnit::Metres => 1.0,
            DistanceUnit::Kilometres => 1000.0,
            DistanceUnit::StatuteMiles => 1609.34,
            DistanceUnit::Feet => 0.3048,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            DistanceUnit::Millimetres => "mm",
            DistanceUnit::Metres => "m",
            DistanceUnit::Kilometres => "km",
            DistanceUnit::StatuteMiles => "SM",
            DistanceUnit::Feet => "ft",
        }
    }
}

/// A distance (visibility, RVR) or height (cloud base) in its reported unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    value: f64,
    unit: DistanceUnit,
}

impl Distance {
    pub fn new(value: f64, unit: DistanceUnit) -> Self {
        Self { value, unit }
    }

    pub fn metres(value: f64) -> Self {
        Self::new(value, DistanceUnit::Metres)
    }

    pub fn feet(value: f64) -> Self {
        Self::new(value, DistanceUnit::Feet)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    /// Distance in whole metres.
    pub fn to_metres(&self) -> f64 {
        (self.value * self.unit.metres_factor()).round()
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}

/// Comparison qualifier attached to visibility and RVR readings.
///
/// `AtOrAbove` is the "maximum reportable" sentinel produced by `9999`, `P6SM`
/// or a `P` RVR prefix; `Below` comes from an `M` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bound {
    #[default]
    Exact,
    Below,
    AtOrAbove,
}

impl Bound {
    pub(crate) fn from_prefix(prefix: Option<&str>) -> Self {
        match prefix {
            Some("M") => Bound::Below,
            Some("P") => Bound::AtOrAbove,
            _ => Bound::Exact,
        }
    }
}

/// Air temperature in whole degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Temperature {
    celsius: i16,
}

impl Temperature {
    pub fn celsius(value: i16) -> Self {
        Self { celsius: value }
    }

    pub fn degrees_celsius(&self) -> i16 {
        self.celsius
    }

    /// Parses the `M05` / `12` style used by temperature groups.
    pub(crate) fn from_code(code: &str) -> Option<Self> {
        let (negative, digits) = match code.strip_prefix('M') {
            Some(rest) => (true, rest),
            None => (false, code),
        };
        let value: i16 = digits.parse().ok()?;
        Some(Self::celsius(if negative { -value } else { value }))
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} °C", self.celsius)
    }
}

/// Unit of a reported altimeter setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PressureUnit {
    Hectopascals,
    InchesOfMercury,
}

/// Sea-level pressure (QNH) as reported.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pressure {
    value: f64,
    unit: PressureUnit,
}

impl Pressure {
    pub fn new(value: f64, unit: PressureUnit) -> Self {
        Self { value, unit }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> PressureUnit {
        self.unit
    }

    /// Pressure in whole hectopascals.
    pub fn hectopascals(&self) -> f64 {
        match self.unit {
            PressureUnit::Hectopascals => self.value.round(),
            PressureUnit::InchesOfMercury => (self.value / 0.02953).round(),
        }
    }
}

impl fmt::Display for Pressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            PressureUnit::Hectopascals => write!(f, "{} hPa", self.value),
            PressureUnit::InchesOfMercury => write!(f, "{:.2} inHg", self.value),
        }
    }
}

/// A true bearing in whole degrees, 0..=360.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Angle {
    degrees: u16,
}

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

impl Angle {
    /// Returns `None` for bearings above 360 degrees.
    pub fn degrees(value: u16) -> Option<Self> {
        (value <= 360).then_some(Self { degrees: value })
    }

    pub fn value(&self) -> u16 {
        self.degrees
    }

    /// Nearest point of the 16-point compass rose.
    pub fn compass(&self) -> &'static str {
        let index = (f64::from(self.degrees) / 22.5).round() as usize % COMPASS_POINTS.len();
        COMPASS_POINTS[index]
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}°", self.degrees)
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
