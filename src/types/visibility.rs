//! Horizontal visibility: prevailing value, directional minimum and CAVOK.

use crate::types::units::{Bound, Distance};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Metres reported for CAVOK and for the `9999` sentinel.
pub const MAX_REPORTED_METRES: f64 = 10_000.0;

/// Eight-point direction attached to a directional visibility (`2000SW`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Octant {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Octant {
    pub(crate) fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "N" => Octant::N,
            "NE" => Octant::NE,
            "E" => Octant::E,
            "SE" => Octant::SE,
            "S" => Octant::S,
            "SW" => Octant::SW,
            "W" => Octant::W,
            "NW" => Octant::NW,
            _ => return None,
        })
    }
}

impl fmt::Display for Octant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// One visibility value with its `P`/`M` qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibilityReading {
    distance: Distance,
    bound: Bound,
    direction: Option<Octant>,
}

impl VisibilityReading {
    pub fn new(distance: Distance, bound: Bound, direction: Option<Octant>) -> Self {
        Self {
            distance,
            bound,
            direction,
        }
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn bound(&self) -> Bound {
        self.bound
    }

    pub fn direction(&self) -> Option<Octant> {
        self.direction
    }
}

/// A decoded visibility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Ceiling and visibility OK: 10 km or more, no cloud below 5000 ft, no
    /// significant weather.
    Cavok,
    /// `////`
    Unknown,
    Reported {
        prevailing: VisibilityReading,
        /// Lowest visibility in one direction, when it differs markedly.
        minimum: Option<VisibilityReading>,
    },
}

impl Visibility {
    pub fn reported(prevailing: VisibilityReading) -> Self {
        Visibility::Reported {
            prevailing,
            minimum: None,
        }
    }

    pub fn is_cavok(&self) -> bool {
        matches!(self, Visibility::Cavok)
    }

    pub fn prevailing(&self) -> Option<VisibilityReading> {
        match self {
            Visibility::Reported { prevailing, .. } => Some(*prevailing),
            _ => None,
        }
    }

    pub fn minimum(&self) -> Option<VisibilityReading> {
        match self {
            Visibility::Reported { minimum, .. } => *minimum,
            _ => None,
        }
    }

    /// Prevailing visibility in whole metres; CAVOK counts as 10 km.
    pub fn metres(&self) -> Option<f64> {
        match self {
            Visibility::Cavok => Some(MAX_REPORTED_METRES),
            Visibility::Unknown => None,
            Visibility::Reported { prevailing, .. } => Some(prevailing.distance.to_metres()),
        }
    }

    /// Adds a directional minimum to a reported visibility.
    ///
    /// Returns `None` when this visibility cannot carry one or already does.
    pub(crate) fn with_minimum(self, reading: VisibilityReading) -> Option<Self> {
        match self {
            Visibility::Reported {
                prevailing,
                minimum: None,
            } => Some(Visibility::Reported {
                prevailing,
                minimum: Some(reading),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::units::DistanceUnit;

    #[test]
    fn test_directional_minimum() {
        let prevailing = VisibilityReading::new(Distance::metres(6000.0), Bound::Exact, None);
        let minimum = VisibilityReading::new(Distance::metres(2000.0), Bound::Exact, Some(Octant::SW));
        let visibility = Visibility::reported(prevailing).with_minimum(minimum).unwrap();
        assert_eq!(visibility.metres(), Some(6000.0));
        assert_eq!(visibility.minimum().and_then(|m| m.direction()), Some(Octant::SW));
        assert!(visibility.with_minimum(minimum).is_none());
    }

    #[test]
    fn test_cavok_and_statute_miles() {
        assert_eq!(Visibility::Cavok.metres(), Some(MAX_REPORTED_METRES));
        assert_eq!(Visibility::Unknown.metres(), None);
        let miles = Visibility::reported(VisibilityReading::new(
            Distance::new(1.5, DistanceUnit::StatuteMiles),
            Bound::Exact,
            None,
        ));
        assert_eq!(miles.metres(), Some(2414.0));
    }
}
