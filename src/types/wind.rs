//! Surface wind and wind shear groups.

use crate::types::runway::RunwayDesignator;
use crate::types::units::{Angle, Distance, Speed};
use serde::{Deserialize, Serialize};

/// Mean wind direction as reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindDirection {
    /// A true bearing, e.g. `020` in `02007KT`.
    Degrees(Angle),
    /// `VRB`: direction too variable to report a mean.
    Variable,
    /// `///`: direction not available.
    Unknown,
}

impl WindDirection {
    pub fn angle(&self) -> Option<Angle> {
        match self {
            WindDirection::Degrees(angle) => Some(*angle),
            _ => None,
        }
    }
}

/// Extremes of a varying wind direction (`340V050`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariableRange {
    from: Angle,
    to: Angle,
}

impl VariableRange {
    pub fn new(from: Angle, to: Angle) -> Self {
        Self { from, to }
    }

    pub fn from(&self) -> Angle {
        self.from
    }

    pub fn to(&self) -> Angle {
        self.to
    }
}

/// A decoded wind group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wind {
    direction: WindDirection,
    speed: Option<Speed>,
    gust: Option<Speed>,
    variable_range: Option<VariableRange>,
}

impl Wind {
    pub fn new(
        direction: WindDirection,
        speed: Option<Speed>,
        gust: Option<Speed>,
        variable_range: Option<VariableRange>,
    ) -> Self {
        Self {
            direction,
            speed,
            gust,
            variable_range,
        }
    }

    pub fn direction(&self) -> WindDirection {
        self.direction
    }

    /// Mean speed, `None` when reported as `//`.
    pub fn speed(&self) -> Option<Speed> {
        self.speed
    }

    pub fn gust(&self) -> Option<Speed> {
        self.gust
    }

    pub fn variable_range(&self) -> Option<VariableRange> {
        self.variable_range
    }

    /// `00000KT`
    pub fn is_calm(&self) -> bool {
        matches!(self.speed, Some(speed) if speed.value() == 0) && self.gust.is_none()
    }
}

/// Wind shear reported in a METAR (`WS R24`, `WS ALL RWY`) or forecast in a
/// TAF (`WS020/24045KT`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindShear {
    /// Shear on a single runway.
    Runway(RunwayDesignator),
    /// Shear on all runways.
    AllRunways,
    /// Low-level shear forecast at a height with the wind at that height.
    Layer {
        height: Distance,
        direction: Angle,
        speed: Speed,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::units::SpeedUnit;

    #[test]
    fn test_calm_wind() {
        let calm = Wind::new(
            WindDirection::Degrees(Angle::degrees(0).unwrap()),
            Some(Speed::new(0, SpeedUnit::Knots)),
            None,
            None,
        );
        assert!(calm.is_calm());
        let breezy = Wind::new(WindDirection::Variable, Some(Speed::new(3, SpeedUnit::Knots)), None, None);
        assert!(!breezy.is_calm());
    }
}
