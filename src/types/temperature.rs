//! Observed temperature/dew point and forecast extremes (`TX15/0514Z`).

use crate::types::time::DayTime;
use crate::types::units::Temperature;
use serde::{Deserialize, Serialize};

/// The `06/03` group. A dew point of `XX` or a missing one is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemperatureDewpoint {
    temperature: Temperature,
    dewpoint: Option<Temperature>,
}

impl TemperatureDewpoint {
    pub fn new(temperature: Temperature, dewpoint: Option<Temperature>) -> Self {
        Self {
            temperature,
            dewpoint,
        }
    }

    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    pub fn dewpoint(&self) -> Option<Temperature> {
        self.dewpoint
    }

    /// Temperature minus dew point, a quick fog indicator.
    pub fn spread(&self) -> Option<i16> {
        self.dewpoint
            .map(|dewpoint| self.temperature.degrees_celsius() - dewpoint.degrees_celsius())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extreme {
    Maximum,
    Minimum,
}

/// A TAF `TX`/`TN` group: forecast extreme temperature and when it occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemperatureForecast {
    extreme: Extreme,
    temperature: Temperature,
    at: DayTime,
}

impl TemperatureForecast {
    pub fn new(extreme: Extreme, temperature: Temperature, at: DayTime) -> Self {
        Self {
            extreme,
            temperature,
            at,
        }
    }

    pub fn extreme(&self) -> Extreme {
        self.extreme
    }

    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    pub fn at(&self) -> DayTime {
        self.at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spread() {
        let group = TemperatureDewpoint::new(Temperature::celsius(6), Some(Temperature::celsius(3)));
        assert_eq!(group.spread(), Some(3));
        let frost = TemperatureDewpoint::new(Temperature::celsius(-2), Some(Temperature::celsius(-5)));
        assert_eq!(frost.spread(), Some(3));
        assert_eq!(TemperatureDewpoint::new(Temperature::celsius(6), None).spread(), None);
    }
}
