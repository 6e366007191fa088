use crate::types::cloud::{ceiling, Ceiling, CloudLayer};
use crate::types::visibility::Visibility;
use crate::types::weather::WeatherPhenomenon;
use crate::types::wind::{Wind, WindShear};
use serde::{Deserialize, Serialize};

/// The attribute set shared by TAF base conditions, change groups, resolved
/// forecast periods and METAR trends.
///
/// `None` means the attribute was not stated. For weather and clouds,
/// `Some(vec![])` means it was explicitly stated as absent (`NSW`, `NSC`,
/// `SKC`, `CAVOK`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Conditions {
    pub(crate) wind: Option<Wind>,
    pub(crate) visibility: Option<Visibility>,
    pub(crate) weather: Option<Vec<WeatherPhenomenon>>,
    pub(crate) clouds: Option<Vec<CloudLayer>>,
    pub(crate) wind_shear: Option<WindShear>,
}

impl Conditions {
    pub fn wind(&self) -> Option<&Wind> {
        self.wind.as_ref()
    }

    pub fn visibility(&self) -> Option<&Visibility> {
        self.visibility.as_ref()
    }

    pub fn weather(&self) -> Option<&[WeatherPhenomenon]> {
        self.weather.as_deref()
    }

    pub fn clouds(&self) -> Option<&[CloudLayer]> {
        self.clouds.as_deref()
    }

    pub fn wind_shear(&self) -> Option<&WindShear> {
        self.wind_shear.as_ref()
    }

    /// Lowest ceiling of the stated cloud layers, `None` when clouds are not
    /// stated. CAVOK implies no ceiling.
    pub fn ceiling(&self) -> Option<Ceiling> {
        match (&self.clouds, &self.visibility) {
            (Some(layers), _) => Some(ceiling(layers)),
            (None, Some(Visibility::Cavok)) => Some(Ceiling::Unlimited),
            (None, _) => None,
        }
    }

    /// Replaces every attribute that `changes` states.
    pub(crate) fn apply(&mut self, changes: &Conditions) {
        if changes.wind.is_some() {
            self.wind = changes.wind;
        }
        if changes.visibility.is_some() {
            self.visibility = changes.visibility;
        }
        if changes.weather.is_some() {
            self.weather.clone_from(&changes.weather);
        }
        if changes.clouds.is_some() {
            self.clouds.clone_from(&changes.clouds);
        }
        if changes.wind_shear.is_some() {
            self.wind_shear = changes.wind_shear;
        }
    }

    /// CAVOK states weather and clouds as absent unless they were given
    /// explicitly alongside it.
    pub(crate) fn settle_cavok(&mut self) {
        if matches!(self.visibility, Some(Visibility::Cavok)) {
            self.weather.get_or_insert_with(Vec::new);
            self.clouds.get_or_insert_with(Vec::new);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::cloud::CloudCover;
    use crate::types::units::{Bound, Distance, Speed, SpeedUnit};
    use crate::types::visibility::VisibilityReading;
    use crate::types::weather::{Intensity, Precipitation};
    use crate::types::wind::WindDirection;

    fn visibility(metres: f64) -> Visibility {
        Visibility::reported(VisibilityReading::new(Distance::metres(metres), Bound::Exact, None))
    }

    fn drizzle() -> WeatherPhenomenon {
        WeatherPhenomenon::new(Intensity::Light, false, None, vec![Precipitation::Drizzle], None, None)
    }

    #[test]
    fn test_apply_replaces_only_stated_fields() {
        let mut base = Conditions {
            wind: Some(Wind::new(
                WindDirection::Variable,
                Some(Speed::new(5, SpeedUnit::Knots)),
                None,
                None,
            )),
            visibility: Some(visibility(9999.0)),
            weather: Some(vec![drizzle()]),
            ..Conditions::default()
        };
        let changes = Conditions {
            visibility: Some(visibility(3500.0)),
            weather: Some(vec![]),
            ..Conditions::default()
        };
        base.apply(&changes);
        assert!(base.wind().is_some());
        assert_eq!(base.visibility().and_then(Visibility::metres), Some(3500.0));
        assert_eq!(base.weather(), Some(&[][..]));
    }

    #[test]
    fn test_cavok_settles_weather_and_clouds() {
        let mut conditions = Conditions {
            visibility: Some(Visibility::Cavok),
            ..Conditions::default()
        };
        conditions.settle_cavok();
        assert_eq!(conditions.weather(), Some(&[][..]));
        assert_eq!(conditions.clouds(), Some(&[][..]));
        assert_eq!(conditions.ceiling(), Some(Ceiling::Unlimited));
    }

    #[test]
    fn test_ceiling_requires_stated_clouds() {
        assert_eq!(Conditions::default().ceiling(), None);
        let overcast = Conditions {
            clouds: Some(vec![CloudLayer::Layer {
                cover: Some(CloudCover::Overcast),
                base: Some(Distance::feet(600.0)),
                convective: None,
            }]),
            ..Conditions::default()
        };
        assert_eq!(overcast.ceiling(), Some(Ceiling::Height(Distance::feet(600.0))));
    }
}
