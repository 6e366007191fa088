use crate::types::cloud::CloudLayer;
use crate::types::runway::{RunwayState, RunwayVisualRange};
use crate::types::temperature::TemperatureDewpoint;
use crate::types::time::DayTime;
use crate::types::trend::Trend;
use crate::types::units::Pressure;
use crate::types::visibility::Visibility;
use crate::types::weather::WeatherPhenomenon;
use crate::types::wind::{Wind, WindShear};
use serde::{Deserialize, Serialize};

/// Report modifiers following the station/time groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportModifier {
    /// `AUTO`: fully automated observation.
    Automatic,
    /// `COR`
    Corrected,
    /// `AMD`
    Amended,
    /// `NIL`: report missing.
    Nil,
}

impl ReportModifier {
    pub(crate) fn from_code(code: &str) -> Option<Self> {
        match code {
            "AUTO" => Some(ReportModifier::Automatic),
            "COR" => Some(ReportModifier::Corrected),
            "AMD" => Some(ReportModifier::Amended),
            "NIL" => Some(ReportModifier::Nil),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetarKind {
    #[default]
    Routine,
    /// `SPECI`: special observation issued outside the routine schedule.
    Special,
}

/// A decoded METAR or SPECI observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metar {
    pub(crate) kind: MetarKind,
    pub(crate) station: String,
    pub(crate) time: DayTime,
    pub(crate) modifier: Option<ReportModifier>,
    pub(crate) wind: Option<Wind>,
    pub(crate) visibility: Option<Visibility>,
    pub(crate) runway_visual_ranges: Vec<RunwayVisualRange>,
    pub(crate) runway_states: Vec<RunwayState>,
    pub(crate) weather: Vec<WeatherPhenomenon>,
    pub(crate) clouds: Vec<CloudLayer>,
    pub(crate) temperature: Option<TemperatureDewpoint>,
    pub(crate) pressure: Option<Pressure>,
    pub(crate) recent_weather: Vec<WeatherPhenomenon>,
    pub(crate) wind_shear: Vec<WindShear>,
    pub(crate) trend: Option<Trend>,
    pub(crate) remarks: Option<String>,
}

impl Metar {
    pub(crate) fn new(kind: MetarKind, station: String, time: DayTime) -> Self {
        Self {
            kind,
            station,
            time,
            modifier: None,
            wind: None,
            visibility: None,
            runway_visual_ranges: Vec::new(),
            runway_states: Vec::new(),
            weather: Vec::new(),
            clouds: Vec::new(),
            temperature: None,
            pressure: None,
            recent_weather: Vec::new(),
            wind_shear: Vec::new(),
            trend: None,
            remarks: None,
        }
    }

    pub fn kind(&self) -> MetarKind {
        self.kind
    }

    /// ICAO location indicator, e.g. `EHAM`.
    pub fn station(&self) -> &str {
        &self.station
    }

    /// Observation time.
    pub fn time(&self) -> DayTime {
        self.time
    }

    pub fn modifier(&self) -> Option<ReportModifier> {
        self.modifier
    }

    pub fn wind(&self) -> Option<&Wind> {
        self.wind.as_ref()
    }

    pub fn visibility(&self) -> Option<&Visibility> {
        self.visibility.as_ref()
    }

    pub fn runway_visual_ranges(&self) -> &[RunwayVisualRange] {
        &self.runway_visual_ranges
    }

    pub fn runway_states(&self) -> &[RunwayState] {
        &self.runway_states
    }

    pub fn weather(&self) -> &[WeatherPhenomenon] {
        &self.weather
    }

    pub fn clouds(&self) -> &[CloudLayer] {
        &self.clouds
    }

    pub fn temperature(&self) -> Option<&TemperatureDewpoint> {
        self.temperature.as_ref()
    }

    pub fn pressure(&self) -> Option<&Pressure> {
        self.pressure.as_ref()
    }

    /// `RE` groups: weather that ended within the last hour.
    pub fn recent_weather(&self) -> &[WeatherPhenomenon] {
        &self.recent_weather
    }

    pub fn wind_shear(&self) -> &[WindShear] {
        &self.wind_shear
    }

    pub fn trend(&self) -> Option<&Trend> {
        self.trend.as_ref()
    }

    /// The RMK section and every unrecognised group, verbatim and in order.
    pub fn remarks(&self) -> Option<&str> {
        self.remarks.as_deref()
    }

    /// True for `NIL` reports, which carry no observation.
    pub fn is_nil(&self) -> bool {
        self.modifier == Some(ReportModifier::Nil)
    }
}
