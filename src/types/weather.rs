//! Present and recent weather phenomena (`-DZ`, `+TSRA`, `VCSH`, `REFZRA`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Intensity prefix of a phenomenon group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Light,
    #[default]
    Moderate,
    Heavy,
}

impl Intensity {
    fn prefix(self) -> &'static str {
        match self {
            Intensity::Light => "-",
            Intensity::Moderate => "",
            Intensity::Heavy => "+",
        }
    }
}

macro_rules! weather_code_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $code:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// All two-letter codes of this family.
            pub const CODES: &'static [&'static str] = &[$($code),+];

            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some($name::$variant),)+
                    _ => None,
                }
            }

            pub fn code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code),+
                }
            }
        }
    };
}

weather_code_enum!(
    /// Qualifier describing how the phenomenon occurs.
    Descriptor {
        Shallow => "MI",
        Partial => "PR",
        Patches => "BC",
        LowDrifting => "DR",
        Blowing => "BL",
        Showers => "SH",
        Thunderstorm => "TS",
        Freezing => "FZ",
    }
);

weather_code_enum!(
    /// Precipitation types; a group may combine several (`RASN`).
    Precipitation {
        Drizzle => "DZ",
        Rain => "RA",
        Snow => "SN",
        SnowGrains => "SG",
        IceCrystals => "IC",
        IcePellets => "PL",
        Hail => "GR",
        SmallHail => "GS",
        Unknown => "UP",
    }
);

weather_code_enum!(
    /// Obscurations reducing visibility.
    Obscuration {
        Mist => "BR",
        Fog => "FG",
        Smoke => "FU",
        Dust => "DU",
        Sand => "SA",
        Haze => "HZ",
    }
);

weather_code_enum!(
    /// Remaining phenomena.
    OtherPhenomenon {
        Spray => "PY",
        VolcanicAsh => "VA",
        DustWhirls => "PO",
        Squalls => "SQ",
        FunnelCloud => "FC",
        Sandstorm => "SS",
        Duststorm => "DS",
    }
);

/// A decoded weather group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WeatherPhenomenon {
    intensity: Intensity,
    in_vicinity: bool,
    descriptor: Option<Descriptor>,
    precipitation: Vec<Precipitation>,
    obscuration: Option<Obscuration>,
    other: Option<OtherPhenomenon>,
}

impl WeatherPhenomenon {
    pub fn new(
        intensity: Intensity,
        in_vicinity: bool,
        descriptor: Option<Descriptor>,
        precipitation: Vec<Precipitation>,
        obscuration: Option<Obscuration>,
        other: Option<OtherPhenomenon>,
    ) -> Self {
        Self {
            intensity,
            in_vicinity,
            descriptor,
            precipitation,
            obscuration,
            other,
        }
    }

    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    /// `VC`: observed within 8 km but not at the aerodrome.
    pub fn in_vicinity(&self) -> bool {
        self.in_vicinity
    }

    pub fn descriptor(&self) -> Option<Descriptor> {
        self.descriptor
    }

    pub fn precipitation(&self) -> &[Precipitation] {
        &self.precipitation
    }

    pub fn obscuration(&self) -> Option<Obscuration> {
        self.obscuration
    }

    pub fn other(&self) -> Option<OtherPhenomenon> {
        self.other
    }

    pub fn has_precipitation(&self) -> bool {
        !self.precipitation.is_empty()
    }

    pub fn is_thunderstorm(&self) -> bool {
        self.descriptor == Some(Descriptor::Thunderstorm)
    }

    pub fn is_freezing(&self) -> bool {
        self.descriptor == Some(Descriptor::Freezing)
    }

    pub fn is_showers(&self) -> bool {
        self.descriptor == Some(Descriptor::Showers)
    }

    pub fn has_snow(&self) -> bool {
        self.has_any(&[Precipitation::Snow, Precipitation::SnowGrains])
    }

    pub fn has_ice(&self) -> bool {
        self.has_any(&[Precipitation::IceCrystals, Precipitation::IcePellets])
    }

    pub fn has_hail(&self) -> bool {
        self.has_any(&[Precipitation::Hail, Precipitation::SmallHail])
    }

    pub fn has_fog(&self) -> bool {
        self.obscuration == Some(Obscuration::Fog)
    }

    /// Re-encodes the group, e.g. `+TSRA` or `VCSH`.
    pub fn code(&self) -> String {
        let mut code = String::from(if self.in_vicinity {
            "VC"
        } else {
            self.intensity.prefix()
        });
        if let Some(descriptor) = self.descriptor {
            code.push_str(descriptor.code());
        }
        for precipitation in &self.precipitation {
            code.push_str(precipitation.code());
        }
        if let Some(obscuration) = self.obscuration {
            code.push_str(obscuration.code());
        }
        if let Some(other) = self.other {
            code.push_str(other.code());
        }
        code
    }

    fn has_any(&self, kinds: &[Precipitation]) -> bool {
        self.precipitation.iter().any(|p| kinds.contains(p))
    }
}

impl fmt::Display for WeatherPhenomenon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip_of_families() {
        for code in Precipitation::CODES {
            assert_eq!(Precipitation::from_code(code).map(|p| p.code()), Some(*code));
        }
        assert_eq!(Descriptor::from_code("TS"), Some(Descriptor::Thunderstorm));
        assert_eq!(Obscuration::from_code("RA"), None);
    }

    #[test]
    fn test_phenomenon_flags_and_code() {
        let storm = WeatherPhenomenon::new(
            Intensity::Heavy,
            false,
            Some(Descriptor::Thunderstorm),
            vec![Precipitation::Rain, Precipitation::SmallHail],
            None,
            None,
        );
        assert!(storm.is_thunderstorm());
        assert!(storm.has_hail());
        assert!(!storm.has_snow());
        assert_eq!(storm.code(), "+TSRAGS");

        let showers_nearby = WeatherPhenomenon::new(
            Intensity::Moderate,
            true,
            Some(Descriptor::Showers),
            vec![],
            None,
            None,
        );
        assert_eq!(showers_nearby.to_string(), "VCSH");
    }
}
