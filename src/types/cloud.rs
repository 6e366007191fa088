//! Cloud layers (`FEW017`, `BKN040CB`, `VV002`) and clear-sky codes.

use crate::types::units::Distance;
use serde::{Deserialize, Serialize};

/// Amount of sky covered by a layer, in oktas bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloudCover {
    /// 1-2 oktas
    Few,
    /// 3-4 oktas
    Scattered,
    /// 5-7 oktas
    Broken,
    /// 8 oktas
    Overcast,
}

impl CloudCover {
    pub(crate) fn from_code(code: &str) -> Option<Self> {
        match code {
            "FEW" => Some(CloudCover::Few),
            "SCT" => Some(CloudCover::Scattered),
            "BKN" => Some(CloudCover::Broken),
            "OVC" => Some(CloudCover::Overcast),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            CloudCover::Few => "FEW",
            CloudCover::Scattered => "SCT",
            CloudCover::Broken => "BKN",
            CloudCover::Overcast => "OVC",
        }
    }
}

/// Convective cloud type appended to a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConvectiveCloud {
    Cumulonimbus,
    ToweringCumulus,
}

impl ConvectiveCloud {
    pub(crate) fn from_code(code: &str) -> Option<Self> {
        match code {
            "CB" => Some(ConvectiveCloud::Cumulonimbus),
            "TCU" => Some(ConvectiveCloud::ToweringCumulus),
            _ => None,
        }
    }
}

/// Codes reporting the absence of (significant) cloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearSky {
    /// `NSC`
    NoSignificantCloud,
    /// `NCD`
    NilCloudDetected,
    /// `SKC`
    SkyClear,
    /// `CLR`
    Clear,
    /// `NOBS`
    NotObserved,
}

impl ClearSky {
    pub(crate) fn from_code(code: &str) -> Option<Self> {
        match code {
            "NSC" => Some(ClearSky::NoSignificantCloud),
            "NCD" => Some(ClearSky::NilCloudDetected),
            "SKC" => Some(ClearSky::SkyClear),
            "CLR" => Some(ClearSky::Clear),
            "NOBS" => Some(ClearSky::NotObserved),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ClearSky::NoSignificantCloud => "NSC",
            ClearSky::NilCloudDetected => "NCD",
            ClearSky::SkyClear => "SKC",
            ClearSky::Clear => "CLR",
            ClearSky::NotObserved => "NOBS",
        }
    }
}

/// A decoded cloud group. Heights reported as `///` are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloudLayer {
    Layer {
        cover: Option<CloudCover>,
        base: Option<Distance>,
        convective: Option<ConvectiveCloud>,
    },
    /// Sky obscured; vertical visibility into the obscuration.
    VerticalVisibility { height: Option<Distance> },
    Clear(ClearSky),
}

impl CloudLayer {
    pub fn cover(&self) -> Option<CloudCover> {
        match self {
            CloudLayer::Layer { cover, .. } => *cover,
            _ => None,
        }
    }

    /// Base of the layer, or the vertical visibility for an obscured sky.
    pub fn base(&self) -> Option<Distance> {
        match self {
            CloudLayer::Layer { base, .. } => *base,
            CloudLayer::VerticalVisibility { height } => *height,
            CloudLayer::Clear(_) => None,
        }
    }

    pub fn convective(&self) -> Option<ConvectiveCloud> {
        match self {
            CloudLayer::Layer { convective, .. } => *convective,
            _ => None,
        }
    }

    /// True for layers that constitute a ceiling (BKN, OVC, VV).
    pub fn is_ceiling(&self) -> bool {
        matches!(
            self,
            CloudLayer::VerticalVisibility { .. }
                | CloudLayer::Layer {
                    cover: Some(CloudCover::Broken | CloudCover::Overcast),
                    ..
                }
        )
    }
}

/// Result of searching a set of layers for the lowest ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ceiling {
    /// Base of the lowest BKN, OVC or VV layer.
    Height(Distance),
    /// No layer covers half of the sky or more.
    Unlimited,
    /// A covering layer is present but its height was reported as `///`.
    Unknown,
}

impl Ceiling {
    pub fn height(&self) -> Option<Distance> {
        match self {
            Ceiling::Height(height) => Some(*height),
            _ => None,
        }
    }
}

/// Lowest ceiling among `layers`.
pub fn ceiling(layers: &[CloudLayer]) -> Ceiling {
    let mut lowest: Option<Distance> = None;
    for layer in layers.iter().filter(|layer| layer.is_ceiling()) {
        let Some(base) = layer.base() else {
            return Ceiling::Unknown;
        };
        lowest = match lowest {
            Some(current) if current.to_metres() <= base.to_metres() => Some(current),
            _ => Some(base),
        };
    }
    lowest.map_or(Ceiling::Unlimited, Ceiling::Height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(cover: CloudCover, feet: f64) -> CloudLayer {
        CloudLayer::Layer {
            cover: Some(cover),
            base: Some(Distance::feet(feet)),
            convective: None,
        }
    }

    #[test]
    fn test_ceiling_picks_lowest_covering_layer() {
        let layers = [
            layer(CloudCover::Few, 800.0),
            layer(CloudCover::Overcast, 4000.0),
            layer(CloudCover::Broken, 1200.0),
        ];
        assert_eq!(ceiling(&layers), Ceiling::Height(Distance::feet(1200.0)));
    }

    #[test]
    fn test_ceiling_without_covering_layers() {
        let layers = [
            layer(CloudCover::Scattered, 2500.0),
            CloudLayer::Clear(ClearSky::NoSignificantCloud),
        ];
        assert_eq!(ceiling(&layers), Ceiling::Unlimited);
    }

    #[test]
    fn test_ceiling_with_unknown_height() {
        let layers = [CloudLayer::VerticalVisibility { height: None }];
        assert_eq!(ceiling(&layers), Ceiling::Unknown);
    }
}
