//! Ordered matching table from group formats to [`GroupKind`].

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// Every group format understood by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    Station,
    ObservationTime,
    ValidityPeriod,
    Wind,
    VisibilityGroup,
    Cavok,
    RunwayVisualRange,
    RunwayState,
    WeatherPhenomenon,
    RecentWeather,
    NoSignificantWeather,
    CloudLayer,
    TemperatureDewpoint,
    Pressure,
    WindShear,
    TrendIndicator,
    ChangeHeader,
    ProbabilityHeader,
    MinMaxTemperatureForecast,
    NoSignificantChange,
    Modifier,
    RemarkMarker,
    /// Fallback for groups matching no format.
    Remark,
}

const WEATHER: &str = r"([-+]|VC)?(MI|PR|BC|DR|BL|SH|TS|FZ)?((?:DZ|RA|SN|SG|IC|PL|GR|GS|UP)*)(BR|FG|FU|DU|SA|HZ)?(PY|VA|PO|SQ|FC|SS|DS)?";

static STATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][A-Z0-9]{3}$").unwrap());

/// Matching table, tried top to bottom; the first match wins.
static GROUP_FORMATS: Lazy<Vec<(GroupKind, Regex)>> = Lazy::new(|| {
    let table = [
        (GroupKind::RemarkMarker, r"^RMK$".to_string()),
        (GroupKind::NoSignificantChange, r"^NOSIG$".to_string()),
        (GroupKind::Modifier, r"^(AUTO|COR|CC[A-Z]|AMD|NIL|CNL)$".to_string()),
        (GroupKind::ChangeHeader, r"^(BECMG|TEMPO|INTER|FM(\d{2})(\d{2})(\d{2}))$".to_string()),
        (GroupKind::ProbabilityHeader, r"^PROB(\d{2})(\s+TEMPO)?$".to_string()),
        (GroupKind::TrendIndicator, r"^(FM|TL|AT)(\d{2})(\d{2})$".to_string()),
        (GroupKind::ObservationTime, r"^(\d{2})(\d{2})(\d{2})Z$".to_string()),
        (GroupKind::ValidityPeriod, r"^(\d{2})(\d{2})/(\d{2})(\d{2})$".to_string()),
        (
            GroupKind::Wind,
            r"^(\d{3}|VRB|///)P?(\d{2,3}|//)(?:GP?(\d{2,3}))?(KT|MPS|KMH|KPH)(?:\s+(\d{3})V(\d{3}))?$"
                .to_string(),
        ),
        (GroupKind::Cavok, r"^CAVOK$".to_string()),
        (
            GroupKind::VisibilityGroup,
            r"^(?:(\d{4})(NDV|NE|NW|SE|SW|N|E|S|W)?|([PM])?(\d{1,2})?(?:\s*(\d)/(\d{1,2}))?SM|(////))$"
                .to_string(),
        ),
        (
            GroupKind::RunwayVisualRange,
            r"^R(\d{2}[LCR]?)/(?:([PM])?(\d{4})V)?([PM])?(\d{4})(FT)?/?([UDN])?$".to_string(),
        ),
        (
            GroupKind::RunwayState,
            r"^(?:R(\d{2}[LCR]?)/|(\d{2}))(?:([0-9/])([1259/])(\d{2}|//)|(CLRD))(\d{2}|//)$".to_string(),
        ),
        (
            GroupKind::WindShear,
            r"^WS(?:\s+R(?:WY)?(\d{2}[LCR]?)|\s+(ALL\s+RWY)|(\d{3})/(\d{3})(\d{2,3})(KT|MPS))$".to_string(),
        ),
        (GroupKind::NoSignificantWeather, r"^NSW$".to_string()),
        (GroupKind::RecentWeather, format!("^RE{WEATHER}$")),
        (
            GroupKind::CloudLayer,
            r"^(?:(NSC|NCD|SKC|CLR|NOBS)|(VV|FEW|SCT|BKN|OVC|///)(\d{3}|///)(CB|TCU|///)?)$".to_string(),
        ),
        (GroupKind::TemperatureDewpoint, r"^(M?\d{2})/(M?\d{2}|XX|//)?$".to_string()),
        (GroupKind::Pressure, r"^([QA])(\d{4}|////)$".to_string()),
        (GroupKind::MinMaxTemperatureForecast, r"^T([XN])(M?\d{2})/(\d{2})(\d{2})Z$".to_string()),
        (GroupKind::WeatherPhenomenon, format!("^{WEATHER}$")),
    ];
    table
        .into_iter()
        .map(|(kind, pattern)| (kind, Regex::new(&pattern).unwrap()))
        .collect()
});

/// Station identifiers are positional and never matched through the table.
pub fn is_station(text: &str) -> bool {
    STATION.is_match(text)
}

/// Classifies a group, returning its kind and the captures of its format.
///
/// Groups matching no format come back as [`GroupKind::Remark`] without
/// captures.
pub fn classify(text: &str) -> (GroupKind, Option<Captures<'_>>) {
    GROUP_FORMATS
        .iter()
        .find_map(|(kind, format)| format.captures(text).map(|captures| (*kind, Some(captures))))
        .unwrap_or((GroupKind::Remark, None))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(text: &str) -> GroupKind {
        classify(text).0
    }

    #[test]
    fn test_classifies_metar_groups() {
        assert_eq!(kind("051825Z"), GroupKind::ObservationTime);
        assert_eq!(kind("02007KT"), GroupKind::Wind);
        assert_eq!(kind("02007KT 340V050"), GroupKind::Wind);
        assert_eq!(kind("VRB03G15MPS"), GroupKind::Wind);
        assert_eq!(kind("9999"), GroupKind::VisibilityGroup);
        assert_eq!(kind("2000SW"), GroupKind::VisibilityGroup);
        assert_eq!(kind("M1/4SM"), GroupKind::VisibilityGroup);
        assert_eq!(kind("1 1/2SM"), GroupKind::VisibilityGroup);
        assert_eq!(kind("P6SM"), GroupKind::VisibilityGroup);
        assert_eq!(kind("R24/P1500N"), GroupKind::RunwayVisualRange);
        assert_eq!(kind("R06L/0600V1000FT/U"), GroupKind::RunwayVisualRange);
        assert_eq!(kind("R24/290050"), GroupKind::RunwayState);
        assert_eq!(kind("R24/CLRD70"), GroupKind::RunwayState);
        assert_eq!(kind("+TSRAGS"), GroupKind::WeatherPhenomenon);
        assert_eq!(kind("VCSH"), GroupKind::WeatherPhenomenon);
        assert_eq!(kind("RERA"), GroupKind::RecentWeather);
        assert_eq!(kind("FEW017"), GroupKind::CloudLayer);
        assert_eq!(kind("BKN040CB"), GroupKind::CloudLayer);
        assert_eq!(kind("VV///"), GroupKind::CloudLayer);
        assert_eq!(kind("NSC"), GroupKind::CloudLayer);
        assert_eq!(kind("06/03"), GroupKind::TemperatureDewpoint);
        assert_eq!(kind("M02/M05"), GroupKind::TemperatureDewpoint);
        assert_eq!(kind("Q1042"), GroupKind::Pressure);
        assert_eq!(kind("A2992"), GroupKind::Pressure);
        assert_eq!(kind("WS R24"), GroupKind::WindShear);
        assert_eq!(kind("WS ALL RWY"), GroupKind::WindShear);
        assert_eq!(kind("NOSIG"), GroupKind::NoSignificantChange);
        assert_eq!(kind("RMK"), GroupKind::RemarkMarker);
        assert_eq!(kind("AUTO"), GroupKind::Modifier);
    }

    #[test]
    fn test_classifies_taf_groups() {
        assert_eq!(kind("0412/0518"), GroupKind::ValidityPeriod);
        assert_eq!(kind("BECMG"), GroupKind::ChangeHeader);
        assert_eq!(kind("INTER"), GroupKind::ChangeHeader);
        assert_eq!(kind("FM041530"), GroupKind::ChangeHeader);
        assert_eq!(kind("PROB30"), GroupKind::ProbabilityHeader);
        assert_eq!(kind("PROB40 TEMPO"), GroupKind::ProbabilityHeader);
        assert_eq!(kind("TX15/0514Z"), GroupKind::MinMaxTemperatureForecast);
        assert_eq!(kind("TNM02/0506Z"), GroupKind::MinMaxTemperatureForecast);
        assert_eq!(kind("WS020/24045KT"), GroupKind::WindShear);
        assert_eq!(kind("NSW"), GroupKind::NoSignificantWeather);
        assert_eq!(kind("FM1230"), GroupKind::TrendIndicator);
    }

    #[test]
    fn test_unknown_groups_fall_back_to_remarks() {
        assert_eq!(kind("AO2"), GroupKind::Remark);
        assert_eq!(kind("SLP132"), GroupKind::Remark);
        assert_eq!(kind("QFE1013"), GroupKind::Remark);
        assert!(is_station("EHAM"));
        assert!(!is_station("EHAMX"));
    }
}
