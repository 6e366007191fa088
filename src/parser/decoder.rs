//! Turns classified groups into typed values.

use crate::parser::classifier::{classify, GroupKind};
use crate::parser::error::GroupDecodeError;
use crate::types::cloud::{ClearSky, CloudCover, CloudLayer, ConvectiveCloud};
use crate::types::metar::ReportModifier;
use crate::types::runway::{
    BrakingAction, ContaminationExtent, DepositDepth, RunwayDeposit, RunwayDesignator, RunwayState,
    RunwayVisualRange, RvrReading, RvrTendency,
};
use crate::types::temperature::{Extreme, TemperatureDewpoint, TemperatureForecast};
use crate::types::time::{DayTime, HourMinute};
use crate::types::units::{
    Angle, Bound, Distance, DistanceUnit, Pressure, PressureUnit, Speed, SpeedUnit, Temperature,
};
use crate::types::visibility::{Octant, VisibilityReading};
use crate::types::weather::{
    Descriptor, Intensity, Obscuration, OtherPhenomenon, Precipitation, WeatherPhenomenon,
};
use crate::types::wind::{VariableRange, Wind, WindDirection, WindShear};
use regex::Captures;

/// Header opening a change block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeHeader {
    Becoming,
    Temporary,
    /// `INTER`: short, intermittent fluctuations.
    Intermittent,
    /// `FMddhhmm`
    From(DayTime),
}

/// `FM`, `TL` or `AT` inside a METAR trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendIndicator {
    From,
    Until,
    At,
}

/// A decoded group.
#[derive(Debug, Clone, PartialEq)]
pub enum Group {
    ObservationTime(DayTime),
    Validity { start: DayTime, end: DayTime },
    Wind(Wind),
    Visibility(VisibilityReading),
    UnknownVisibility,
    Cavok,
    RunwayVisualRange(RunwayVisualRange),
    RunwayState(RunwayState),
    Weather(WeatherPhenomenon),
    RecentWeather(WeatherPhenomenon),
    NoSignificantWeather,
    Cloud(CloudLayer),
    TemperatureDewpoint(TemperatureDewpoint),
    Pressure(Option<Pressure>),
    WindShear(WindShear),
    TrendTime(TrendIndicator, HourMinute),
    ChangeHeader(ChangeHeader),
    Probability { percent: u8, temporary: bool },
    TemperatureForecast(TemperatureForecast),
    NoSignificantChange,
    Modifier(ReportModifier),
    /// `CNL`
    Cancelled,
    RemarkMarker,
}

/// Classifies and decodes a single group.
pub fn decode_group(text: &str) -> Result<Group, GroupDecodeError> {
    let (kind, captures) = classify(text);
    let Some(caps) = captures else {
        return Err(GroupDecodeError::Unrecognised(text.to_string()));
    };
    match kind {
        GroupKind::RemarkMarker => Ok(Group::RemarkMarker),
        GroupKind::NoSignificantChange => Ok(Group::NoSignificantChange),
        GroupKind::NoSignificantWeather => Ok(Group::NoSignificantWeather),
        GroupKind::Cavok => Ok(Group::Cavok),
        GroupKind::Modifier => decode_modifier(text),
        GroupKind::ChangeHeader => decode_change_header(text, &caps),
        GroupKind::ProbabilityHeader => Ok(Group::Probability {
            percent: number(&caps, 1).unwrap_or_default(),
            temporary: caps.get(2).is_some(),
        }),
        GroupKind::TrendIndicator => decode_trend_time(text, &caps),
        GroupKind::ObservationTime => day_time(text, &caps, 1, false).map(Group::ObservationTime),
        GroupKind::ValidityPeriod => decode_validity(text, &caps),
        GroupKind::Wind => decode_wind(text, &caps).map(Group::Wind),
        GroupKind::VisibilityGroup => decode_visibility(text, &caps),
        GroupKind::RunwayVisualRange => decode_rvr(text, &caps).map(Group::RunwayVisualRange),
        GroupKind::RunwayState => decode_runway_state(text, &caps).map(Group::RunwayState),
        GroupKind::WindShear => decode_wind_shear(text, &caps).map(Group::WindShear),
        GroupKind::RecentWeather => decode_weather(text, &caps).map(Group::RecentWeather),
        GroupKind::WeatherPhenomenon => decode_weather(text, &caps).map(Group::Weather),
        GroupKind::CloudLayer => Ok(Group::Cloud(decode_cloud(&caps))),
        GroupKind::TemperatureDewpoint => decode_temperature(text, &caps),
        GroupKind::Pressure => Ok(Group::Pressure(decode_pressure(&caps))),
        GroupKind::MinMaxTemperatureForecast => decode_temperature_forecast(text, &caps),
        GroupKind::Station | GroupKind::Remark => {
            Err(GroupDecodeError::Unrecognised(text.to_string()))
        }
    }
}

fn capture<'t>(caps: &Captures<'t>, index: usize) -> Option<&'t str> {
    caps.get(index).map(|m| m.as_str())
}

fn number<T: std::str::FromStr>(caps: &Captures<'_>, index: usize) -> Option<T> {
    capture(caps, index).and_then(|value| value.parse().ok())
}

/// Reads a `ddhhmm` triple starting at capture `first`.
fn day_time(
    text: &str,
    caps: &Captures<'_>,
    first: usize,
    allow_hour_24: bool,
) -> Result<DayTime, GroupDecodeError> {
    let day = number(caps, first);
    let hour = number(caps, first + 1);
    let minute = number(caps, first + 2);
    let time = match (day, hour, minute) {
        (Some(day), Some(hour), Some(minute)) => DayTime::new(day, hour, minute, allow_hour_24),
        _ => None,
    };
    time.ok_or_else(|| GroupDecodeError::out_of_range(text, "day 1-31, hour 0-23, minute 0-59"))
}

fn decode_modifier(text: &str) -> Result<Group, GroupDecodeError> {
    if text == "CNL" {
        return Ok(Group::Cancelled);
    }
    if text.starts_with("CC") {
        return Ok(Group::Modifier(ReportModifier::Corrected));
    }
    ReportModifier::from_code(text)
        .map(Group::Modifier)
        .ok_or_else(|| GroupDecodeError::Unrecognised(text.to_string()))
}

fn decode_change_header(text: &str, caps: &Captures<'_>) -> Result<Group, GroupDecodeError> {
    let header = match text {
        "BECMG" => ChangeHeader::Becoming,
        "TEMPO" => ChangeHeader::Temporary,
        "INTER" => ChangeHeader::Intermittent,
        _ => ChangeHeader::From(day_time(text, caps, 2, false)?),
    };
    Ok(Group::ChangeHeader(header))
}

fn decode_trend_time(text: &str, caps: &Captures<'_>) -> Result<Group, GroupDecodeError> {
    let indicator = match capture(caps, 1) {
        Some("FM") => TrendIndicator::From,
        Some("TL") => TrendIndicator::Until,
        _ => TrendIndicator::At,
    };
    let time = match (number(caps, 2), number(caps, 3)) {
        (Some(hour), Some(minute)) => HourMinute::new(hour, minute),
        _ => None,
    }
    .ok_or_else(|| GroupDecodeError::out_of_range(text, "hour 0-24, minute 0-59"))?;
    Ok(Group::TrendTime(indicator, time))
}

fn decode_validity(text: &str, caps: &Captures<'_>) -> Result<Group, GroupDecodeError> {
    let bounds = |day: Option<u8>, hour: Option<u8>, allow_hour_24| match (day, hour) {
        (Some(day), Some(hour)) => DayTime::new(day, hour, 0, allow_hour_24),
        _ => None,
    };
    let start = bounds(number(caps, 1), number(caps, 2), false);
    let end = bounds(number(caps, 3), number(caps, 4), true);
    match (start, end) {
        (Some(start), Some(end)) => Ok(Group::Validity { start, end }),
        _ => Err(GroupDecodeError::out_of_range(
            text,
            "day 1-31, start hour 0-23, end hour 0-24",
        )),
    }
}

fn decode_wind(text: &str, caps: &Captures<'_>) -> Result<Wind, GroupDecodeError> {
    let unit = capture(caps, 4)
        .and_then(SpeedUnit::from_suffix)
        .ok_or_else(|| GroupDecodeError::out_of_range(text, "unknown speed unit"))?;
    let direction = match capture(caps, 1) {
        Some("VRB") => WindDirection::Variable,
        Some("///") | None => WindDirection::Unknown,
        Some(degrees) => degrees
            .parse()
            .ok()
            .and_then(Angle::degrees)
            .map(WindDirection::Degrees)
            .ok_or_else(|| GroupDecodeError::out_of_range(text, "direction above 360"))?,
    };
    let speed = number(caps, 2).map(|value| Speed::new(value, unit));
    let gust = number(caps, 3).map(|value| Speed::new(value, unit));
    let variable_range = match (number(caps, 5), number(caps, 6)) {
        (Some(from), Some(to)) => match (Angle::degrees(from), Angle::degrees(to)) {
            (Some(from), Some(to)) => Some(VariableRange::new(from, to)),
            _ => {
                return Err(GroupDecodeError::out_of_range(
                    text,
                    "variable direction above 360",
                ))
            }
        },
        _ => None,
    };
    Ok(Wind::new(direction, speed, gust, variable_range))
}

fn decode_visibility(text: &str, caps: &Captures<'_>) -> Result<Group, GroupDecodeError> {
    if caps.get(7).is_some() {
        return Ok(Group::UnknownVisibility);
    }
    if let Some(metres) = number::<u16>(caps, 1) {
        let direction = capture(caps, 2).and_then(Octant::from_code);
        let reading = if metres == 9999 {
            VisibilityReading::new(
                Distance::new(10.0, DistanceUnit::Kilometres),
                Bound::AtOrAbove,
                direction,
            )
        } else {
            VisibilityReading::new(Distance::metres(f64::from(metres)), Bound::Exact, direction)
        };
        return Ok(Group::Visibility(reading));
    }

    let whole = number::<u8>(caps, 4).map(f64::from);
    let fraction = match (number::<u8>(caps, 5), number::<u8>(caps, 6)) {
        (Some(_), Some(0)) => {
            return Err(GroupDecodeError::out_of_range(text, "zero denominator"));
        }
        (Some(numerator), Some(denominator)) => {
            Some(f64::from(numerator) / f64::from(denominator))
        }
        _ => None,
    };
    if whole.is_none() && fraction.is_none() {
        return Err(GroupDecodeError::out_of_range(text, "no distance before SM"));
    }
    let miles = whole.unwrap_or_default() + fraction.unwrap_or_default();
    Ok(Group::Visibility(VisibilityReading::new(
        Distance::new(miles, DistanceUnit::StatuteMiles),
        Bound::from_prefix(capture(caps, 3)),
        None,
    )))
}

fn rvr_reading(caps: &Captures<'_>, bound: usize, value: usize, unit: DistanceUnit) -> Option<RvrReading> {
    let value: u16 = number(caps, value)?;
    Some(RvrReading::new(
        Distance::new(f64::from(value), unit),
        Bound::from_prefix(capture(caps, bound)),
    ))
}

fn runway(text: &str, code: Option<&str>) -> Result<RunwayDesignator, GroupDecodeError> {
    code.and_then(RunwayDesignator::parse)
        .ok_or_else(|| GroupDecodeError::out_of_range(text, "runway number 01-36, 88 or 99"))
}

fn decode_rvr(text: &str, caps: &Captures<'_>) -> Result<RunwayVisualRange, GroupDecodeError> {
    let runway = runway(text, capture(caps, 1))?;
    let unit = if caps.get(6).is_some() {
        DistanceUnit::Feet
    } else {
        DistanceUnit::Metres
    };
    let last = rvr_reading(caps, 4, 5, unit)
        .ok_or_else(|| GroupDecodeError::out_of_range(text, "missing RVR value"))?;
    let (lower, upper) = match rvr_reading(caps, 2, 3, unit) {
        Some(first) => (first, Some(last)),
        None => (last, None),
    };
    let tendency = capture(caps, 7).and_then(RvrTendency::from_code);
    Ok(RunwayVisualRange::new(runway, lower, upper, tendency))
}

fn decode_runway_state(text: &str, caps: &Captures<'_>) -> Result<RunwayState, GroupDecodeError> {
    let runway = runway(text, capture(caps, 1).or_else(|| capture(caps, 2)))?;
    let braking = number(caps, 7).and_then(BrakingAction::from_code);
    if caps.get(6).is_some() {
        return Ok(RunwayState::cleared(runway, braking));
    }
    let first_char = |index| capture(caps, index).and_then(|value| value.chars().next());
    let deposit = first_char(3).and_then(RunwayDeposit::from_code);
    let extent = first_char(4).and_then(ContaminationExtent::from_code);
    let depth = number(caps, 5).and_then(DepositDepth::from_code);
    Ok(RunwayState::new(runway, deposit, extent, depth, braking))
}

fn decode_wind_shear(text: &str, caps: &Captures<'_>) -> Result<WindShear, GroupDecodeError> {
    if caps.get(2).is_some() {
        return Ok(WindShear::AllRunways);
    }
    if let Some(code) = capture(caps, 1) {
        return runway(text, Some(code)).map(WindShear::Runway);
    }
    let unit = capture(caps, 6)
        .and_then(SpeedUnit::from_suffix)
        .ok_or_else(|| GroupDecodeError::out_of_range(text, "unknown speed unit"))?;
    let hundreds_of_feet: u16 = number(caps, 3).unwrap_or_default();
    let direction = number(caps, 4)
        .and_then(Angle::degrees)
        .ok_or_else(|| GroupDecodeError::out_of_range(text, "direction above 360"))?;
    let speed = Speed::new(number(caps, 5).unwrap_or_default(), unit);
    Ok(WindShear::Layer {
        height: Distance::feet(f64::from(hundreds_of_feet) * 100.0),
        direction,
        speed,
    })
}

fn decode_weather(text: &str, caps: &Captures<'_>) -> Result<WeatherPhenomenon, GroupDecodeError> {
    let descriptor = capture(caps, 2).and_then(Descriptor::from_code);
    let precipitation: Vec<Precipitation> = capture(caps, 3)
        .unwrap_or_default()
        .as_bytes()
        .chunks(2)
        .filter_map(|pair| std::str::from_utf8(pair).ok())
        .filter_map(Precipitation::from_code)
        .collect();
    let obscuration = capture(caps, 4).and_then(Obscuration::from_code);
    let other = capture(caps, 5).and_then(OtherPhenomenon::from_code);
    if descriptor.is_none() && precipitation.is_empty() && obscuration.is_none() && other.is_none() {
        return Err(GroupDecodeError::out_of_range(text, "no phenomenon"));
    }
    let (intensity, in_vicinity) = match capture(caps, 1) {
        Some("-") => (Intensity::Light, false),
        Some("+") => (Intensity::Heavy, false),
        Some("VC") => (Intensity::Moderate, true),
        _ => (Intensity::Moderate, false),
    };
    Ok(WeatherPhenomenon::new(
        intensity,
        in_vicinity,
        descriptor,
        precipitation,
        obscuration,
        other,
    ))
}

fn decode_cloud(caps: &Captures<'_>) -> CloudLayer {
    if let Some(clear) = capture(caps, 1).and_then(ClearSky::from_code) {
        return CloudLayer::Clear(clear);
    }
    let base = number::<u16>(caps, 3).map(|hundreds| Distance::feet(f64::from(hundreds) * 100.0));
    match capture(caps, 2) {
        Some("VV") => CloudLayer::VerticalVisibility { height: base },
        cover => CloudLayer::Layer {
            cover: cover.and_then(CloudCover::from_code),
            base,
            convective: capture(caps, 4).and_then(ConvectiveCloud::from_code),
        },
    }
}

fn decode_temperature(text: &str, caps: &Captures<'_>) -> Result<Group, GroupDecodeError> {
    let temperature = capture(caps, 1)
        .and_then(Temperature::from_code)
        .ok_or_else(|| GroupDecodeError::out_of_range(text, "temperature"))?;
    let dewpoint = capture(caps, 2).and_then(Temperature::from_code);
    Ok(Group::TemperatureDewpoint(TemperatureDewpoint::new(
        temperature,
        dewpoint,
    )))
}

/// `Q////` decodes to an unknown pressure.
fn decode_pressure(caps: &Captures<'_>) -> Option<Pressure> {
    let value: f64 = number(caps, 2)?;
    match capture(caps, 1) {
        Some("A") => Some(Pressure::new(value / 100.0, PressureUnit::InchesOfMercury)),
        _ => Some(Pressure::new(value, PressureUnit::Hectopascals)),
    }
}

fn decode_temperature_forecast(text: &str, caps: &Captures<'_>) -> Result<Group, GroupDecodeError> {
    let extreme = if capture(caps, 1) == Some("X") {
        Extreme::Maximum
    } else {
        Extreme::Minimum
    };
    let temperature = capture(caps, 2)
        .and_then(Temperature::from_code)
        .ok_or_else(|| GroupDecodeError::out_of_range(text, "temperature"))?;
    let at = match (number(caps, 3), number(caps, 4)) {
        (Some(day), Some(hour)) => DayTime::new(day, hour, 0, true),
        _ => None,
    }
    .ok_or_else(|| GroupDecodeError::out_of_range(text, "day 1-31, hour 0-24"))?;
    Ok(Group::TemperatureForecast(TemperatureForecast::new(
        extreme,
        temperature,
        at,
    )))
}
