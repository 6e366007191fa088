use crate::parser::decoder::{decode_group, ChangeHeader, Group, TrendIndicator};
use crate::parser::error::MalformedReportError;
use crate::parser::remarks::Remarks;
use crate::parser::tokenizer::Tokens;
use crate::parser::{absorb, report_time};
use crate::types::metar::{Metar, MetarKind, ReportModifier};
use crate::types::trend::{Trend, TrendChange, TrendKind};
use crate::types::visibility::Visibility;

const MISPLACED: &str = "repeated or out of place";

/// Builds a [`Metar`] from a tokenized report.
pub(crate) fn assemble_metar(tokens: &Tokens<'_>, strict: bool) -> Result<Metar, MalformedReportError> {
    let kind = if tokens.has_prefix("SPECI") {
        MetarKind::Special
    } else {
        MetarKind::Routine
    };
    let mut groups = tokens.groups.iter();
    let time = report_time(groups.next())?;

    let mut metar = Metar::new(kind, tokens.station.text().to_string(), time);
    if tokens.has_prefix("COR") {
        metar.modifier = Some(ReportModifier::Corrected);
    }

    let mut remarks = Remarks::new(strict);
    let mut changes: Vec<TrendChange> = Vec::new();
    for group in groups {
        let decoded = match decode_group(group.text()) {
            Ok(decoded) => decoded,
            Err(error) => {
                remarks.unrecognised(group, &error)?;
                continue;
            }
        };
        match decoded {
            Group::RemarkMarker => {
                remarks.free_text(tokens.rest_after(group));
                break;
            }
            Group::ChangeHeader(ChangeHeader::Becoming) => {
                changes.push(TrendChange::new(TrendKind::Becoming))
            }
            Group::ChangeHeader(ChangeHeader::Temporary | ChangeHeader::Intermittent) => {
                changes.push(TrendChange::new(TrendKind::Temporary))
            }
            Group::NoSignificantChange if changes.is_empty() && metar.trend.is_none() => {
                metar.trend = Some(Trend::NoSignificantChange)
            }
            other => {
                let leftover = match changes.last_mut() {
                    Some(change) => add_to_trend(change, other),
                    None => add_to_observation(&mut metar, other),
                };
                if leftover.is_err() {
                    remarks.unrecognised(group, &MISPLACED)?;
                }
            }
        }
    }

    if !changes.is_empty() {
        for change in &mut changes {
            change.conditions.settle_cavok();
        }
        metar.trend = Some(Trend::Changes(changes));
    }
    metar.remarks = remarks.finish();
    Ok(metar)
}

fn add_to_trend(change: &mut TrendChange, group: Group) -> Result<(), Group> {
    match group {
        Group::TrendTime(TrendIndicator::From, time) if change.from.is_none() => {
            change.from = Some(time)
        }
        Group::TrendTime(TrendIndicator::Until, time) if change.until.is_none() => {
            change.until = Some(time)
        }
        Group::TrendTime(TrendIndicator::At, time) if change.at.is_none() => change.at = Some(time),
        other => return absorb(&mut change.conditions, other),
    }
    Ok(())
}

/// The first wind, temperature and pressure group win; a second visibility
/// group becomes the directional minimum.
fn add_to_observation(metar: &mut Metar, group: Group) -> Result<(), Group> {
    match group {
        Group::Modifier(modifier) if metar.modifier.is_none() => metar.modifier = Some(modifier),
        Group::Wind(wind) if metar.wind.is_none() => metar.wind = Some(wind),
        Group::Visibility(reading) => {
            metar.visibility = match metar.visibility {
                None => Some(Visibility::reported(reading)),
                Some(current) => match current.with_minimum(reading) {
                    Some(combined) => Some(combined),
                    None => return Err(Group::Visibility(reading)),
                },
            }
        }
        Group::UnknownVisibility if metar.visibility.is_none() => {
            metar.visibility = Some(Visibility::Unknown)
        }
        Group::Cavok if metar.visibility.is_none() => metar.visibility = Some(Visibility::Cavok),
        Group::RunwayVisualRange(rvr) => metar.runway_visual_ranges.push(rvr),
        Group::RunwayState(state) => metar.runway_states.push(state),
        Group::Weather(phenomenon) => metar.weather.push(phenomenon),
        Group::RecentWeather(phenomenon) => metar.recent_weather.push(phenomenon),
        Group::Cloud(layer) => metar.clouds.push(layer),
        Group::TemperatureDewpoint(temperature) if metar.temperature.is_none() => {
            metar.temperature = Some(temperature)
        }
        Group::Pressure(Some(pressure)) if metar.pressure.is_none() => {
            metar.pressure = Some(pressure)
        }
        Group::WindShear(shear) => metar.wind_shear.push(shear),
        other => return Err(other),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::parser::error::MalformedReportError;
    use crate::parser::{parse_metar, ParseOptions, ReportParser};
    use crate::types::cloud::{CloudCover, CloudLayer};
    use crate::types::metar::{MetarKind, ReportModifier};
    use crate::types::trend::{Trend, TrendKind};
    use crate::types::units::{Bound, Distance, PressureUnit, Speed, SpeedUnit, Temperature};
    use crate::types::visibility::Visibility;
    use crate::types::wind::WindShear;
    use std::error::Error;

    #[test]
    fn test_amsterdam_observation() -> Result<(), Box<dyn Error>> {
        let metar = parse_metar("EHAM 051825Z 02007KT 340V050 9999 FEW017 06/03 Q1042 NOSIG")?;
        assert_eq!(metar.station(), "EHAM");
        assert_eq!(metar.kind(), MetarKind::Routine);
        assert_eq!(
            (metar.time().day(), metar.time().hour(), metar.time().minute()),
            (5, 18, 25)
        );

        let wind = metar.wind().ok_or("no wind")?;
        assert_eq!(wind.direction().angle().map(|a| a.value()), Some(20));
        assert_eq!(wind.speed(), Some(Speed::new(7, SpeedUnit::Knots)));
        let range = wind.variable_range().ok_or("no variable range")?;
        assert_eq!((range.from().value(), range.to().value()), (340, 50));

        let prevailing = metar
            .visibility()
            .and_then(Visibility::prevailing)
            .ok_or("no visibility")?;
        assert_eq!(prevailing.distance().to_metres(), 10000.0);
        assert_eq!(prevailing.bound(), Bound::AtOrAbove);

        assert_eq!(
            metar.clouds(),
            &[CloudLayer::Layer {
                cover: Some(CloudCover::Few),
                base: Some(Distance::feet(1700.0)),
                convective: None,
            }]
        );
        let temperature = metar.temperature().ok_or("no temperature")?;
        assert_eq!(temperature.temperature(), Temperature::celsius(6));
        assert_eq!(temperature.dewpoint(), Some(Temperature::celsius(3)));
        let pressure = metar.pressure().ok_or("no pressure")?;
        assert_eq!((pressure.value(), pressure.unit()), (1042.0, PressureUnit::Hectopascals));
        assert_eq!(metar.trend(), Some(&Trend::NoSignificantChange));
        assert_eq!(metar.remarks(), None);
        Ok(())
    }

    #[test]
    fn test_unknown_groups_and_remark_section() -> Result<(), Box<dyn Error>> {
        let metar = parse_metar(
            "METAR KJFK 051851Z AUTO 31015G25KT 10SM FEW250 M02/M08 A3012 XYZ RMK AO2 SLP201 T10221078",
        )?;
        assert_eq!(metar.modifier(), Some(ReportModifier::Automatic));
        assert_eq!(metar.temperature().map(|t| t.temperature()), Some(Temperature::celsius(-2)));
        assert_eq!(metar.pressure().map(|p| p.hectopascals()), Some(1020.0));
        assert_eq!(metar.remarks(), Some("XYZ AO2 SLP201 T10221078"));
        Ok(())
    }

    #[test]
    fn test_duplicates_go_to_remarks() -> Result<(), Box<dyn Error>> {
        let metar = parse_metar("EGLL 051820Z 24010KT 25012KT 6000 2000SW 1500 15/10 Q1013 Q1014")?;
        assert_eq!(metar.wind().and_then(|w| w.speed()), Some(Speed::new(10, SpeedUnit::Knots)));
        let minimum = metar.visibility().and_then(Visibility::minimum).ok_or("no minimum")?;
        assert_eq!(minimum.distance().to_metres(), 2000.0);
        assert_eq!(metar.pressure().map(|p| p.value()), Some(1013.0));
        assert_eq!(metar.remarks(), Some("25012KT 1500 Q1014"));
        Ok(())
    }

    #[test]
    fn test_trend_with_time_indicators() -> Result<(), Box<dyn Error>> {
        let metar = parse_metar(
            "SPECI LFPG 051830Z 27015KT CAVOK 18/09 Q1015 BECMG FM1900 TL2000 25020KT 4000 RA TEMPO BKN010=",
        )?;
        assert_eq!(metar.kind(), MetarKind::Special);
        assert_eq!(metar.visibility(), Some(&Visibility::Cavok));
        let changes = metar.trend().map(Trend::changes).ok_or("no trend")?;
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].kind(), TrendKind::Becoming);
        assert_eq!(changes[0].from().map(|t| (t.hour(), t.minute())), Some((19, 0)));
        assert_eq!(changes[0].until().map(|t| t.hour()), Some(20));
        assert!(changes[0].conditions().wind().is_some());
        assert_eq!(changes[0].conditions().weather().map(<[_]>::len), Some(1));
        assert_eq!(changes[1].kind(), TrendKind::Temporary);
        assert!(changes[1].conditions().wind().is_none());
        assert_eq!(changes[1].conditions().clouds().map(<[_]>::len), Some(1));
        Ok(())
    }

    #[test]
    fn test_wind_shear_and_runway_groups() -> Result<(), Box<dyn Error>> {
        let metar = parse_metar("EDDF 051820Z 22030G45KT 0800 R25L/1000U +TSRA VV002 12/11 Q0998 WS R25L WS ALL RWY")?;
        assert_eq!(metar.runway_visual_ranges().len(), 1);
        assert_eq!(metar.weather().len(), 1);
        assert!(metar.weather()[0].is_thunderstorm());
        assert_eq!(metar.wind_shear().len(), 2);
        assert_eq!(metar.wind_shear()[1], WindShear::AllRunways);
        Ok(())
    }

    #[test]
    fn test_mandatory_fields() {
        assert!(matches!(parse_metar("   "), Err(MalformedReportError::Empty)));
        assert!(matches!(
            parse_metar("METAR 051825Z 02007KT"),
            Err(MalformedReportError::MissingStation(_))
        ));
        assert!(matches!(parse_metar("EHAM 02007KT"), Err(MalformedReportError::MissingTime)));
        assert!(matches!(
            parse_metar("EHAM 352525Z 02007KT"),
            Err(MalformedReportError::InvalidTime { offset: 5, .. })
        ));
    }

    #[test]
    fn test_strict_mode_rejects_unknown_groups() {
        let parser = ReportParser::new(ParseOptions::builder().strict(true).build());
        let result = parser.metar("EHAM 051825Z 02007KT ZZZZZ Q1042");
        assert_eq!(
            result.err(),
            Some(MalformedReportError::UnrecognisedGroup {
                text: "ZZZZZ".to_string(),
                offset: 21,
            })
        );
    }

    #[test]
    fn test_nil_report() -> Result<(), Box<dyn Error>> {
        let metar = parse_metar("EHAM 051825Z NIL=")?;
        assert!(metar.is_nil());
        assert!(metar.wind().is_none());
        Ok(())
    }
}
