use crate::forecast::propagation::resolve_timeline;
use crate::forecast::unification::unify;
use crate::parser::change_groups::{interval, resolve};
use crate::parser::classifier::{classify, GroupKind};
use crate::parser::decoder::{decode_group, Group};
use crate::parser::error::MalformedReportError;
use crate::parser::report_time;
use crate::parser::tokenizer::Tokens;
use crate::types::metar::ReportModifier;
use crate::types::taf::Taf;

/// Builds a [`Taf`] from a tokenized report and resolves its timeline.
pub(crate) fn assemble_taf(tokens: &Tokens<'_>, strict: bool) -> Result<Taf, MalformedReportError> {
    if !tokens.has_prefix("TAF") {
        let first = tokens.prefixes.first().unwrap_or(&tokens.station);
        return Err(MalformedReportError::NotATaf(first.text().to_string()));
    }
    let modifier = if tokens.has_prefix("AMD") {
        Some(ReportModifier::Amended)
    } else if tokens.has_prefix("COR") {
        Some(ReportModifier::Corrected)
    } else {
        None
    };

    let issued = report_time(tokens.groups.first())?;
    let validity_group = tokens
        .groups
        .get(1)
        .ok_or(MalformedReportError::MissingValidity)?;
    let invalid = || MalformedReportError::InvalidInterval {
        text: validity_group.text().to_string(),
        offset: validity_group.offset(),
    };
    let validity = match decode_group(validity_group.text()) {
        Ok(Group::Validity { start, end }) => {
            interval(start, end, issued.day()).ok_or_else(invalid)?
        }
        Err(_) if classify(validity_group.text()).0 == GroupKind::ValidityPeriod => {
            return Err(invalid())
        }
        _ => return Err(MalformedReportError::MissingValidity),
    };

    let body = resolve(tokens, &tokens.groups[2..], validity, issued.day(), strict)?;
    let periods = unify(&resolve_timeline(validity, &body.base, &body.segments));

    Ok(Taf {
        station: tokens.station.text().to_string(),
        issued,
        modifier,
        provisional: tokens.has_prefix("PROV"),
        cancelled: body.cancelled,
        validity,
        base: body.base,
        segments: body.segments,
        temperatures: body.temperatures,
        remarks: body.remarks,
        periods,
    })
}

#[cfg(test)]
mod tests {
    use crate::parser::error::MalformedReportError;
    use crate::parser::parse_taf;
    use crate::types::forecast::Provenance;
    use crate::types::metar::ReportModifier;
    use crate::types::temperature::Extreme;
    use crate::types::visibility::Visibility;
    use std::error::Error;
    use chrono::{Duration, TimeZone, Utc};

    const EHAM: &str = "TAF EHAM 041118Z 0412/0518 21005KT 9999 BKN040 \
        BECMG 0413/0416 7000 -DZ BKN012 TEMPO 0415/0501 3500 DZ BKN006";

    #[test]
    fn test_amsterdam_forecast_timeline() -> Result<(), Box<dyn Error>> {
        let taf = parse_taf(EHAM)?;
        assert_eq!(taf.station(), "EHAM");
        assert_eq!(taf.validity().to_string(), "0412/0518");
        assert_eq!(taf.segments().len(), 2);

        let summary: Vec<(String, Provenance)> = taf
            .periods()
            .iter()
            .map(|p| (p.validity().to_string(), p.provenance()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("0412/0413".to_string(), Provenance::Base),
                ("0413/0415".to_string(), Provenance::Becoming),
                ("0415/0501".to_string(), Provenance::Temporary),
                ("0501/0518".to_string(), Provenance::Becoming),
            ]
        );

        let tempo = &taf.periods()[2];
        assert_eq!(
            tempo.conditions().visibility().and_then(Visibility::metres),
            Some(3500.0)
        );
        assert!(tempo.conditions().wind().is_some());
        let becmg = &taf.periods()[3];
        assert_eq!(
            becmg.conditions().visibility().and_then(Visibility::metres),
            Some(7000.0)
        );
        Ok(())
    }

    #[test]
    fn test_header_variants() -> Result<(), Box<dyn Error>> {
        let taf = parse_taf("PROV TAF AMD EHAM 041118Z 0412/0518 21005KT CAVOK TX15/0414Z TNM02/0506Z=")?;
        assert!(taf.is_provisional());
        assert_eq!(taf.modifier(), Some(ReportModifier::Amended));
        assert_eq!(taf.temperatures().len(), 2);
        assert_eq!(taf.temperatures()[1].extreme(), Extreme::Minimum);
        assert_eq!(taf.base().clouds(), Some(&[][..]));
        assert_eq!(taf.periods().len(), 1);

        let cancelled = parse_taf("TAF AMD EHAM 041330Z 0412/0518 CNL")?;
        assert!(cancelled.is_cancelled());
        Ok(())
    }

    #[test]
    fn test_month_rollover() -> Result<(), Box<dyn Error>> {
        let taf = parse_taf("TAF EHAM 301700Z 3018/0124 21005KT 9999 BECMG 0102/0105 4000")?;
        let spans: Vec<String> = taf.periods().iter().map(|p| p.validity().to_string()).collect();
        assert_eq!(spans, vec!["3018/0102", "0102/0124"]);
        assert!(taf.periods()[0].validity().start() < taf.periods()[1].validity().start());
        let issued = Utc.with_ymd_and_hms(2024, 4, 30, 17, 0, 0).unwrap();
        assert_eq!(taf.validity().duration(issued), Some(Duration::hours(30)));
        assert_eq!(taf.periods()[1].validity().duration(issued), Some(Duration::hours(22)));
        Ok(())
    }

    #[test]
    fn test_mandatory_fields() {
        assert!(matches!(
            parse_taf("EHAM 041118Z 0412/0518 21005KT"),
            Err(MalformedReportError::NotATaf(first)) if first == "EHAM"
        ));
        assert!(matches!(
            parse_taf("TAF EHAM 0412/0518 21005KT"),
            Err(MalformedReportError::MissingTime)
        ));
        assert!(matches!(
            parse_taf("TAF EHAM 041118Z 21005KT"),
            Err(MalformedReportError::MissingValidity)
        ));
        assert!(matches!(
            parse_taf("TAF EHAM 041118Z 0518/0412 21005KT"),
            Err(MalformedReportError::InvalidInterval { offset: 17, .. })
        ));
        assert!(matches!(
            parse_taf("TAF EHAM 041118Z 0412/0532 21005KT"),
            Err(MalformedReportError::InvalidInterval { .. })
        ));
    }
}
