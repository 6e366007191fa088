//! Splits a TAF body into base conditions and time-bounded change segments.

use crate::parser::absorb;
use crate::parser::classifier::{classify, GroupKind};
use crate::parser::decoder::{decode_group, ChangeHeader, Group};
use crate::parser::error::MalformedReportError;
use crate::parser::remarks::Remarks;
use crate::parser::tokenizer::{RawGroup, Tokens};
use crate::types::conditions::Conditions;
use crate::types::forecast::{ChangeKind, ChangeSegment};
use crate::types::temperature::TemperatureForecast;
use crate::types::time::{DayTime, TafTime, ValidityPeriod};
use log::warn;

/// Everything found after a TAF's validity group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TafBody {
    pub base: Conditions,
    /// Clamped to the TAF validity and ordered by start, ties in source order.
    pub segments: Vec<ChangeSegment>,
    pub temperatures: Vec<TemperatureForecast>,
    pub cancelled: bool,
    pub remarks: Option<String>,
}

/// A change group while its groups are still being read.
struct PendingSegment<'a> {
    header: RawGroup<'a>,
    kind: ChangeKind,
    probability: Option<u8>,
    start: Option<TafTime>,
    end: Option<TafTime>,
    conditions: Conditions,
}

impl<'a> PendingSegment<'a> {
    fn new(header: RawGroup<'a>, kind: ChangeKind, probability: Option<u8>) -> Self {
        Self {
            header,
            kind,
            probability,
            start: None,
            end: None,
            conditions: Conditions::default(),
        }
    }
}

/// Places a `ddhh/ddhh` pair on the axis of a TAF issued on `issuance_day`.
pub fn interval(start: DayTime, end: DayTime, issuance_day: u8) -> Option<ValidityPeriod> {
    ValidityPeriod::new(
        TafTime::anchored(start, issuance_day),
        TafTime::anchored(end, issuance_day),
    )
}

fn invalid_interval(group: &RawGroup<'_>) -> MalformedReportError {
    MalformedReportError::InvalidInterval {
        text: group.text().to_string(),
        offset: group.offset(),
    }
}

/// Reads the groups following the validity of a TAF.
///
/// Groups before the first change header form the base conditions. `BECMG`,
/// `TEMPO`, `INTER` and `PROBnn` headers must be followed by an interval;
/// `FMddhhmm` runs until the next `FM` or the end of the validity.
pub fn resolve<'a>(
    tokens: &Tokens<'a>,
    groups: &[RawGroup<'a>],
    validity: ValidityPeriod,
    issuance_day: u8,
    strict: bool,
) -> Result<TafBody, MalformedReportError> {
    let mut body = TafBody::default();
    let mut remarks = Remarks::new(strict);
    let mut pending: Vec<PendingSegment<'a>> = Vec::new();
    let mut awaiting_interval = false;

    for group in groups {
        let decoded = match decode_group(group.text()) {
            Ok(decoded) => decoded,
            Err(_) if awaiting_interval => return Err(invalid_interval(group)),
            Err(_) if classify(group.text()).0 == GroupKind::ValidityPeriod => {
                return Err(invalid_interval(group))
            }
            Err(error) => {
                remarks.unrecognised(group, &error)?;
                continue;
            }
        };

        if awaiting_interval {
            awaiting_interval = false;
            let (Group::Validity { start, end }, Some(segment)) = (decoded, pending.last_mut())
            else {
                return Err(invalid_interval(group));
            };
            let period = interval(start, end, issuance_day).ok_or_else(|| invalid_interval(group))?;
            segment.start = Some(period.start());
            segment.end = Some(period.end());
            continue;
        }

        match decoded {
            Group::RemarkMarker => {
                remarks.free_text(tokens.rest_after(group));
                break;
            }
            Group::ChangeHeader(ChangeHeader::From(time)) => {
                let mut segment = PendingSegment::new(*group, ChangeKind::From, None);
                segment.start = Some(TafTime::anchored(time, issuance_day));
                pending.push(segment);
            }
            Group::ChangeHeader(header) => {
                let kind = match header {
                    ChangeHeader::Becoming => ChangeKind::Becoming,
                    _ => ChangeKind::Temporary,
                };
                pending.push(PendingSegment::new(*group, kind, None));
                awaiting_interval = true;
            }
            Group::Probability { percent, .. } => {
                pending.push(PendingSegment::new(
                    *group,
                    ChangeKind::Probability,
                    Some(percent),
                ));
                awaiting_interval = true;
            }
            Group::TemperatureForecast(forecast) => body.temperatures.push(forecast),
            Group::Cancelled => body.cancelled = true,
            other => {
                let target = match pending.last_mut() {
                    Some(segment) => &mut segment.conditions,
                    None => &mut body.base,
                };
                if absorb(target, other).is_err() {
                    remarks.unrecognised(group, &"repeated or out of place")?;
                }
            }
        }
    }

    if awaiting_interval {
        if let Some(segment) = pending.last() {
            return Err(invalid_interval(&segment.header));
        }
    }

    body.base.settle_cavok();
    body.segments = close_segments(pending, validity);
    body.remarks = remarks.finish();
    Ok(body)
}

/// Computes FM ends, clamps every segment to `validity` and orders them.
fn close_segments(pending: Vec<PendingSegment<'_>>, validity: ValidityPeriod) -> Vec<ChangeSegment> {
    let from_starts: Vec<TafTime> = pending
        .iter()
        .filter(|segment| segment.kind == ChangeKind::From)
        .filter_map(|segment| segment.start)
        .collect();

    let mut segments = Vec::with_capacity(pending.len());
    for mut segment in pending {
        let Some(start) = segment.start else {
            continue;
        };
        let end = match segment.kind {
            ChangeKind::From => from_starts
                .iter()
                .copied()
                .filter(|other| *other > start)
                .min()
                .unwrap_or(validity.end()),
            _ => match segment.end {
                Some(end) => end,
                None => continue,
            },
        };
        let Some(written) = ValidityPeriod::new(start, end) else {
            warn!(
                "Dropping empty change group '{}' at offset {}",
                segment.header.text(),
                segment.header.offset()
            );
            continue;
        };
        let Some(clamped) = written.intersection(&validity) else {
            warn!(
                "Dropping change group '{}' {} outside validity {}",
                segment.header.text(),
                written,
                validity
            );
            continue;
        };
        if clamped != written {
            warn!(
                "Clamping change group '{}' {} to {}",
                segment.header.text(),
                written,
                clamped
            );
        }
        segment.conditions.settle_cavok();
        segments.push(ChangeSegment {
            kind: segment.kind,
            probability: segment.probability,
            validity: clamped,
            conditions: segment.conditions,
        });
    }
    segments.sort_by_key(|segment| segment.validity.start());
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tokenizer::tokenize;
    use crate::types::visibility::Visibility;

    fn resolve_text(text: &str) -> Result<TafBody, MalformedReportError> {
        let tokens = tokenize(text)?;
        let validity = interval(
            DayTime::new(4, 12, 0, false).unwrap(),
            DayTime::new(5, 18, 0, true).unwrap(),
            4,
        )
        .unwrap();
        resolve(&tokens, &tokens.groups, validity, 4, false)
    }

    #[test]
    fn test_base_and_segments() -> Result<(), Box<dyn std::error::Error>> {
        let body = resolve_text(
            "EHAM 21005KT 9999 BKN040 BECMG 0413/0416 7000 -DZ BKN012 TEMPO 0415/0501 3500 DZ BKN006",
        )?;
        assert!(body.base.wind().is_some());
        assert_eq!(body.segments.len(), 2);
        assert_eq!(body.segments[0].kind(), ChangeKind::Becoming);
        assert_eq!(body.segments[0].validity().to_string(), "0413/0416");
        assert_eq!(body.segments[1].kind(), ChangeKind::Temporary);
        assert_eq!(
            body.segments[1].conditions().visibility().and_then(Visibility::metres),
            Some(3500.0)
        );
        Ok(())
    }

    #[test]
    fn test_probability_and_inter_headers() -> Result<(), Box<dyn std::error::Error>> {
        let body = resolve_text("EHAM 9999 PROB30 TEMPO 0414/0418 TSRA INTER 0420/0422 SHRA PROB40 0500/0503 BR")?;
        let kinds: Vec<_> = body.segments.iter().map(|s| (s.kind(), s.probability())).collect();
        assert_eq!(
            kinds,
            vec![
                (ChangeKind::Probability, Some(30)),
                (ChangeKind::Temporary, None),
                (ChangeKind::Probability, Some(40)),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_from_groups_end_at_next_from() -> Result<(), Box<dyn std::error::Error>> {
        let body = resolve_text("EHAM 21005KT FM041530 24010KT FM050200 27015KT")?;
        assert_eq!(body.segments.len(), 2);
        assert_eq!(body.segments[0].validity().to_string(), "041530/0502");
        assert_eq!(body.segments[1].validity().to_string(), "0502/0518");
        Ok(())
    }

    #[test]
    fn test_segments_are_clamped_and_sorted() -> Result<(), Box<dyn std::error::Error>> {
        let body = resolve_text("EHAM 9999 TEMPO 0506/0520 4000 BECMG 0410/0414 BKN010 TEMPO 0600/0606 FG")?;
        assert_eq!(body.segments.len(), 2);
        assert_eq!(body.segments[0].kind(), ChangeKind::Becoming);
        assert_eq!(body.segments[0].validity().to_string(), "0412/0414");
        assert_eq!(body.segments[1].validity().to_string(), "0506/0518");
        Ok(())
    }

    #[test]
    fn test_invalid_intervals_are_fatal() {
        assert!(matches!(
            resolve_text("EHAM 9999 BECMG 0416/0413 BKN010"),
            Err(MalformedReportError::InvalidInterval { text, .. }) if text == "0416/0413"
        ));
        assert!(matches!(
            resolve_text("EHAM 9999 TEMPO 4000"),
            Err(MalformedReportError::InvalidInterval { text, .. }) if text == "4000"
        ));
        assert!(matches!(
            resolve_text("EHAM 9999 BECMG"),
            Err(MalformedReportError::InvalidInterval { text, .. }) if text == "BECMG"
        ));
        assert!(matches!(
            resolve_text("EHAM 9999 BECMG 0413/0460"),
            Err(MalformedReportError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn test_cavok_in_segment_clears_weather_and_clouds() -> Result<(), Box<dyn std::error::Error>> {
        let body = resolve_text("EHAM 4000 RA BKN010 BECMG 0414/0416 CAVOK")?;
        let conditions = body.segments[0].conditions();
        assert_eq!(conditions.visibility(), Some(&Visibility::Cavok));
        assert_eq!(conditions.weather(), Some(&[][..]));
        assert_eq!(conditions.clouds(), Some(&[][..]));
        Ok(())
    }
}
