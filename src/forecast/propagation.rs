use crate::types::conditions::Conditions;
use crate::types::forecast::{ChangeSegment, ForecastPeriod, Provenance};
use crate::types::taf::Taf;
use crate::types::time::{TafTime, ValidityPeriod};

/// Resolves the elementary periods of a TAF, before unification.
///
/// Every distinct segment endpoint splits the validity. Within each
/// sub-interval the permanent groups (BECMG, FM) that have started are applied
/// to the base in start order, then every TEMPO/PROB group covering the
/// sub-interval is overlaid in start order, so the later start wins a
/// conflicting attribute.
pub fn propagate(taf: &Taf) -> Vec<ForecastPeriod> {
    resolve_timeline(taf.validity(), taf.base(), taf.segments())
}

pub(crate) fn resolve_timeline(
    validity: ValidityPeriod,
    base: &Conditions,
    segments: &[ChangeSegment],
) -> Vec<ForecastPeriod> {
    let mut ordered: Vec<&ChangeSegment> = segments
        .iter()
        .filter(|segment| validity.intersection(&segment.validity()).is_some())
        .collect();
    ordered.sort_by_key(|segment| segment.validity().start());

    let mut boundaries: Vec<TafTime> = vec![validity.start(), validity.end()];
    for segment in &ordered {
        if let Some(clipped) = segment.validity().intersection(&validity) {
            boundaries.push(clipped.start());
            boundaries.push(clipped.end());
        }
    }
    boundaries.sort();
    boundaries.dedup();

    boundaries
        .windows(2)
        .filter_map(|pair| ValidityPeriod::new(pair[0], pair[1]))
        .map(|window| resolve_window(window, base, &ordered))
        .collect()
}

fn resolve_window(
    window: ValidityPeriod,
    base: &Conditions,
    ordered: &[&ChangeSegment],
) -> ForecastPeriod {
    let mut conditions = base.clone();
    let mut provenance = Provenance::Base;

    for segment in ordered
        .iter()
        .filter(|segment| segment.kind().is_permanent() && segment.validity().start() <= window.start())
    {
        conditions.apply(segment.conditions());
        provenance = segment.provenance();
    }

    for segment in ordered
        .iter()
        .filter(|segment| !segment.kind().is_permanent() && segment.validity().covers(&window))
    {
        conditions.apply(segment.conditions());
        if segment.provenance().specificity() >= provenance.specificity() {
            provenance = segment.provenance();
        }
    }

    ForecastPeriod {
        validity: window,
        conditions,
        provenance,
    }
}
