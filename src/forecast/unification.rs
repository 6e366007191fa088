use crate::types::forecast::ForecastPeriod;

/// Merges runs of adjacent periods with identical conditions.
///
/// Baseline periods (BASE, BECMG, FM) chain together and keep the most
/// specific tag; an overlay period only merges with a neighbour carrying the
/// same TEMPO or PROB tag. Applying `unify` to its own output changes nothing.
pub fn unify(periods: &[ForecastPeriod]) -> Vec<ForecastPeriod> {
    periods
        .iter()
        .fold(Vec::with_capacity(periods.len()), |mut merged: Vec<ForecastPeriod>, period| {
            match merged.last_mut() {
                Some(last) if mergeable(last, period) => {
                    last.validity = last.validity.span(&period.validity);
                    if period.provenance.specificity() > last.provenance.specificity() {
                        last.provenance = period.provenance;
                    }
                }
                _ => merged.push(period.clone()),
            }
            merged
        })
}

fn mergeable(last: &ForecastPeriod, next: &ForecastPeriod) -> bool {
    let compatible = (last.provenance.is_baseline() && next.provenance.is_baseline())
        || last.provenance == next.provenance;
    compatible
        && last.validity.end() == next.validity.start()
        && last.conditions == next.conditions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::propagation::propagate;
    use crate::parser::parse_taf;
    use crate::types::forecast::Provenance;
    use std::error::Error;

    const TAFS: [&str; 3] = [
        "TAF EHAM 041118Z 0412/0518 21005KT 9999 BKN040 \
         BECMG 0413/0416 7000 -DZ BKN012 TEMPO 0415/0501 3500 DZ BKN006",
        "TAF EGLL 041100Z 0412/0518 24010KT 9999 SCT030 \
         BECMG 0412/0414 24010KT TEMPO 0420/0424 4000 RA PROB30 TEMPO 0422/0502 1500 TSRA",
        "TAF KJFK 041130Z 0412/0518 21005KT P6SM BKN040 \
         FM041800 21005KT P6SM BKN040 FM050300 30015G25KT 5SM -SHRA OVC015",
    ];

    #[test]
    fn test_tempo_halves_are_merged() -> Result<(), Box<dyn Error>> {
        let taf = parse_taf(TAFS[0])?;
        let unified = unify(&propagate(&taf));
        assert_eq!(unified.len(), 4);
        assert_eq!(unified[2].validity().to_string(), "0415/0501");
        assert_eq!(unified[2].provenance(), Provenance::Temporary);
        Ok(())
    }

    #[test]
    fn test_baseline_periods_chain_with_most_specific_tag() -> Result<(), Box<dyn Error>> {
        let taf = parse_taf(TAFS[2])?;
        let unified = unify(&propagate(&taf));
        assert_eq!(unified.len(), 2);
        assert_eq!(unified[0].validity().to_string(), "0412/0503");
        assert_eq!(unified[0].provenance(), Provenance::From);
        Ok(())
    }

    #[test]
    fn test_overlays_do_not_merge_with_baseline() -> Result<(), Box<dyn Error>> {
        let taf = parse_taf(TAFS[1])?;
        let unified = unify(&propagate(&taf));
        let tags: Vec<Provenance> = unified.iter().map(|p| p.provenance()).collect();
        assert_eq!(
            tags,
            vec![
                Provenance::Becoming,
                Provenance::Temporary,
                Provenance::Probability(30),
                Provenance::Becoming,
            ]
        );
        Ok(())
    }

    #[test]
    fn test_unify_is_idempotent() -> Result<(), Box<dyn Error>> {
        for text in TAFS {
            let taf = parse_taf(text)?;
            let once = unify(&propagate(&taf));
            assert_eq!(unify(&once), once);
            assert_eq!(taf.periods(), once.as_slice());
        }
        Ok(())
    }
}
