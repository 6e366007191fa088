//! Parallel parsing of report collections.

use crate::parser::error::MalformedReportError;
use crate::parser::ReportParser;
use crate::types::metar::Metar;
use crate::types::taf::Taf;
use log::{debug, info};
use rayon::prelude::*;

impl ReportParser {
    /// Parses every text as a METAR on the rayon pool. Results keep the input
    /// order and a malformed report only fails its own slot.
    pub fn metars<S>(&self, texts: &[S]) -> Vec<Result<Metar, MalformedReportError>>
    where
        S: AsRef<str> + Sync,
    {
        let results: Vec<_> = texts.par_iter().map(|text| self.metar(text.as_ref())).collect();
        log_outcome("METAR", &results);
        results
    }

    /// Parses every text as a TAF on the rayon pool, see [`ReportParser::metars`].
    pub fn tafs<S>(&self, texts: &[S]) -> Vec<Result<Taf, MalformedReportError>>
    where
        S: AsRef<str> + Sync,
    {
        let results: Vec<_> = texts.par_iter().map(|text| self.taf(text.as_ref())).collect();
        log_outcome("TAF", &results);
        results
    }
}

fn log_outcome<T>(kind: &str, results: &[Result<T, MalformedReportError>]) {
    let failed = results.iter().filter(|result| result.is_err()).count();
    info!(
        "Parsed {} {kind} reports on {} threads, {failed} malformed",
        results.len(),
        rayon::current_num_threads()
    );
    for error in results.iter().filter_map(|result| result.as_ref().err()) {
        debug!("Malformed {kind}: {error}");
    }
}

/// Parses METARs in parallel with default options.
///
/// ```
/// let results = metar_taf::parse_metars(&[
///     "EHAM 051825Z 02007KT 9999 FEW017 06/03 Q1042",
///     "not a report",
/// ]);
/// assert!(results[0].is_ok());
/// assert!(results[1].is_err());
/// ```
pub fn parse_metars<S>(texts: &[S]) -> Vec<Result<Metar, MalformedReportError>>
where
    S: AsRef<str> + Sync,
{
    ReportParser::default().metars(texts)
}

/// Parses TAFs in parallel with default options.
pub fn parse_tafs<S>(texts: &[S]) -> Vec<Result<Taf, MalformedReportError>>
where
    S: AsRef<str> + Sync,
{
    ReportParser::default().tafs(texts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParseOptions;

    #[test]
    fn test_results_keep_input_order() {
        let texts: Vec<String> = (1..=28)
            .map(|day| format!("EHAM {day:02}1825Z 02007KT 9999 FEW017 06/03 Q1042"))
            .collect();
        let results = parse_metars(&texts);
        assert_eq!(results.len(), texts.len());
        for (day, result) in (1..=28u8).zip(&results) {
            let metar = result.as_ref().expect("valid METAR");
            assert_eq!(metar.time().day(), day);
        }
    }

    #[test]
    fn test_failures_stay_in_their_slot() {
        let results = parse_tafs(&[
            "TAF EHAM 041118Z 0412/0518 21005KT 9999 BKN040",
            "TAF EHAM 041118Z 21005KT",
            "TAF EGLL 041100Z 0412/0518 24010KT CAVOK",
        ]);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(MalformedReportError::MissingValidity)));
        assert_eq!(results[2].as_ref().map(|taf| taf.station()), Ok("EGLL"));
    }

    #[test]
    fn test_parser_options_apply_to_batch() {
        let parser = ReportParser::new(ParseOptions::builder().strict(true).build());
        let results = parser.metars(&["EHAM 051825Z 02007KT 9999 FEW017 XYZ 06/03 Q1042"]);
        assert!(matches!(
            results[0],
            Err(MalformedReportError::UnrecognisedGroup { .. })
        ));
    }
}
