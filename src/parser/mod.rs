//! Grammar parser for METAR and TAF bulletins.
//!
//! Parsing runs in stages: the [`tokenizer`] splits the text into groups, the
//! [`classifier`] maps every group to a [`GroupKind`] through an ordered table,
//! the [`decoder`] turns it into a typed [`Group`], and the report assemblers
//! place the groups into a [`Metar`] or [`Taf`]. For TAFs the change groups are
//! then resolved into a forecast timeline.

pub mod change_groups;
pub mod classifier;
mod conditions;
pub mod decoder;
pub mod error;
mod metar;
mod options;
mod remarks;
mod taf;
pub mod tokenizer;

pub(crate) use conditions::absorb;
pub use options::{ParseOptions, ReportParser};

use crate::parser::classifier::{classify, GroupKind};
use crate::parser::decoder::{decode_group, Group};
use crate::parser::error::MalformedReportError;
use crate::parser::tokenizer::RawGroup;
use crate::types::metar::Metar;
use crate::types::taf::Taf;
use crate::types::time::DayTime;

/// Parses a METAR or SPECI with default options.
///
/// ```
/// let metar = metar_taf::parse_metar("EHAM 051825Z 02007KT 9999 FEW017 06/03 Q1042 NOSIG")?;
/// assert_eq!(metar.station(), "EHAM");
/// # Ok::<(), metar_taf::MalformedReportError>(())
/// ```
pub fn parse_metar(text: &str) -> Result<Metar, MalformedReportError> {
    ReportParser::default().metar(text)
}

/// Parses a TAF with default options and resolves its forecast timeline.
pub fn parse_taf(text: &str) -> Result<Taf, MalformedReportError> {
    ReportParser::default().taf(text)
}

/// Decodes the mandatory `ddhhmmZ` group following the station.
pub(crate) fn report_time(group: Option<&RawGroup<'_>>) -> Result<DayTime, MalformedReportError> {
    let group = group.ok_or(MalformedReportError::MissingTime)?;
    match decode_group(group.text()) {
        Ok(Group::ObservationTime(time)) => Ok(time),
        Err(_) if classify(group.text()).0 == GroupKind::ObservationTime => {
            Err(MalformedReportError::InvalidTime {
                text: group.text().to_string(),
                offset: group.offset(),
            })
        }
        _ => Err(MalformedReportError::MissingTime),
    }
}
