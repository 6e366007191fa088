//! Parser for METAR and TAF aviation weather reports.
//!
//! ```
//! use metar_taf::{parse_taf, Provenance};
//!
//! let taf = parse_taf(
//!     "TAF EHAM 041118Z 0412/0518 21005KT 9999 BKN040 \
//!      BECMG 0413/0416 7000 -DZ BKN012 TEMPO 0415/0501 3500 DZ BKN006",
//! )?;
//! let tags: Vec<String> = taf.periods().iter().map(|p| p.provenance().to_string()).collect();
//! assert_eq!(tags, ["BASE", "BECMG", "TEMPO", "BECMG"]);
//! assert_eq!(taf.periods()[2].provenance(), Provenance::Temporary);
//! # Ok::<(), metar_taf::MalformedReportError>(())
//! ```

mod batch;
mod error;
pub mod forecast;
mod interchange;
pub mod parser;
mod tabular;
pub mod types;

pub use error::MetarTafError;
pub use interchange::Interchange;

pub use batch::{parse_metars, parse_tafs};
pub use forecast::{propagate, unify};
pub use parser::error::{GroupDecodeError, MalformedReportError};
pub use parser::{parse_metar, parse_taf, ParseOptions, ReportParser};

pub use tabular::error::TabularError;
pub use tabular::report_frame::ReportFrame;
pub use tabular::{
    metars_to_frame, taf_to_frame, tafs_to_frame, FrameOptions, UNLIMITED_CEILING_METRES,
};

pub use types::cloud::*;
pub use types::conditions::Conditions;
pub use types::forecast::*;
pub use types::metar::*;
pub use types::runway::*;
pub use types::taf::Taf;
pub use types::temperature::*;
pub use types::time::*;
pub use types::trend::*;
pub use types::units::*;
pub use types::visibility::{Octant, Visibility, VisibilityReading, MAX_REPORTED_METRES};
pub use types::weather::*;
pub use types::wind::*;
