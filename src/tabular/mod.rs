//! Flattens decoded reports into Polars frames, one row per METAR or per
//! resolved TAF forecast period.
//!
//! Speeds are in metres per second, distances and heights in metres,
//! temperatures in degrees Celsius and pressure in hectopascals. Weather is
//! spread over `weather_0..max_weather` code columns plus boolean feature
//! columns (`precipitation`, `thunderstorms`, `fog`, ...).

mod columns;
pub mod error;
pub mod report_frame;

pub use columns::UNLIMITED_CEILING_METRES;

use crate::tabular::columns::{datetime_column, ConditionColumns, ConditionsRow};
use crate::tabular::error::TabularError;
use crate::types::metar::Metar;
use crate::types::taf::Taf;
use crate::types::time::TafTime;
use bon::Builder;
use chrono::{DateTime, Utc};
use log::debug;
use polars::prelude::{Column, DataFrame};

/// Settings for building report frames.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use metar_taf::FrameOptions;
///
/// let options = FrameOptions::builder()
///     .reference(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
///     .max_weather(3)
///     .build();
/// assert_eq!(options.max_weather(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct FrameOptions {
    /// Datetime used to resolve day-of-month report times to absolute UTC.
    /// Without it the time columns are null.
    reference: Option<DateTime<Utc>>,
    /// Number of `weather_N` code columns.
    #[builder(default = 2)]
    max_weather: usize,
}

impl FrameOptions {
    pub fn reference(&self) -> Option<DateTime<Utc>> {
        self.reference
    }

    pub fn max_weather(&self) -> usize {
        self.max_weather
    }
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// One row per METAR.
///
/// Columns: `station`, `time`, the shared condition columns, `temperature`,
/// `dewpoint` and `pressure`. A METAR without cloud groups reports an
/// unlimited ceiling.
pub fn metars_to_frame(
    metars: &[Metar],
    options: &FrameOptions,
) -> Result<DataFrame, TabularError> {
    debug!("Building frame from {} METARs", metars.len());

    let mut conditions = ConditionColumns::new(options.max_weather);
    let mut stations = Vec::with_capacity(metars.len());
    let mut times = Vec::with_capacity(metars.len());
    let mut temperatures = Vec::with_capacity(metars.len());
    let mut dewpoints = Vec::with_capacity(metars.len());
    let mut pressures = Vec::with_capacity(metars.len());

    for metar in metars {
        stations.push(metar.station());
        times.push(options.reference.and_then(|r| metar.time().resolve(r)));
        let temperature = metar.temperature();
        temperatures.push(temperature.map(|t| f64::from(t.temperature().degrees_celsius())));
        dewpoints.push(
            temperature
                .and_then(|t| t.dewpoint())
                .map(|d| f64::from(d.degrees_celsius())),
        );
        pressures.push(metar.pressure().map(|p| p.hectopascals()));
        conditions.push(ConditionsRow::from(metar));
    }

    let mut columns = vec![
        Column::new("station".into(), stations),
        datetime_column("time", &times)?,
    ];
    columns.extend(conditions.into_columns());
    columns.push(Column::new("temperature".into(), temperatures));
    columns.push(Column::new("dewpoint".into(), dewpoints));
    columns.push(Column::new("pressure".into(), pressures));
    Ok(DataFrame::new(columns)?)
}

/// One row per resolved forecast period of `taf`.
pub fn taf_to_frame(taf: &Taf, options: &FrameOptions) -> Result<DataFrame, TabularError> {
    tafs_to_frame(std::slice::from_ref(taf), options)
}

/// One row per resolved forecast period, TAFs in input order.
///
/// Columns: `station`, `issued`, `time` (period start), `end`, `provenance`,
/// `probability` and the shared condition columns. Period times are resolved
/// against the issuance time, so a validity crossing the month end lands in
/// the following month.
pub fn tafs_to_frame(tafs: &[Taf], options: &FrameOptions) -> Result<DataFrame, TabularError> {
    let rows: usize = tafs.iter().map(|taf| taf.periods().len()).sum();
    debug!("Building frame from {} TAFs with {} periods", tafs.len(), rows);

    let mut conditions = ConditionColumns::new(options.max_weather);
    let mut stations = Vec::with_capacity(rows);
    let mut issued = Vec::with_capacity(rows);
    let mut starts = Vec::with_capacity(rows);
    let mut ends = Vec::with_capacity(rows);
    let mut provenances = Vec::with_capacity(rows);
    let mut probabilities = Vec::with_capacity(rows);

    for taf in tafs {
        let issued_at = options.reference.and_then(|r| taf.issued().resolve(r));
        let resolve = |instant: TafTime| issued_at.and_then(|at| instant.time().resolve(at));
        for period in taf.periods() {
            stations.push(taf.station());
            issued.push(issued_at);
            starts.push(resolve(period.validity().start()));
            ends.push(resolve(period.validity().end()));
            provenances.push(period.provenance().to_string());
            probabilities.push(period.provenance().probability().map(i32::from));
            conditions.push(ConditionsRow::from(period.conditions()));
        }
    }

    let mut columns = vec![
        Column::new("station".into(), stations),
        datetime_column("issued", &issued)?,
        datetime_column("time", &starts)?,
        datetime_column("end", &ends)?,
        Column::new("provenance".into(), provenances),
        Column::new("probability".into(), probabilities),
    ];
    columns.extend(conditions.into_columns());
    Ok(DataFrame::new(columns)?)
}
