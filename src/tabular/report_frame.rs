//! Contains the `ReportFrame` structure for lazy operations on decoded report rows.

use chrono::{DateTime, Utc};
use polars::prelude::{col, lit, DataFrame, Expr, IntoLazy, LazyFrame};

/// A wrapper around a Polars `LazyFrame` holding one row per METAR or per
/// resolved TAF forecast period.
///
/// Instances are typically obtained from [`crate::metars_to_frame`] or
/// [`crate::tafs_to_frame`] through `From<DataFrame>`.
///
/// # Note on Datetimes
///
/// The "time" column holds the observation time of a METAR or the start of a
/// TAF forecast period, as a timezone-naive UTC datetime. It is null unless the
/// frame was built with a reference datetime in its
/// [`FrameOptions`](crate::FrameOptions).
///
/// # Errors
///
/// Operations that trigger computation on the underlying `LazyFrame` (e.g. calling
/// `.collect()`) can return a [`polars::prelude::PolarsError`].
#[derive(Clone)]
pub struct ReportFrame {
    /// The underlying Polars LazyFrame containing the report rows.
    pub frame: LazyFrame,
}

impl ReportFrame {
    /// Creates a new `ReportFrame` wrapping the given Polars `LazyFrame`.
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    /// Filters the rows based on a Polars predicate expression.
    ///
    /// Returns a *new* `ReportFrame` with the filter applied lazily; the
    /// original frame is unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use metar_taf::{metars_to_frame, parse_metar, FrameOptions, ReportFrame};
    /// use polars::prelude::{col, lit};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let metars = [
    ///     parse_metar("EHAM 051825Z 02007KT 9999 FEW017 06/03 Q1042")?,
    ///     parse_metar("EGLL 051820Z 24025G38KT 6000 RA BKN012 15/10 Q0998")?,
    /// ];
    /// let frame = ReportFrame::from(metars_to_frame(&metars, &FrameOptions::default())?);
    ///
    /// // Rows with wind above 10 m/s
    /// let windy = frame.filter(col("wind_speed").gt(lit(10.0f64)));
    /// let df = windy.frame.collect()?;
    /// assert_eq!(df.height(), 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn filter(&self, predicate: Expr) -> ReportFrame {
        ReportFrame::new(self.frame.clone().filter(predicate))
    }

    /// Keeps only the rows of a single station.
    pub fn for_station(&self, station: &str) -> ReportFrame {
        self.filter(col("station").eq(lit(station)))
    }

    /// Keeps the rows whose "time" lies within `start..=end`.
    ///
    /// Rows with a null time are dropped.
    pub fn get_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> ReportFrame {
        self.filter(
            col("time")
                .gt_eq(lit(start.naive_utc()))
                .and(col("time").lt_eq(lit(end.naive_utc()))),
        )
    }
}

impl From<DataFrame> for ReportFrame {
    fn from(frame: DataFrame) -> Self {
        ReportFrame::new(frame.lazy())
    }
}
