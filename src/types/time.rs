//! Day-of-month based report times and forecast validity intervals.
//!
//! METAR and TAF bulletins never carry a month or a year. Times are kept as the
//! reported day/hour/minute triple, and TAF times additionally carry an ordinal
//! (minutes since the start of the issuance month) so that intervals can be
//! compared across a month boundary.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

const MINUTES_PER_DAY: u32 = 24 * 60;
const MAX_MONTH_DAYS: u32 = 31;

/// A day-of-month/hour/minute triple such as `051825Z`.
///
/// `hour` may be 24 for interval ends (`0424` means the end of day 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayTime {
    day: u8,
    hour: u8,
    minute: u8,
}

impl DayTime {
    /// Builds a time of day, rejecting out of range components.
    ///
    /// With `allow_hour_24`, `24:00` is accepted as the end of the day.
    pub fn new(day: u8, hour: u8, minute: u8, allow_hour_24: bool) -> Option<Self> {
        let hour_ok = hour <= 23 || (allow_hour_24 && hour == 24 && minute == 0);
        if (1..=31).contains(&day) && hour_ok && minute <= 59 {
            Some(Self { day, hour, minute })
        } else {
            None
        }
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Resolves this time against a reference datetime.
    ///
    /// The result is the first datetime on or after the reference date whose day
    /// of month matches, searching at most one month ahead. `24:00` rolls over to
    /// midnight of the following day.
    pub fn resolve(&self, reference: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let mut date = reference.date_naive();
        let mut steps = 0;
        while date.day() != u32::from(self.day) {
            date = date.succ_opt()?;
            steps += 1;
            if steps > MAX_MONTH_DAYS {
                return None;
            }
        }
        let (hour, extra_day) = if self.hour == 24 { (0, 1) } else { (self.hour, 0) };
        let naive = date.and_hms_opt(u32::from(hour), u32::from(self.minute), 0)?;
        Some(Utc.from_utc_datetime(&naive) + Duration::days(extra_day))
    }

    fn minute_of_month(&self) -> u32 {
        u32::from(self.day) * MINUTES_PER_DAY + u32::from(self.hour) * 60 + u32::from(self.minute)
    }
}

impl fmt::Display for DayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}{:02}Z", self.day, self.hour, self.minute)
    }
}

/// An hour/minute pair used by METAR trend time indicators (`FM1230`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HourMinute {
    hour: u8,
    minute: u8,
}

impl HourMinute {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour <= 24 && minute <= 59).then_some(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

impl fmt::Display for HourMinute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.hour, self.minute)
    }
}

/// A point on a TAF's time axis.
///
/// Ordering and equality use the ordinal only: `0424` and `0500` are the same
/// instant. Days numbered below the issuance day belong to the following month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TafTime {
    time: DayTime,
    ordinal: u32,
}

impl TafTime {
    /// Places `time` on the axis of a TAF issued on `issuance_day`.
    pub fn anchored(time: DayTime, issuance_day: u8) -> Self {
        let rollover = if time.day < issuance_day {
            MAX_MONTH_DAYS * MINUTES_PER_DAY
        } else {
            0
        };
        Self {
            time,
            ordinal: time.minute_of_month() + rollover,
        }
    }

    pub fn time(&self) -> DayTime {
        self.time
    }

    /// Minutes since the start of the issuance month.
    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }
}

impl PartialEq for TafTime {
    fn eq(&self, other: &Self) -> bool {
        self.ordinal == other.ordinal
    }
}

impl Eq for TafTime {}

impl PartialOrd for TafTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TafTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal.cmp(&other.ordinal)
    }
}

impl fmt::Display for TafTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.time.day, self.time.hour)?;
        if self.time.minute != 0 {
            write!(f, "{:02}", self.time.minute)?;
        }
        Ok(())
    }
}

/// A half-open validity interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityPeriod {
    start: TafTime,
    end: TafTime,
}

impl ValidityPeriod {
    /// Returns `None` unless `start < end`.
    pub fn new(start: TafTime, end: TafTime) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    pub fn start(&self) -> TafTime {
        self.start
    }

    pub fn end(&self) -> TafTime {
        self.end
    }

    /// Length of the interval once both ends are resolved against the
    /// issuance datetime, so month lengths are taken into account.
    pub fn duration(&self, issued: DateTime<Utc>) -> Option<Duration> {
        Some(self.end.time.resolve(issued)? - self.start.time.resolve(issued)?)
    }

    pub fn contains(&self, instant: TafTime) -> bool {
        self.start <= instant && instant < self.end
    }

    /// True when `other` lies entirely inside this interval.
    pub fn covers(&self, other: &ValidityPeriod) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// The overlap of both intervals, if it is non-empty.
    pub fn intersection(&self, other: &ValidityPeriod) -> Option<ValidityPeriod> {
        ValidityPeriod::new(self.start.max(other.start), self.end.min(other.end))
    }

    /// The smallest interval covering both.
    pub fn span(&self, other: &ValidityPeriod) -> ValidityPeriod {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for ValidityPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(day: u8, hour: u8, issuance_day: u8) -> TafTime {
        TafTime::anchored(DayTime::new(day, hour, 0, true).unwrap(), issuance_day)
    }

    #[test]
    fn test_day_time_ranges() {
        assert!(DayTime::new(5, 18, 25, false).is_some());
        assert!(DayTime::new(0, 18, 25, false).is_none());
        assert!(DayTime::new(32, 18, 25, false).is_none());
        assert!(DayTime::new(5, 24, 0, false).is_none());
        assert!(DayTime::new(5, 24, 0, true).is_some());
        assert!(DayTime::new(5, 24, 30, true).is_none());
        assert!(DayTime::new(5, 12, 60, false).is_none());
    }

    #[test]
    fn test_hour_24_equals_next_midnight() {
        assert_eq!(at(4, 24, 4), at(5, 0, 4));
        assert!(at(4, 23, 4) < at(4, 24, 4));
    }

    #[test]
    fn test_month_rollover_ordering() {
        // Issued on the 30th, valid into the 1st of the next month.
        let start = at(30, 18, 30);
        let end = at(1, 24, 30);
        assert!(start < end);
        assert!(ValidityPeriod::new(start, end).is_some());
    }

    #[test]
    fn test_duration_follows_month_length() {
        let validity = ValidityPeriod::new(at(30, 18, 30), at(1, 24, 30)).unwrap();
        let april = Utc.with_ymd_and_hms(2024, 4, 30, 17, 0, 0).unwrap();
        assert_eq!(validity.duration(april), Some(Duration::hours(30)));
        let march = Utc.with_ymd_and_hms(2024, 3, 30, 17, 0, 0).unwrap();
        assert_eq!(validity.duration(march), Some(Duration::hours(54)));
    }

    #[test]
    fn test_validity_period_rejects_inverted() {
        assert!(ValidityPeriod::new(at(4, 16, 4), at(4, 13, 4)).is_none());
        assert!(ValidityPeriod::new(at(4, 13, 4), at(4, 13, 4)).is_none());
    }

    #[test]
    fn test_validity_period_relations() {
        let outer = ValidityPeriod::new(at(4, 12, 4), at(5, 18, 4)).unwrap();
        let inner = ValidityPeriod::new(at(4, 13, 4), at(4, 16, 4)).unwrap();
        assert!(outer.covers(&inner));
        assert!(!inner.covers(&outer));
        assert!(outer.contains(at(4, 12, 4)));
        assert!(!outer.contains(at(5, 18, 4)));
        let late = ValidityPeriod::new(at(5, 12, 4), at(6, 0, 4)).unwrap();
        let clipped = outer.intersection(&late).unwrap();
        assert_eq!(clipped.start(), at(5, 12, 4));
        assert_eq!(clipped.end(), at(5, 18, 4));
    }

    #[test]
    fn test_resolve_against_reference() {
        let reference = Utc.with_ymd_and_hms(2024, 1, 30, 11, 0, 0).unwrap();
        let same_day = DayTime::new(30, 18, 25, false).unwrap();
        assert_eq!(
            same_day.resolve(reference),
            Some(Utc.with_ymd_and_hms(2024, 1, 30, 18, 25, 0).unwrap())
        );
        let next_month = DayTime::new(2, 6, 0, false).unwrap();
        assert_eq!(
            next_month.resolve(reference),
            Some(Utc.with_ymd_and_hms(2024, 2, 2, 6, 0, 0).unwrap())
        );
        let end_of_day = DayTime::new(31, 24, 0, true).unwrap();
        assert_eq!(
            end_of_day.resolve(reference),
            Some(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap())
        );
    }
}
