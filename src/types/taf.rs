use crate::types::conditions::Conditions;
use crate::types::forecast::{ChangeSegment, ForecastPeriod};
use crate::types::metar::ReportModifier;
use crate::types::temperature::TemperatureForecast;
use crate::types::time::{DayTime, TafTime, ValidityPeriod};
use serde::{Deserialize, Serialize};

/// A decoded terminal aerodrome forecast.
///
/// `segments` holds the change groups as written (after clamping to the
/// validity); `periods` holds the resolved and unified timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Taf {
    pub(crate) station: String,
    pub(crate) issued: DayTime,
    pub(crate) modifier: Option<ReportModifier>,
    pub(crate) provisional: bool,
    pub(crate) cancelled: bool,
    pub(crate) validity: ValidityPeriod,
    pub(crate) base: Conditions,
    pub(crate) segments: Vec<ChangeSegment>,
    pub(crate) temperatures: Vec<TemperatureForecast>,
    pub(crate) remarks: Option<String>,
    pub(crate) periods: Vec<ForecastPeriod>,
}

impl Taf {
    pub fn station(&self) -> &str {
        &self.station
    }

    /// Issuance time.
    pub fn issued(&self) -> DayTime {
        self.issued
    }

    pub fn modifier(&self) -> Option<ReportModifier> {
        self.modifier
    }

    /// `PROV TAF`
    pub fn is_provisional(&self) -> bool {
        self.provisional
    }

    /// `CNL`: an amendment cancelling the forecast for the validity period.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn validity(&self) -> ValidityPeriod {
        self.validity
    }

    /// Conditions stated before the first change group.
    pub fn base(&self) -> &Conditions {
        &self.base
    }

    pub fn segments(&self) -> &[ChangeSegment] {
        &self.segments
    }

    /// `TX`/`TN` groups.
    pub fn temperatures(&self) -> &[TemperatureForecast] {
        &self.temperatures
    }

    pub fn remarks(&self) -> Option<&str> {
        self.remarks.as_deref()
    }

    /// The resolved forecast timeline, covering the validity without gaps.
    pub fn periods(&self) -> &[ForecastPeriod] {
        &self.periods
    }

    /// The resolved period in force at `instant`.
    pub fn period_at(&self, instant: TafTime) -> Option<&ForecastPeriod> {
        self.periods
            .iter()
            .find(|period| period.validity().contains(instant))
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parse_taf;
    use crate::types::forecast::Provenance;
    use crate::types::time::{DayTime, TafTime};
    use std::error::Error;

    fn at(day: u8, hour: u8) -> Result<TafTime, Box<dyn Error>> {
        let time = DayTime::new(day, hour, 0, true).ok_or("invalid time")?;
        Ok(TafTime::anchored(time, 4))
    }

    #[test]
    fn test_period_at_uses_half_open_bounds() -> Result<(), Box<dyn Error>> {
        let taf = parse_taf(
            "TAF EHAM 041118Z 0412/0518 21005KT 9999 BKN040 \
             BECMG 0413/0416 7000 -DZ BKN012 TEMPO 0415/0501 3500 DZ BKN006",
        )?;
        let provenance = |day, hour| -> Result<Option<Provenance>, Box<dyn Error>> {
            Ok(taf.period_at(at(day, hour)?).map(|period| period.provenance()))
        };

        assert_eq!(provenance(4, 12)?, Some(Provenance::Base));
        assert_eq!(provenance(4, 15)?, Some(Provenance::Temporary));
        assert_eq!(provenance(4, 24)?, Some(Provenance::Temporary));
        assert_eq!(provenance(5, 1)?, Some(Provenance::Becoming));
        assert_eq!(provenance(5, 17)?, Some(Provenance::Becoming));
        assert_eq!(provenance(5, 18)?, None);
        assert_eq!(provenance(4, 11)?, None);
        Ok(())
    }
}
