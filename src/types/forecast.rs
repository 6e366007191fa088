//! TAF change groups and the resolved periods of a forecast timeline.

use crate::types::conditions::Conditions;
use crate::types::time::ValidityPeriod;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a TAF change group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// `BECMG`: a lasting change completed within the interval.
    Becoming,
    /// `TEMPO` (or `INTER`): temporary fluctuations inside the interval only.
    Temporary,
    /// `PROBnn`, alone or with `TEMPO`.
    Probability,
    /// `FMddhhmm`: a rapid, lasting change.
    From,
}

impl ChangeKind {
    /// BECMG and FM change the baseline from their start onward.
    pub fn is_permanent(&self) -> bool {
        matches!(self, ChangeKind::Becoming | ChangeKind::From)
    }
}

/// A change group with its (clamped) validity and the attributes it states.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeSegment {
    pub(crate) kind: ChangeKind,
    pub(crate) probability: Option<u8>,
    pub(crate) validity: ValidityPeriod,
    pub(crate) conditions: Conditions,
}

impl ChangeSegment {
    pub fn kind(&self) -> ChangeKind {
        self.kind
    }

    /// Percentage of a PROB group, `None` for every other kind.
    pub fn probability(&self) -> Option<u8> {
        self.probability
    }

    pub fn validity(&self) -> ValidityPeriod {
        self.validity
    }

    pub fn conditions(&self) -> &Conditions {
        &self.conditions
    }

    pub(crate) fn provenance(&self) -> Provenance {
        match self.kind {
            ChangeKind::Becoming => Provenance::Becoming,
            ChangeKind::From => Provenance::From,
            ChangeKind::Temporary => Provenance::Temporary,
            ChangeKind::Probability => Provenance::Probability(self.probability.unwrap_or_default()),
        }
    }
}

/// Which contributor determined a resolved period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    Base,
    Becoming,
    From,
    Temporary,
    Probability(u8),
}

impl Provenance {
    /// Precedence when several contributors shape one period:
    /// PROB > TEMPO > FM/BECMG > BASE.
    pub fn specificity(&self) -> u8 {
        match self {
            Provenance::Base => 0,
            Provenance::Becoming | Provenance::From => 1,
            Provenance::Temporary => 2,
            Provenance::Probability(_) => 3,
        }
    }

    /// Base, BECMG and FM describe the baseline; the rest are overlays.
    pub fn is_baseline(&self) -> bool {
        self.specificity() <= 1
    }

    pub fn probability(&self) -> Option<u8> {
        match self {
            Provenance::Probability(percent) => Some(*percent),
            _ => None,
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Base => f.write_str("BASE"),
            Provenance::Becoming => f.write_str("BECMG"),
            Provenance::From => f.write_str("FM"),
            Provenance::Temporary => f.write_str("TEMPO"),
            Provenance::Probability(percent) => write!(f, "PROB{percent}"),
        }
    }
}

/// One span of the resolved forecast timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPeriod {
    pub(crate) validity: ValidityPeriod,
    pub(crate) conditions: Conditions,
    pub(crate) provenance: Provenance,
}

impl ForecastPeriod {
    pub fn validity(&self) -> ValidityPeriod {
        self.validity
    }

    pub fn conditions(&self) -> &Conditions {
        &self.conditions
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }
}
