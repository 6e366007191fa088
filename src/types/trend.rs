//! Two-hour landing forecast appended to a METAR (`NOSIG`, `BECMG FM1230 ...`).

use crate::types::conditions::Conditions;
use crate::types::time::HourMinute;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendKind {
    Becoming,
    Temporary,
}

/// One `BECMG`/`TEMPO` block of a trend with its optional time indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendChange {
    pub(crate) kind: TrendKind,
    pub(crate) from: Option<HourMinute>,
    pub(crate) until: Option<HourMinute>,
    pub(crate) at: Option<HourMinute>,
    pub(crate) conditions: Conditions,
}

impl TrendChange {
    pub(crate) fn new(kind: TrendKind) -> Self {
        Self {
            kind,
            from: None,
            until: None,
            at: None,
            conditions: Conditions::default(),
        }
    }

    pub fn kind(&self) -> TrendKind {
        self.kind
    }

    /// `FMhhmm`
    pub fn from(&self) -> Option<HourMinute> {
        self.from
    }

    /// `TLhhmm`
    pub fn until(&self) -> Option<HourMinute> {
        self.until
    }

    /// `AThhmm`
    pub fn at(&self) -> Option<HourMinute> {
        self.at
    }

    pub fn conditions(&self) -> &Conditions {
        &self.conditions
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// `NOSIG`
    NoSignificantChange,
    Changes(Vec<TrendChange>),
}

impl Trend {
    pub fn changes(&self) -> &[TrendChange] {
        match self {
            Trend::NoSignificantChange => &[],
            Trend::Changes(changes) => changes,
        }
    }
}
