//! Runway visual range (`R24/P1500N`) and runway surface state (`R24/290050`).

use crate::types::units::{Bound, Distance, DistanceUnit};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A runway designator such as `24`, `06L` or `18C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunwayDesignator {
    number: u8,
    side: Option<char>,
}

impl RunwayDesignator {
    /// Parses `24`, `06L`, `18C`, `27R`; the number must be 01..=36 or one of
    /// the all-runways/repetition codes 88 and 99.
    pub fn parse(code: &str) -> Option<Self> {
        let digits: String = code.chars().take_while(|c| c.is_ascii_digit()).collect();
        if digits.len() != 2 {
            return None;
        }
        let number: u8 = digits.parse().ok()?;
        if !((1..=36).contains(&number) || number == 88 || number == 99) {
            return None;
        }
        let rest = &code[2..];
        let side = match rest {
            "" => None,
            "L" | "C" | "R" => rest.chars().next(),
            _ => return None,
        };
        Some(Self { number, side })
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn side(&self) -> Option<char> {
        self.side
    }
}

impl fmt::Display for RunwayDesignator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.number)?;
        if let Some(side) = self.side {
            write!(f, "{side}")?;
        }
        Ok(())
    }
}

/// Trend of the runway visual range over the last ten minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RvrTendency {
    Upward,
    Downward,
    NoChange,
}

impl RvrTendency {
    pub(crate) fn from_code(code: &str) -> Option<Self> {
        match code {
            "U" => Some(RvrTendency::Upward),
            "D" => Some(RvrTendency::Downward),
            "N" => Some(RvrTendency::NoChange),
            _ => None,
        }
    }
}

/// One RVR value with its `P`/`M` qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RvrReading {
    distance: Distance,
    bound: Bound,
}

impl RvrReading {
    pub fn new(distance: Distance, bound: Bound) -> Self {
        Self { distance, bound }
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn bound(&self) -> Bound {
        self.bound
    }
}

/// A decoded RVR group.
///
/// For a varying range (`R06L/0600V1000U`) `lower` holds the minimum and
/// `upper` the maximum; otherwise `upper` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunwayVisualRange {
    runway: RunwayDesignator,
    lower: RvrReading,
    upper: Option<RvrReading>,
    tendency: Option<RvrTendency>,
}

impl RunwayVisualRange {
    pub fn new(
        runway: RunwayDesignator,
        lower: RvrReading,
        upper: Option<RvrReading>,
        tendency: Option<RvrTendency>,
    ) -> Self {
        Self {
            runway,
            lower,
            upper,
            tendency,
        }
    }

    pub fn runway(&self) -> RunwayDesignator {
        self.runway
    }

    pub fn lower(&self) -> RvrReading {
        self.lower
    }

    pub fn upper(&self) -> Option<RvrReading> {
        self.upper
    }

    pub fn tendency(&self) -> Option<RvrTendency> {
        self.tendency
    }

    pub fn is_variable(&self) -> bool {
        self.upper.is_some()
    }
}

/// Type of deposit on the runway surface (first digit of the state code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunwayDeposit {
    ClearAndDry,
    Damp,
    Wet,
    RimeOrFrost,
    DrySnow,
    WetSnow,
    Slush,
    Ice,
    CompactedSnow,
    FrozenRuts,
}

impl RunwayDeposit {
    pub(crate) fn from_code(code: char) -> Option<Self> {
        Some(match code {
            '0' => RunwayDeposit::ClearAndDry,
            '1' => RunwayDeposit::Damp,
            '2' => RunwayDeposit::Wet,
            '3' => RunwayDeposit::RimeOrFrost,
            '4' => RunwayDeposit::DrySnow,
            '5' => RunwayDeposit::WetSnow,
            '6' => RunwayDeposit::Slush,
            '7' => RunwayDeposit::Ice,
            '8' => RunwayDeposit::CompactedSnow,
            '9' => RunwayDeposit::FrozenRuts,
            _ => return None,
        })
    }
}

/// Fraction of the runway covered by the deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContaminationExtent {
    UpToTenPercent,
    UpToQuarter,
    UpToHalf,
    MoreThanHalf,
}

impl ContaminationExtent {
    pub(crate) fn from_code(code: char) -> Option<Self> {
        match code {
            '1' => Some(ContaminationExtent::UpToTenPercent),
            '2' => Some(ContaminationExtent::UpToQuarter),
            '5' => Some(ContaminationExtent::UpToHalf),
            '9' => Some(ContaminationExtent::MoreThanHalf),
            _ => None,
        }
    }
}

/// Depth of the deposit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepositDepth {
    Depth(Distance),
    /// Code `98`: 40 cm or more.
    AtLeast(Distance),
    /// Code `99`: runway closed by the deposit.
    RunwayNotOperational,
}

impl DepositDepth {
    pub(crate) fn from_code(code: u8) -> Option<Self> {
        let millimetres = |value: u16| Distance::new(f64::from(value), DistanceUnit::Millimetres);
        match code {
            0..=90 => Some(DepositDepth::Depth(millimetres(u16::from(code)))),
            92..=97 => Some(DepositDepth::Depth(millimetres(
                (u16::from(code) - 90) * 50,
            ))),
            98 => Some(DepositDepth::AtLeast(millimetres(400))),
            99 => Some(DepositDepth::RunwayNotOperational),
            _ => None,
        }
    }
}

/// Friction coefficient or estimated braking action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrakingAction {
    /// Measured coefficient in hundredths (`45` means 0.45).
    FrictionCoefficient(u8),
    Poor,
    MediumToPoor,
    Medium,
    MediumToGood,
    Good,
    Unreliable,
}

impl BrakingAction {
    pub(crate) fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            1..=90 => BrakingAction::FrictionCoefficient(code),
            91 => BrakingAction::Poor,
            92 => BrakingAction::MediumToPoor,
            93 => BrakingAction::Medium,
            94 => BrakingAction::MediumToGood,
            95 => BrakingAction::Good,
            99 => BrakingAction::Unreliable,
            _ => return None,
        })
    }
}

/// A decoded runway state group. Fields reported as `/` are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunwayState {
    runway: RunwayDesignator,
    cleared: bool,
    deposit: Option<RunwayDeposit>,
    extent: Option<ContaminationExtent>,
    depth: Option<DepositDepth>,
    braking: Option<BrakingAction>,
}

impl RunwayState {
    pub fn new(
        runway: RunwayDesignator,
        deposit: Option<RunwayDeposit>,
        extent: Option<ContaminationExtent>,
        depth: Option<DepositDepth>,
        braking: Option<BrakingAction>,
    ) -> Self {
        Self {
            runway,
            cleared: false,
            deposit,
            extent,
            depth,
            braking,
        }
    }

    /// `R24/CLRD//`: contamination has ceased to exist.
    pub fn cleared(runway: RunwayDesignator, braking: Option<BrakingAction>) -> Self {
        Self {
            runway,
            cleared: true,
            deposit: None,
            extent: None,
            depth: None,
            braking,
        }
    }

    pub fn runway(&self) -> RunwayDesignator {
        self.runway
    }

    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    pub fn deposit(&self) -> Option<RunwayDeposit> {
        self.deposit
    }

    pub fn extent(&self) -> Option<ContaminationExtent> {
        self.extent
    }

    pub fn depth(&self) -> Option<DepositDepth> {
        self.depth
    }

    pub fn braking(&self) -> Option<BrakingAction> {
        self.braking
    }
}
