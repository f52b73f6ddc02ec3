//! Goal projection result
//!
//! The projector speaks in whole months with two sentinels: `0` when the goal
//! is already covered and `-1` when it can never be reached at the given
//! contribution. `GoalOutcome` gives those sentinels names.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Sentinel for a goal that is already covered by savings (or costs nothing)
pub const MONTHS_ALREADY_MET: i64 = 0;

/// Sentinel for a goal that a non-positive contribution can never reach
pub const MONTHS_UNREACHABLE: i64 = -1;

/// Typed view of a month estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum GoalOutcome {
    AlreadyMet,
    Unreachable,
    Months(u32),
}

impl GoalOutcome {
    /// Interpret a month estimate, including its sentinels
    pub fn from_months(months: i64) -> Self {
        match months {
            m if m <= MONTHS_UNREACHABLE => Self::Unreachable,
            MONTHS_ALREADY_MET => Self::AlreadyMet,
            m => Self::Months(u32::try_from(m).unwrap_or(u32::MAX)),
        }
    }

    /// Back to the raw month count, sentinels included
    pub fn as_months(&self) -> i64 {
        match self {
            Self::AlreadyMet => MONTHS_ALREADY_MET,
            Self::Unreachable => MONTHS_UNREACHABLE,
            Self::Months(m) => i64::from(*m),
        }
    }
}

impl fmt::Display for GoalOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyMet => write!(f, "Already covered by savings"),
            Self::Unreachable => write!(f, "Unreachable at this contribution"),
            Self::Months(1) => write!(f, "1 month"),
            Self::Months(m) => write!(f, "{} months", m),
        }
    }
}

/// A contribution plan and how long it takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    pub monthly_contribution: Money,
    pub months_needed: i64,
}

impl Projection {
    pub fn new(monthly_contribution: Money, months_needed: i64) -> Self {
        Self {
            monthly_contribution,
            months_needed,
        }
    }

    pub fn outcome(&self) -> GoalOutcome {
        GoalOutcome::from_months(self.months_needed)
    }
}
