//! Derived results of the compliance engine. Never persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::compliance_state::ComplianceState;

/// Numeric progress of one goal in one cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Last entry (accumulable) or sum of entries, in stored units
    pub accumulated: Decimal,
    pub target: Option<Decimal>,
    pub baseline: Option<Decimal>,
    /// accumulated / target × 100, not clamped
    pub raw_percentage: Decimal,
    /// raw_percentage clamped to [0, 100], two decimals
    pub percentage: Decimal,
    pub state: ComplianceState,
    pub entry_count: usize,
}

/// Activity-based compliance of one goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityCompliance {
    pub state: ComplianceState,
    pub completed: u32,
    pub total: u32,
    pub not_completed: u32,
    /// completed / total × 100, two decimals
    pub percentage: Decimal,
    /// 100 − percentage, never negative
    pub remaining: Decimal,
}

/// Per-level counters collected while rolling up
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollUpCounts {
    /// Children counted in the denominator
    pub total: u32,
    pub completed: u32,
    pub in_progress: u32,
    pub lagging: u32,
    /// total − completed
    pub not_completed: u32,
    /// Children without data that were left out
    pub excluded: u32,
}

/// State of a project or objective derived from its children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollUp {
    pub state: ComplianceState,
    pub counts: RollUpCounts,
    /// No child qualified. Parents skip empty nodes under the exclude policy.
    pub is_empty: bool,
}

/// One calendar month of a tracking series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSlot {
    /// Three-letter English abbreviation ("Jan")
    pub label: String,
    pub year: i32,
    pub month: u32,
}
