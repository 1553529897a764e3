use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-cycle baseline and target of a goal ("MetaCiclo", aggregate a007)
///
/// Unique per (goal_id, cycle_id). For percentage goals both values are
/// stored as fractions of 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalCycleConfig {
    pub id: String,
    pub goal_id: String,
    pub cycle_id: String,
    pub baseline: Option<Decimal>,
    pub target: Option<Decimal>,
}

/// Values as typed by the user (percent goals in 0..=100)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalCycleConfigInput {
    pub goal_id: String,
    pub cycle_id: String,
    pub baseline: Option<Decimal>,
    pub target: Option<Decimal>,
}
