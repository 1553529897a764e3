use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Dated progress observation of a goal ("AvanceMeta", aggregate a008)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub id: String,
    pub goal_id: String,
    /// Null in legacy rows recorded before cycles existed
    pub cycle_id: Option<String>,
    pub department_id: Option<String>,
    /// Non-negative; a fraction of 1 for percentage goals
    pub value: Decimal,
    pub recorded_on: NaiveDate,
}

/// Progress entry as typed by the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressEntryInput {
    pub goal_id: String,
    pub cycle_id: String,
    /// Ignored when the goal has a department of its own
    pub department_id: Option<String>,
    pub value: Decimal,
    pub recorded_on: NaiveDate,
}
