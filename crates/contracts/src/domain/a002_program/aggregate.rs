use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Strategic program (aggregate a002), top of the hierarchy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: String,
    /// Unique key, e.g. "PDI-2025"
    pub key: String,
    pub name: String,
    pub short_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Duration in years as captured by the program office
    pub duration: i32,
    pub is_active: bool,
}
