use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reporting cycle of a program (aggregate a003)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cycle {
    pub id: String,
    pub program_id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration: i32,
    pub is_active: bool,
}

impl Cycle {
    /// Date falls inside `[start_date, end_date]`
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    pub fn is_well_formed(&self) -> bool {
        self.start_date <= self.end_date
    }
}
