use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Risk attached to an activity (aggregate a010)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Risk {
    pub id: String,
    pub activity_id: Option<String>,
    pub statement: String,
    pub probability: i32,
    pub impact: i32,
}

impl Risk {
    /// probability × impact
    pub fn value(&self) -> i32 {
        self.probability * self.impact
    }
}

/// Mitigation action taken on a risk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mitigation {
    pub id: String,
    pub risk_id: String,
    pub action: String,
    pub action_date: NaiveDate,
    pub responsible: String,
}
