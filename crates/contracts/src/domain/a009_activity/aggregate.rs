use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::activity_state::ActivityState;

/// Activity (aggregate a009)
///
/// Linked to a goal in older rows; newer rows stand on their own with a
/// department and a cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub goal_id: Option<String>,
    pub cycle_id: Option<String>,
    pub department_id: Option<String>,
    pub name: Option<String>,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub state: ActivityState,
    /// Full name of the responsible user
    pub responsible: Option<String>,
}
