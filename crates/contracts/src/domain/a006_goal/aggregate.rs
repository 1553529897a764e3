use serde::{Deserialize, Serialize};

/// Goal ("Meta", aggregate a006)
///
/// Baseline and target live per cycle in a007 `GoalCycleConfig`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    /// Unique key, e.g. "M-1.2.3"
    pub key: String,
    pub name: Option<String>,
    pub statement: String,
    pub project_id: String,
    pub department_id: Option<String>,
    pub indicator: String,
    pub unit: String,
    pub calculation_method: String,
    /// Every entry already carries the running total; only the latest counts.
    /// When false, entries are increments and are summed.
    pub accumulable: bool,
    /// Stored values are fractions of 1 and are shown ×100
    pub percentage: bool,
    pub active: bool,
}

impl Goal {
    /// Name for reports, falling back to the key
    pub fn title(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.key,
        }
    }
}
