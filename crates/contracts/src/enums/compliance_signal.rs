use serde::{Deserialize, Serialize};

/// Which compliance signal drives a roll-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceSignal {
    /// Progress entries against the cycle target
    Numeric,
    /// Share of completed activities
    Activity,
}

impl Default for ComplianceSignal {
    fn default() -> Self {
        ComplianceSignal::Numeric
    }
}

/// What to do with children that have no data in the cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyChildrenPolicy {
    /// Left out of both numerator and denominator
    Exclude,
    /// Counted as `Rezagada`
    CountAsLagging,
}

impl Default for EmptyChildrenPolicy {
    fn default() -> Self {
        EmptyChildrenPolicy::Exclude
    }
}
