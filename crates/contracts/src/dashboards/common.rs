use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a003_cycle::Cycle;

/// Cycle shown in dashboard headers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleHeader {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
}

impl From<&Cycle> for CycleHeader {
    fn from(c: &Cycle) -> Self {
        Self {
            id: c.id.clone(),
            name: c.name.clone(),
            start_date: c.start_date,
            end_date: c.end_date,
            is_active: c.is_active,
        }
    }
}
