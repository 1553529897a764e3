use serde::{Deserialize, Serialize};

/// Project under a strategic objective (aggregate a005)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub key: String,
    pub name: String,
    pub objective_id: String,
}
