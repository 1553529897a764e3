use serde::{Deserialize, Serialize};

/// Strategic objective of a program (aggregate a004)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    pub id: String,
    /// Generated as "{program key}-OBJ{n}" when left empty
    pub key: Option<String>,
    pub description: String,
    pub program_id: String,
}
