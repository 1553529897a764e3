use serde::{Deserialize, Serialize};

/// Academic or administrative department (aggregate a001)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
}
