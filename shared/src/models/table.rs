//! Table and Branch Model

use serde::{Deserialize, Serialize};

/// Dining table entity, immutable once the catalog is loaded
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Table {
    pub id: String,
    pub capacity: u32,
}

impl Table {
    pub fn new(id: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            capacity,
        }
    }

    /// Whether a party of `party_size` fits at this table
    pub fn seats(&self, party_size: u32) -> bool {
        self.capacity >= party_size
    }
}

/// Restaurant branch with its ordered table inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,
    pub tables: Vec<Table>,
}

impl Branch {
    pub fn new(id: impl Into<String>, tables: Vec<Table>) -> Self {
        Self {
            id: id.into(),
            tables,
        }
    }
}
