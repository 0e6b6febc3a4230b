//! Catalog - per-branch table inventory, read-only after startup

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use shared::models::{Branch, Table};
use thiserror::Error;

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Branch id must not be empty")]
    EmptyBranchId,

    #[error("Duplicate branch: {0}")]
    DuplicateBranch(String),

    #[error("Branch {branch} has a table with an empty id")]
    EmptyTableId { branch: String },

    #[error("Branch {branch} lists table {table} twice")]
    DuplicateTable { branch: String, table: String },

    #[error("Table {table} in branch {branch} has zero capacity")]
    ZeroCapacity { branch: String, table: String },
}

/// On-disk catalog layout
#[derive(Debug, Deserialize)]
struct CatalogFile {
    branches: Vec<Branch>,
}

/// Static branch → ordered tables mapping
#[derive(Debug, Clone)]
pub struct Catalog {
    branches: Vec<Branch>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, checking ids and capacities
    pub fn new(branches: Vec<Branch>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(branches.len());

        for (pos, branch) in branches.iter().enumerate() {
            if branch.id.trim().is_empty() {
                return Err(CatalogError::EmptyBranchId);
            }
            if index.insert(branch.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateBranch(branch.id.clone()));
            }

            let mut seen = HashSet::new();
            for table in &branch.tables {
                if table.id.trim().is_empty() {
                    return Err(CatalogError::EmptyTableId {
                        branch: branch.id.clone(),
                    });
                }
                if !seen.insert(table.id.as_str()) {
                    return Err(CatalogError::DuplicateTable {
                        branch: branch.id.clone(),
                        table: table.id.clone(),
                    });
                }
                if table.capacity == 0 {
                    return Err(CatalogError::ZeroCapacity {
                        branch: branch.id.clone(),
                        table: table.id.clone(),
                    });
                }
            }
        }

        Ok(Self { branches, index })
    }

    /// Built-in inventory used when no catalog file is configured
    pub fn builtin() -> Self {
        let branches = vec![
            Branch::new(
                "S01",
                vec![Table::new("M1", 2), Table::new("M2", 4), Table::new("M3", 4)],
            ),
            Branch::new("S02", vec![Table::new("M1", 2), Table::new("M2", 2)]),
        ];
        let index = branches
            .iter()
            .enumerate()
            .map(|(pos, b)| (b.id.clone(), pos))
            .collect();
        Self { branches, index }
    }

    /// Parse `{"branches":[{"id":..,"tables":[{"id":..,"capacity":..}]}]}`
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.branches)
    }

    /// Load a catalog file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn contains(&self, branch_id: &str) -> bool {
        self.index.contains_key(branch_id)
    }

    pub fn branch(&self, branch_id: &str) -> Option<&Branch> {
        self.index.get(branch_id).map(|&pos| &self.branches[pos])
    }

    /// Tables of a branch in catalog order; empty when the branch is unknown
    pub fn tables_for(&self, branch_id: &str) -> &[Table] {
        self.branch(branch_id)
            .map(|b| b.tables.as_slice())
            .unwrap_or_default()
    }

    pub fn table_count(&self) -> usize {
        self.branches.iter().map(|b| b.tables.len()).sum()
    }
}
