//! Project configuration record.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Schema version written into fresh config documents.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Per-project configuration, created once at initialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Human-readable project name
    pub project_name: String,

    /// Schema version of the persisted documents
    pub version: String,

    /// Timestamp when the project was initialized (UTC)
    pub created_at: Timestamp,

    /// Whether estimated priorities are recomputed on every mutation
    pub auto_priority: bool,
}

impl ProjectConfig {
    /// Creates a fresh config with auto-priority enabled.
    pub fn new(project_name: impl Into<String>, now: Timestamp) -> Self {
        Self {
            project_name: project_name.into(),
            version: SCHEMA_VERSION.to_string(),
            created_at: now,
            auto_priority: true,
        }
    }
}
