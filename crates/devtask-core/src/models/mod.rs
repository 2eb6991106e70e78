//! Data models for tasks and project configuration.
//!
//! This module contains the core domain models of the Devtask engine.
//! Display implementations for these models live in
//! [`crate::display::models`] to keep data structures separate from
//! presentation logic.
//!
//! The persisted records ([`Task`], [`StatusChange`], [`ProjectConfig`])
//! serialize with camelCase field names, matching the on-disk document
//! layout; ephemeral types ([`TaskFilter`], [`TaskStats`],
//! [`PriorityScore`]) carry no serde derives at all.

pub mod config;
pub mod filters;
pub mod score;
pub mod stats;
pub mod status;
pub mod task;


// Re-export all public types at the models level
pub use config::{ProjectConfig, SCHEMA_VERSION};
pub use filters::TaskFilter;
pub use score::PriorityScore;
pub use stats::{PriorityCounts, StatusCounts, TaskStats};
pub use status::{TaskPriority, TaskStatus};
pub use task::{StatusChange, Task};
