// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # Habitica Core
//!
//! Core library for the Habitica command-line client.
//!
//! This crate provides reusable components for:
//! - The Habitica v3 HTTP/JSON API (typed client behind a mockable trait)
//! - Task-id expression parsing and positional list reconciliation
//! - Habit value projection and qualitative star scoring
//! - The feed / hatch / sell batch convergence loops
//! - Quest metadata caching for the status display
//! - Configuration loading and paths
//!
//! ## Modules
//!
//! - [`api`] - HTTP client, [`HabiticaApi`] trait, batch-update ops
//! - [`config`] - configuration loading and paths
//! - [`error`] - error types
//! - [`models`] - typed API records
//! - [`quest`] - quest cache and progress summary
//! - [`rate`] - fixed-delay pacing between mutations
//! - [`score`] - habit value projector and star tiers
//! - [`select`] - task-id parsing and index reconciliation
//! - [`stable`] - feed / hatch / sell fixpoint loops

// ============================================================================
// Error Handling
// ============================================================================

pub use error::HabiticaError;

/// Convenience Result type for Habitica operations.
pub type Result<T> = std::result::Result<T, HabiticaError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{
    AppConfig, AuthConfig, Credentials, DEFAULT_URL, config_dir, config_file_path, load_config,
    quest_cache_path,
};

// ============================================================================
// API Client
// ============================================================================

pub use api::{BatchOp, HabiticaApi, HabiticaClient};

// ============================================================================
// Models
// ============================================================================

pub use models::{Direction, Items, Party, ServerStatus, Stats, Task, TaskKind, User};

// ============================================================================
// Task Selection & Scoring
// ============================================================================

pub use score::{TASK_VALUE_BASE, project_value, qualitative_score};
pub use select::{parse_task_ids, partition_in_bounds, remove_indices};

// ============================================================================
// Batch Convergence Loops
// ============================================================================

pub use stable::{PET_KINDS, StableEvent, feed_all, hatch_all, sell_potions};

// ============================================================================
// Quest Cache
// ============================================================================

pub use quest::{NO_QUEST, QuestCache, quest_summary};

// ============================================================================
// Rate Limiting
// ============================================================================

pub use rate::FixedDelay;

// ============================================================================
// Modules
// ============================================================================

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod quest;
pub mod rate;
pub mod score;
pub mod select;
pub mod stable;
