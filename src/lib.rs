//! # pd - GitHub repository conventions, checked and applied
//!
//! `pd` verifies that a GitHub repository follows the product-delivery
//! conventions (topic, standard labels, milestone tracking projects, issue
//! triage) and can initialize the parts that are missing.
//!
//! ## Quick Start
//!
//! ```bash
//! export GH_ACCESS_TOKEN=...
//!
//! # Run every check
//! pd repo check all mozilla/widget
//!
//! # Only show problems
//! pd repo check labels mozilla/widget --quiet
//!
//! # Create the standard labels and a first milestone
//! pd repo init --milestone "Version 1.0" --with-project mozilla/widget
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`github`]: GitHub REST API access
//! - [`model`]: Repository references and the standard tables
//! - [`rules`]: Conformance checks and init actions
//! - [`session`]: Preflight and the per-run API session

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Reads an optional TOML file from the platform config directory.
pub mod config;

/// Error types and result aliases.
///
/// Defines `PdError` enum and `Result<T>` type alias.
pub mod error;

/// GitHub REST API access behind the `GitHub` trait.
pub mod github;

/// Data models: `RepoRef`, `LabelSpec` and the standard tables.
pub mod model;

/// Conformance checks and init actions.
pub mod rules;

pub mod logging;
pub mod output;
pub mod session;

/// Input validation utilities.
pub mod validation;
