//! Command implementations.
//!
//! # Modules
//! - `commit` - Commit message generation flow.
//! - `save_config` - Persist the effective settings (`--save-config`).
//! - `options` - Command option structs.

/// Commit generation command flow.
pub mod commit;
/// Shared command option structs.
pub mod options;
/// `--save-config` flow.
pub mod save_config;

pub use options::{CommitOptions, ProviderOverrides};
