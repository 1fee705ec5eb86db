//! nexus-migrate-core: OpenClaw to Nexus memory migration
//!
//! This crate moves a local OpenClaw memory store (SQLite chunk table,
//! JSONL session logs, `openclaw.json`) into the per-record JSON layout
//! Nexus reads from `~/.config/nexus/memory`.
//!
//! The three passes are independent: [`chunks`], [`conversations`] and
//! [`personality`]. [`migration::Migrator`] runs them in order.

pub mod chunks;
pub mod config;
pub mod conversations;
pub mod error;
pub mod migration;
pub mod models;
pub mod output;
pub mod paths;
pub mod personality;

pub use config::Config;
pub use error::Error;
pub use error::Result;
pub use migration::{Migrator, Progress, Step};

/// Application name used for config paths.
pub const APP_NAME: &str = "openclaw-migrate";

/// Provenance tag written into every migrated record.
pub const PROVENANCE: &str = "openclaw";
