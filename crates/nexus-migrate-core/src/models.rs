//! Record shapes written into the Nexus memory directory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::PROVENANCE;

/// Note attached to the extracted personality config.
pub const PERSONALITY_NOTES: &str =
    "Migrated from OpenClaw. Review and integrate into Nexus system prompts.";

/// Timestamp written in place of a missing message timestamp.
pub const UNKNOWN_TIMESTAMP: &str = "unknown";

/// A code chunk with its embedding, stored under `memory/vector/<id>.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkRecord {
    pub id: Value,
    pub content: Value,
    pub metadata: ChunkMetadata,
    pub embedding: Vec<Value>,
    pub timestamp: Value,
}

/// Source row fields carried over verbatim from the OpenClaw `chunks` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    pub source_file: Value,
    pub start_line: Value,
    pub end_line: Value,
    pub hash: Value,
    pub model: Value,
    pub source: Value,
    pub migrated_from: String,
    pub original_timestamp: Value,
}

impl ChunkMetadata {
    pub fn new(
        source_file: Value,
        start_line: Value,
        end_line: Value,
        hash: Value,
        model: Value,
        source: Value,
        original_timestamp: Value,
    ) -> Self {
        Self {
            source_file,
            start_line,
            end_line,
            hash,
            model,
            source,
            migrated_from: PROVENANCE.to_string(),
            original_timestamp,
        }
    }
}

/// One conversation message, stored under
/// `memory/events/openclaw_<session>_<index>.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub role: Value,
    pub content: String,
    pub timestamp: Value,
    pub session: String,
    pub message_index: usize,
    pub migrated_from: String,
}

impl ConversationEvent {
    pub fn new(
        role: Value,
        content: String,
        timestamp: Option<Value>,
        session: &str,
        message_index: usize,
    ) -> Self {
        Self {
            kind: "conversation".to_string(),
            role,
            content,
            timestamp: timestamp.unwrap_or_else(|| Value::from(UNKNOWN_TIMESTAMP)),
            session: session.to_string(),
            message_index,
            migrated_from: PROVENANCE.to_string(),
        }
    }
}

/// The OpenClaw config wrapped with migration metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityRecord {
    pub source: String,
    pub migrated_at: String,
    pub config: Value,
    pub notes: String,
}

impl PersonalityRecord {
    pub fn new(config: Value, migrated_at: DateTime<Utc>) -> Self {
        Self {
            source: PROVENANCE.to_string(),
            migrated_at: format_migrated_at(migrated_at),
            config,
            notes: PERSONALITY_NOTES.to_string(),
        }
    }
}

/// ISO-8601 UTC with microseconds and a literal `Z`, e.g.
/// `2026-01-02T03:04:05.000006Z`.
pub fn format_migrated_at(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

/// Counts produced by a full migration run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationReport {
    /// Chunk files written.
    pub chunks: usize,
    /// Event files written.
    pub messages: usize,
    /// Session logs read.
    pub sessions: usize,
    /// Whether the personality file was written.
    pub personality: bool,
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
