//! Conversation migration: OpenClaw session logs to `memory/events/*.json`.
//!
//! A session log is one JSON object per line. Only lines shaped like
//!
//! ```json
//! {"type":"message","timestamp":"...","message":{"role":"user","content":[{"type":"text","text":"..."}]}}
//! ```
//!
//! become events. Everything else is skipped, but still counts towards the
//! line index so event file names stay stable.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};
use walkdir::WalkDir;

use crate::error::Result;
use crate::models::ConversationEvent;
use crate::{output, paths};

/// Marker OpenClaw puts in the name of a session it has deleted.
const DELETED_MARKER: &str = ".deleted.";

/// Counts produced by the conversation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConversationStats {
    pub sessions: usize,
    pub messages: usize,
}

/// Migrate every active session log in `sessions_dir` into `events_dir`.
pub fn migrate_conversations(sessions_dir: &Path, events_dir: &Path) -> Result<ConversationStats> {
    if !sessions_dir.exists() {
        tracing::warn!("No sessions found at {}", sessions_dir.display());
        return Ok(ConversationStats::default());
    }

    let sessions = active_sessions(sessions_dir)?;
    tracing::info!("Found {} active sessions", sessions.len());

    let mut stats = ConversationStats {
        sessions: sessions.len(),
        messages: 0,
    };
    for session_file in &sessions {
        stats.messages += migrate_session(session_file, events_dir)?;
    }

    Ok(stats)
}

/// `*.jsonl` files directly inside `sessions_dir`, excluding deleted
/// sessions, sorted by file name.
pub fn active_sessions(sessions_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut sessions = Vec::new();
    for entry in WalkDir::new(sessions_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(std::io::Error::from)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_jsonl = path.extension().is_some_and(|ext| ext == "jsonl");
        let deleted = entry
            .file_name()
            .to_string_lossy()
            .contains(DELETED_MARKER);
        if is_jsonl && !deleted {
            sessions.push(path.to_path_buf());
        }
    }
    Ok(sessions)
}

/// Migrate one session log, returning the number of events written.
fn migrate_session(session_file: &Path, events_dir: &Path) -> Result<usize> {
    let session_id = session_file
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let reader = BufReader::new(File::open(session_file)?);
    let mut written = 0usize;
    for (index, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        let Some(event) = parse_line(&line, &session_id, index) else {
            continue;
        };
        let file = paths::event_file(events_dir, &session_id, index);
        output::write_json(&file, &event)?;
        written += 1;
    }

    tracing::debug!("Session {session_id}: {written} messages");
    Ok(written)
}

/// Turn one log line into an event, or `None` if the line is not a message.
pub fn parse_line(line: &[u8], session_id: &str, index: usize) -> Option<ConversationEvent> {
    let Ok(value) = serde_json::from_slice::<Value>(line) else {
        tracing::debug!("Skipping {session_id}:{index}: not JSON");
        return None;
    };
    let outer = value.as_object()?;
    if outer.get("type").and_then(Value::as_str) != Some("message") {
        return None;
    }

    let inner = outer.get("message").and_then(Value::as_object)?;
    let (role, content) = role_and_content(inner)?;

    Some(ConversationEvent::new(
        role.clone(),
        extract_text(content),
        outer.get("timestamp").cloned(),
        session_id,
        index,
    ))
}

fn role_and_content(inner: &Map<String, Value>) -> Option<(&Value, &Value)> {
    Some((inner.get("role")?, inner.get("content")?))
}

/// Flatten message content into plain text.
///
/// Arrays keep only `{"type":"text"}` parts, joined by a single space.
/// Strings pass through; any other value is rendered as compact JSON.
pub fn extract_text(content: &Value) -> String {
    match content {
        Value::Array(parts) => parts
            .iter()
            .filter_map(Value::as_object)
            .filter(|part| part.get("type").and_then(Value::as_str) == Some("text"))
            .map(|part| match part.get("text") {
                Some(Value::String(text)) => text.clone(),
                Some(other) => other.to_string(),
                None => String::new(),
            })
            .collect::<Vec<_>>()
            .join(" "),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
