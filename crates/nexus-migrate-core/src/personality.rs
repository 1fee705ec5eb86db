//! Personality extraction: `openclaw.json` to `memory/openclaw_personality.json`.

use std::path::Path;

use chrono::Utc;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::models::PersonalityRecord;
use crate::{output, paths};

/// Wrap the OpenClaw config with migration metadata and write it into
/// `memory_dir`. Returns `false` when there is no config to extract.
///
/// Unlike the other passes, an unreadable or malformed config is fatal.
pub fn extract_personality(config_path: &Path, memory_dir: &Path) -> Result<bool> {
    if !config_path.exists() {
        tracing::warn!("No config found at {}", config_path.display());
        return Ok(false);
    }

    let config = read_config(config_path).map_err(|source| Error::MalformedConfig {
        path: config_path.to_path_buf(),
        source: Box::new(source),
    })?;

    let record = PersonalityRecord::new(config, Utc::now());
    output::write_json(&paths::personality_file(memory_dir), &record)?;
    Ok(true)
}

fn read_config(path: &Path) -> Result<Value> {
    let content = std::fs::read(path)?;
    Ok(serde_json::from_slice(&content)?)
}
