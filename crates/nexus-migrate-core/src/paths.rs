//! Filesystem layout of the OpenClaw source store and the Nexus target store.

use std::path::{Path, PathBuf};

use crate::error::Result;

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Default OpenClaw root: `~/.openclaw`.
pub fn default_openclaw_home() -> PathBuf {
    home_dir().join(".openclaw")
}

/// Default Nexus root: `~/.config/nexus`.
///
/// Nexus always resolves under `~/.config`, also on platforms where
/// `dirs::config_dir` points elsewhere.
pub fn default_nexus_home() -> PathBuf {
    home_dir().join(".config").join("nexus")
}

/// Locations read from an OpenClaw installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLayout {
    root: PathBuf,
}

impl SourceLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// SQLite database holding the `chunks` table.
    pub fn database(&self) -> PathBuf {
        self.root.join("memory").join("main.sqlite")
    }

    /// Directory of `<session>.jsonl` logs for the main agent.
    pub fn sessions_dir(&self) -> PathBuf {
        self.root.join("agents").join("main").join("sessions")
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join("openclaw.json")
    }
}

/// Locations written under the Nexus memory directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLayout {
    root: PathBuf,
}

impl TargetLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn memory_dir(&self) -> PathBuf {
        self.root.join("memory")
    }

    pub fn vector_dir(&self) -> PathBuf {
        self.memory_dir().join("vector")
    }

    pub fn events_dir(&self) -> PathBuf {
        self.memory_dir().join("events")
    }

    /// Reserved for graph memory; created but never populated.
    pub fn graph_dir(&self) -> PathBuf {
        self.memory_dir().join("graph")
    }

    pub fn personality_file(&self) -> PathBuf {
        personality_file(&self.memory_dir())
    }

    /// Create the `vector`, `events` and `graph` directories.
    pub fn ensure(&self) -> Result<()> {
        for dir in [self.vector_dir(), self.events_dir(), self.graph_dir()] {
            std::fs::create_dir_all(&dir)?;
        }
        Ok(())
    }
}

/// `<vector_dir>/<id>.json`
pub fn chunk_file(vector_dir: &Path, id: &str) -> PathBuf {
    vector_dir.join(format!("{id}.json"))
}

/// `<events_dir>/openclaw_<session>_<index>.json`
pub fn event_file(events_dir: &Path, session: &str, index: usize) -> PathBuf {
    events_dir.join(format!("openclaw_{session}_{index}.json"))
}

pub fn personality_file(memory_dir: &Path) -> PathBuf {
    memory_dir.join("openclaw_personality.json")
}
