//! Migration driver tying the three passes to a source and target layout.

use crate::config::Config;
use crate::conversations::ConversationStats;
use crate::error::Result;
use crate::models::MigrationReport;
use crate::paths::{SourceLayout, TargetLayout};
use crate::{chunks, conversations, personality};

/// The three passes, in the order [`Migrator::run`] executes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Chunks,
    Conversations,
    Personality,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Chunks, Step::Conversations, Step::Personality];

    /// One-based position in the run.
    pub fn number(self) -> u8 {
        match self {
            Step::Chunks => 1,
            Step::Conversations => 2,
            Step::Personality => 3,
        }
    }
}

/// Observer for per-step progress. `report` holds the counts of every step
/// finished so far.
pub trait Progress {
    fn step_started(&mut self, _step: Step) {}

    fn step_finished(&mut self, _step: Step, _report: &MigrationReport) {}
}

/// No-op progress.
impl Progress for () {}

/// Runs the chunk, conversation and personality passes.
#[derive(Debug, Clone)]
pub struct Migrator {
    source: SourceLayout,
    target: TargetLayout,
}

impl Migrator {
    pub fn new(config: &Config) -> Self {
        Self {
            source: SourceLayout::new(config.openclaw_home.clone()),
            target: TargetLayout::new(config.nexus_home.clone()),
        }
    }

    pub fn source(&self) -> &SourceLayout {
        &self.source
    }

    pub fn target(&self) -> &TargetLayout {
        &self.target
    }

    /// Create the target `vector`, `events` and `graph` directories.
    pub fn prepare(&self) -> Result<()> {
        self.target.ensure()
    }

    pub async fn migrate_chunks(&self) -> Result<usize> {
        chunks::migrate_chunks(&self.source.database(), &self.target.vector_dir()).await
    }

    pub fn migrate_conversations(&self) -> Result<ConversationStats> {
        conversations::migrate_conversations(
            &self.source.sessions_dir(),
            &self.target.events_dir(),
        )
    }

    pub fn extract_personality(&self) -> Result<bool> {
        personality::extract_personality(&self.source.config_file(), &self.target.memory_dir())
    }

    /// Prepare the target and run all passes in order.
    pub async fn run(&self) -> Result<MigrationReport> {
        self.run_with(&mut ()).await
    }

    /// Like [`Migrator::run`], reporting each step to `progress`.
    pub async fn run_with<P: Progress>(&self, progress: &mut P) -> Result<MigrationReport> {
        self.prepare()?;

        let mut report = MigrationReport::default();
        for step in Step::ALL {
            progress.step_started(step);
            match step {
                Step::Chunks => report.chunks = self.migrate_chunks().await?,
                Step::Conversations => {
                    let stats = self.migrate_conversations()?;
                    report.messages = stats.messages;
                    report.sessions = stats.sessions;
                }
                Step::Personality => report.personality = self.extract_personality()?,
            }
            progress.step_finished(step, &report);
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_numbered_in_run_order() {
        assert_eq!(Step::ALL.map(Step::number), [1, 2, 3]);
    }
}
