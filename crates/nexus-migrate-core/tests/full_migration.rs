//! End-to-end tests - build a fake `~/.openclaw` and run the whole migration
//! into a fake `~/.config/nexus`.

use std::path::Path;

use anyhow::Result;
use nexus_migrate_core::models::{MigrationReport, PersonalityRecord};
use nexus_migrate_core::{Config, Error, Migrator, Progress, Step};
use serde_json::json;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

fn config_for(root: &Path) -> Config {
    Config {
        openclaw_home: root.join(".openclaw"),
        nexus_home: root.join(".config").join("nexus"),
    }
}

async fn seed_openclaw(openclaw: &Path) -> Result<()> {
    let memory = openclaw.join("memory");
    let sessions = openclaw.join("agents").join("main").join("sessions");
    std::fs::create_dir_all(&memory)?;
    std::fs::create_dir_all(&sessions)?;

    let options = SqliteConnectOptions::new()
        .filename(memory.join("main.sqlite"))
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Delete);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;
    sqlx::raw_sql(
        r"
        CREATE TABLE chunks (
            id TEXT PRIMARY KEY, path TEXT, source TEXT, start_line INTEGER,
            end_line INTEGER, hash TEXT, model TEXT, text TEXT, embedding TEXT,
            updated_at INTEGER
        );
        INSERT INTO chunks VALUES
            ('k1', 'src/a.rs', 'memory', 1, 20, 'h1', 'm', 'fn a() {}', '[0.1, 0.2]', 1700000000),
            ('k2', 'src/b.rs', 'memory', 1, 5, 'h2', 'm', 'fn b() {}', NULL, 1700000001);
        ",
    )
    .execute(&pool)
    .await?;
    pool.close().await;

    let log = [
        json!({"type": "session", "version": 3}).to_string(),
        json!({
            "type": "message",
            "timestamp": "2026-02-03T04:05:06Z",
            "message": {"role": "user", "content": [{"type": "text", "text": "hello"}]}
        })
        .to_string(),
    ]
    .join("\n");
    std::fs::write(sessions.join("main-1.jsonl"), log)?;

    std::fs::write(
        openclaw.join("openclaw.json"),
        r#"{"agent": {"name": "Claw", "persona": "helpful"}}"#,
    )?;
    Ok(())
}

#[tokio::test]
async fn migrates_all_three_sources() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let config = config_for(temp.path());
    seed_openclaw(&config.openclaw_home).await?;

    let migrator = Migrator::new(&config);
    let report = migrator.run().await?;

    assert_eq!(report.chunks, 1);
    assert_eq!(report.messages, 1);
    assert_eq!(report.sessions, 1);
    assert!(report.personality);

    let target = migrator.target();
    assert!(target.vector_dir().join("k1.json").exists());
    assert!(!target.vector_dir().join("k2.json").exists());
    assert!(target.events_dir().join("openclaw_main-1_1.json").exists());
    assert!(target.graph_dir().is_dir());
    assert_eq!(std::fs::read_dir(target.graph_dir())?.count(), 0);

    let text = std::fs::read_to_string(target.personality_file())?;
    let personality: PersonalityRecord = serde_json::from_str(&text)?;
    assert_eq!(
        personality.config,
        json!({"agent": {"name": "Claw", "persona": "helpful"}})
    );
    Ok(())
}

#[tokio::test]
async fn empty_openclaw_home_still_succeeds() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let config = config_for(temp.path());

    let migrator = Migrator::new(&config);
    let report = migrator.run().await?;

    assert_eq!(report, MigrationReport::default());
    assert!(migrator.target().vector_dir().is_dir());
    assert!(migrator.target().events_dir().is_dir());
    assert!(!migrator.target().personality_file().exists());
    Ok(())
}

#[tokio::test]
async fn second_run_is_identical_except_migrated_at() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let config = config_for(temp.path());
    seed_openclaw(&config.openclaw_home).await?;
    let migrator = Migrator::new(&config);
    let target = migrator.target();

    migrator.run().await?;
    let chunk = std::fs::read(target.vector_dir().join("k1.json"))?;
    let event = std::fs::read(target.events_dir().join("openclaw_main-1_1.json"))?;
    let personality: PersonalityRecord =
        serde_json::from_slice(&std::fs::read(target.personality_file())?)?;

    migrator.run().await?;
    assert_eq!(std::fs::read(target.vector_dir().join("k1.json"))?, chunk);
    assert_eq!(
        std::fs::read(target.events_dir().join("openclaw_main-1_1.json"))?,
        event
    );
    let again: PersonalityRecord =
        serde_json::from_slice(&std::fs::read(target.personality_file())?)?;
    assert_eq!(again.source, personality.source);
    assert_eq!(again.config, personality.config);
    assert_eq!(again.notes, personality.notes);
    Ok(())
}

#[tokio::test]
async fn malformed_openclaw_json_fails_the_run() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let config = config_for(temp.path());
    std::fs::create_dir_all(&config.openclaw_home)?;
    std::fs::write(config.openclaw_home.join("openclaw.json"), "{ broken")?;

    let err = Migrator::new(&config).run().await.unwrap_err();
    match err {
        Error::MalformedConfig { path, .. } => {
            assert_eq!(path, config.openclaw_home.join("openclaw.json"));
            Ok(())
        }
        _ => anyhow::bail!("unexpected error: {err}"),
    }
}

#[derive(Debug, PartialEq)]
enum Event {
    Started(Step),
    Finished(Step, MigrationReport),
}

#[derive(Default)]
struct Recorder(Vec<Event>);

impl Progress for Recorder {
    fn step_started(&mut self, step: Step) {
        self.0.push(Event::Started(step));
    }

    fn step_finished(&mut self, step: Step, report: &MigrationReport) {
        self.0.push(Event::Finished(step, report.clone()));
    }
}

#[tokio::test]
async fn progress_sees_each_step_in_run_order() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let config = config_for(temp.path());
    seed_openclaw(&config.openclaw_home).await?;

    let mut recorder = Recorder::default();
    let report = Migrator::new(&config).run_with(&mut recorder).await?;

    let after_chunks = MigrationReport {
        chunks: 1,
        ..MigrationReport::default()
    };
    let after_conversations = MigrationReport {
        messages: 1,
        sessions: 1,
        ..after_chunks.clone()
    };
    assert_eq!(
        recorder.0,
        vec![
            Event::Started(Step::Chunks),
            Event::Finished(Step::Chunks, after_chunks),
            Event::Started(Step::Conversations),
            Event::Finished(Step::Conversations, after_conversations),
            Event::Started(Step::Personality),
            Event::Finished(Step::Personality, report.clone()),
        ]
    );
    assert!(report.personality);
    Ok(())
}

#[tokio::test]
async fn failing_step_is_started_but_not_finished() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let config = config_for(temp.path());
    std::fs::create_dir_all(&config.openclaw_home)?;
    std::fs::write(config.openclaw_home.join("openclaw.json"), "{ broken")?;

    let mut recorder = Recorder::default();
    assert!(Migrator::new(&config).run_with(&mut recorder).await.is_err());

    assert_eq!(recorder.0.len(), 5);
    assert_eq!(recorder.0.last(), Some(&Event::Started(Step::Personality)));
    Ok(())
}
