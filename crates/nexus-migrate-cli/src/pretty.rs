//! Console progress output for openclaw-migrate.

use std::path::Path;

use console::{Term, style};
use nexus_migrate_core::migration::{Progress, Step};
use nexus_migrate_core::models::MigrationReport;

/// Width of the heavy rule under headings.
const RULE_WIDTH: usize = 40;

/// Icons for terminal output - emoji where the terminal supports them,
/// ASCII fallbacks otherwise.
#[derive(Debug, Clone, Copy)]
pub struct Icons {
    migrate: &'static str,
    chunks: &'static str,
    chat: &'static str,
    personality: &'static str,
    summary: &'static str,
    done: &'static str,
    skipped: &'static str,
}

impl Icons {
    pub fn detect() -> Self {
        if Term::stdout().features().wants_emoji() {
            Self::emoji()
        } else {
            Self::ascii()
        }
    }

    fn emoji() -> Self {
        Self {
            migrate: "🔄 ",
            chunks: "📦 ",
            chat: "💬 ",
            personality: "🧠 ",
            summary: "📊 ",
            done: "✅ ",
            skipped: "⚠️  ",
        }
    }

    fn ascii() -> Self {
        Self {
            migrate: "",
            chunks: "",
            chat: "",
            personality: "",
            summary: "",
            done: "[ok] ",
            skipped: "[skip] ",
        }
    }
}

fn step_title(step: Step) -> &'static str {
    match step {
        Step::Chunks => "Migrating code chunks & embeddings...",
        Step::Conversations => "Migrating conversation history...",
        Step::Personality => "Extracting agent personality...",
    }
}

fn step_icon(step: Step, icons: &Icons) -> &'static str {
    match step {
        Step::Chunks => icons.chunks,
        Step::Conversations => icons.chat,
        Step::Personality => icons.personality,
    }
}

/// Result line for a finished step.
fn step_result(step: Step, report: &MigrationReport) -> Result<String, String> {
    match step {
        Step::Chunks => Ok(format!("Migrated {} chunks", report.chunks)),
        Step::Conversations => Ok(format!("Migrated {} messages", report.messages)),
        Step::Personality if report.personality => Ok("Extracted personality config".to_string()),
        Step::Personality => Err("Skipped personality config".to_string()),
    }
}

/// Prints step headings and results as the migration runs.
pub struct ConsoleProgress {
    icons: Icons,
}

impl ConsoleProgress {
    pub fn new(icons: Icons) -> Self {
        Self { icons }
    }
}

impl Progress for ConsoleProgress {
    fn step_started(&mut self, step: Step) {
        print_step(&self.icons, step);
    }

    fn step_finished(&mut self, step: Step, report: &MigrationReport) {
        match step_result(step, report) {
            Ok(line) => print_result(&self.icons, &line),
            Err(line) => print_skipped(&self.icons, &line),
        }
    }
}

fn rule() -> String {
    "━".repeat(RULE_WIDTH)
}

pub fn print_banner(icons: &Icons) {
    println!(
        "{}",
        style(format!("{}OpenClaw → Nexus Migration Tool", icons.migrate)).bold()
    );
    println!("{}", style(rule()).dim());
    println!();
}

fn print_step(icons: &Icons, step: Step) {
    if step != Step::Chunks {
        println!();
    }
    println!(
        "{}",
        style(format!(
            "{}Step {}: {}",
            step_icon(step, icons),
            step.number(),
            step_title(step)
        ))
        .bold()
    );
}

fn print_result(icons: &Icons, line: &str) {
    println!("   {}{line}", icons.done);
}

fn print_skipped(icons: &Icons, line: &str) {
    println!("   {}{}", icons.skipped, style(line).yellow());
}

/// Lines of the final summary, without styling.
pub fn summary_lines(icons: &Icons, report: &MigrationReport, memory_dir: &Path) -> Vec<String> {
    let personality = if report.personality {
        format!("{}Extracted personality config", icons.done)
    } else {
        format!("{}No personality config found", icons.skipped)
    };

    vec![
        format!(
            "{}Migrated {} code chunks",
            icons.done, report.chunks
        ),
        format!(
            "{}Migrated {} conversation messages from {} sessions",
            icons.done, report.messages, report.sessions
        ),
        personality,
        String::new(),
        format!("Location: {}", memory_dir.display()),
    ]
}

pub fn print_summary(icons: &Icons, report: &MigrationReport, memory_dir: &Path) {
    println!();
    println!(
        "{}",
        style(format!("{}Migration Summary", icons.summary)).bold()
    );
    println!("{}", style(rule()).dim());
    for line in summary_lines(icons, report, memory_dir) {
        println!("{line}");
    }
    println!();
    println!("{}", style("Next steps:").bold());
    println!("1. Review migrated data");
    println!("2. Run: nexus memory-stats");
}
