use anyhow::{Context, Result};
use clap::Parser;
use reviewer::extraction::extract_feedback;
use reviewer::feedback::ai_feedback::{AI_REVIEWER, AiFeedback};
use reviewer::prompt::build_prompt;
use reviewer::traits::feedback::{FeedbackEntry, ReviewerType};
use reviewer::types::{FeedbackRecord, LessonNoteView};
use std::fs;
use std::path::PathBuf;
use tracing_appender::rolling;
use util::config::{self, AppConfig};

#[derive(Parser, Debug)]
#[command(version, about = "Review a lesson note with the AI reviewer")]
struct Args {
    /// Lesson note JSON: subject, grade_level, term, content and teacher.name
    note: PathBuf,
    /// Print the rendered review prompt and exit
    #[arg(long)]
    print_prompt: bool,
    /// Skip the backend and extract feedback from saved model output
    #[arg(long, value_name = "PATH")]
    response_file: Option<PathBuf>,
    /// Print a full AI feedback entry for this lesson note id instead of the bare record
    #[arg(long, value_name = "ID")]
    lesson_note_id: Option<i64>,
    /// Load configuration from this file instead of `.env`
    #[arg(long, value_name = "PATH")]
    env_file: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(env_file) = &args.env_file {
        AppConfig::install(AppConfig::from_env_file(env_file));
    }
    let _log_guard = init_logging(&config::log_file(), &config::log_level());
    tracing::debug!(
        project = %config::project_name(),
        env = %config::app_env(),
        note = %args.note.display(),
        "starting lesson review"
    );

    let raw = fs::read_to_string(&args.note)
        .with_context(|| format!("reading lesson note {}", args.note.display()))?;
    let note: LessonNoteView = serde_json::from_str(&raw)
        .with_context(|| format!("parsing lesson note {}", args.note.display()))?;

    if args.print_prompt {
        println!("{}", build_prompt(&note));
        return Ok(());
    }

    let record = match &args.response_file {
        Some(path) => {
            let response = fs::read_to_string(path)
                .with_context(|| format!("reading model response {}", path.display()))?;
            tracing::info!(path = %path.display(), "extracting feedback from saved response");
            extract_feedback(&response)
        }
        None => {
            let reviewer = AiFeedback::from_config().context("building Gemini client")?;
            reviewer.generate_feedback(&note).await
        }
    };

    print_result(record, args.lesson_note_id)
}

fn print_result(record: FeedbackRecord, lesson_note_id: Option<i64>) -> Result<()> {
    let output = match lesson_note_id {
        Some(id) => serde_json::to_string_pretty(&FeedbackEntry::new(
            id,
            AI_REVIEWER,
            ReviewerType::Ai,
            record,
        ))?,
        None => serde_json::to_string_pretty(&record)?,
    };
    println!("{output}");
    Ok(())
}

/// Daily-rolling file log, mirrored to stderr when `LOG_TO_STDOUT` is set.
/// Stdout carries the JSON result, so console logs never go there.
fn init_logging(log_file: &str, log_level: &str) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    fs::create_dir_all("logs").ok();

    let file_appender = rolling::daily("logs", log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let console_layer = config::log_to_stdout().then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(true)
    });

    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_flags() {
        let args = Args::try_parse_from([
            "lesson-review",
            "note.json",
            "--response-file",
            "reply.txt",
            "--lesson-note-id",
            "5",
        ])
        .unwrap();
        assert_eq!(args.note, PathBuf::from("note.json"));
        assert_eq!(args.response_file, Some(PathBuf::from("reply.txt")));
        assert_eq!(args.lesson_note_id, Some(5));
        assert!(!args.print_prompt);
    }

    #[test]
    fn test_note_path_is_required() {
        assert!(Args::try_parse_from(["lesson-review"]).is_err());
    }
}
