//! Command-line interface for mini-ini.
//!
//! Reads an INI file, splits it into lines and feeds them through the
//! reader, printing either the raw hook events, the built document, or a
//! recognition summary.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use mini_ini_reader::{
    EventRecorder, LineEvent, NoopHandler, ReadReport, read_line_outcome, read_lines,
};
use serde::Serialize;
use std::fmt::Write as _;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::document::IniDocument;

/// mini-ini - Classify INI lines and dump what the reader sees
#[derive(Parser, Debug)]
#[command(name = "mini-ini")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// INI file to read, or `-` for stdin
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// What to print
    #[arg(long, value_enum, default_value_t = OutputFormat::Events)]
    pub format: OutputFormat,

    /// Exit with status 1 if any line is unrecognized
    #[arg(long)]
    pub strict: bool,

    /// Log level (overrides RUST_LOG)
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Output mode for the dump.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per hook event, tagged with its line number
    #[default]
    Events,
    /// The assembled document as pretty-printed JSON
    Document,
    /// Recognized/unrecognized line counts
    Summary,
}

/// Log verbosity selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Runtime options extracted from the command line
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Input path (`-` means stdin)
    pub input: PathBuf,
    pub format: OutputFormat,
    pub strict: bool,
}

impl From<Cli> for RunOptions {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.file,
            format: cli.format,
            strict: cli.strict,
        }
    }
}

/// Rendered output plus the per-line outcomes it was built from.
#[derive(Debug)]
pub struct RunOutput {
    pub text: String,
    pub report: ReadReport,
}

impl RunOutput {
    /// Process exit code for this run.
    pub fn exit_code(&self, strict: bool) -> i32 {
        if strict && !self.report.all_recognized() {
            1
        } else {
            0
        }
    }
}

/// Install the global logger.
///
/// Defaults to `warn`; `RUST_LOG` overrides the default and `level` (from
/// `--log-level`) overrides both.
pub fn init_logging(level: Option<LogLevel>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level.to_level_filter());
    }
    // A logger may already be installed (e.g. by a test harness)
    let _ = builder.try_init();
}

/// Read the whole input as UTF-8 text.
pub fn read_source(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read INI text from stdin")?;
        return Ok(text);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read INI file {}", path.display()))
}

/// An event together with the 1-based line it came from.
#[derive(Serialize)]
struct NumberedEvent<'a> {
    line: usize,
    #[serde(flatten)]
    event: &'a LineEvent,
}

/// Classify `text` line by line and render it in the requested format.
pub fn render(text: &str, format: OutputFormat) -> anyhow::Result<RunOutput> {
    let (text, report) = match format {
        OutputFormat::Events => render_events(text)?,
        OutputFormat::Document => {
            let (document, report) = IniDocument::from_lines(text.lines());
            let mut json = serde_json::to_string_pretty(&document)
                .context("Failed to serialize INI document")?;
            json.push('\n');
            (json, report)
        }
        OutputFormat::Summary => {
            let report = read_lines(text.lines(), &mut NoopHandler);
            (render_summary(&report), report)
        }
    };

    for line_number in report.unrecognized_lines() {
        log::warn!("Line {}: unrecognized INI line", line_number);
    }

    Ok(RunOutput { text, report })
}

fn render_events(text: &str) -> anyhow::Result<(String, ReadReport)> {
    let mut out = String::new();
    let mut recorder = EventRecorder::new();
    let mut report = ReadReport::default();

    for (i, line) in text.lines().enumerate() {
        report.extend([read_line_outcome(line, &mut recorder)]);
        for event in recorder.drain() {
            let numbered = NumberedEvent {
                line: i + 1,
                event: &event,
            };
            let json = serde_json::to_string(&numbered).context("Failed to serialize event")?;
            out.push_str(&json);
            out.push('\n');
        }
    }
    Ok((out, report))
}

fn render_summary(report: &ReadReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "lines: {}", report.len());
    let _ = writeln!(out, "recognized: {}", report.recognized_count());
    let _ = writeln!(out, "unrecognized: {}", report.unrecognized_count());

    let unrecognized: Vec<String> = report.unrecognized_lines().map(|n| n.to_string()).collect();
    if !unrecognized.is_empty() {
        let _ = writeln!(out, "unrecognized lines: {}", unrecognized.join(", "));
    }
    out
}

/// Read the configured input and render it.
pub fn run(options: &RunOptions) -> anyhow::Result<RunOutput> {
    log::info!(
        "Reading INI lines from {} ({:?} output)",
        options.input.display(),
        options.format
    );
    let text = read_source(&options.input)?;
    render(&text, options.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["mini-ini", "app.ini"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("app.ini"));
        assert_eq!(cli.format, OutputFormat::Events);
        assert!(!cli.strict);
        assert!(cli.log_level.is_none());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "mini-ini",
            "--format",
            "summary",
            "--strict",
            "--log-level",
            "debug",
            "-",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Summary);
        assert!(cli.strict);
        assert_eq!(cli.log_level, Some(LogLevel::Debug));

        let options = RunOptions::from(cli);
        assert_eq!(options.input, PathBuf::from("-"));
    }

    #[test]
    fn test_cli_requires_file() {
        assert!(Cli::try_parse_from(["mini-ini"]).is_err());
    }

    #[test]
    fn test_level_filter() {
        assert_eq!(LogLevel::Off.to_level_filter(), log::LevelFilter::Off);
        assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
    }

    #[test]
    fn test_render_events_numbers_lines() {
        let output = render("[a]\n\nk=v", OutputFormat::Events).unwrap();
        let lines: Vec<&str> = output.text.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"{"line":1,"event":"section","path":"a"}"#,
                r#"{"line":1,"event":"sub_section","name":"a","path":"a"}"#,
                r#"{"line":2,"event":"empty"}"#,
                r#"{"line":3,"event":"key_value","key":"k","value":"v"}"#,
            ]
        );
        assert!(output.report.all_recognized());
    }

    #[test]
    fn test_render_summary() {
        let output = render("a=1\nnope\n[s]\n???", OutputFormat::Summary).unwrap();
        assert_eq!(
            output.text,
            "lines: 4\nrecognized: 2\nunrecognized: 2\nunrecognized lines: 2, 4\n"
        );
        assert_eq!(output.exit_code(true), 1);
        assert_eq!(output.exit_code(false), 0);
    }

    #[test]
    fn test_crlf_line_endings_are_stripped() {
        let output = render("k=v\r\n\r\n", OutputFormat::Summary).unwrap();
        assert_eq!(output.report.len(), 2);
        assert!(output.report.all_recognized());
    }
}
