//! Release Title Classifier
//!
//! Prints the episode range, subtitle languages, resolution and subtitle
//! kind of release titles, and checks regression corpora.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use jimaku_core::{CorpusCase, check, load_file, parse};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Parser)]
#[command(name = "jimaku-parse")]
#[command(about = "Classify anime fansub release titles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log filter for stderr output: a level or directives such as `jimaku_core=debug`
    #[arg(long, global = true, env = "JIMAKU_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse titles given as arguments, or one per stdin line
    Parse {
        titles: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, env = "JIMAKU_OUTPUT", default_value = "text")]
        format: OutputFormat,
    },
    /// Check a JSON-lines regression corpus
    Check {
        /// Corpus file
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// `title => ParsedTitle(...)`
    Text,
    /// One corpus record per line
    Json,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level)?;

    match cli.command {
        Commands::Parse { titles, format } => {
            run_parse(titles, format)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { file } => run_check(&file),
    }
}

/// Logs go to stderr so that stdout carries only results.
fn init_tracing(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter)
        .with_context(|| format!("invalid log filter {filter:?}"))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
    Ok(())
}

fn run_parse(titles: Vec<String>, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if titles.is_empty() {
        debug!("reading titles from stdin");
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read stdin")?;
            let title = line.trim();
            if title.is_empty() {
                continue;
            }
            print_title(&mut out, title, format)?;
        }
    } else {
        for title in &titles {
            print_title(&mut out, title, format)?;
        }
    }
    out.flush().context("failed to flush stdout")
}

fn print_title(out: &mut impl Write, title: &str, format: OutputFormat) -> Result<()> {
    let parsed = parse(title);
    match format {
        OutputFormat::Text => writeln!(out, "{title} => {parsed}")?,
        OutputFormat::Json => {
            let record = CorpusCase {
                title: title.to_string(),
                expected: parsed.render(),
            };
            serde_json::to_writer(&mut *out, &record).context("failed to encode result")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn run_check(file: &Path) -> Result<ExitCode> {
    let cases = load_file(file)
        .with_context(|| format!("failed to load corpus {}", file.display()))?;
    let report = check(&cases);

    for mismatch in &report.mismatches {
        println!("{mismatch}");
    }
    println!("{}/{} cases passed", report.passed(), report.total);

    if report.is_clean() {
        Ok(ExitCode::SUCCESS)
    } else {
        warn!(failed = report.failed, "corpus has mismatches");
        Ok(ExitCode::FAILURE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_subcommand_defaults() {
        let cli = Cli::try_parse_from(["jimaku-parse", "parse", "[Title][01]"]).unwrap();
        assert_eq!(cli.log_level, "warn");
        match cli.command {
            Commands::Parse { titles, format } => {
                assert_eq!(titles, ["[Title][01]"]);
                assert_eq!(format, OutputFormat::Text);
            }
            Commands::Check { .. } => panic!("expected parse"),
        }
    }

    #[test]
    fn log_filter_accepts_directives() {
        assert!(init_tracing("jimaku_core=debug,warn").is_ok());
        assert!(init_tracing("info").is_ok());
    }

    #[test]
    fn json_output_is_a_corpus_record() {
        let mut buf = Vec::new();
        print_title(&mut buf, "[Title][05][720p][简日内嵌]", OutputFormat::Json).unwrap();
        let line = String::from_utf8(buf).unwrap();
        let record: CorpusCase = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(record.title, "[Title][05][720p][简日内嵌]");
        assert_eq!(record.expected.episode_range, "05..05");
        assert_eq!(record.expected.subtitle_languages, "CHS, JPN");
        assert_eq!(record.expected.resolution, "720P");
        assert_eq!(record.expected.subtitle_kind, "EMBEDDED");
    }

    #[test]
    fn text_output_names_title() {
        let mut buf = Vec::new();
        print_title(&mut buf, "[Title][05]", OutputFormat::Text).unwrap();
        let line = String::from_utf8(buf).unwrap();
        assert!(line.starts_with("[Title][05] => ParsedTitle(ep=05..05"));
    }
}
