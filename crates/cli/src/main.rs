// doclink CLI - document link grouping and title reconciliation

mod exit_codes;
mod recon;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};

use exit_codes::{link_exit_code, EXIT_IO, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "doclink")]
#[command(about = "Build archive links from file paths and match them to task titles")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Group paths and print one rendered link line per document
    #[command(after_help = "\
Examples:
  doclink links masterFiles.txt
  doclink links masterFiles.txt --config scoap.toml --output endURL_file.txt
  doclink links masterFiles.txt --for Kickoff_Meeting_Template.xlsx --for Budget_Plan_x.xlsx")]
    Links {
        /// Text file with one absolute path per line
        paths: PathBuf,

        /// Print only the links for the document this filename belongs to
        /// (repeatable, one line per filename)
        #[arg(long = "for", value_name = "FILENAME")]
        filenames: Vec<String>,

        /// Link config (.toml); defaults apply when omitted
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Write lines to file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Match titles from a CSV sheet to rendered links
    #[command(after_help = "\
Examples:
  doclink match masterFiles.txt titles.csv --config scoap.toml
  doclink match masterFiles.txt titles.csv -c scoap.toml --output links.csv --json")]
    Match {
        /// Text file with one absolute path per line
        paths: PathBuf,

        /// CSV with `directory` and `title` columns
        titles: PathBuf,

        /// Link config (.toml) listing the title ranges
        #[arg(long, short = 'c')]
        config: PathBuf,

        /// Write per-title results as CSV
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Print the report as JSON to stdout instead of a summary
        #[arg(long)]
        json: bool,

        /// Exit non-zero when any match is flagged for review
        #[arg(long)]
        fail_on_bad_match: bool,
    },

    /// Validate a link config without running
    Validate {
        /// Path to the .toml config file
        config: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Links { paths, filenames, config, output } => {
            recon::cmd_links(paths, filenames, config, output)
        }
        Commands::Match { paths, titles, config, output, json, fail_on_bad_match } => {
            recon::cmd_match(paths, titles, config, output, json, fail_on_bad_match)
        }
        Commands::Validate { config } => recon::cmd_validate(config),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_IO, message: msg.into(), hint: None }
    }

    /// Create error from an engine error with its exit code and a hint.
    pub fn link(err: doclink_recon::LinkError) -> Self {
        use doclink_recon::LinkError;

        let hint = match &err {
            LinkError::PathParse { .. } => {
                Some("set strict_paths = false to drop malformed paths instead".to_string())
            }
            LinkError::UrlValidation { .. } => {
                Some("check base_url in the config; no links were written".to_string())
            }
            LinkError::TitleRange { .. } => {
                Some("ranges are 0-based, end-exclusive row indexes into the title sheet".to_string())
            }
            LinkError::EmptySimilaritySample => {
                Some("every title was a header or exact match; nothing to score".to_string())
            }
            _ => None,
        };
        Self { code: link_exit_code(&err), message: err.to_string(), hint }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
