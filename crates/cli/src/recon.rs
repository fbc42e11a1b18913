//! `doclink links | match | validate` — thin IO around the engine.

use std::path::{Path, PathBuf};

use log::{info, warn};

use doclink_cli::sheets::{read_paths, read_titles, write_results};
use doclink_recon::LinkConfig;

use crate::exit_codes::{EXIT_BAD_MATCHES, EXIT_CONFIG, EXIT_ERROR};
use crate::CliError;

fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("cannot read {}: {e}", path.display())))
}

fn write_file(path: &Path, contents: &str) -> Result<(), CliError> {
    std::fs::write(path, contents)
        .map_err(|e| CliError::io(format!("cannot write {}: {e}", path.display())))?;
    info!("wrote {}", path.display());
    Ok(())
}

fn load_config(path: &Path) -> Result<LinkConfig, CliError> {
    let config_str = read_file(path)?;
    LinkConfig::from_toml(&config_str).map_err(CliError::link)
}

pub fn cmd_links(
    paths_file: PathBuf,
    filenames: Vec<String>,
    config_path: Option<PathBuf>,
    output_file: Option<PathBuf>,
) -> Result<(), CliError> {
    let config = match config_path {
        Some(ref path) => load_config(path)?,
        None => LinkConfig::default(),
    };
    let paths = read_paths(&read_file(&paths_file)?);
    if paths.is_empty() {
        return Err(CliError::args(format!("{}: no paths", paths_file.display())));
    }

    let lines = if filenames.is_empty() {
        doclink_recon::link_lines(&config, &paths).map_err(CliError::link)?
    } else {
        let lines = doclink_recon::links_for_filenames(&config, &paths, &filenames)
            .map_err(CliError::link)?;
        for (filename, line) in filenames.iter().zip(&lines) {
            if line.is_empty() {
                warn!("no links for '{filename}'");
            }
        }
        lines
    };
    let mut out = lines.join("\n");
    out.push('\n');

    match output_file {
        Some(ref path) => write_file(path, &out),
        None => {
            print!("{out}");
            Ok(())
        }
    }
}

pub fn cmd_match(
    paths_file: PathBuf,
    titles_file: PathBuf,
    config_path: PathBuf,
    output_file: Option<PathBuf>,
    json_output: bool,
    fail_on_bad_match: bool,
) -> Result<(), CliError> {
    let config = load_config(&config_path)?;
    if config.ranges.is_empty() {
        return Err(CliError {
            code: EXIT_CONFIG,
            message: format!("{}: no [[ranges]] configured", config_path.display()),
            hint: None,
        }
        .with_hint("add a [[ranges]] table with category, start and end"));
    }

    let paths = read_paths(&read_file(&paths_file)?);
    info!("read {} path(s) from {}", paths.len(), paths_file.display());
    let titles = read_titles(&read_file(&titles_file)?)
        .map_err(|e| CliError::args(format!("{}: {e}", titles_file.display())))?;

    let out = doclink_recon::run(&config, &paths, &titles).map_err(CliError::link)?;

    if let Some(ref path) = output_file {
        let csv = write_results(&out.matches)
            .map_err(|e| CliError::io(format!("cannot encode results: {e}")))?;
        write_file(path, &csv)?;
    }

    let report = &out.report;
    if json_output {
        let json_str = serde_json::to_string_pretty(report).map_err(|e| CliError {
            code: EXIT_ERROR,
            message: format!("JSON serialization error: {e}"),
            hint: None,
        })?;
        println!("{json_str}");
    }

    // Human summary to stderr
    let g = &out.grouped.stats;
    eprintln!(
        "{} paths: {} phases, {} workflow, {} excluded, {} dropped",
        g.total, g.phases, g.workflow, g.excluded, g.dropped,
    );
    eprintln!(
        "{} titles: {} exact, {} headers, {} fuzzy (mean {:.3}, min {:.3}, max {:.3})",
        out.matches.len(),
        report.exact,
        report.headers,
        report.samples,
        report.mean,
        report.min,
        report.max,
    );
    if !json_output {
        for bad in &report.bad_matches {
            eprintln!("  review ({:.3}): {} -> {}", bad.score, bad.title, bad.key);
        }
    }

    if fail_on_bad_match && !report.bad_matches.is_empty() {
        return Err(CliError {
            code: EXIT_BAD_MATCHES,
            message: format!("{} match(es) flagged for review", report.bad_matches.len()),
            hint: None,
        });
    }

    Ok(())
}

pub fn cmd_validate(config_path: PathBuf) -> Result<(), CliError> {
    let config = load_config(&config_path)?;
    eprintln!(
        "{}: ok ({} range(s), threshold {}, {} paths)",
        config_path.display(),
        config.ranges.len(),
        config.bad_match_threshold,
        if config.strict_paths { "strict" } else { "lenient" },
    );
    Ok(())
}
