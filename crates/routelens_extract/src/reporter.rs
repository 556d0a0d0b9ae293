use colored::Colorize;
use log::debug;
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{config::Config, constants::EXAMPLE_ROUTE_NAMES, types::ExtractionResult};

const SAMPLE_LIMIT: usize = 20;
const MODULE_LIST_LIMIT: usize = 10;
const EXAMPLE_HIT_LIMIT: usize = 3;

/// Prints the full human-readable extraction report: routing mode, the
/// traversal trace, discovered routing modules, the count summary, a sample
/// of the emitted routes, and the named-example lookups. Read-only over the
/// result.
pub fn print_extraction_report<W: Write>(
    writer: &mut W,
    result: &ExtractionResult,
    cfg: &Config,
) -> io::Result<()> {
    debug!("Printing extraction report for {} routes", result.routes.len());
    let prefix = result.mode.prefix();

    writeln!(
        writer,
        "{} Route extraction complete ({} mode, {} prefix)\n",
        "✓".green().bold(),
        result.mode.label().cyan(),
        prefix.cyan()
    )?;

    writeln!(writer, "{}", "Route hierarchy".bold())?;
    for line in &result.tree_trace {
        writeln!(writer, "  {}", line.dimmed())?;
    }
    writeln!(writer)?;

    print_routing_modules(writer, &result.routing_files, cfg)?;
    print_summary(writer, result)?;
    print_sample(writer, result, prefix)?;
    print_examples(writer, result, prefix)?;

    writer.flush()?;
    Ok(())
}

fn print_routing_modules<W: Write>(
    writer: &mut W,
    files: &[PathBuf],
    cfg: &Config,
) -> io::Result<()> {
    writeln!(
        writer,
        "{} ({})",
        "Routing modules".bold(),
        files.len().to_string().cyan()
    )?;
    for file in files.iter().take(MODULE_LIST_LIMIT) {
        let display = relativize(file, cfg);
        writeln!(writer, "  {} {}", "-".dimmed(), display.blue())?;
    }
    if files.len() > MODULE_LIST_LIMIT {
        writeln!(writer, "  {}", format!("... and {} more", files.len() - MODULE_LIST_LIMIT).dimmed())?;
    }
    writeln!(writer)?;
    Ok(())
}

fn print_summary<W: Write>(writer: &mut W, result: &ExtractionResult) -> io::Result<()> {
    writeln!(writer, "{}", "─".repeat(60).dimmed())?;
    writeln!(writer, "{}", "Summary".bold())?;
    writeln!(
        writer,
        "  From routing modules: {}",
        result.stats.routing_modules.to_string().cyan()
    )?;
    writeln!(writer, "  From templates: {}", result.stats.html_files.to_string().cyan())?;
    writeln!(writer, "  From navigation calls: {}", result.stats.ts_files.to_string().cyan())?;
    writeln!(writer, "  Unique routes: {}", result.unique_routes.to_string().cyan())?;
    writeln!(
        writer,
        "  Valid routes (filtered): {}",
        result.stats.total.to_string().green().bold()
    )?;
    writeln!(writer)?;
    Ok(())
}

fn print_sample<W: Write>(
    writer: &mut W,
    result: &ExtractionResult,
    prefix: &str,
) -> io::Result<()> {
    writeln!(writer, "{}", "Sample routes".bold())?;
    for (idx, route) in result.routes.iter().take(SAMPLE_LIMIT).enumerate() {
        writeln!(writer, "  {:>2}. {}{}", idx + 1, prefix.dimmed(), route)?;
    }
    if result.routes.len() > SAMPLE_LIMIT {
        writeln!(
            writer,
            "  {}",
            format!("... and {} more routes", result.routes.len() - SAMPLE_LIMIT).dimmed()
        )?;
    }
    writeln!(writer)?;
    Ok(())
}

fn print_examples<W: Write>(
    writer: &mut W,
    result: &ExtractionResult,
    prefix: &str,
) -> io::Result<()> {
    writeln!(writer, "{}", "Example routes".bold())?;
    for example in EXAMPLE_ROUTE_NAMES {
        let found: Vec<&String> =
            result.routes.iter().filter(|r| r.contains(example)).collect();
        if found.is_empty() {
            continue;
        }
        writeln!(writer, "  {}:", example.bright_white().bold())?;
        for route in found.iter().take(EXAMPLE_HIT_LIMIT) {
            writeln!(writer, "    {} {}{}", "->".dimmed(), prefix.dimmed(), route)?;
        }
        if found.len() > EXAMPLE_HIT_LIMIT {
            writeln!(
                writer,
                "    {}",
                format!("... and {} more", found.len() - EXAMPLE_HIT_LIMIT).dimmed()
            )?;
        }
    }
    writeln!(writer)?;
    Ok(())
}

/// Lists the artifact files a run produced.
pub fn print_written_artifacts<W: Write>(writer: &mut W, paths: &[PathBuf]) -> io::Result<()> {
    writeln!(writer, "{}", "Output files".bold())?;
    for path in paths {
        writeln!(writer, "  {} {}", "✓".green(), path.display().to_string().blue())?;
    }
    writer.flush()?;
    Ok(())
}

/// Relativize a path to the project root for readable, clickable listings
fn relativize(file: &Path, cfg: &Config) -> String {
    match &cfg.root {
        Some(root) => file.strip_prefix(root).unwrap_or(file).display().to_string(),
        None => file.display().to_string(),
    }
}
