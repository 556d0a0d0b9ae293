use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use routelens_extract::Config;
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "routelens")]
#[command(about = "Static route analysis tools for Angular projects", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extract the complete navigable route list from an Angular project
    ExtractRoutes(Config),
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::ExtractRoutes(mut cfg) => {
            cfg.initialize()?;
            info!(
                "Running route extraction under {}",
                cfg.root()?.display()
            );

            let result = routelens_extract::run_route_extraction(&cfg)?;
            debug!("Extraction produced {} routes", result.routes.len());

            let artifacts = routelens_extract::write_artifacts(&result, &cfg.out_root()?)?;

            routelens_extract::print_extraction_report(&mut stdout, &result, &cfg)?;
            routelens_extract::print_written_artifacts(&mut stdout, &artifacts)?;

            let elapsed_ms = start.elapsed().as_millis();
            writeln!(
                stdout,
                "\n{} Finished in {}ms ({} routes).",
                "●".bright_blue(),
                elapsed_ms.to_string().cyan(),
                result.routes.len().to_string().cyan()
            )?;
            stdout.flush()?;

            Ok(())
        }
    }
}
