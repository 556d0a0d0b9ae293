//! Static route extraction for Angular-style single-page applications.
//!
//! This crate rebuilds the complete, deduplicated set of navigable routes
//! from an application's source tree without executing it: the lazily-loaded
//! routing-module hierarchy is traversed into fully-qualified paths, template
//! links and programmatic navigation calls are scanned for route references,
//! and the three evidence sources are reconciled into one sorted route list
//! with per-source statistics.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use routelens_extract::{Config, run_route_extraction, write_artifacts};
//! use clap::Parser;
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut cfg = Config::parse_from(["extract-routes", "--root", "/path/to/project"]);
//! cfg.initialize()?;
//!
//! let result = run_route_extraction(&cfg)?;
//! let artifacts = write_artifacts(&result, &cfg.out_root()?)?;
//!
//! // Use buffered output for better performance
//! let mut stdout = BufWriter::new(std::io::stdout());
//! routelens_extract::print_extraction_report(&mut stdout, &result, &cfg)?;
//! routelens_extract::print_written_artifacts(&mut stdout, &artifacts)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod config;
mod constants;
mod extractor;
mod output;
mod reconciler;
mod reporter;
mod scan;
mod tree;
mod types;

// Re-export public API
pub use config::Config;
pub use extractor::run_route_extraction;
pub use output::write_artifacts;
pub use reporter::{print_extraction_report, print_written_artifacts};
pub use types::{ExtractionResult, RoutingMode, SourceStats};
