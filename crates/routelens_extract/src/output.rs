use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use log::{debug, info};
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    constants::{COMPLETE_FILE, FULL_URLS_FILE, ROUTES_FILE},
    types::{ExtractionResult, SourceStats},
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CompleteReport<'a> {
    metadata: Metadata<'a>,
    routes: &'a [String],
    full_urls: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Metadata<'a> {
    total_routes: usize,
    routing_mode: &'a str,
    generated_at: String,
    stats: &'a SourceStats,
}

/// Writes the three JSON artifacts into `out_dir`, overwriting
/// unconditionally: the bare route list, the full-URL list, and the combined
/// report with metadata. Returns the written paths in that order.
pub fn write_artifacts(result: &ExtractionResult, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let full_urls = result.full_urls();

    let routes_path = out_dir.join(ROUTES_FILE);
    write_json(&routes_path, &result.routes)?;

    let urls_path = out_dir.join(FULL_URLS_FILE);
    write_json(&urls_path, &full_urls)?;

    let complete_path = out_dir.join(COMPLETE_FILE);
    let report = CompleteReport {
        metadata: Metadata {
            total_routes: result.routes.len(),
            routing_mode: result.mode.label(),
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            stats: &result.stats,
        },
        routes: &result.routes,
        full_urls: &full_urls,
    };
    write_json(&complete_path, &report)?;

    info!("Wrote extraction artifacts to {}", out_dir.display());
    Ok(vec![routes_path, urls_path, complete_path])
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    debug!("Wrote {}", path.display());
    Ok(())
}
