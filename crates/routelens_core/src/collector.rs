use anyhow::Result;
use ignore::WalkBuilder;
use log::{debug, trace};
use std::path::{Path, PathBuf};

use crate::constants::{
    ROUTING_MODULE_SUFFIXES, SKIP_DIRS, SOURCE_EXTENSION, SPEC_SUFFIX, TEMPLATE_EXTENSION,
};

/// Collects template files under `dir`.
pub fn collect_template_files(dir: &Path) -> Result<Vec<PathBuf>> {
    walk_app_files(dir, |p| {
        p.extension().and_then(|e| e.to_str()) == Some(TEMPLATE_EXTENSION)
    })
}

/// Collects source files under `dir`, excluding test specs.
pub fn collect_source_files(dir: &Path) -> Result<Vec<PathBuf>> {
    walk_app_files(dir, |p| {
        p.extension().and_then(|e| e.to_str()) == Some(SOURCE_EXTENSION)
            && !p.to_string_lossy().ends_with(SPEC_SUFFIX)
    })
}

/// Collects every routing-configuration file under `dir`, identified by the
/// conventional filename suffixes.
pub fn collect_routing_modules(dir: &Path) -> Result<Vec<PathBuf>> {
    walk_app_files(dir, |p| {
        p.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| ROUTING_MODULE_SUFFIXES.iter().any(|s| name.ends_with(s)))
    })
}

/// Walks `dir` depth-first, pruning dependency and build-output directories
/// by name, keeping files the predicate accepts. A missing directory yields
/// an empty list rather than an error.
fn walk_app_files(dir: &Path, keep: impl Fn(&Path) -> bool) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        debug!("Scan directory does not exist: {}", dir.display());
        return Ok(Vec::new());
    }

    debug!("Walking directory tree from: {}", dir.display());
    let mut files: Vec<PathBuf> = Vec::new();
    // Skipping is by directory name only; ignore-file semantics would make
    // the scan depend on the scanned project's own .gitignore.
    let walker = WalkBuilder::new(dir)
        .standard_filters(false)
        .filter_entry(|entry| {
            let name = entry.file_name().to_string_lossy();
            !SKIP_DIRS.contains(&name.as_ref())
        })
        .build();

    for res in walker {
        let dent = res?;
        let p = dent.path();
        if !p.is_file() {
            continue;
        }
        if keep(p) {
            trace!("Collected file: {}", p.display());
            files.push(p.to_path_buf());
        }
    }

    files.sort();
    debug!("Collected {} files under {}", files.len(), dir.display());
    Ok(files)
}
