use log::trace;
use path_clean::clean;
use std::path::{Path, PathBuf};

use crate::types::ResolveCache;

/// Maps a `loadChildren` import reference to the routing-configuration file
/// it loads, or `None` when no candidate exists on disk. A miss is an
/// expected leaf condition, not an error: the caller stops recursing at that
/// branch. Results are memoized per `(declaring file, reference)` pair.
pub fn resolve_routing_module(
    reference: &str,
    from_file: &Path,
    project_root: &Path,
    app_root: &Path,
    cache: &mut ResolveCache,
) -> Option<PathBuf> {
    let key = (from_file.to_path_buf(), reference.to_string());
    if let Some(v) = cache.get(&key) {
        trace!("Cache hit for resolve: '{}' from {}", reference, from_file.display());
        return v.clone();
    }
    trace!("Resolving loadChildren reference: '{}' from {}", reference, from_file.display());

    let base = base_path(reference, from_file, project_root, app_root);
    let resolved = probe_candidates(&base);
    match &resolved {
        Some(p) => trace!("Resolved '{}' to {}", reference, p.display()),
        None => trace!("No routing module found for '{}'", reference),
    }

    cache.insert(key, resolved.clone());
    resolved
}

/// Selects the filesystem base the naming-convention probes run against.
fn base_path(reference: &str, from_file: &Path, project_root: &Path, app_root: &Path) -> PathBuf {
    if reference.starts_with('.') {
        // Relative import: anchor at the declaring file's directory.
        let dir = from_file.parent().unwrap_or(project_root);
        clean(dir.join(reference).to_string_lossy().to_string())
    } else if reference.starts_with("src/") {
        project_root.join(reference)
    } else {
        // Application-internal import: strip everything up to and including
        // the first `/app/` boundary and rebase onto the app source root.
        let trimmed = match reference.find("/app/") {
            Some(idx) => &reference[idx + "/app/".len()..],
            None => reference,
        };
        app_root.join(trimmed)
    }
}

/// Probes the fixed, ordered list of routing-module filename conventions
/// against the base path. The first candidate that exists wins.
fn probe_candidates(base: &Path) -> Option<PathBuf> {
    let base_str = base.to_string_lossy();

    let candidates: [PathBuf; 5] = [
        PathBuf::from(format!("{base_str}-routing.module.ts")),
        PathBuf::from(format!("{base_str}.routing.module.ts")),
        base.join("routing.module.ts"),
        PathBuf::from(format!("{}.ts", base_str.replacen(".module", "-routing.module", 1))),
        match base_str.strip_suffix(".ts") {
            Some(stripped) => PathBuf::from(format!("{stripped}-routing.module.ts")),
            None => base.to_path_buf(),
        },
    ];

    for candidate in candidates {
        trace!("Probing candidate: {}", candidate.display());
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    None
}
