use anyhow::{Context, Result, bail};
use log::{debug, info};
use regex::Regex;
use std::{fs, sync::LazyLock};

use crate::{
    config::Config,
    reconciler::reconcile,
    scan::{scan_navigation_routes, scan_template_routes},
    tree::build_route_tree,
    types::{ExtractionResult, RoutingMode},
};
use routelens_core::{ParseCache, ResolveCache, collect_routing_modules};

static USE_HASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"useHash\s*:\s*true").unwrap());

/// Runs the whole extraction against an initialized [`Config`]: route-tree
/// traversal from the root routing module, template and navigation-call
/// scans, and reconciliation into the final route list. Phases run strictly
/// sequentially; all memoization lives in per-run caches local to this call.
pub fn run_route_extraction(cfg: &Config) -> Result<ExtractionResult> {
    info!("Starting route extraction");

    let project_root = cfg.root()?.clone();
    let app_root = cfg.app_root()?;
    let root_file = cfg.root_routing_file()?;
    if !root_file.is_file() {
        bail!("Root routing module not found: {}", root_file.display());
    }

    let root_src = fs::read_to_string(&root_file)
        .with_context(|| format!("Failed to read {}", root_file.display()))?;
    let mode =
        if USE_HASH.is_match(&root_src) { RoutingMode::Hash } else { RoutingMode::Html5 };
    info!("Routing mode: {} ({} prefix)", mode.label(), mode.prefix());

    let mut parse_cache = ParseCache::new();
    let mut resolve_cache = ResolveCache::new();

    let tree = build_route_tree(
        &root_file,
        &project_root,
        &app_root,
        &mut parse_cache,
        &mut resolve_cache,
    )?;
    info!("Extracted {} routes from the routing-module hierarchy", tree.routes.len());

    let routing_files = collect_routing_modules(&app_root)?;
    info!("Found {} routing module files", routing_files.len());

    let template_routes = scan_template_routes(&app_root)?;
    info!("Found {} routes in template files", template_routes.len());

    let navigation_routes = scan_navigation_routes(&app_root)?;
    info!("Found {} routes in source files", navigation_routes.len());

    let reconciled =
        reconcile(&tree.routes, &template_routes, &navigation_routes, &cfg.excluded_routes);
    info!(
        "{} valid routes after filtering ({} distinct before filtering)",
        reconciled.stats.total, reconciled.unique
    );
    debug!(
        "Cache statistics: parsed modules={}, resolutions={}",
        parse_cache.len(),
        resolve_cache.len()
    );

    Ok(ExtractionResult {
        routes: reconciled.routes,
        mode,
        stats: reconciled.stats,
        unique_routes: reconciled.unique,
        tree_trace: tree.trace,
        routing_files,
    })
}
