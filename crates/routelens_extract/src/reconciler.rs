use log::debug;
use std::collections::BTreeSet;

use crate::types::SourceStats;

/// Routes surviving reconciliation, with the per-source count breakdown.
#[derive(Debug, Clone)]
pub struct ReconciledRoutes {
    /// Sorted, deduplicated, filtered.
    pub routes: Vec<String>,
    /// Distinct routes across all sources before filtering.
    pub unique: usize,
    pub stats: SourceStats,
}

/// Merges the three evidence sources into the final route list: union,
/// deduplicate, sort, then drop everything that is not a navigable literal
/// route (wildcards, parameterized paths, sentinel strings, excluded
/// screens).
pub fn reconcile(
    tree_routes: &[String],
    template_routes: &BTreeSet<String>,
    navigation_routes: &BTreeSet<String>,
    excluded: &[String],
) -> ReconciledRoutes {
    let mut unique: BTreeSet<String> = BTreeSet::new();
    unique.extend(tree_routes.iter().cloned());
    unique.extend(template_routes.iter().cloned());
    unique.extend(navigation_routes.iter().cloned());
    let unique_count = unique.len();
    debug!("Combined {} distinct routes across all sources", unique_count);

    let routes: Vec<String> =
        unique.into_iter().filter(|r| is_navigable(r, excluded)).collect();
    debug!("{} routes remain after filtering", routes.len());

    let stats = SourceStats {
        routing_modules: tree_routes.len(),
        html_files: template_routes.len(),
        ts_files: navigation_routes.len(),
        total: routes.len(),
    };

    ReconciledRoutes { routes, unique: unique_count, stats }
}

fn is_navigable(route: &str, excluded: &[String]) -> bool {
    !route.trim().is_empty()
        && !route.contains("**")
        && !route.contains(':')
        && !route.contains("undefined")
        && !route.contains("null")
        && !excluded.iter().any(|e| e == route)
}
