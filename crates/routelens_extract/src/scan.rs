use anyhow::{Context, Result};
use log::{debug, trace};
use regex::Regex;
use std::{collections::BTreeSet, fs, path::Path, sync::LazyLock};

use routelens_core::{collect_source_files, collect_template_files};

// Navigation-link attributes in templates:
// - routerLink="/path"
// - [routerLink]="'/path'"
// - [routerLink]="['/path']"
static ROUTER_LINK_PLAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"routerLink\s*=\s*["']([^"']+)["']"#).unwrap());
static ROUTER_LINK_BOUND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\[routerLink\]\s*=\s*"\s*'([^']+)'\s*""#).unwrap());
static ROUTER_LINK_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\[routerLink\]\s*=\s*"\[([^\]]+)\]""#).unwrap());

// Programmatic navigation calls in sources:
// - router.navigate(['/path', ...]) — only the first array element is literal
// - router.navigateByUrl('/path')
static NAVIGATE_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\.navigate\(\s*\[\s*["']([^"']+)["']"#).unwrap());
static NAVIGATE_BY_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\.navigateByUrl\(\s*["']([^"']+)["']"#).unwrap());

/// Scans every template file under `dir` for navigation-link route
/// references. Returns the deduplicated set of normalized routes.
pub fn scan_template_routes(dir: &Path) -> Result<BTreeSet<String>> {
    debug!("Scanning template files for navigation links under {}", dir.display());
    let mut routes: BTreeSet<String> = BTreeSet::new();

    for file in collect_template_files(dir)? {
        let content = fs::read_to_string(&file)
            .with_context(|| format!("Failed to read {}", file.display()))?;

        for pattern in [&*ROUTER_LINK_PLAIN, &*ROUTER_LINK_BOUND, &*ROUTER_LINK_ARRAY] {
            for cap in pattern.captures_iter(&content) {
                if let Some(route) = template_route(&cap[1]) {
                    trace!("Found template route '{}' in {}", route, file.display());
                    routes.insert(route);
                }
            }
        }
    }

    debug!("Found {} routes in template files", routes.len());
    Ok(routes)
}

/// Scans every non-spec source file under `dir` for programmatic navigation
/// calls. Returns the deduplicated set of normalized routes.
pub fn scan_navigation_routes(dir: &Path) -> Result<BTreeSet<String>> {
    debug!("Scanning source files for navigation calls under {}", dir.display());
    let mut routes: BTreeSet<String> = BTreeSet::new();

    for file in collect_source_files(dir)? {
        let content = fs::read_to_string(&file)
            .with_context(|| format!("Failed to read {}", file.display()))?;

        for pattern in [&*NAVIGATE_ARRAY, &*NAVIGATE_BY_URL] {
            for cap in pattern.captures_iter(&content) {
                if let Some(route) = navigation_route(&cap[1]) {
                    trace!("Found navigation route '{}' in {}", route, file.display());
                    routes.insert(route);
                }
            }
        }
    }

    debug!("Found {} routes in source files", routes.len());
    Ok(routes)
}

/// Strips surrounding quotes and whitespace, leading slashes, and the first
/// hash-route marker (`#/` or `#`).
fn normalize_route(raw: &str) -> String {
    let trimmed = raw.trim_matches(|c: char| c == '\'' || c == '"' || c.is_whitespace());
    let mut route = trimmed.trim_start_matches('/').to_string();

    if let Some(pos) = route.find('#') {
        let after = if route[pos + 1..].starts_with('/') { pos + 2 } else { pos + 1 };
        route = format!("{}{}", &route[..pos], &route[after..]);
    }

    route
}

/// A template reference is kept only when it is a literal: interpolation or
/// call syntax cannot be statically resolved to a route.
fn template_route(raw: &str) -> Option<String> {
    let route = normalize_route(raw);
    if route.is_empty() || route.contains("{{") || route.contains('(') {
        return None;
    }
    Some(route)
}

/// A navigation-call reference is kept only when it is a literal: string
/// interpolation cannot be statically resolved to a route.
fn navigation_route(raw: &str) -> Option<String> {
    let route = normalize_route(raw);
    if route.is_empty() || route.contains("${") || route.contains('`') {
        return None;
    }
    Some(route)
}
