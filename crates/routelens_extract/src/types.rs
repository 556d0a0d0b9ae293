use serde::Serialize;
use std::path::PathBuf;

/// Routing mode detected from the root routing-configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutingMode {
    /// Paths are encoded after a `#` marker (`useHash: true`).
    Hash,
    /// Normal path segments (HTML5 pushState routing).
    Html5,
}

impl RoutingMode {
    /// The prefix applied uniformly to every emitted full URL.
    pub fn prefix(self) -> &'static str {
        match self {
            RoutingMode::Hash => "#/",
            RoutingMode::Html5 => "/",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RoutingMode::Hash => "Hash",
            RoutingMode::Html5 => "HTML5",
        }
    }
}

/// Pre-filter route counts per evidence source, plus the final filtered
/// count. Field names serialize in the artifact's camelCase spelling.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceStats {
    /// Routes contributed by the routing-module hierarchy.
    pub routing_modules: usize,
    /// Routes referenced by template navigation links.
    pub html_files: usize,
    /// Routes referenced by programmatic navigation calls.
    pub ts_files: usize,
    /// Routes surviving reconciliation.
    pub total: usize,
}

/// Flat result of the route-tree traversal: fully-qualified routes in
/// declaration order, plus the human-readable trace of the walk.
#[derive(Debug, Clone, Default)]
pub struct RouteTree {
    pub routes: Vec<String>,
    pub trace: Vec<String>,
}

/// The final extraction artifact.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Sorted, deduplicated, filtered route list.
    pub routes: Vec<String>,
    pub mode: RoutingMode,
    pub stats: SourceStats,
    /// Distinct routes across all sources before filtering.
    pub unique_routes: usize,
    /// Traversal trace from the route-tree build.
    pub tree_trace: Vec<String>,
    /// Routing-module files discovered under the application source root.
    pub routing_files: Vec<PathBuf>,
}

impl ExtractionResult {
    /// Full application-relative URLs: every route behind the routing-mode
    /// prefix.
    pub fn full_urls(&self) -> Vec<String> {
        self.routes.iter().map(|r| format!("{}{}", self.mode.prefix(), r)).collect()
    }
}
