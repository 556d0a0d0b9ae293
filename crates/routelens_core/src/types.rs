use std::{collections::HashMap, path::PathBuf};

/// One route entry extracted from a routing-configuration file.
#[derive(Debug, Clone)]
pub struct RouteDeclaration {
    /// The raw `path` segment as declared. May be empty, `"**"`, or carry a
    /// `:param` token; exclusion of such segments happens at reconciliation,
    /// not here.
    pub path: String,
    /// Unresolved dynamic-import reference from a `loadChildren` property,
    /// when the route defers to a lazily-loaded child module.
    pub load_children: Option<String>,
    /// The routing-configuration file this declaration was read from.
    pub source_file: PathBuf,
}

/// Per-run memoization of parsed routing-configuration files, keyed by file
/// path. Guarantees a file is read and parsed at most once even when it is
/// reachable through several branches of the route tree.
pub type ParseCache = HashMap<PathBuf, Vec<RouteDeclaration>>;

/// Per-run memoization of `loadChildren` resolution, keyed by the declaring
/// file and the raw reference. `None` records a resolution miss.
pub type ResolveCache = HashMap<(PathBuf, String), Option<PathBuf>>;
