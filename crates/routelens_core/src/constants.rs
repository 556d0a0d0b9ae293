//! Naming conventions shared across route discovery and resolution.
//!
//! Angular projects spell their lazily-loaded routing modules in a handful of
//! conventional ways. Centralizing the suffix tables here keeps the resolver's
//! probe order and the project-wide routing-module discovery in agreement.

/// Filename suffixes that identify a routing-configuration file.
pub const ROUTING_MODULE_SUFFIXES: &[&str] = &[
    "-routing.module.ts",
    ".routing.module.ts",
];

/// Conventional filename of the root routing-configuration file, relative to
/// the application source root.
pub const ROOT_ROUTING_MODULE: &str = "app-routing.module.ts";

/// Directory names that are never descended into while scanning.
pub const SKIP_DIRS: &[&str] = &["node_modules", "dist"];

/// Extension of template files scanned for navigation links.
pub const TEMPLATE_EXTENSION: &str = "html";

/// Extension of source files scanned for navigation calls.
pub const SOURCE_EXTENSION: &str = "ts";

/// Suffix of test files excluded from the navigation-call scan.
pub const SPEC_SUFFIX: &str = ".spec.ts";
