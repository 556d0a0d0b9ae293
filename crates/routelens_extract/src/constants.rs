/// Screen names excluded from the final route list by default. These are
/// authentication-flow screens that exist as routes but are not navigable
/// application content.
pub const DEFAULT_EXCLUDED_ROUTES: &[&str] = &["Login", "Renewpassword", "Forgotpassword"];

/// Route-name substrings surfaced in the report for manual verification.
pub const EXAMPLE_ROUTE_NAMES: &[&str] = &["AKIMaintenance", "Tests", "Analyser", "Profile"];

/// Artifact filenames, written into the output directory on every run.
pub const ROUTES_FILE: &str = "routes.json";
pub const FULL_URLS_FILE: &str = "routes-full-urls.json";
pub const COMPLETE_FILE: &str = "routes-complete.json";
