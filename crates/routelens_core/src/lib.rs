//! Core primitives for static route analysis of Angular-style single-page
//! applications.
//!
//! This crate provides the building blocks shared by the routelens tools:
//! - Parsing route declarations (path + optional lazy child module) out of
//!   routing-configuration files
//! - Resolving `loadChildren` import references to routing-module files via
//!   the conventional filename probes
//! - Collecting template, source, and routing-module files from a project
//!   tree

mod collector;
mod config;
mod constants;
mod parser;
mod resolver;
mod types;

// Re-export public API
pub use collector::{collect_routing_modules, collect_source_files, collect_template_files};
pub use config::find_git_root;
pub use constants::{ROOT_ROUTING_MODULE, ROUTING_MODULE_SUFFIXES, SKIP_DIRS};
pub use parser::{routes_in_file, routes_in_source};
pub use resolver::resolve_routing_module;
pub use types::{ParseCache, ResolveCache, RouteDeclaration};
