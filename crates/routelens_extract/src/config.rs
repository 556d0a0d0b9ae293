use anyhow::{Result, anyhow};
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

use crate::constants::DEFAULT_EXCLUDED_ROUTES;
use routelens_core::ROOT_ROUTING_MODULE;

#[derive(Debug, Clone, Parser)]
#[command(name = "extract-routes")]
#[command(about = "Extract the complete navigable route list from an Angular project")]
pub struct Config {
    /// Root directory of the project (defaults to git root)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Application source directory, relative to the project root
    #[arg(long, default_value = "src/app")]
    pub app_dir: PathBuf,

    /// Directory the JSON artifacts are written to (defaults to the project root)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Screen name excluded from the final route list (repeatable)
    #[arg(long = "exclude", value_name = "NAME",
          default_values_t = DEFAULT_EXCLUDED_ROUTES.iter().map(|s| s.to_string()))]
    pub excluded_routes: Vec<String>,
}

impl Config {
    /// Initialize the config by resolving the project root directory
    pub fn initialize(&mut self) -> Result<()> {
        let root = if let Some(r) = self.root.take() {
            debug!("Using provided root directory: {:?}", r);
            r.canonicalize().unwrap_or(r)
        } else {
            debug!("No root provided, searching for git root");
            routelens_core::find_git_root()?
        };
        info!("Using root directory: {}", root.display());

        self.root = Some(root);
        Ok(())
    }

    /// Get the project root, returning an error if not initialized
    pub fn root(&self) -> Result<&PathBuf> {
        self.root
            .as_ref()
            .ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }

    /// The application source root the scans run under.
    pub fn app_root(&self) -> Result<PathBuf> {
        Ok(self.root()?.join(&self.app_dir))
    }

    /// The conventional root routing-configuration file.
    pub fn root_routing_file(&self) -> Result<PathBuf> {
        Ok(self.app_root()?.join(ROOT_ROUTING_MODULE))
    }

    /// The directory artifacts are written into.
    pub fn out_root(&self) -> Result<PathBuf> {
        match &self.out_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(self.root()?.clone()),
        }
    }
}
