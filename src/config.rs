//! Configuration for postquery.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (POSTQUERY_AUTHORS_DIR, POSTQUERY_CATALOG)
//! 2. Config file (.postquery/config.yaml)
//! 3. Defaults (./authors, built-in sample catalog)
//!
//! Config file discovery:
//! - Searches current directory and parents for .postquery/config.yaml
//! - Paths in config file are relative to the project root (parent of .postquery/)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::query::QuerySettings;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

const CONFIG_DIR: &str = ".postquery";
const CONFIG_FILE: &str = "config.yaml";
const ENV_AUTHORS_DIR: &str = "POSTQUERY_AUTHORS_DIR";
const ENV_CATALOG: &str = "POSTQUERY_CATALOG";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub queries: Option<QuerySettings>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// Directory of known author lists
    pub authors: Option<String>,
    /// Catalog JSON file; the sample catalog is used when unset
    pub catalog: Option<String>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Directory of known author lists
    pub authors_dir: PathBuf,
    /// Catalog JSON file, if any
    pub catalog: Option<PathBuf>,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
    /// Query tunables
    pub queries: QuerySettings,
}

/// Find config file by searching `start` and its parents
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_DIR).join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to `base`
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Resolve configuration starting the config file search at `start`
fn load_config_from(start: &Path) -> Result<ResolvedConfig> {
    let config_file = find_config_file(start);

    let (file_authors, file_catalog, queries) = if let Some(ref config_path) = config_file {
        let config = load_config_file(config_path)?;

        // Base directory is the parent of .postquery/ (i.e., grandparent of config.yaml)
        let base_dir = config_path
            .parent()
            .and_then(|p| p.parent())
            .unwrap_or(Path::new("."));

        (
            config.paths.authors.map(|p| resolve_path(base_dir, &p)),
            config.paths.catalog.map(|p| resolve_path(base_dir, &p)),
            config.queries.unwrap_or_default(),
        )
    } else {
        (None, None, QuerySettings::default())
    };

    let authors_dir = std::env::var(ENV_AUTHORS_DIR)
        .map(PathBuf::from)
        .ok()
        .or(file_authors)
        .unwrap_or_else(|| start.join("authors"));

    let catalog = std::env::var(ENV_CATALOG)
        .map(PathBuf::from)
        .ok()
        .or(file_catalog);

    Ok(ResolvedConfig {
        authors_dir,
        catalog,
        config_file,
        queries,
    })
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    load_config_from(&cwd)
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}
