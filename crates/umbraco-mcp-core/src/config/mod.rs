//! Configuration for the Umbraco MCP server.
//!
//! A project configuration file (usually `umbraco-mcp.yaml`) names the mode
//! registry, extra slice names, the tool catalog and default filter values.
//! Environment variables and CLI flags are layered on top through
//! [`EnvConfig`].
//!
//! # Configuration Files
//!
//! - **umbraco-mcp.yaml**: main configuration
//! - **modes.yaml**: optional additional modes (`modes_file`)
//! - **collections.yaml**: optional tool catalog (`collections_file`)
//!
//! # Key Style
//!
//! Top-level keys of umbraco-mcp.yaml are snake_case. Everything nested
//! under them (modes, collections, tools and the `filter` section) uses the
//! camelCase names of the MCP wire types, so catalog entries can be pasted
//! from a server's tool listing unchanged.
//!
//! ```yaml
//! project: my-site
//! builtin_modes: true
//! extra_slices: [workflow]
//! modes:
//!   - name: hooks
//!     displayName: Webhooks
//!     collections: [webhook]
//! collections:
//!   - metadata:
//!       name: webhook
//!       displayName: Webhooks
//!     tools:
//!       - name: get-webhook
//!         slices: [read]
//!         annotations:
//!           readOnlyHint: true
//! filter:
//!   toolModes: [hooks]
//!   excludeSlices: [delete]
//! ```

pub mod env;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::collection_config::ServerConfigForCollections;
use crate::error::RegistryError;
use crate::mode::{Mode, ModeRegistry};
use crate::slices::{extended_slice_names, with_extra_slices};
use crate::tool::ToolCollection;

pub use env::EnvConfig;

/// Complete server configuration loaded from files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpServerConfig {
    /// Project name.
    #[serde(default)]
    pub project: Option<String>,

    /// Whether the built-in CMS modes are registered.
    #[serde(default = "default_true")]
    pub builtin_modes: bool,

    /// Inline mode definitions.
    #[serde(default)]
    pub modes: Vec<Mode>,

    /// File with additional mode definitions.
    #[serde(default)]
    pub modes_file: Option<PathBuf>,

    /// Slice names accepted in addition to the built-in registry.
    #[serde(default)]
    pub extra_slices: Vec<String>,

    /// Inline tool catalog.
    #[serde(default)]
    pub collections: Vec<ToolCollection>,

    /// File with the tool catalog.
    #[serde(default)]
    pub collections_file: Option<PathBuf>,

    /// Default filter values. Environment and CLI values override these.
    #[serde(default)]
    pub filter: ServerConfigForCollections,
}

impl Default for McpServerConfig {
    fn default() -> Self {
        Self {
            project: None,
            builtin_modes: true,
            modes: Vec::new(),
            modes_file: None,
            extra_slices: Vec::new(),
            collections: Vec::new(),
            collections_file: None,
            filter: ServerConfigForCollections::default(),
        }
    }
}

#[derive(Deserialize)]
struct CollectionsFile {
    #[serde(default)]
    collections: Vec<ToolCollection>,
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Mode registry error: {0}")]
    Registry(#[from] RegistryError),
}

impl McpServerConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML content.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(ConfigError::from)
    }

    /// Load configuration and resolve all external references.
    ///
    /// Relative `modes_file` and `collections_file` paths are resolved
    /// against the directory containing the configuration file. Their
    /// contents are appended to the inline definitions.
    pub fn load_with_context(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut config = Self::from_file(path)?;

        let base_dir = path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        if let Some(modes_file) = &config.modes_file {
            let modes_path = resolve(&base_dir, modes_file);
            let registry = ModeRegistry::from_file(&modes_path)?;
            config.modes.extend(registry.modes().iter().cloned());
        }

        if let Some(collections_file) = &config.collections_file {
            let collections_path = resolve(&base_dir, collections_file);
            let content = fs::read_to_string(&collections_path)?;
            let file: CollectionsFile = serde_yaml::from_str(&content)?;
            config.collections.extend(file.collections);
        }

        tracing::debug!(
            modes = config.modes.len(),
            collections = config.collections.len(),
            "Loaded server configuration"
        );

        Ok(config)
    }

    /// Build the effective mode registry: built-in modes (if enabled)
    /// followed by configured ones.
    pub fn mode_registry(&self) -> Result<ModeRegistry, RegistryError> {
        let configured = ModeRegistry::new(self.modes.clone())?;
        if self.builtin_modes {
            ModeRegistry::builtin().merge(configured)
        } else {
            Ok(configured)
        }
    }

    /// The effective slice-name registry.
    pub fn slice_names(&self) -> HashSet<String> {
        with_extra_slices(extended_slice_names(), self.extra_slices.iter().cloned())
    }

    /// Defaults from the file with environment/CLI values layered on top.
    pub fn resolve_filter(&self, overrides: &EnvConfig) -> ServerConfigForCollections {
        let mut filter = self.filter.clone();
        overrides.apply_to(&mut filter);
        filter
    }
}

fn resolve(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

fn default_true() -> bool {
    true
}
