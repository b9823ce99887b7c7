//! CLI command implementations for the Umbraco MCP filter.
//!
//! Filter values come from three layers, later layers winning:
//! the `filter` section of umbraco-mcp.yaml, `UMBRACO_*` environment
//! variables, then command-line flags (clap reads both of the latter).

pub mod config;
pub mod registry;
pub mod tools;

use anyhow::{Context, Result};
use clap::Args;
use std::path::Path;
use umbraco_mcp_core::config::env::{
    ENV_EXCLUDE_SLICES, ENV_EXCLUDE_TOOL_COLLECTIONS, ENV_EXCLUDE_TOOLS, ENV_INCLUDE_SLICES,
    ENV_INCLUDE_TOOL_COLLECTIONS, ENV_INCLUDE_TOOLS, ENV_READONLY, ENV_TOOL_MODES,
};
use umbraco_mcp_core::{EnvConfig, McpServerConfig, ModeRegistry};
use umbraco_mcp_filter::{CollectionConfigLoader, LoadOutcome};

const DEFAULT_CONFIG_FILE: &str = "umbraco-mcp.yaml";

/// Filter flags. Each falls back to its `UMBRACO_*` environment variable.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Comma-separated tool modes to expand into collections
    #[arg(long, env = ENV_TOOL_MODES)]
    pub tool_modes: Option<String>,

    /// Comma-separated collections to include
    #[arg(long, env = ENV_INCLUDE_TOOL_COLLECTIONS)]
    pub include_tool_collections: Option<String>,

    /// Comma-separated collections to exclude
    #[arg(long, env = ENV_EXCLUDE_TOOL_COLLECTIONS)]
    pub exclude_tool_collections: Option<String>,

    /// Comma-separated slices to include
    #[arg(long, env = ENV_INCLUDE_SLICES)]
    pub include_slices: Option<String>,

    /// Comma-separated slices to exclude
    #[arg(long, env = ENV_EXCLUDE_SLICES)]
    pub exclude_slices: Option<String>,

    /// Comma-separated tool names to include
    #[arg(long, env = ENV_INCLUDE_TOOLS)]
    pub include_tools: Option<String>,

    /// Comma-separated tool names to exclude
    #[arg(long, env = ENV_EXCLUDE_TOOLS)]
    pub exclude_tools: Option<String>,

    /// Hide create, update and delete tools
    #[arg(long, env = ENV_READONLY, num_args = 0..=1, default_missing_value = "true")]
    pub readonly: Option<String>,
}

impl From<&FilterArgs> for EnvConfig {
    fn from(args: &FilterArgs) -> Self {
        EnvConfig {
            tool_modes: args.tool_modes.clone(),
            include_tool_collections: args.include_tool_collections.clone(),
            exclude_tool_collections: args.exclude_tool_collections.clone(),
            include_slices: args.include_slices.clone(),
            exclude_slices: args.exclude_slices.clone(),
            include_tools: args.include_tools.clone(),
            exclude_tools: args.exclude_tools.clone(),
            readonly: args.readonly.clone(),
        }
    }
}

/// Loaded project configuration with its registries built.
pub struct Project {
    pub config: McpServerConfig,
    pub modes: ModeRegistry,
    pub loader: CollectionConfigLoader,
}

impl Project {
    pub fn new(config: McpServerConfig) -> Result<Self> {
        let modes = config
            .mode_registry()
            .context("Failed to build mode registry")?;
        let loader = CollectionConfigLoader::from_registry(&modes, Some(config.slice_names()));
        Ok(Self {
            config,
            modes,
            loader,
        })
    }

    /// Layer the flags over the file defaults and resolve.
    pub fn resolve(&self, filter: &FilterArgs) -> LoadOutcome {
        let raw = self.config.resolve_filter(&EnvConfig::from(filter));
        tracing::debug!(?raw, "Resolving filter configuration");
        self.loader.load_with_warnings(&raw)
    }
}

/// Load the project from an explicit path, ./umbraco-mcp.yaml, or defaults.
pub fn load_project(path: Option<&Path>) -> Result<Project> {
    let config = match path {
        Some(path) => McpServerConfig::load_with_context(path)
            .with_context(|| format!("Failed to load configuration from {:?}", path))?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            McpServerConfig::load_with_context(DEFAULT_CONFIG_FILE)
                .with_context(|| format!("Failed to load configuration from {}", DEFAULT_CONFIG_FILE))?
        }
        None => McpServerConfig::default(),
    };
    Project::new(config)
}

/// Log every warning; with `strict`, turn them into an error.
pub fn report_warnings(outcome: &LoadOutcome, strict: bool) -> Result<()> {
    for warning in &outcome.warnings {
        tracing::warn!(tokens = ?warning.tokens(), "{}", warning);
    }
    if strict && outcome.has_warnings() {
        let messages: Vec<String> = outcome.warnings.iter().map(|w| w.to_string()).collect();
        anyhow::bail!("Invalid filter configuration: {}", messages.join("; "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_flags_override_file_defaults() {
        let config = McpServerConfig::from_yaml("filter:\n  toolModes: [content]\n").unwrap();
        let project = Project::new(config).unwrap();

        let from_file = project.resolve(&FilterArgs::default());
        assert!(from_file.config.enabled_collections.contains("document"));

        let flags = FilterArgs {
            tool_modes: Some("media".to_string()),
            ..Default::default()
        };
        let from_flags = project.resolve(&flags);
        assert!(!from_flags.config.enabled_collections.contains("document"));
        assert!(from_flags.config.enabled_collections.contains("media"));
    }

    #[test]
    fn test_project_accepts_extended_slices() {
        let project = Project::new(McpServerConfig::default()).unwrap();
        let flags = FilterArgs {
            include_slices: Some("tree,publish".to_string()),
            ..Default::default()
        };
        let outcome = project.resolve(&flags);
        assert!(!outcome.has_warnings());
        assert_eq!(outcome.config.enabled_slices.len(), 2);
    }

    #[test]
    fn test_strict_warnings_fail() {
        let project = Project::new(McpServerConfig::default()).unwrap();
        let flags = FilterArgs {
            tool_modes: Some("content,bogus-mode".to_string()),
            ..Default::default()
        };
        let outcome = project.resolve(&flags);
        assert!(report_warnings(&outcome, false).is_ok());

        let err = report_warnings(&outcome, true).unwrap_err();
        assert!(err.to_string().contains("bogus-mode"));
    }

    #[test]
    fn test_load_project_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.yaml");
        fs::write(&path, "builtin_modes: false\nmodes:\n  - name: hooks\n    displayName: Hooks\n    collections: [webhook]\n").unwrap();

        let project = load_project(Some(path.as_path())).unwrap();
        assert_eq!(project.modes.len(), 1);
    }
}
