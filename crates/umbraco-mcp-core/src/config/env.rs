//! Environment-derived filter configuration.
//!
//! Every list value is a comma-separated string. `UMBRACO_READONLY` is a
//! boolean-like shorthand that adds the write slices to the exclusion list.

use crate::collection_config::ServerConfigForCollections;
use crate::slices::WRITE_SLICE_NAMES;

pub const ENV_TOOL_MODES: &str = "UMBRACO_TOOL_MODES";
pub const ENV_INCLUDE_TOOL_COLLECTIONS: &str = "UMBRACO_INCLUDE_TOOL_COLLECTIONS";
pub const ENV_EXCLUDE_TOOL_COLLECTIONS: &str = "UMBRACO_EXCLUDE_TOOL_COLLECTIONS";
pub const ENV_INCLUDE_SLICES: &str = "UMBRACO_INCLUDE_SLICES";
pub const ENV_EXCLUDE_SLICES: &str = "UMBRACO_EXCLUDE_SLICES";
pub const ENV_INCLUDE_TOOLS: &str = "UMBRACO_INCLUDE_TOOLS";
pub const ENV_EXCLUDE_TOOLS: &str = "UMBRACO_EXCLUDE_TOOLS";
pub const ENV_READONLY: &str = "UMBRACO_READONLY";

/// Raw filter values as read from the environment or CLI flags.
///
/// `None` means the value was not supplied at all, which lets a caller layer
/// these values over a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    pub tool_modes: Option<String>,
    pub include_tool_collections: Option<String>,
    pub exclude_tool_collections: Option<String>,
    pub include_slices: Option<String>,
    pub exclude_slices: Option<String>,
    pub include_tools: Option<String>,
    pub exclude_tools: Option<String>,
    pub readonly: Option<String>,
}

impl EnvConfig {
    /// Read from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through an arbitrary lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            tool_modes: lookup(ENV_TOOL_MODES),
            include_tool_collections: lookup(ENV_INCLUDE_TOOL_COLLECTIONS),
            exclude_tool_collections: lookup(ENV_EXCLUDE_TOOL_COLLECTIONS),
            include_slices: lookup(ENV_INCLUDE_SLICES),
            exclude_slices: lookup(ENV_EXCLUDE_SLICES),
            include_tools: lookup(ENV_INCLUDE_TOOLS),
            exclude_tools: lookup(ENV_EXCLUDE_TOOLS),
            readonly: lookup(ENV_READONLY),
        }
    }

    pub fn is_readonly(&self) -> bool {
        self.readonly.as_deref().is_some_and(is_truthy)
    }

    /// Resolve into a raw collection config with no file-based defaults.
    pub fn into_server_config(self) -> ServerConfigForCollections {
        let mut config = ServerConfigForCollections::default();
        self.apply_to(&mut config);
        config
    }

    /// Overlay the supplied values onto an existing raw config.
    ///
    /// A supplied list replaces the existing one; the read-only shorthand is
    /// applied last and never introduces duplicate slice names.
    pub fn apply_to(&self, config: &mut ServerConfigForCollections) {
        overlay(&mut config.tool_modes, &self.tool_modes);
        overlay(
            &mut config.include_tool_collections,
            &self.include_tool_collections,
        );
        overlay(
            &mut config.exclude_tool_collections,
            &self.exclude_tool_collections,
        );
        overlay(&mut config.include_slices, &self.include_slices);
        overlay(&mut config.exclude_slices, &self.exclude_slices);
        overlay(&mut config.include_tools, &self.include_tools);
        overlay(&mut config.exclude_tools, &self.exclude_tools);

        if self.is_readonly() {
            apply_readonly(config);
        }
    }
}

/// Add the write slices to the exclusion list, skipping ones already present.
pub fn apply_readonly(config: &mut ServerConfigForCollections) {
    for slice in WRITE_SLICE_NAMES.iter().copied() {
        if !config.exclude_slices.iter().any(|s| s == slice) {
            config.exclude_slices.push(slice.to_string());
        }
    }
}

/// Split a comma-separated value, trimming whitespace and dropping empties.
pub fn parse_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Boolean-like flag parsing: `true`, `1`, `yes`, `on` (any case).
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

fn overlay(target: &mut Vec<String>, value: &Option<String>) {
    if let Some(raw) = value {
        *target = parse_csv(raw);
    }
}
