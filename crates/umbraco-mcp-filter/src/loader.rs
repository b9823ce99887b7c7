//! Collection configuration loading.
//!
//! Turns a raw [`ServerConfigForCollections`] into the resolved six-set
//! [`CollectionConfiguration`]:
//!
//! 1. **Collections** - explicit includes plus the collections of every valid
//!    mode, deduplicated in first-seen order. Exclusions are copied verbatim.
//! 2. **Slices** - include and exclude lists validated against the slice
//!    registry. Unknown names are dropped with a warning.
//! 3. **Tools** - include and exclude lists copied verbatim.
//!
//! Loading never fails. Unknown modes and slices degrade to warnings so a
//! misconfigured filter widens visibility rather than stopping the server.

use std::collections::HashSet;
use std::fmt;

use umbraco_mcp_core::{
    CollectionConfiguration, Mode, ModeRegistry, NameSet, ServerConfigForCollections,
    base_slice_names,
};

use crate::mode_expander::{expand_modes_to_collections, validate_mode_names};
use crate::slice_validator::validate_slice_names;

/// Which slice list an unknown slice name came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceList {
    Include,
    Exclude,
}

impl fmt::Display for SliceList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceList::Include => write!(f, "include"),
            SliceList::Exclude => write!(f, "exclude"),
        }
    }
}

/// A non-fatal problem found while resolving a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// Requested modes that are not in the mode registry.
    UnknownModes { modes: Vec<String> },
    /// Requested slices that are not in the slice registry.
    UnknownSlices { list: SliceList, slices: Vec<String> },
}

impl ConfigWarning {
    /// The offending names.
    pub fn tokens(&self) -> &[String] {
        match self {
            ConfigWarning::UnknownModes { modes } => modes,
            ConfigWarning::UnknownSlices { slices, .. } => slices,
        }
    }
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::UnknownModes { modes } => {
                write!(f, "Unknown tool modes ignored: {}", modes.join(", "))
            }
            ConfigWarning::UnknownSlices { list, slices } => write!(
                f,
                "Unknown {} slices ignored: {}",
                list,
                slices.join(", ")
            ),
        }
    }
}

/// A resolved configuration plus the warnings raised while resolving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOutcome {
    pub config: CollectionConfiguration,
    pub warnings: Vec<ConfigWarning>,
}

impl LoadOutcome {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Resolves raw filter configuration against mode and slice registries.
///
/// The registries are read-only after construction, so one loader can serve
/// concurrent loads.
#[derive(Debug, Clone)]
pub struct CollectionConfigLoader {
    modes: Vec<Mode>,
    mode_names: HashSet<String>,
    slice_names: HashSet<String>,
}

impl CollectionConfigLoader {
    /// Create a loader. `slice_names` defaults to the base slice registry.
    pub fn new(
        modes: Vec<Mode>,
        mode_names: HashSet<String>,
        slice_names: Option<HashSet<String>>,
    ) -> Self {
        Self {
            modes,
            mode_names,
            slice_names: slice_names.unwrap_or_else(base_slice_names),
        }
    }

    /// Create a loader whose mode names are taken from the registry itself.
    pub fn from_registry(registry: &ModeRegistry, slice_names: Option<HashSet<String>>) -> Self {
        Self::new(registry.modes().to_vec(), registry.names(), slice_names)
    }

    pub fn slice_names(&self) -> &HashSet<String> {
        &self.slice_names
    }

    /// Resolve a raw configuration, logging every warning.
    pub fn load_from_config(&self, raw: &ServerConfigForCollections) -> CollectionConfiguration {
        let outcome = self.load_with_warnings(raw);
        for warning in &outcome.warnings {
            tracing::warn!(tokens = ?warning.tokens(), "{}", warning);
        }
        outcome.config
    }

    /// Resolve a raw configuration and return the warnings to the caller.
    ///
    /// Nothing is logged; callers that want to abort on bad configuration
    /// inspect [`LoadOutcome::warnings`].
    pub fn load_with_warnings(&self, raw: &ServerConfigForCollections) -> LoadOutcome {
        let mut warnings = Vec::new();

        let enabled_collections = self.resolve_enabled_collections(raw, &mut warnings);
        let disabled_collections: NameSet =
            raw.exclude_tool_collections.iter().cloned().collect();

        let enabled_slices =
            self.resolve_slices(&raw.include_slices, SliceList::Include, &mut warnings);
        let disabled_slices =
            self.resolve_slices(&raw.exclude_slices, SliceList::Exclude, &mut warnings);

        let config = CollectionConfiguration {
            enabled_collections,
            disabled_collections,
            enabled_slices,
            disabled_slices,
            enabled_tools: raw.include_tools.iter().cloned().collect(),
            disabled_tools: raw.exclude_tools.iter().cloned().collect(),
        };

        tracing::debug!(
            enabled_collections = config.enabled_collections.len(),
            disabled_collections = config.disabled_collections.len(),
            enabled_slices = config.enabled_slices.len(),
            disabled_slices = config.disabled_slices.len(),
            enabled_tools = config.enabled_tools.len(),
            disabled_tools = config.disabled_tools.len(),
            "Resolved collection configuration"
        );

        LoadOutcome { config, warnings }
    }

    fn resolve_enabled_collections(
        &self,
        raw: &ServerConfigForCollections,
        warnings: &mut Vec<ConfigWarning>,
    ) -> NameSet {
        let mut collections: NameSet = raw.include_tool_collections.iter().cloned().collect();

        if raw.tool_modes.is_empty() {
            return collections;
        }

        let validation = validate_mode_names(&raw.tool_modes, &self.mode_names);
        if !validation.invalid_modes.is_empty() {
            warnings.push(ConfigWarning::UnknownModes {
                modes: validation.invalid_modes,
            });
        }

        let expanded = expand_modes_to_collections(&validation.valid_modes, &self.modes);
        collections.extend(expanded.as_slice().iter().cloned());
        collections
    }

    fn resolve_slices(
        &self,
        requested: &[String],
        list: SliceList,
        warnings: &mut Vec<ConfigWarning>,
    ) -> NameSet {
        if requested.is_empty() {
            return NameSet::new();
        }

        let validation = validate_slice_names(requested, &self.slice_names);
        if !validation.invalid.is_empty() {
            warnings.push(ConfigWarning::UnknownSlices {
                list,
                slices: validation.invalid,
            });
        }
        validation.valid.into_iter().collect()
    }
}
