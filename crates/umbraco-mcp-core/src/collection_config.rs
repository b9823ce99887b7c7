//! Raw and resolved tool-filter configuration.

use serde::{Deserialize, Serialize};

use crate::set::NameSet;

/// Raw, user-supplied filter configuration.
///
/// This is untrusted input: it may name unknown modes, slices, collections or
/// tools. Resolution into a [`CollectionConfiguration`] never fails on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfigForCollections {
    #[serde(default)]
    pub include_tool_collections: Vec<String>,
    #[serde(default)]
    pub exclude_tool_collections: Vec<String>,
    #[serde(default)]
    pub include_slices: Vec<String>,
    #[serde(default)]
    pub exclude_slices: Vec<String>,
    #[serde(default)]
    pub include_tools: Vec<String>,
    #[serde(default)]
    pub exclude_tools: Vec<String>,
    #[serde(default)]
    pub tool_modes: Vec<String>,
}

/// The resolved filter state consumed by the tool filter.
///
/// An empty `enabled_*` set means "no restriction on this axis", never
/// "include nothing". A non-empty `disabled_*` set always subtracts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionConfiguration {
    pub enabled_collections: NameSet,
    pub disabled_collections: NameSet,
    pub enabled_slices: NameSet,
    pub disabled_slices: NameSet,
    pub enabled_tools: NameSet,
    pub disabled_tools: NameSet,
}

impl CollectionConfiguration {
    /// A configuration that lets every tool through.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// True when no axis restricts or subtracts anything.
    pub fn is_unrestricted(&self) -> bool {
        self.enabled_collections.is_empty()
            && self.disabled_collections.is_empty()
            && self.enabled_slices.is_empty()
            && self.disabled_slices.is_empty()
            && self.enabled_tools.is_empty()
            && self.disabled_tools.is_empty()
    }

    /// Every collection name the configuration refers to, enabled first.
    pub fn referenced_collections(&self) -> impl Iterator<Item = &String> {
        self.enabled_collections
            .iter()
            .chain(self.disabled_collections.iter())
    }
}
