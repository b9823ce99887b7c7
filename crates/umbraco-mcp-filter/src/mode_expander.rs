//! Mode validation and expansion.
//!
//! Validation and expansion are independent entry points. Expansion tolerates
//! unknown mode names by skipping them, so it is safe to call without
//! validating first.

use std::collections::HashSet;

use umbraco_mcp_core::{Mode, NameSet};

/// Requested mode names partitioned into known and unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeValidation {
    pub valid_modes: Vec<String>,
    pub invalid_modes: Vec<String>,
}

/// Partition `requested` by exact membership in `registry_names`.
pub fn validate_mode_names<S: AsRef<str>>(
    requested: &[S],
    registry_names: &HashSet<String>,
) -> ModeValidation {
    let mut result = ModeValidation::default();
    for name in requested {
        let name = name.as_ref();
        if registry_names.contains(name) {
            result.valid_modes.push(name.to_string());
        } else {
            result.invalid_modes.push(name.to_string());
        }
    }
    result
}

/// Union the collections of every named mode, in first-seen order.
///
/// Names missing from `registry` contribute nothing.
pub fn expand_modes_to_collections<S: AsRef<str>>(mode_names: &[S], registry: &[Mode]) -> NameSet {
    let mut collections = NameSet::new();
    for name in mode_names {
        let name = name.as_ref();
        match registry.iter().find(|m| m.name == name) {
            Some(mode) => collections.extend(mode.collections.iter().cloned()),
            None => tracing::trace!(mode = %name, "Skipping unknown mode during expansion"),
        }
    }
    collections
}
