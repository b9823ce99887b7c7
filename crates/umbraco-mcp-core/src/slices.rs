//! Slice-name registries.
//!
//! A slice tags the kind of operation a tool performs. Slice names are
//! validated against a closed registry: the base CRUD set, optionally
//! extended by the hosting application.

use std::collections::HashSet;

/// Implicit slice for tools that carry no slice tags.
pub const OTHER_SLICE: &str = "other";

/// Slices every registry knows about.
pub const BASE_SLICE_NAMES: &[&str] = &["create", "read", "update", "delete", "list"];

/// CMS-specific slices layered on top of the base set.
pub const EXTENDED_SLICE_NAMES: &[&str] = &[
    "tree",
    "folders",
    "publish",
    "recycle-bin",
    "references",
    "search",
    "validate",
    "copy",
    "move",
    "sort",
    "permissions",
    "audit",
    "import",
    "export",
    "rename",
    "configuration",
    "diagnostics",
    "templates",
    OTHER_SLICE,
];

/// Slices removed by the read-only shorthand.
pub const WRITE_SLICE_NAMES: &[&str] = &["create", "update", "delete"];

/// The built-in base registry.
pub fn base_slice_names() -> HashSet<String> {
    BASE_SLICE_NAMES.iter().map(|s| s.to_string()).collect()
}

/// Base registry plus the CMS extensions.
pub fn extended_slice_names() -> HashSet<String> {
    BASE_SLICE_NAMES
        .iter()
        .chain(EXTENDED_SLICE_NAMES)
        .map(|s| s.to_string())
        .collect()
}

/// Extend a registry with additional names.
pub fn with_extra_slices<I, S>(mut registry: HashSet<String>, extra: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    registry.extend(extra.into_iter().map(Into::into));
    registry
}
