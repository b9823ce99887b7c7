//! Slice-name validation.

use std::collections::HashSet;

/// Requested slice names partitioned into known and unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SliceValidation {
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
}

/// Partition `names` by exact, case-sensitive membership in `valid_slices`.
///
/// Input order is preserved within each bucket and duplicates are kept.
pub fn validate_slice_names<S: AsRef<str>>(
    names: &[S],
    valid_slices: &HashSet<String>,
) -> SliceValidation {
    let mut result = SliceValidation::default();
    for name in names {
        let name = name.as_ref();
        if valid_slices.contains(name) {
            result.valid.push(name.to_string());
        } else {
            result.invalid.push(name.to_string());
        }
    }
    result
}
