//! Per-tool include/exclude decisions.
//!
//! Rules are evaluated in a fixed order and the first matching rule decides:
//!
//! | # | Rule | Outcome |
//! |---|------|---------|
//! | 1 | tool in `disabled_tools` | exclude |
//! | 2 | `enabled_tools` non-empty | include iff listed |
//! | 3 | any slice in `disabled_slices` | exclude |
//! | 4 | `enabled_slices` non-empty | include iff a slice matches (untagged tools count as `other`) |
//! | 5 | collection in `disabled_collections` | exclude |
//! | 6 | `enabled_collections` non-empty | include iff listed |
//! | 7 | otherwise | include |
//!
//! Within one axis exclusion beats inclusion. Across axes, tools are checked
//! before slices and slices before collections, so an explicit tool
//! allow-list overrides slice and collection rules.

use serde::Serialize;
use umbraco_mcp_core::{CollectionConfiguration, OTHER_SLICE, ToolDefinition};

/// The collection a tool belongs to and the configuration to apply.
#[derive(Debug, Clone, Copy)]
pub struct FilterContext<'a> {
    pub collection_name: &'a str,
    pub config: &'a CollectionConfiguration,
}

impl<'a> FilterContext<'a> {
    pub fn new(collection_name: &'a str, config: &'a CollectionConfiguration) -> Self {
        Self {
            collection_name,
            config,
        }
    }
}

/// The rule that decided a tool's visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterRule {
    ToolExcluded,
    ToolAllowList,
    SliceExcluded,
    SliceAllowList,
    CollectionExcluded,
    CollectionAllowList,
    Default,
}

impl FilterRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterRule::ToolExcluded => "tool excluded",
            FilterRule::ToolAllowList => "tool allow-list",
            FilterRule::SliceExcluded => "slice excluded",
            FilterRule::SliceAllowList => "slice allow-list",
            FilterRule::CollectionExcluded => "collection excluded",
            FilterRule::CollectionAllowList => "collection allow-list",
            FilterRule::Default => "default",
        }
    }
}

/// Outcome of evaluating one tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterDecision {
    pub included: bool,
    pub rule: FilterRule,
}

impl FilterDecision {
    fn new(included: bool, rule: FilterRule) -> Self {
        Self { included, rule }
    }
}

/// Evaluate the precedence rules and report which one decided.
pub fn evaluate_tool(tool: &ToolDefinition, ctx: FilterContext<'_>) -> FilterDecision {
    let config = ctx.config;

    if config.disabled_tools.contains(&tool.name) {
        return FilterDecision::new(false, FilterRule::ToolExcluded);
    }

    if !config.enabled_tools.is_empty() {
        return FilterDecision::new(
            config.enabled_tools.contains(&tool.name),
            FilterRule::ToolAllowList,
        );
    }

    if config.disabled_slices.contains_any(&tool.slices) {
        return FilterDecision::new(false, FilterRule::SliceExcluded);
    }

    if !config.enabled_slices.is_empty() {
        let matched = if tool.is_untagged() {
            config.enabled_slices.contains(OTHER_SLICE)
        } else {
            config.enabled_slices.contains_any(&tool.slices)
        };
        // A slice match does not stop evaluation; collection rules still apply.
        if !matched {
            return FilterDecision::new(false, FilterRule::SliceAllowList);
        }
    }

    if config.disabled_collections.contains(ctx.collection_name) {
        return FilterDecision::new(false, FilterRule::CollectionExcluded);
    }

    if !config.enabled_collections.is_empty() {
        return FilterDecision::new(
            config.enabled_collections.contains(ctx.collection_name),
            FilterRule::CollectionAllowList,
        );
    }

    FilterDecision::new(true, FilterRule::Default)
}

/// Whether a tool should be registered.
pub fn should_include_tool(tool: &ToolDefinition, ctx: FilterContext<'_>) -> bool {
    evaluate_tool(tool, ctx).included
}

/// Keep the tools that pass the filter, preserving input order.
pub fn filter_tools<'t>(
    tools: &'t [ToolDefinition],
    collection_name: &str,
    config: &CollectionConfiguration,
) -> Vec<&'t ToolDefinition> {
    let ctx = FilterContext::new(collection_name, config);
    tools
        .iter()
        .filter(|tool| should_include_tool(tool, ctx))
        .collect()
}
