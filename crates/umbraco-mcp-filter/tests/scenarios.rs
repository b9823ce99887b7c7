//! End-to-end filtering scenarios: raw configuration through the loader and
//! tool filter to the registered tool set.
//!
//! Run with: cargo test -p umbraco-mcp-filter --test scenarios

use pretty_assertions::assert_eq;
use umbraco_mcp_core::{
    CollectionConfiguration, EnvConfig, Mode, ModeRegistry, NameSet, ServerConfigForCollections,
    ToolCollection, ToolDefinition, extended_slice_names,
};
use umbraco_mcp_filter::{
    CollectionConfigLoader, ConfigWarning, FilterContext, ToolRegistry, should_include_tool,
};

// =============================================================================
// FIXTURES
// =============================================================================

fn mode_registry() -> ModeRegistry {
    ModeRegistry::new(vec![
        Mode::new("content", "Content", ["document", "tag"]),
        Mode::new("media", "Media", ["media"]),
    ])
    .expect("fixture modes must validate")
}

fn loader() -> CollectionConfigLoader {
    CollectionConfigLoader::from_registry(&mode_registry(), None)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn set(items: &[&str]) -> NameSet {
    items.iter().copied().collect()
}

fn catalog() -> Vec<ToolCollection> {
    vec![
        ToolCollection::new("document", "Documents")
            .with_tool(ToolDefinition::new("get-document").with_slices(["read"]))
            .with_tool(ToolDefinition::new("list-document").with_slices(["list"]))
            .with_tool(ToolDefinition::new("create-document").with_slices(["create"]))
            .with_tool(ToolDefinition::new("delete-document").with_slices(["delete"]))
            .with_tool(ToolDefinition::new("publish-document").with_slices(["update", "publish"])),
        ToolCollection::new("tag", "Tags")
            .with_tool(ToolDefinition::new("get-tags").with_slices(["read", "list"])),
        ToolCollection::new("media", "Media")
            .with_tool(ToolDefinition::new("get-media").with_slices(["read"]))
            .with_tool(ToolDefinition::new("delete-media").with_slices(["delete"])),
        ToolCollection::new("webhook", "Webhooks")
            .with_tool(ToolDefinition::new("get-webhook").with_slices(["read"])),
        ToolCollection::new("server", "Server")
            .with_tool(ToolDefinition::new("get-server-status")),
    ]
}

fn registered_names(config: &CollectionConfiguration) -> Vec<String> {
    let (registry, _) = ToolRegistry::from_collections(&catalog(), config);
    registry.names().into_iter().map(str::to_string).collect()
}

// =============================================================================
// MODE EXPANSION SCENARIOS
// =============================================================================

#[test]
fn single_mode_enables_its_collections() {
    let raw = ServerConfigForCollections {
        tool_modes: strings(&["content"]),
        ..Default::default()
    };
    let config = loader().load_from_config(&raw);

    assert_eq!(config.enabled_collections.len(), 2);
    assert!(config.enabled_collections.same_members(&set(&["document", "tag"])));
}

#[test]
fn modes_and_explicit_collections_are_unioned() {
    let raw = ServerConfigForCollections {
        tool_modes: strings(&["content", "media"]),
        include_tool_collections: strings(&["webhook"]),
        ..Default::default()
    };
    let config = loader().load_from_config(&raw);

    assert_eq!(config.enabled_collections.len(), 4);
    assert!(
        config
            .enabled_collections
            .same_members(&set(&["document", "tag", "media", "webhook"]))
    );
}

#[test]
fn unknown_mode_warns_but_valid_modes_expand() {
    let raw = ServerConfigForCollections {
        tool_modes: strings(&["content", "bogus-mode"]),
        ..Default::default()
    };
    let outcome = loader().load_with_warnings(&raw);

    assert_eq!(outcome.warnings.len(), 1);
    assert!(matches!(&outcome.warnings[0], ConfigWarning::UnknownModes { .. }));
    assert!(outcome.warnings[0].to_string().contains("bogus-mode"));
    assert!(
        outcome
            .config
            .enabled_collections
            .same_members(&set(&["document", "tag"]))
    );
}

#[test]
fn no_modes_and_no_includes_means_no_collection_restriction() {
    let config = loader().load_from_config(&ServerConfigForCollections::default());
    assert!(config.enabled_collections.is_empty());
    assert_eq!(registered_names(&config).len(), 10);
}

// =============================================================================
// TOOL FILTER SCENARIOS
// =============================================================================

#[test]
fn disabled_tool_is_excluded_without_other_rules() {
    let config = CollectionConfiguration {
        disabled_tools: set(&["delete-document"]),
        ..Default::default()
    };
    let tool = ToolDefinition::new("delete-document").with_slices(["delete"]);
    assert!(!should_include_tool(&tool, FilterContext::new("document", &config)));
}

#[test]
fn slice_allow_list_and_untagged_tools() {
    let config = CollectionConfiguration {
        enabled_slices: set(&["read", "list"]),
        ..Default::default()
    };
    let get_document = ToolDefinition::new("get-document").with_slices(["read"]);
    let get_widget = ToolDefinition::new("get-widget");

    assert!(should_include_tool(&get_document, FilterContext::new("document", &config)));
    assert!(!should_include_tool(&get_widget, FilterContext::new("widget", &config)));
}

#[test]
fn untagged_tools_pass_when_other_is_enabled() {
    let loader = CollectionConfigLoader::from_registry(&mode_registry(), Some(extended_slice_names()));
    let raw = ServerConfigForCollections {
        include_slices: strings(&["other"]),
        ..Default::default()
    };
    let config = loader.load_from_config(&raw);
    assert_eq!(registered_names(&config), vec!["get-server-status"]);
}

#[test]
fn tool_allow_list_overrides_collection_restriction() {
    let raw = ServerConfigForCollections {
        tool_modes: strings(&["content"]),
        include_tools: strings(&["get-webhook", "get-document"]),
        ..Default::default()
    };
    let config = loader().load_from_config(&raw);
    assert_eq!(registered_names(&config), vec!["get-document", "get-webhook"]);
}

#[test]
fn combined_axes() {
    let raw = ServerConfigForCollections {
        tool_modes: strings(&["content", "media"]),
        exclude_slices: strings(&["delete"]),
        exclude_tool_collections: strings(&["tag"]),
        ..Default::default()
    };
    let config = loader().load_from_config(&raw);
    assert_eq!(
        registered_names(&config),
        vec!["get-document", "list-document", "create-document", "publish-document", "get-media"]
    );
}

// =============================================================================
// READ-ONLY SHORTHAND
// =============================================================================

#[test]
fn readonly_env_excludes_write_slices() {
    let env = EnvConfig {
        readonly: Some("true".to_string()),
        ..Default::default()
    };
    let raw = env.into_server_config();
    assert_eq!(raw.exclude_slices, strings(&["create", "update", "delete"]));

    let config = loader().load_from_config(&raw);
    assert_eq!(
        registered_names(&config),
        vec!["get-document", "list-document", "get-tags", "get-media", "get-webhook", "get-server-status"]
    );
}

#[test]
fn readonly_env_does_not_duplicate_explicit_exclusions() {
    let env = EnvConfig {
        readonly: Some("true".to_string()),
        exclude_slices: Some("update".to_string()),
        ..Default::default()
    };
    let raw = env.into_server_config();
    assert_eq!(raw.exclude_slices.len(), 3);
    assert!(set(&["create", "update", "delete"]).same_members(&raw.exclude_slices.clone().into()));
}

// =============================================================================
// DETERMINISM
// =============================================================================

#[test]
fn loading_is_deterministic() {
    let raw = ServerConfigForCollections {
        tool_modes: strings(&["media", "content", "media"]),
        include_tool_collections: strings(&["tag", "webhook"]),
        include_slices: strings(&["read", "bogus"]),
        ..Default::default()
    };
    let loader = loader();
    let first = loader.load_with_warnings(&raw);
    let second = loader.load_with_warnings(&raw);
    assert_eq!(first, second);
    assert_eq!(
        first.config.enabled_collections.as_slice(),
        ["tag", "webhook", "media", "document"]
    );
}
