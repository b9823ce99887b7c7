//! Filtered tool registration.
//!
//! The registry is filled once per configuration load: every collection's
//! tools are run through the tool filter and the survivors are registered in
//! input order.

use serde::Serialize;
use umbraco_mcp_core::{CollectionConfiguration, ToolCollection, ToolDefinition};

use crate::tool_filter::filter_tools;

/// A registered tool and the collection that owns it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisteredTool {
    pub collection: String,
    pub tool: ToolDefinition,
}

/// Summary of one registration pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationReport {
    pub registered: usize,
    pub excluded: usize,
    /// Tools skipped because a tool with the same name was already registered.
    pub duplicates: Vec<String>,
    /// Configured collection names that match no supplied collection.
    pub unmatched_collections: Vec<String>,
}

/// Registry of the tools exposed to one MCP client.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
}

impl ToolRegistry {
    /// Create a new empty tool registry.
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Build a registry from a catalog in one pass.
    pub fn from_collections(
        collections: &[ToolCollection],
        config: &CollectionConfiguration,
    ) -> (Self, RegistrationReport) {
        let mut registry = Self::new();
        let report = registry.register_collections(collections, config);
        (registry, report)
    }

    /// Filter and register every collection's tools.
    pub fn register_collections(
        &mut self,
        collections: &[ToolCollection],
        config: &CollectionConfiguration,
    ) -> RegistrationReport {
        let mut report = RegistrationReport::default();

        for collection in collections {
            let kept = filter_tools(&collection.tools, collection.name(), config);
            report.excluded += collection.tools.len() - kept.len();

            for tool in kept {
                if self.register(collection.name(), tool.clone()) {
                    report.registered += 1;
                } else {
                    tracing::warn!(
                        tool = %tool.name,
                        collection = %collection.name(),
                        "Duplicate tool name, skipping registration"
                    );
                    report.duplicates.push(tool.name.clone());
                }
            }
        }

        for name in config.referenced_collections() {
            if !collections.iter().any(|c| c.name() == name)
                && !report.unmatched_collections.contains(name)
            {
                tracing::warn!(
                    collection = %name,
                    "Configured collection does not match any registered collection"
                );
                report.unmatched_collections.push(name.clone());
            }
        }

        tracing::info!(
            registered = report.registered,
            excluded = report.excluded,
            "Registered tools"
        );

        report
    }

    /// Register a tool. Returns `false` if the name is already taken.
    pub fn register(&mut self, collection: &str, tool: ToolDefinition) -> bool {
        if self.contains(&tool.name) {
            return false;
        }
        self.tools.push(RegisteredTool {
            collection: collection.to_string(),
            tool,
        });
        true
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<&RegisteredTool> {
        self.tools.iter().find(|t| t.tool.name == name)
    }

    /// Check if a tool exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// List all tools in registration order.
    pub fn list(&self) -> &[RegisteredTool] {
        &self.tools
    }

    /// Tools registered for one collection.
    pub fn by_collection<'a>(&'a self, collection: &'a str) -> impl Iterator<Item = &'a ToolDefinition> {
        self.tools
            .iter()
            .filter(move |t| t.collection == collection)
            .map(|t| &t.tool)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Get tool names.
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.tool.name.as_str()).collect()
    }
}
