//! Tool and collection definitions.
//!
//! A tool is the smallest unit of agent-exposed capability. Every tool belongs
//! to exactly one collection and carries zero or more slice tags describing
//! the kind of operation it performs.

use serde::{Deserialize, Serialize};

/// MCP tool definition as supplied by the hosting application's tool registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Slice tags. Empty means the tool falls into the implicit `other` slice.
    #[serde(default)]
    pub slices: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<ToolAnnotations>,
}

/// Behavioural hints surfaced to MCP clients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolAnnotations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only_hint: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destructive_hint: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idempotent_hint: Option<bool>,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            slices: Vec::new(),
            annotations: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_slices<I, S>(mut self, slices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.slices = slices.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_annotations(mut self, annotations: ToolAnnotations) -> Self {
        self.annotations = Some(annotations);
        self
    }

    /// Whether the tool has no slice tags.
    pub fn is_untagged(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn is_read_only(&self) -> bool {
        self.annotations
            .as_ref()
            .is_some_and(|a| a.read_only_hint == Some(true))
    }
}

/// Descriptive metadata for a collection of tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionMetadata {
    /// Unique key, e.g. "document" or "media".
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
}

/// A collection together with the tools it owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCollection {
    pub metadata: CollectionMetadata,
    #[serde(default)]
    pub tools: Vec<ToolDefinition>,
}

impl ToolCollection {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            metadata: CollectionMetadata {
                name: name.into(),
                display_name: display_name.into(),
                description: String::new(),
            },
            tools: Vec::new(),
        }
    }

    pub fn with_tool(mut self, tool: ToolDefinition) -> Self {
        self.tools.push(tool);
        self
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }
}
