//! # umbraco-mcp-core
//!
//! Shared types for deciding which Umbraco MCP tools are exposed to a client:
//! tool and collection definitions, slice and mode registries, the raw
//! user-supplied filter configuration and its resolved six-set form.

pub mod collection_config;
pub mod config;
pub mod error;
pub mod mode;
pub mod set;
pub mod slices;
pub mod tool;

pub use collection_config::{CollectionConfiguration, ServerConfigForCollections};
pub use config::{ConfigError, EnvConfig, McpServerConfig};
pub use error::RegistryError;
pub use mode::{Mode, ModeRegistry, builtin_modes};
pub use set::NameSet;
pub use slices::{
    BASE_SLICE_NAMES, EXTENDED_SLICE_NAMES, OTHER_SLICE, WRITE_SLICE_NAMES, base_slice_names,
    extended_slice_names,
};
pub use tool::{CollectionMetadata, ToolAnnotations, ToolCollection, ToolDefinition};
