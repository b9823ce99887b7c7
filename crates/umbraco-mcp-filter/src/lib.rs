//! # umbraco-mcp-filter
//!
//! Decides which tools an Umbraco MCP server exposes to a client.
//!
//! ## Architecture
//!
//! ```text
//! ServerConfigForCollections (CLI flags / UMBRACO_* env)
//!       │
//!       ├── validate_mode_names + expand_modes_to_collections
//!       ├── validate_slice_names
//!       ▼
//! CollectionConfigLoader ──► CollectionConfiguration (six name sets)
//!       │
//!       ▼
//! should_include_tool (once per tool, at registration)
//!       │
//!       ▼
//! ToolRegistry
//! ```
//!
//! Three axes control visibility: tools, slices and collections. Modes are a
//! derived layer that expands into collections. An empty allow-list on any
//! axis means "no restriction"; a deny-list always subtracts.
//!
//! ## Example Usage
//!
//! ```ignore
//! use umbraco_mcp_core::{EnvConfig, ModeRegistry, extended_slice_names};
//! use umbraco_mcp_filter::{CollectionConfigLoader, ToolRegistry};
//!
//! let raw = EnvConfig::from_env().into_server_config();
//! let loader = CollectionConfigLoader::from_registry(&ModeRegistry::builtin(), Some(extended_slice_names()));
//! let config = loader.load_from_config(&raw);
//!
//! let (registry, report) = ToolRegistry::from_collections(&collections, &config);
//! ```

pub mod error;
pub mod loader;
pub mod middleware;
pub mod mode_expander;
pub mod registry;
pub mod slice_validator;
pub mod tool_filter;

pub use error::HandlerError;
pub use loader::{CollectionConfigLoader, ConfigWarning, LoadOutcome, SliceList};
pub use middleware::{
    ErrorHandling, Middleware, Pipeline, PreExecutionCheck, ToolContext, ToolHandler, ToolOutput,
};
pub use mode_expander::{ModeValidation, expand_modes_to_collections, validate_mode_names};
pub use registry::{RegisteredTool, RegistrationReport, ToolRegistry};
pub use slice_validator::{SliceValidation, validate_slice_names};
pub use tool_filter::{
    FilterContext, FilterDecision, FilterRule, evaluate_tool, filter_tools, should_include_tool,
};
