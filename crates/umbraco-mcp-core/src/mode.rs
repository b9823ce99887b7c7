//! Tool modes.
//!
//! A mode is a named, reusable grouping of collections. Modes never reference
//! other modes, tools or slices. A registry can be the built-in CMS set,
//! loaded from YAML, or both combined.
//!
//! ```yaml
//! modes:
//!   - name: content
//!     displayName: Content
//!     description: Document editing
//!     collections: [document, document-blueprint, tag]
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// A named alias for a set of collection names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mode {
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    pub collections: Vec<String>,
}

impl Mode {
    pub fn new<I, S>(name: impl Into<String>, display_name: impl Into<String>, collections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            description: String::new(),
            collections: collections.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Ordered registry of modes, keyed by name.
///
/// Deserializing goes through [`ModeRegistry::new`], so a registry parsed
/// from any format is validated the same way as one built in code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ModeFile")]
pub struct ModeRegistry {
    #[serde(default)]
    modes: Vec<Mode>,
}

#[derive(Deserialize)]
struct ModeFile {
    #[serde(default)]
    modes: Vec<Mode>,
}

impl TryFrom<ModeFile> for ModeRegistry {
    type Error = RegistryError;

    fn try_from(file: ModeFile) -> Result<Self, Self::Error> {
        Self::new(file.modes)
    }
}

impl ModeRegistry {
    /// Build a registry, rejecting empty and duplicate modes.
    pub fn new(modes: Vec<Mode>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for mode in &modes {
            if mode.collections.is_empty() {
                return Err(RegistryError::EmptyMode {
                    mode: mode.name.clone(),
                });
            }
            if !seen.insert(mode.name.as_str()) {
                return Err(RegistryError::DuplicateMode {
                    mode: mode.name.clone(),
                });
            }
        }
        Ok(Self { modes })
    }

    /// The built-in CMS modes.
    pub fn builtin() -> Self {
        Self {
            modes: builtin_modes(),
        }
    }

    /// Parse a registry from YAML content.
    pub fn from_yaml(content: &str) -> Result<Self, RegistryError> {
        let file: ModeFile = serde_yaml::from_str(content)?;
        Self::new(file.modes)
    }

    /// Load a registry from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Append the modes of another registry.
    ///
    /// Fails if a mode name is already registered.
    pub fn merge(mut self, other: ModeRegistry) -> Result<Self, RegistryError> {
        self.modes.extend(other.modes);
        Self::new(self.modes)
    }

    pub fn modes(&self) -> &[Mode] {
        &self.modes
    }

    pub fn get(&self, name: &str) -> Option<&Mode> {
        self.modes.iter().find(|m| m.name == name)
    }

    /// All registered mode names.
    pub fn names(&self) -> HashSet<String> {
        self.modes.iter().map(|m| m.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

/// Default modes grouping the CMS management API collections.
pub fn builtin_modes() -> Vec<Mode> {
    vec![
        Mode::new("content", "Content", ["document", "document-blueprint", "tag"])
            .with_description("Create, edit and publish content"),
        Mode::new(
            "content-modeling",
            "Content Modeling",
            ["document-type", "data-type", "media-type", "member-type", "property-type"],
        )
        .with_description("Define document, media and member types"),
        Mode::new(
            "front-end",
            "Front End",
            ["template", "partial-view", "stylesheet", "script", "static-file"],
        )
        .with_description("Edit templates, views and front-end assets"),
        Mode::new("media", "Media", ["media", "media-type", "temporary-file", "imaging"])
            .with_description("Upload and organise media"),
        Mode::new("members", "Members", ["member", "member-group", "member-type"])
            .with_description("Manage site members"),
        Mode::new("health", "Health", ["health", "log-viewer", "server", "manifest"])
            .with_description("Inspect system health and logs"),
        Mode::new("translation", "Translation", ["dictionary", "language", "culture"])
            .with_description("Manage languages and dictionary items"),
        Mode::new("users", "Users", ["user", "user-group", "user-data"])
            .with_description("Manage backoffice users and groups"),
        Mode::new(
            "admin",
            "Administration",
            ["webhook", "redirect", "relation", "relation-type"],
        )
        .with_description("Webhooks, redirects and relations"),
        Mode::new(
            "developer",
            "Developer",
            ["indexer", "searcher", "models-builder", "log-viewer"],
        )
        .with_description("Search indexes, models builder and diagnostics"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_is_valid() {
        let registry = ModeRegistry::new(builtin_modes()).expect("builtin modes must validate");
        assert_eq!(registry.len(), 10);
        assert!(registry.names().contains("content"));
        assert_eq!(
            registry.get("content").unwrap().collections,
            vec!["document", "document-blueprint", "tag"]
        );
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
modes:
  - name: content
    displayName: Content
    collections: [document, tag]
  - name: media
    displayName: Media
    collections: [media]
"#;
        let registry = ModeRegistry::from_yaml(yaml).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.modes()[1].name, "media");
        assert!(registry.get("bogus").is_none());
    }

    #[test]
    fn test_empty_mode_rejected() {
        let yaml = r#"
modes:
  - name: empty
    displayName: Empty
    collections: []
"#;
        let err = ModeRegistry::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, RegistryError::EmptyMode { ref mode } if mode == "empty"));
    }

    #[test]
    fn test_merge_rejects_duplicates() {
        let extra = ModeRegistry::new(vec![Mode::new("content", "Content", ["webhook"])]).unwrap();
        let err = ModeRegistry::builtin().merge(extra).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateMode { .. }));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("modes.yaml");
        fs::write(
            &path,
            "modes:\n  - name: hooks\n    displayName: Hooks\n    collections: [webhook]\n",
        )
        .unwrap();

        let registry = ModeRegistry::from_file(&path).unwrap();
        assert_eq!(registry.get("hooks").unwrap().collections, vec!["webhook"]);
    }

    #[test]
    fn test_direct_deserialize_is_validated() {
        let duplicate = r#"
modes:
  - name: media
    displayName: Media
    collections: [media]
  - name: media
    displayName: Media again
    collections: [media-type]
"#;
        let err = serde_yaml::from_str::<ModeRegistry>(duplicate).unwrap_err();
        assert!(err.to_string().contains("media"));

        let empty = "modes:\n  - name: nothing\n    displayName: Nothing\n    collections: []\n";
        assert!(serde_yaml::from_str::<ModeRegistry>(empty).is_err());

        let builtin = ModeRegistry::builtin();
        let yaml = serde_yaml::to_string(&builtin).unwrap();
        assert_eq!(serde_yaml::from_str::<ModeRegistry>(&yaml).unwrap(), builtin);
    }
}
