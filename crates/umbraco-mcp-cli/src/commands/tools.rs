//! `umbraco-mcp tools list` command implementation.
//!
//! Runs the configured tool catalog through the same filter the server
//! uses at registration time.

use std::collections::HashSet;

use anyhow::Result;
use serde::Serialize;
use umbraco_mcp_core::{CollectionConfiguration, ToolCollection};
use umbraco_mcp_filter::{FilterContext, FilterRule, RegistrationReport, ToolRegistry, evaluate_tool};

use super::{FilterArgs, Project, report_warnings};

/// One row of `tools list` output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolRow {
    pub collection: String,
    pub name: String,
    pub slices: Vec<String>,
    pub included: bool,
    pub rule: FilterRule,
    /// Passed the filter but lost to an earlier tool with the same name.
    pub duplicate: bool,
}

#[derive(Debug, Serialize)]
struct ListOutput {
    tools: Vec<ToolRow>,
    report: RegistrationReport,
}

/// List the tools the current filter exposes.
pub fn list(project: &Project, filter: &FilterArgs, explain: bool, json: bool) -> Result<()> {
    let outcome = project.resolve(filter);
    report_warnings(&outcome, false)?;

    let collections = &project.config.collections;
    if collections.is_empty() {
        tracing::warn!("No tool collections configured; set `collections` or `collections_file`");
    }

    let (_, report) = ToolRegistry::from_collections(collections, &outcome.config);
    let rows: Vec<ToolRow> = evaluate_catalog(collections, &outcome.config)
        .into_iter()
        .filter(|row| explain || row.included)
        .collect();

    if json {
        let output = ListOutput {
            tools: rows,
            report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("\n🔧 Tools ({} registered, {} excluded):", report.registered, report.excluded);
    for row in &rows {
        let slices = if row.slices.is_empty() {
            "untagged".to_string()
        } else {
            row.slices.join(", ")
        };
        if explain {
            let mark = if row.included { "+" } else { "-" };
            let reason = if row.duplicate {
                "duplicate name"
            } else {
                row.rule.as_str()
            };
            println!(
                "   {} {}/{} ({}) [{}]",
                mark, row.collection, row.name, slices, reason
            );
        } else {
            println!("   • {}/{} ({})", row.collection, row.name, slices);
        }
    }

    if !report.duplicates.is_empty() {
        println!("\n⚠️  Duplicate tool names skipped: {}", report.duplicates.join(", "));
    }
    if !report.unmatched_collections.is_empty() {
        println!(
            "\n⚠️  Configured collections with no tools: {}",
            report.unmatched_collections.join(", ")
        );
    }
    println!();

    Ok(())
}

/// Evaluate every catalog tool in catalog order.
///
/// Mirrors [`ToolRegistry`]: a tool whose name was already kept from an
/// earlier collection is marked as a duplicate and not included.
pub fn evaluate_catalog(
    collections: &[ToolCollection],
    config: &CollectionConfiguration,
) -> Vec<ToolRow> {
    let mut registered: HashSet<&str> = HashSet::new();
    let mut rows = Vec::new();

    for collection in collections {
        for tool in &collection.tools {
            let decision = evaluate_tool(tool, FilterContext::new(collection.name(), config));
            let duplicate = decision.included && !registered.insert(tool.name.as_str());
            rows.push(ToolRow {
                collection: collection.name().to_string(),
                name: tool.name.clone(),
                slices: tool.slices.clone(),
                included: decision.included && !duplicate,
                rule: decision.rule,
                duplicate,
            });
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use umbraco_mcp_core::McpServerConfig;

    const PROJECT: &str = r#"
collections:
  - metadata:
      name: document
      displayName: Documents
    tools:
      - name: get-document
        slices: [read]
      - name: delete-document
        slices: [delete]
  - metadata:
      name: server
      displayName: Server
    tools:
      - name: get-server-status
"#;

    #[test]
    fn test_readonly_flag_explains_exclusion() {
        let project = Project::new(McpServerConfig::from_yaml(PROJECT).unwrap()).unwrap();
        let flags = FilterArgs {
            readonly: Some("true".to_string()),
            ..Default::default()
        };
        let outcome = project.resolve(&flags);
        let rows = evaluate_catalog(&project.config.collections, &outcome.config);

        assert_eq!(rows.len(), 3);
        let delete = rows.iter().find(|r| r.name == "delete-document").unwrap();
        assert!(!delete.included);
        assert_eq!(delete.rule, FilterRule::SliceExcluded);
        assert!(rows.iter().filter(|r| r.name != "delete-document").all(|r| r.included));
    }

    #[test]
    fn test_duplicate_names_match_registry() {
        let yaml = r#"
collections:
  - metadata:
      name: a
      displayName: A
    tools:
      - name: t
        slices: [read]
  - metadata:
      name: b
      displayName: B
    tools:
      - name: t
        slices: [read]
"#;
        let project = Project::new(McpServerConfig::from_yaml(yaml).unwrap()).unwrap();
        let outcome = project.resolve(&FilterArgs::default());
        let collections = &project.config.collections;

        let rows = evaluate_catalog(collections, &outcome.config);
        let (_, report) = ToolRegistry::from_collections(collections, &outcome.config);

        assert_eq!(rows.iter().filter(|r| r.included).count(), report.registered);
        assert_eq!(report.registered, 1);
        assert!(rows[0].included && !rows[0].duplicate);
        assert_eq!(rows[1].collection, "b");
        assert!(!rows[1].included && rows[1].duplicate);
    }

    #[test]
    fn test_excluded_first_copy_does_not_shadow_second() {
        let yaml = r#"
collections:
  - metadata:
      name: a
      displayName: A
    tools:
      - name: t
        slices: [delete]
  - metadata:
      name: b
      displayName: B
    tools:
      - name: t
        slices: [read]
"#;
        let project = Project::new(McpServerConfig::from_yaml(yaml).unwrap()).unwrap();
        let flags = FilterArgs {
            exclude_slices: Some("delete".to_string()),
            ..Default::default()
        };
        let outcome = project.resolve(&flags);
        let rows = evaluate_catalog(&project.config.collections, &outcome.config);

        assert!(!rows[0].included && !rows[0].duplicate);
        assert!(rows[1].included && !rows[1].duplicate);
    }

    #[test]
    fn test_rows_follow_catalog_order() {
        let project = Project::new(McpServerConfig::from_yaml(PROJECT).unwrap()).unwrap();
        let outcome = project.resolve(&FilterArgs::default());
        let names: Vec<String> = evaluate_catalog(&project.config.collections, &outcome.config)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["get-document", "delete-document", "get-server-status"]);
    }
}
