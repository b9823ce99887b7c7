//! `umbraco-mcp config resolve` command implementation.

use anyhow::Result;
use serde_json::{Value, json};
use umbraco_mcp_filter::LoadOutcome;

use super::{FilterArgs, Project, report_warnings};

/// Print the resolved six-set configuration.
pub fn resolve(project: &Project, filter: &FilterArgs, strict: bool) -> Result<()> {
    let outcome = project.resolve(filter);
    report_warnings(&outcome, strict)?;
    println!("{}", serde_json::to_string_pretty(&render(&outcome)?)?);
    Ok(())
}

fn render(outcome: &LoadOutcome) -> Result<Value> {
    let warnings: Vec<String> = outcome.warnings.iter().map(|w| w.to_string()).collect();
    Ok(json!({
        "configuration": serde_json::to_value(&outcome.config)?,
        "unrestricted": outcome.config.is_unrestricted(),
        "warnings": warnings,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use umbraco_mcp_core::McpServerConfig;

    #[test]
    fn test_render_includes_warnings_and_sets() {
        let project = Project::new(McpServerConfig::default()).unwrap();
        let flags = FilterArgs {
            tool_modes: Some("media,nope".to_string()),
            exclude_slices: Some("delete".to_string()),
            ..Default::default()
        };
        let value = render(&project.resolve(&flags)).unwrap();

        assert_eq!(value["unrestricted"], json!(false));
        assert_eq!(value["configuration"]["disabledSlices"], json!(["delete"]));
        assert_eq!(value["warnings"].as_array().unwrap().len(), 1);
        assert!(value["warnings"][0].as_str().unwrap().contains("nope"));
    }

    #[test]
    fn test_render_unrestricted_by_default() {
        let project = Project::new(McpServerConfig::default()).unwrap();
        let value = render(&project.resolve(&FilterArgs::default())).unwrap();
        assert_eq!(value["unrestricted"], json!(true));
        assert_eq!(value["warnings"], json!([]));
    }
}
