//! `umbraco-mcp modes list` and `umbraco-mcp slices list`.

use anyhow::Result;

use super::Project;

/// List every registered mode and the collections it expands to.
pub fn list_modes(project: &Project) -> Result<()> {
    println!("\n🧭 Tool Modes ({}):", project.modes.len());
    for mode in project.modes.modes() {
        println!("   • {} ({})", mode.name, mode.display_name);
        if !mode.description.is_empty() {
            println!("     {}", mode.description);
        }
        println!("     Collections: {}", mode.collections.join(", "));
    }
    println!();
    Ok(())
}

/// List accepted slice names, sorted.
pub fn list_slices(project: &Project) {
    let names = sorted_slice_names(project);
    println!("\n🏷️  Slices ({}):", names.len());
    for name in names {
        println!("   • {}", name);
    }
    println!();
}

fn sorted_slice_names(project: &Project) -> Vec<String> {
    let mut names: Vec<String> = project.loader.slice_names().iter().cloned().collect();
    names.sort();
    names
}
