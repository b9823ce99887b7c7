use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::FilterArgs;

#[derive(Parser, Debug)]
#[command(name = "umbraco-mcp", version, about = "Umbraco MCP tool filtering CLI")]
struct Cli {
    /// Path to umbraco-mcp.yaml. Defaults to ./umbraco-mcp.yaml when present.
    #[arg(long, global = true, env = "UMBRACO_MCP_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolved filter configuration
    Config {
        #[command(subcommand)]
        cmd: ConfigCommand,
    },

    /// Tools exposed under the current filter
    Tools {
        #[command(subcommand)]
        cmd: ToolsCommand,
    },

    /// Registered tool modes
    Modes {
        #[command(subcommand)]
        cmd: ModesCommand,
    },

    /// Known slice names
    Slices {
        #[command(subcommand)]
        cmd: SlicesCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Print the resolved collection configuration as JSON
    Resolve {
        #[command(flatten)]
        filter: FilterArgs,

        /// Fail if any mode or slice name is unknown
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
}

#[derive(Subcommand, Debug)]
enum ToolsCommand {
    /// List the tools that would be registered
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Also show excluded tools and the rule that decided each tool
        #[arg(long, default_value_t = false)]
        explain: bool,

        /// Print JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
enum ModesCommand {
    /// List modes and the collections they expand to
    List,
}

#[derive(Subcommand, Debug)]
enum SlicesCommand {
    /// List accepted slice names
    List,
}

fn main() -> anyhow::Result<()> {
    // stdout carries command output; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let project = commands::load_project(cli.config.as_deref())?;

    match cli.cmd {
        Command::Config {
            cmd: ConfigCommand::Resolve { filter, strict },
        } => commands::config::resolve(&project, &filter, strict)?,

        Command::Tools {
            cmd: ToolsCommand::List {
                filter,
                explain,
                json,
            },
        } => commands::tools::list(&project, &filter, explain, json)?,

        Command::Modes {
            cmd: ModesCommand::List,
        } => commands::registry::list_modes(&project)?,

        Command::Slices {
            cmd: SlicesCommand::List,
        } => commands::registry::list_slices(&project),
    }

    Ok(())
}
