// src/cli/mod.rs
// CLI module for reminders-mcp commands

use clap::{Parser, Subcommand};

pub mod check;
pub mod serve;
pub mod tool;

pub use check::run_check;
pub use serve::run_mcp_server;
pub use tool::{run_render, run_tool};

#[derive(Parser)]
#[command(name = "reminders-mcp")]
#[command(about = "MCP server for reading and managing reminders")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run as MCP server over stdio (default)
    Serve,

    /// Execute an operation directly and print its JSON result
    Tool {
        /// Operation name (e.g. listLists, createReminder)
        #[arg(index = 1)]
        name: String,

        /// JSON arguments (e.g. '{"name": "Buy milk", "listName": "Personal"}')
        #[arg(index = 2, default_value = "{}")]
        args: String,
    },

    /// Print the interpreter command line an operation would run, without running it
    Render {
        /// Operation name
        #[arg(index = 1)]
        name: String,

        /// JSON arguments
        #[arg(index = 2, default_value = "{}")]
        args: String,
    },

    /// Validate configuration and probe the interpreter
    Check,
}
