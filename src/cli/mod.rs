//! CLI definitions using clap derive API
//!
//! mcpgen is a single-command tool: an optional starting path for the file
//! selection tree plus a required API key flag. No subcommands.

use clap::builder::{Styles, styling::AnsiColor};
use clap::Parser;
use std::path::PathBuf;

/// mcpgen - MCP server generator
///
/// Convert existing project code into an MCP server skeleton with the help
/// of a chat-completion model.
#[derive(Parser, Debug)]
#[command(
    name = "mcpgen",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Generate an MCP server skeleton from existing project files",
    long_about = "mcpgen lets you pick source files interactively, describe the MCP server \
                  you want, and asks a chat-completion model to generate the server \
                  entry point and package manifest. The result is written to ./mcp-server.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  mcpgen --api-key sk-...                \x1b[90m# Select files starting from the current directory\x1b[0m\n   \
                  mcpgen ./src --api-key sk-...          \x1b[90m# Start the file tree at ./src\x1b[0m\n   \
                  mcpgen --api-key sk-... --model gpt-4o \x1b[90m# Pick the model explicitly\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Path to start file selection from (defaults to the current directory)
    pub path: Option<PathBuf>,

    /// API key used to authorize the generation request
    #[arg(long = "api-key", value_name = "KEY")]
    pub api_key: String,

    /// Model the generation request is sent to
    #[arg(long, value_name = "MODEL", default_value = "gpt-4o")]
    pub model: String,
}
