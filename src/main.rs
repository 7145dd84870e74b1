//! mcpgen - MCP server generator
//!
//! Single-shot interactive tool: pick files, describe the MCP server you
//! want, and the generated project lands in ./mcp-server.

use clap::Parser;

use mcpgen::cli::Cli;
use mcpgen::commands;
use mcpgen::frontend;

fn main() {
    // Prompt theme must be registered before any inquire prompt is shown
    frontend::init_prompt_theme();

    let cli = Cli::parse();

    if let Err(e) = commands::generate::run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
