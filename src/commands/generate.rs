//! Generate command implementation
//!
//! The whole run is one linear pipeline:
//! 1. Interactive file selection and server description
//! 2. Expand selections into a file bundle
//! 3. Assemble the generation prompt
//! 4. One chat-completion request
//! 5. Write the generated project to ./mcp-server

use std::path::PathBuf;
use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::Cli;
use crate::client::ModelClient;
use crate::collector;
use crate::error::Result;
use crate::frontend;
use crate::output;
use crate::prompt;

/// Run the generate pipeline
pub fn run(cli: Cli) -> Result<()> {
    let root = cli.path.clone().unwrap_or_else(|| PathBuf::from("."));

    let Some(input) = frontend::run(&root)? else {
        println!("Cancelled.");
        return Ok(());
    };

    let bundle = collector::collect_files(&input.selections)?;
    let prompt_text = prompt::assemble(&bundle, &input.description);

    let client = ModelClient::new(cli.api_key, cli.model.clone());
    let spinner = request_spinner(&cli.model);
    let result = client.generate(&prompt_text);
    spinner.finish_and_clear();
    let result = result?;

    let current_dir = std::env::current_dir()?;
    let server_dir = output::materialize(&current_dir, &result)?;

    println!(
        "{} MCP server files created in {}",
        Style::new().bold().green().apply_to("✓"),
        server_dir.display()
    );

    Ok(())
}

fn request_spinner(model: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message(format!("Waiting for {}...", model));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
