//! Output project materialization
//!
//! Writes the validated generation result under `mcp-server/`. Directory
//! creation is idempotent and every file write is an unconditional
//! overwrite; a failed write aborts the run and leaves earlier writes in
//! place.

use std::fs;
use std::path::{Path, PathBuf};

use crate::client::GenerationResult;
use crate::error::{McpgenError, Result};

/// Name of the generated project directory, relative to the working directory
pub const PROJECT_DIR: &str = "mcp-server";

/// Compiler configuration bundled into every generated project
pub const TSCONFIG_JSON: &str = include_str!("../assets/starter/tsconfig.json");

/// Create the output project under `base_dir` and write the generated files.
/// Returns the path of the project directory.
pub fn materialize(base_dir: &Path, result: &GenerationResult) -> Result<PathBuf> {
    let server_dir = base_dir.join(PROJECT_DIR);
    let src_dir = server_dir.join("src");

    create_dir(&server_dir)?;
    create_dir(&src_dir)?;

    write_text(&server_dir.join("package.json"), &result.package_json)?;
    write_text(&src_dir.join("index.ts"), &result.index_ts)?;
    write_text(&server_dir.join("tsconfig.json"), TSCONFIG_JSON)?;

    Ok(server_dir)
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| McpgenError::DirCreateFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| McpgenError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
