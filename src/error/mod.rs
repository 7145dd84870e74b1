//! Error types and handling for mcpgen
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Error domains:
//! - `fs`: selected-path and output file system errors
//! - `api`: chat-completion request and response errors
//! - `prompt`: interactive terminal prompt errors

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mcpgen operations
#[derive(Error, Diagnostic, Debug)]
pub enum McpgenError {
    // File selection errors
    #[error("Path not found: {path}")]
    #[diagnostic(
        code(mcpgen::fs::not_found),
        help("Check that the selected path still exists and is accessible")
    )]
    PathNotFound { path: String },

    #[error("Failed to walk directory: {path}: {reason}")]
    #[diagnostic(
        code(mcpgen::fs::walk_failed),
        help("Check directory permissions; broken symlinks inside the tree also abort the walk")
    )]
    WalkFailed { path: String, reason: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(mcpgen::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    // Model API errors
    #[error("Request to model API failed: {reason}")]
    #[diagnostic(
        code(mcpgen::api::request_failed),
        help("Check your network connection and that the API endpoint is reachable")
    )]
    RequestFailed { reason: String },

    #[error("Model API rejected the request (HTTP {status}): {message}")]
    #[diagnostic(
        code(mcpgen::api::rejected),
        help("An HTTP 401 usually means the API key passed via --api-key is invalid")
    )]
    ApiRejected { status: u16, message: String },

    #[error("Model response did not match the expected output: {reason}")]
    #[diagnostic(
        code(mcpgen::api::invalid_response),
        help(
            "The model must return a JSON object with exactly the string fields \
             'package.json' and 'index.ts'; nothing was written to disk"
        )
    )]
    InvalidResponse { reason: String },

    // Output errors
    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(mcpgen::fs::dir_create_failed))]
    DirCreateFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(
        code(mcpgen::fs::write_failed),
        help("Earlier writes of this run are left in place; re-run once the cause is fixed")
    )]
    FileWriteFailed { path: String, reason: String },

    // Terminal prompt errors
    #[error("Interactive prompt failed: {reason}")]
    #[diagnostic(code(mcpgen::prompt::failed))]
    PromptFailed { reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(mcpgen::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for McpgenError {
    fn from(err: std::io::Error) -> Self {
        McpgenError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for McpgenError {
    fn from(err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "unknown".to_string());
        McpgenError::WalkFailed {
            path,
            reason: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for McpgenError {
    fn from(err: reqwest::Error) -> Self {
        McpgenError::RequestFailed {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for McpgenError {
    fn from(err: serde_json::Error) -> Self {
        McpgenError::InvalidResponse {
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for McpgenError {
    fn from(err: inquire::InquireError) -> Self {
        McpgenError::PromptFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, McpgenError>;
