//! mcpgen - MCP server generator
//!
//! Interactive command line tool that sends selected project files and a
//! free-text description to a chat-completion API and writes the generated
//! MCP server skeleton (`package.json` + `src/index.ts`) to disk.

pub mod cli;
pub mod client;
pub mod collector;
pub mod commands;
pub mod error;
pub mod frontend;
pub mod output;
pub mod prompt;
