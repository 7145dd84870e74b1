//! Command implementations
//!
//! mcpgen has a single command: the generate pipeline.

pub mod generate;
