//! Prompt assembly
//!
//! Builds the single generation prompt from the collected files, the fixed
//! MCP instructional text, the embedded starter project, and the user's
//! server description. The instructional text and starter files are compiled
//! into the binary, so a broken installation cannot produce a prompt with a
//! silent gap.

use crate::collector::FileBundle;

/// Fixed walkthrough of MCP server conventions, included in every prompt
pub const MCP_INSTRUCTIONS: &str = include_str!("../assets/mcp-instructions.md");

/// Starter project entry point, included in every prompt as few-shot context
pub const STARTER_INDEX_TS: &str = include_str!("../assets/starter/index.ts");

/// Starter project manifest, included in every prompt as few-shot context
pub const STARTER_PACKAGE_JSON: &str = include_str!("../assets/starter/package.json");

/// Assemble the full generation prompt. Section order is fixed: preamble,
/// selected files, MCP instructions, starter project, output shape, and the
/// user description last.
pub fn assemble(bundle: &FileBundle, description: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "You are a senior software engineer working on a Model Context Protocol (MCP) server.\n\n\
         The user wants to convert their existing project code logic into a functional \
         MCP server. They provided the following files from their existing project:\n\n",
    );

    let fenced_files: Vec<String> = bundle
        .files
        .iter()
        .map(|file| fence(&file.path.display().to_string(), &file.content))
        .collect();
    prompt.push_str(&fenced_files.join("\n\n"));

    prompt.push_str("\n\nHere are the steps to create a functional MCP server:\n");
    prompt.push_str(&fence("", MCP_INSTRUCTIONS));

    prompt.push_str(
        "\n\nYou are working in a starter project that includes the following files:\n",
    );
    prompt.push_str(&fence("src/index.ts", STARTER_INDEX_TS));
    prompt.push('\n');
    prompt.push_str(&fence("package.json", STARTER_PACKAGE_JSON));

    prompt.push_str(
        "\n\nOutput JSON in this format:\n\
         ```\n\
         {\n\
         \x20 \"index.ts\": [full contents of index.ts],\n\
         \x20 \"package.json\": [full contents of package.json]\n\
         }\n\
         ```\n\n",
    );

    prompt.push_str(&format!(
        "This is the MCP server description: {}.\n",
        description
    ));

    prompt
}

/// Fence `content` in a code block labeled with `label` (may be empty)
fn fence(label: &str, content: &str) -> String {
    if label.is_empty() {
        format!("```\n{}\n```", content)
    } else {
        format!("``` {}\n{}\n```", label, content)
    }
}
