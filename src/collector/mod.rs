//! File collection for the generation prompt
//!
//! Expands the paths picked in the interactive tree into an ordered list of
//! regular files with their full text content. Directories are walked depth
//! first; any unreadable entry aborts the whole run.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{McpgenError, Result};

/// One selected file with its full text content
#[derive(Debug, Clone)]
pub struct CollectedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Ordered set of collected files, in discovery order
#[derive(Debug, Clone, Default)]
pub struct FileBundle {
    pub files: Vec<CollectedFile>,
}

impl FileBundle {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}

/// Expand every selected path into the regular files it denotes and read
/// their contents. A file contributes itself; a directory contributes its
/// recursive file listing in the order the file system reports it.
pub fn collect_files(selections: &[PathBuf]) -> Result<FileBundle> {
    let mut files = Vec::new();
    for path in selections {
        expand(path, &mut files)?;
    }
    Ok(FileBundle { files })
}

fn expand(path: &Path, out: &mut Vec<CollectedFile>) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|_| McpgenError::PathNotFound {
        path: path.display().to_string(),
    })?;

    if metadata.is_file() {
        out.push(read_file(path)?);
        return Ok(());
    }

    if metadata.is_dir() {
        for entry in WalkDir::new(path) {
            let entry = entry?;
            // Directories and special entries never land in the bundle
            if entry.file_type().is_file() {
                out.push(read_file(entry.path())?);
            }
        }
    }

    Ok(())
}

fn read_file(path: &Path) -> Result<CollectedFile> {
    let content = fs::read_to_string(path).map_err(|e| McpgenError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(CollectedFile {
        path: path.to_path_buf(),
        content,
    })
}
