//! Interactive frontend
//!
//! A Select-driven file tree: each menu shows one directory with toggle
//! markers, choosing a file toggles it, choosing a directory descends into
//! it. The menu-building and toggle logic is kept in plain functions so it
//! can be tested without a terminal.

use std::fs;
use std::path::{Path, PathBuf};

use inquire::ui::{RenderConfig, Styled};
use inquire::{Select, Text};

use crate::error::Result;

/// Everything the interactive session produces: the raw selections (files
/// or directories, expanded later) and the free-text server description
#[derive(Debug)]
pub struct SessionInput {
    pub selections: Vec<PathBuf>,
    pub description: String,
}

/// Register the prompt theme. Must run once per process, before the first
/// prompt is shown.
pub fn init_prompt_theme() {
    inquire::set_global_render_config(
        RenderConfig::default_colored().with_highlighted_option_prefix(Styled::new("❯")),
    );
}

/// Run the interactive session rooted at `root`. Returns `None` when the
/// user cancels with ESC at any prompt.
pub fn run(root: &Path) -> Result<Option<SessionInput>> {
    let Some(selections) = select_files(root)? else {
        return Ok(None);
    };

    let Some(description) = Text::new("Please describe your MCP server:")
        .with_help_message("Sent to the model verbatim")
        .prompt_skippable()?
    else {
        return Ok(None);
    };

    Ok(Some(SessionInput {
        selections,
        description,
    }))
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum MenuAction {
    Finish,
    Up,
    ToggleHere,
    Pick(usize),
}

#[derive(Debug, Clone)]
struct EntryRow {
    path: PathBuf,
    name: String,
    is_dir: bool,
}

/// Toggled paths in first-toggle order, deduplicated
#[derive(Debug, Default)]
struct Selection {
    paths: Vec<PathBuf>,
}

impl Selection {
    fn toggle(&mut self, path: &Path) {
        if let Some(pos) = self.paths.iter().position(|p| p == path) {
            self.paths.remove(pos);
        } else {
            self.paths.push(path.to_path_buf());
        }
    }

    fn contains(&self, path: &Path) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    fn len(&self) -> usize {
        self.paths.len()
    }
}

fn select_files(root: &Path) -> Result<Option<Vec<PathBuf>>> {
    let mut current = root.to_path_buf();
    let mut selection = Selection::default();

    loop {
        let rows = list_entries(&current)?;
        let at_root = current.as_path() == root;
        let menu = build_menu(&rows, &current, &selection, at_root);
        let labels: Vec<String> = menu.iter().map(|(label, _)| label.clone()).collect();

        let message = format!("Select files to add ({} selected):", selection.len());
        let Some(choice) = Select::new(&message, labels)
            .with_page_size(15)
            .without_filtering()
            .with_help_message("ENTER toggles a file or opens a directory, ESC cancels")
            .raw_prompt_skippable()?
        else {
            return Ok(None);
        };

        match &menu[choice.index].1 {
            MenuAction::Finish => return Ok(Some(selection.paths)),
            MenuAction::Up => {
                current.pop();
            }
            MenuAction::ToggleHere => {
                let here = current.clone();
                selection.toggle(&here);
            }
            MenuAction::Pick(idx) => {
                let row = &rows[*idx];
                if row.is_dir {
                    current = row.path.clone();
                } else {
                    selection.toggle(&row.path);
                }
            }
        }
    }
}

/// List one directory's entries, sorted by name for a stable menu
fn list_entries(dir: &Path) -> Result<Vec<EntryRow>> {
    let mut rows = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        rows.push(EntryRow {
            path: entry.path(),
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir: file_type.is_dir(),
        });
    }
    rows.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(rows)
}

fn build_menu(
    rows: &[EntryRow],
    current: &Path,
    selection: &Selection,
    at_root: bool,
) -> Vec<(String, MenuAction)> {
    let mut items = vec![("Done (finish selection)".to_string(), MenuAction::Finish)];

    if !at_root {
        items.push(("../".to_string(), MenuAction::Up));
        items.push((
            format!("{} . (toggle this directory)", marker(selection.contains(current))),
            MenuAction::ToggleHere,
        ));
    }

    for (idx, row) in rows.iter().enumerate() {
        let suffix = if row.is_dir { "/" } else { "" };
        items.push((
            format!("{} {}{}", marker(selection.contains(&row.path)), row.name, suffix),
            MenuAction::Pick(idx),
        ));
    }

    items
}

fn marker(selected: bool) -> &'static str {
    if selected { "[x]" } else { "[ ]" }
}
