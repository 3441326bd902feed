//! Level text sources
//!
//! One file per level. Files are read once at startup, in sorted file-name
//! order so the level sequence is the same on every platform. Hidden files
//! are skipped.

use std::path::{Path, PathBuf};

use crate::error::LevelError;
use crate::sim::LevelSource;

/// Expand tabs and strip trailing whitespace
pub fn normalize_line(line: &str, tab_width: usize) -> String {
    line.replace('\t', &" ".repeat(tab_width)).trim_end().to_string()
}

/// Split raw file text into normalized lines
pub fn parse_level_text(name: impl Into<String>, text: &str, tab_width: usize) -> LevelSource {
    let name = name.into();
    let lines = text.lines().map(|l| normalize_line(l, tab_width)).collect();
    LevelSource { name, lines }
}

/// Read a single level file. Text that is not valid UTF-8 is an I/O error.
pub fn load_level_file(path: &Path, tab_width: usize) -> Result<LevelSource, LevelError> {
    let text = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(parse_level_text(name, &text, tab_width))
}

/// Read every file in `dir`, sorted by file name. Subdirectories and dotfiles
/// are ignored.
pub fn load_level_dir(dir: &Path, tab_width: usize) -> Result<Vec<LevelSource>, LevelError> {
    let io_err = |source| LevelError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && !is_hidden(&path) {
            paths.push(path);
        }
    }
    paths.sort();

    let sources = paths
        .iter()
        .map(|path| load_level_file(path, tab_width))
        .collect::<Result<Vec<_>, _>>()?;

    if sources.is_empty() {
        return Err(LevelError::NoLevels);
    }
    log::info!("Loaded {} level sources from {}", sources.len(), dir.display());
    Ok(sources)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('.'))
}
