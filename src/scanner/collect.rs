use crate::corpus::SourceDocument;
use crate::scanner::ScanResult;
use crate::utils::file::{is_path_excluded, is_text_file};
use anyhow::{Context, Result};
use glob::Pattern;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Read every `.txt` file under `path`, descending at most `max_depth`
/// directory levels. Files are returned sorted by path.
pub fn collect_documents<P: AsRef<Path>>(
    path: P,
    max_depth: usize,
    exclude_patterns: &[Pattern],
) -> Result<ScanResult> {
    let path = path.as_ref();
    if !path.is_dir() {
        anyhow::bail!("Not a directory: {}", path.display());
    }

    let mut files = Vec::new();
    let excluded_count = collect_paths(path, max_depth, exclude_patterns, &mut files)?;
    files.sort();

    let documents = files
        .iter()
        .map(|file| {
            let content =
                fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
            let name = file
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            Ok(SourceDocument::new(name, content))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ScanResult {
        documents,
        excluded_count,
    })
}

fn collect_paths(
    path: &Path,
    max_depth: usize,
    exclude_patterns: &[Pattern],
    files: &mut Vec<PathBuf>,
) -> Result<usize> {
    let mut excluded = 0;
    let entries = fs::read_dir(path)
        .with_context(|| format!("Failed to read directory {}", path.display()))?;

    for entry in entries {
        let entry_path = entry?.path();

        if is_path_excluded(&entry_path, exclude_patterns) {
            excluded += 1;
            continue;
        }

        if entry_path.is_file() {
            if is_text_file(&entry_path) {
                files.push(entry_path);
            } else {
                debug!("Skipping non-text file {}", entry_path.display());
            }
        } else if entry_path.is_dir() && max_depth > 0 {
            excluded += collect_paths(&entry_path, max_depth - 1, exclude_patterns, files)?;
        }
    }

    Ok(excluded)
}
