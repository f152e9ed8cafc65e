//! Entry-point expansion
//!
//! The analyzer and formatter take individual file paths, so configured
//! directories are expanded exactly one level deep: the `.dart` files
//! directly inside a directory are listed, subdirectories are not
//! descended. Plain file entries pass through unchanged.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub fn expand_entry_points(root: &Path, entry_points: &[String]) -> Result<Vec<String>> {
    let mut expanded = Vec::new();

    for entry in entry_points {
        let path = root.join(entry);
        if !path.is_dir() {
            expanded.push(entry.clone());
            continue;
        }

        let mut files = Vec::new();
        let items = fs::read_dir(&path)
            .with_context(|| format!("Failed to read entry point directory: {}", entry))?;

        for item in items {
            let item = item
                .with_context(|| format!("Failed to read entry point directory: {}", entry))?;
            let item_path = item.path();
            if item_path.is_file() && item_path.extension().is_some_and(|ext| ext == "dart") {
                let name = item.file_name().to_string_lossy().into_owned();
                files.push(format!("{}/{}", entry.trim_end_matches('/'), name));
            }
        }

        // Directory iteration order is platform-dependent.
        files.sort();
        expanded.extend(files);
    }

    Ok(expanded)
}
