use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

/// Recursively collects files under `root` whose extension is in
/// `extensions` (case-sensitive, no leading dot).
///
/// Results are grouped by the order of `extensions`, and within a group
/// follow a name-sorted walk, so repeated calls over an unchanged tree agree.
/// A missing root yields an empty list. Symlinks are followed; a link cycle
/// is logged and skipped.
pub fn find_files(root: &Path, extensions: &[String]) -> Vec<PathBuf> {
    let mut groups: Vec<Vec<PathBuf>> = vec![Vec::new(); extensions.len()];

    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                tracing::debug!("Root {} is not accessible: {}", root.display(), e);
                continue;
            }
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(ext) = entry.path().extension().and_then(|ext| ext.to_str()) else {
            continue;
        };

        if let Some(index) = extensions.iter().position(|allowed| allowed == ext) {
            groups[index].push(entry.into_path());
        }
    }

    let files: Vec<PathBuf> = groups.into_iter().flatten().collect();
    tracing::debug!("Found {} candidate files under {}", files.len(), root.display());
    files
}
