use std::path::{Component, Path, PathBuf};

use ignore::WalkBuilder;

/// Check whether a path has exactly the given extension (case-sensitive).
pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().is_some_and(|e| e == ext)
}

/// Build a recursive directory walker that visits every entry (no
/// `.gitignore` or hidden-file filtering), skips `.git`, and yields
/// siblings in file-name order.
pub fn walk(path: &Path) -> ignore::Walk {
    WalkBuilder::new(path)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| {
            !(entry.file_type().is_some_and(|ft| ft.is_dir()) && entry.file_name() == ".git")
        })
        .build()
}

/// Drop `.` components from a root path, so that `./src/` walks as `src`.
/// A root made only of `.` components becomes `.`.
pub fn normalize_root(path: &Path) -> PathBuf {
    let cleaned: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}

/// Collect every regular file under the directory `path` with extension
/// `ext`, in walk order. A root that is not a directory yields nothing.
/// Files found under `.` are returned without the `./` prefix.
/// Unreadable entries are reported on stderr and skipped.
pub fn source_files(path: &Path, ext: &str) -> Vec<PathBuf> {
    let root = normalize_root(path);
    if !root.is_dir() {
        return Vec::new();
    }
    let bare = root == Path::new(".");
    let mut files = Vec::new();

    for entry in walk(&root) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                eprintln!("warning: {err}");
                continue;
            }
        };

        let is_file = match entry.file_type() {
            Some(ft) if ft.is_symlink() => entry.path().is_file(),
            Some(ft) => ft.is_file(),
            None => false,
        };

        if !is_file || !has_extension(entry.path(), ext) {
            continue;
        }

        let mut file = entry.into_path();
        if bare && let Ok(rel) = file.strip_prefix(".") {
            file = rel.to_path_buf();
        }
        files.push(file);
    }

    files
}

#[cfg(test)]
#[path = "walk_test.rs"]
mod tests;
