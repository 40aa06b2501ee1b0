use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Scanner for finding C sources and headers under a project root
pub struct SourceScanner {
    root: PathBuf,
}

impl SourceScanner {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// All `.h` files under the root, in deterministic traversal order.
    pub fn headers(&self) -> Vec<PathBuf> {
        self.walk(&["h"])
    }

    /// All `.c` and `.h` files under the root, in deterministic traversal order.
    pub fn translation_units(&self) -> Vec<PathBuf> {
        self.walk(&["c", "h"])
    }

    fn walk(&self, extensions: &[&str]) -> Vec<PathBuf> {
        let mut files = Vec::new();

        // Sorted traversal keeps the first-match-wins tie-break stable
        // across hosts and runs.
        let walker = WalkDir::new(&self.root).sort_by_file_name();
        for result in walker {
            match result {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        continue;
                    }
                    let path = entry.path();
                    if Self::has_extension(path, extensions) {
                        files.push(path.to_path_buf());
                    }
                }
                Err(e) => log::warn!("Failed to read entry: {e}"),
            }
        }

        files
    }

    fn has_extension(path: &Path, extensions: &[&str]) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.iter().any(|candidate| *candidate == ext))
    }
}

#[cfg(test)]
mod tests {
    use super::SourceScanner;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn headers_finds_nested_h_files_only() {
        let temp = tempdir().unwrap();
        let inc = temp.path().join("inc").join("deep");
        fs::create_dir_all(&inc).unwrap();
        fs::write(inc.join("foo.h"), b"").unwrap();
        fs::write(temp.path().join("bar.c"), b"").unwrap();
        fs::write(temp.path().join("notes.txt"), b"").unwrap();

        let scanner = SourceScanner::new(temp.path());
        let headers = scanner.headers();

        assert_eq!(headers.len(), 1);
        assert!(headers[0].ends_with("inc/deep/foo.h"));
    }

    #[test]
    fn translation_units_includes_c_and_h() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.c"), b"").unwrap();
        fs::write(temp.path().join("b.h"), b"").unwrap();
        fs::write(temp.path().join("c.cpp"), b"").unwrap();

        let scanner = SourceScanner::new(temp.path());
        let files = scanner.translation_units();

        assert_eq!(files.len(), 2);
    }

    #[test]
    fn traversal_order_is_sorted_by_file_name() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("zeta.h"), b"").unwrap();
        fs::write(temp.path().join("alpha.h"), b"").unwrap();
        fs::write(temp.path().join("mid.h"), b"").unwrap();

        let scanner = SourceScanner::new(temp.path());
        let names: Vec<_> = scanner
            .headers()
            .into_iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["alpha.h", "mid.h", "zeta.h"]);
    }

    #[test]
    fn empty_tree_yields_empty_lists() {
        let temp = tempdir().unwrap();
        let scanner = SourceScanner::new(temp.path());
        assert!(scanner.headers().is_empty());
        assert!(scanner.translation_units().is_empty());
    }
}
