use crate::error::{Result, RewriterError};
use crate::scanner::SourceScanner;
use std::collections::HashMap;
use std::path::Path;

/// One header known to the index.
#[derive(Debug, Clone)]
pub struct HeaderEntry {
    /// Filename component, e.g. `foo.h`.
    pub basename: String,
    /// Root-relative include path, e.g. `projlib/inc/foo.h`.
    /// Always forward-slash separated, prefixed with the root basename.
    pub path: String,
}

/// A basename claimed by more than one header.
#[derive(Debug, Clone)]
pub struct Collision {
    pub basename: String,
    /// The entry that wins lookups (first in traversal order).
    pub kept: String,
    /// The later entry that is shadowed.
    pub shadowed: String,
}

/// Read-only catalog of every `.h` file under the root, keyed by basename.
///
/// Built once per run. When two headers share a basename, the first one
/// encountered in traversal order wins; the rest are recorded as
/// collisions so callers can surface or reject them.
pub struct HeaderIndex {
    entries: Vec<HeaderEntry>,
    by_basename: HashMap<String, usize>,
    collisions: Vec<Collision>,
}

impl HeaderIndex {
    /// Scan `root` recursively for headers and build the index.
    ///
    /// The root's basename becomes the fixed prefix of every recorded
    /// path; a root without one (e.g. `/`) is rejected.
    pub fn build(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let root_name = root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                RewriterError::InvalidRoot(format!(
                    "{} has no directory name to prefix includes with",
                    root.display()
                ))
            })?;

        let mut entries = Vec::new();
        let mut by_basename = HashMap::new();
        let mut collisions = Vec::new();

        for header in SourceScanner::new(root).headers() {
            let Ok(relative) = header.strip_prefix(root) else {
                continue;
            };
            let basename = match header.file_name() {
                Some(name) => name.to_string_lossy().into_owned(),
                None => continue,
            };
            let path = format!("{}/{}", root_name, forward_slashed(relative));

            match by_basename.get(&basename) {
                Some(&winner) => {
                    let kept: &HeaderEntry = &entries[winner];
                    log::debug!(
                        "Header basename '{basename}' already mapped to {}, shadowing {path}",
                        kept.path
                    );
                    collisions.push(Collision {
                        basename: basename.clone(),
                        kept: kept.path.clone(),
                        shadowed: path.clone(),
                    });
                }
                None => {
                    by_basename.insert(basename.clone(), entries.len());
                }
            }
            entries.push(HeaderEntry { basename, path });
        }

        log::info!("Indexed {} headers under {}", entries.len(), root.display());

        Ok(Self {
            entries,
            by_basename,
            collisions,
        })
    }

    /// Resolve an include string by its filename component.
    ///
    /// Any directory prefix already present in the include is ignored;
    /// only the basename is matched. Returns the winning root-relative
    /// path, or `None` when the header is unknown (assumed system header).
    pub fn resolve(&self, include: &str) -> Option<&str> {
        let basename = include.rsplit('/').next().unwrap_or(include);
        self.by_basename
            .get(basename)
            .map(|&idx| self.entries[idx].path.as_str())
    }

    pub fn entries(&self) -> &[HeaderEntry] {
        &self.entries
    }

    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn forward_slashed(path: &Path) -> String {
    let parts: Vec<String> = path
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect();
    parts.join("/")
}
