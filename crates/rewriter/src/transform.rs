use crate::error::{Result, RewriterError};
use crate::index::HeaderIndex;
use crate::overrides::OverrideTable;
use crate::rewrite::{IncludeRewriter, RewriteOutcome};
use crate::scanner::SourceScanner;
use crate::stats::RunStats;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

/// Configuration for one tree transformation run.
#[derive(Debug, Clone)]
pub struct TransformConfig {
    /// Root whose basename becomes the include prefix.
    pub input_root: PathBuf,
    /// Root under which the mirrored tree is written.
    pub output_root: PathBuf,
    /// Exact substitutions applied before index lookup.
    pub overrides: OverrideTable,
    /// Fail on ambiguous header basenames instead of first-match-wins.
    pub strict: bool,
    /// Compute everything but write no output files.
    pub dry_run: bool,
}

impl TransformConfig {
    pub fn new(input_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: input_root.into(),
            output_root: output_root.into(),
            overrides: OverrideTable::default(),
            strict: false,
            dry_run: false,
        }
    }
}

/// Drives the whole run: build the index once, then rewrite every
/// `.c`/`.h` file under the input root into its mirrored path under the
/// output root.
///
/// Inputs are never mutated in place. Files with no rewritable includes
/// are copied through with identical content, so running twice against a
/// fresh output root yields byte-identical trees. The first fatal error
/// (unreadable file, uncreatable output directory) aborts the run with
/// no partial-output cleanup and no retries.
pub struct TreeTransformer {
    config: TransformConfig,
}

impl TreeTransformer {
    pub fn new(config: TransformConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<RunStats> {
        let start = Instant::now();
        let input_root = &self.config.input_root;

        if !input_root.is_dir() {
            return Err(RewriterError::InvalidRoot(format!(
                "{} is not a readable directory",
                input_root.display()
            )));
        }

        let index = HeaderIndex::build(input_root)?;
        if self.config.strict {
            if let Some(collision) = index.collisions().first() {
                for shadowed in index.collisions() {
                    log::error!(
                        "Ambiguous header basename '{}': {} shadows {}",
                        shadowed.basename,
                        shadowed.kept,
                        shadowed.shadowed
                    );
                }
                return Err(RewriterError::AmbiguousBasename {
                    basename: collision.basename.clone(),
                    kept: collision.kept.clone(),
                    shadowed: collision.shadowed.clone(),
                });
            }
        }

        let mut stats = RunStats::new();
        stats.headers = index.len();

        let files = SourceScanner::new(input_root).translation_units();
        let rewriter = IncludeRewriter::new(index, self.config.overrides.clone());

        for path in files {
            log::debug!("Processing {}", path.display());

            let content = fs::read_to_string(&path).map_err(|source| RewriterError::ReadFile {
                path: path.clone(),
                source,
            })?;

            let mut rewritten = 0;
            let mut output = String::with_capacity(content.len());
            // split_inclusive keeps line terminators attached, so
            // unchanged files round-trip byte for byte.
            for segment in content.split_inclusive('\n') {
                match rewriter.rewrite_line(segment) {
                    RewriteOutcome::Unchanged => output.push_str(segment),
                    RewriteOutcome::Rewritten { line, from, to } => {
                        log::debug!("{}: {from} -> {to}", path.display());
                        output.push_str(&line);
                        rewritten += 1;
                    }
                }
            }
            stats.add_file(rewritten);

            if self.config.dry_run {
                continue;
            }

            let Ok(relative) = path.strip_prefix(input_root) else {
                continue;
            };
            let out_path = self.config.output_root.join(relative);
            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent).map_err(|source| RewriterError::WriteFile {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            fs::write(&out_path, output).map_err(|source| RewriterError::WriteFile {
                path: out_path.clone(),
                source,
            })?;
        }

        stats.time_ms = start.elapsed().as_millis() as u64;
        log::info!(
            "Rewrote {} includes across {} files in {}ms",
            stats.includes_rewritten,
            stats.files,
            stats.time_ms
        );

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::{TransformConfig, TreeTransformer};
    use crate::error::RewriterError;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_input_root_is_fatal() {
        let temp = tempdir().unwrap();
        let config = TransformConfig::new(temp.path().join("absent"), temp.path().join("out"));

        let result = TreeTransformer::new(config).run();

        assert!(matches!(result, Err(RewriterError::InvalidRoot(_))));
    }

    #[test]
    fn strict_mode_rejects_colliding_basenames_before_writing() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("lib");
        fs::create_dir_all(root.join("a")).unwrap();
        fs::create_dir_all(root.join("b")).unwrap();
        fs::write(root.join("a").join("x.h"), b"").unwrap();
        fs::write(root.join("b").join("x.h"), b"").unwrap();

        let out = temp.path().join("out");
        let mut config = TransformConfig::new(&root, &out);
        config.strict = true;

        let result = TreeTransformer::new(config).run();

        assert!(matches!(
            result,
            Err(RewriterError::AmbiguousBasename { .. })
        ));
        assert!(!out.exists());
    }

    #[test]
    fn dry_run_reports_counts_without_writing() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("lib");
        fs::create_dir_all(root.join("inc")).unwrap();
        fs::write(root.join("inc").join("foo.h"), b"").unwrap();
        fs::write(root.join("main.c"), b"#include \"foo.h\"\n").unwrap();

        let out = temp.path().join("out");
        let mut config = TransformConfig::new(&root, &out);
        config.dry_run = true;

        let stats = TreeTransformer::new(config).run().unwrap();

        assert_eq!(stats.files, 2);
        assert_eq!(stats.includes_rewritten, 1);
        assert_eq!(stats.headers, 1);
        assert!(!out.exists());
    }
}
