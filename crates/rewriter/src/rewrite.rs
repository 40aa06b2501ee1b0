use crate::index::HeaderIndex;
use crate::overrides::OverrideTable;
use std::ops::Range;

/// Result of rewriting one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// Line carries no rewritable include; use it as-is.
    Unchanged,
    /// Include was replaced; `from`/`to` carry the include text for logging.
    Rewritten {
        line: String,
        from: String,
        to: String,
    },
}

/// Rewrites include directives against a header index and override table.
///
/// Pure with respect to its inputs: no file I/O happens here. Detection
/// is a textual heuristic, not a preprocessor parse: only the first
/// quoted or angle-bracketed span on the line is examined, and only when
/// it ends in `.h`. Includes split across lines, guarded by conditional
/// compilation, or built from macros are not seen.
pub struct IncludeRewriter {
    index: HeaderIndex,
    overrides: OverrideTable,
}

impl IncludeRewriter {
    pub fn new(index: HeaderIndex, overrides: OverrideTable) -> Self {
        Self { index, overrides }
    }

    pub fn index(&self) -> &HeaderIndex {
        &self.index
    }

    /// Rewrite a single line.
    ///
    /// Overrides take precedence over index lookup and match the exact
    /// captured string. Index lookup matches by basename only. A span
    /// with no match in either is assumed to reference a system header
    /// and the line passes through unchanged.
    pub fn rewrite_line(&self, line: &str) -> RewriteOutcome {
        let Some(span) = capture_span(line) else {
            return RewriteOutcome::Unchanged;
        };

        let captured = &line[span.clone()];
        if !captured.ends_with(".h") {
            return RewriteOutcome::Unchanged;
        }

        let replacement = self
            .overrides
            .lookup(captured)
            .or_else(|| self.index.resolve(captured));

        match replacement {
            Some(resolved) if resolved != captured => RewriteOutcome::Rewritten {
                line: splice(line, &span, resolved),
                from: captured.to_string(),
                to: resolved.to_string(),
            },
            // Already in resolved form, or unknown (system header).
            _ => RewriteOutcome::Unchanged,
        }
    }
}

/// Locate the interior of the first `"…"` or `<…>` span on the line.
///
/// A quote closes a quote and an angle bracket closes an angle bracket;
/// an unterminated opener yields no span. Later spans on the same line
/// are never considered.
fn capture_span(line: &str) -> Option<Range<usize>> {
    let open = line.find(['"', '<'])?;
    let closer = if line.as_bytes()[open] == b'"' {
        '"'
    } else {
        '>'
    };
    let interior_start = open + 1;
    let close = line[interior_start..].find(closer)?;
    Some(interior_start..interior_start + close)
}

fn splice(line: &str, span: &Range<usize>, replacement: &str) -> String {
    let mut out = String::with_capacity(line.len() + replacement.len());
    out.push_str(&line[..span.start]);
    out.push_str(replacement);
    out.push_str(&line[span.end..]);
    out
}
