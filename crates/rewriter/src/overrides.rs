use crate::error::{Result, RewriterError};

/// Caller-supplied exact substitutions applied before index lookup.
///
/// Pairs are consumed positionally from two equal-length lists; the
/// first matching source string wins. Matching is exact, never by
/// basename.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    pairs: Vec<(String, String)>,
}

impl OverrideTable {
    /// Build the table from positional source/destination lists.
    ///
    /// A length mismatch is rejected here, before any file is processed.
    pub fn from_pairs(sources: Vec<String>, destinations: Vec<String>) -> Result<Self> {
        if sources.len() != destinations.len() {
            return Err(RewriterError::OverrideMismatch {
                sources: sources.len(),
                destinations: destinations.len(),
            });
        }

        Ok(Self {
            pairs: sources.into_iter().zip(destinations).collect(),
        })
    }

    /// Exact-string lookup of an include span.
    pub fn lookup(&self, include: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(source, _)| source == include)
            .map(|(_, destination)| destination.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::OverrideTable;
    use crate::error::RewriterError;
    use pretty_assertions::assert_eq;

    #[test]
    fn mismatched_lengths_are_rejected() {
        let result = OverrideTable::from_pairs(
            vec!["foo.h".to_string()],
            vec!["a.h".to_string(), "b.h".to_string()],
        );

        assert!(matches!(
            result,
            Err(RewriterError::OverrideMismatch {
                sources: 1,
                destinations: 2
            })
        ));
    }

    #[test]
    fn lookup_is_exact_not_basename() {
        let table = OverrideTable::from_pairs(
            vec!["foo.h".to_string()],
            vec!["vendor/foo_v2.h".to_string()],
        )
        .unwrap();

        assert_eq!(table.lookup("foo.h"), Some("vendor/foo_v2.h"));
        assert_eq!(table.lookup("inc/foo.h"), None);
    }

    #[test]
    fn first_matching_pair_wins() {
        let table = OverrideTable::from_pairs(
            vec!["x.h".to_string(), "x.h".to_string()],
            vec!["first/x.h".to_string(), "second/x.h".to_string()],
        )
        .unwrap();

        assert_eq!(table.lookup("x.h"), Some("first/x.h"));
    }

    #[test]
    fn empty_table_matches_nothing() {
        let table = OverrideTable::default();
        assert!(table.is_empty());
        assert_eq!(table.lookup("foo.h"), None);
    }
}
