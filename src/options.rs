/// Parsing policy for INI documents.
///
/// The default is strict: only `;` starts a comment, and duplicate sections,
/// duplicate keys and empty keys are errors. [`ParseOptions::permissive`]
/// flips every switch for compatibility with looser INI writers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Treat lines starting with `#` as comments (`;` always is)
    pub hash_comments: bool,

    /// Re-declaring a section reopens it instead of failing
    pub allow_duplicate_sections: bool,

    /// Re-declaring a key overwrites its value instead of failing
    pub allow_duplicate_keys: bool,

    /// Accept `= value` lines with an empty key
    pub allow_empty_keys: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::strict()
    }
}

impl ParseOptions {
    /// Fail-fast policy: every ambiguity is an error
    pub fn strict() -> Self {
        Self {
            hash_comments: false,
            allow_duplicate_sections: false,
            allow_duplicate_keys: false,
            allow_empty_keys: false,
        }
    }

    /// Lenient policy accepted by most legacy INI readers
    pub fn permissive() -> Self {
        Self {
            hash_comments: true,
            allow_duplicate_sections: true,
            allow_duplicate_keys: true,
            allow_empty_keys: true,
        }
    }

    /// Enable or disable `#` comments
    pub fn with_hash_comments(mut self, enabled: bool) -> Self {
        self.hash_comments = enabled;
        self
    }

    /// Check whether a trimmed line is a comment under this policy
    pub fn is_comment(&self, line: &str) -> bool {
        line.starts_with(';') || (self.hash_comments && line.starts_with('#'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        assert_eq!(ParseOptions::default(), ParseOptions::strict());
    }

    #[test]
    fn test_comment_markers() {
        let strict = ParseOptions::strict();
        assert!(strict.is_comment("; note"));
        assert!(!strict.is_comment("# note"));

        let hashed = ParseOptions::strict().with_hash_comments(true);
        assert!(hashed.is_comment("# note"));
        assert!(ParseOptions::permissive().is_comment("#"));
    }
}
