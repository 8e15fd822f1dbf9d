/// One word-bounded slice of a transcript, in transcript order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// 0-based position within the fragment sequence.
    pub index: usize,
    /// Tokens joined by single spaces.
    pub text: String,
    pub words: usize,
}

impl Fragment {
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }
}

/// A fragment whose rewrite call did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentFailure {
    pub index: usize,
    pub error: String,
}

/// Result of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdaptReport {
    /// Space-joined rewrites of every successful fragment, trailing whitespace trimmed.
    pub text: String,
    pub fragments: usize,
    pub failures: Vec<FragmentFailure>,
}

impl AdaptReport {
    pub fn succeeded(&self) -> usize {
        self.fragments.saturating_sub(self.failures.len())
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn succeeded_never_underflows() {
        let report = AdaptReport {
            text: String::new(),
            fragments: 1,
            failures: vec![
                FragmentFailure {
                    index: 0,
                    error: "a".into(),
                },
                FragmentFailure {
                    index: 0,
                    error: "b".into(),
                },
            ],
        };
        assert_eq!(report.succeeded(), 0);
        assert!(report.has_failures());
    }
}
