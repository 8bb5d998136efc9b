//! Match verdicts

use std::fmt;

/// Outcome of applying a matcher to a value
///
/// The mismatch reason is diagnostic text for test reports. Callers should
/// branch on the variant, never on the reason string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// The value satisfied the matcher
    Match,
    /// The value did not satisfy the matcher, with a reason
    Mismatch(String),
}

impl MatchResult {
    /// Create a mismatch with the given reason
    pub fn mismatch(reason: impl Into<String>) -> Self {
        MatchResult::Mismatch(reason.into())
    }

    /// Check if this is a match
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Match)
    }

    /// Check if this is a mismatch
    pub fn is_mismatch(&self) -> bool {
        !self.is_match()
    }

    /// Get the mismatch reason, if any
    pub fn reason(&self) -> Option<&str> {
        match self {
            MatchResult::Match => None,
            MatchResult::Mismatch(reason) => Some(reason),
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchResult::Match => write!(f, "matched"),
            MatchResult::Mismatch(reason) => write!(f, "{}", reason),
        }
    }
}
