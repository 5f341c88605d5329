//! `MatcherKind` — Discriminant naming the active strategy.

use std::fmt;

/// Names one strategy of the closed set.
///
/// The string form is the same token the strategy prints as the head of its
/// debug representation (e.g. `prefix` in `prefix[foot]`).
///
/// # Example
///
/// ```
/// use strmatch::{MatcherKind, StringMatcher};
///
/// assert_eq!(StringMatcher::prefix("foot").kind(), MatcherKind::Prefix);
/// assert_eq!(MatcherKind::Prefix.as_str(), "prefix");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MatcherKind {
    /// Never matches.
    AlwaysFalse,
    /// Always matches.
    AlwaysTrue,
    /// Exact byte equality.
    Equal,
    /// Candidate starts with the stored string.
    Prefix,
    /// Stored string occurs anywhere in the candidate.
    Substring,
    /// Unanchored regular expression search.
    Regex,
    /// Candidate equals one of the stored entries.
    List,
}

impl MatcherKind {
    /// All kinds, in declaration order.
    pub const ALL: [MatcherKind; 7] = [
        Self::AlwaysFalse,
        Self::AlwaysTrue,
        Self::Equal,
        Self::Prefix,
        Self::Substring,
        Self::Regex,
        Self::List,
    ];

    /// Returns the snake_case name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AlwaysFalse => "always_false",
            Self::AlwaysTrue => "always_true",
            Self::Equal => "equal",
            Self::Prefix => "prefix",
            Self::Substring => "substring",
            Self::Regex => "regex",
            Self::List => "list",
        }
    }

    /// Returns `true` if this kind is compiled into the current build.
    ///
    /// Only [`MatcherKind::Regex`] depends on a cargo feature.
    #[must_use]
    pub const fn is_available(self) -> bool {
        match self {
            Self::Regex => cfg!(feature = "regex"),
            _ => true,
        }
    }
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
