//! `StringMatcher` — One value holding exactly one strategy
//!
//! The enum has one variant per [`Strategy`]. Common cases convert
//! implicitly via `From`:
//!
//! | Source | Strategy |
//! |--------|----------|
//! | `bool` | [`AlwaysTrue`] / [`AlwaysFalse`] |
//! | `&str`, `String` | [`Equal`] |
//! | `Vec<String>`, `Vec<&str>`, `&[&str]` | [`List`] |
//! | `regex::Regex` | [`Regex`] (feature = `"regex"`) |
//! | [`ListBuilder`] | [`List`] (freezes the builder) |
//! | any strategy | itself |

use crate::visitor::{KindVisitor, MatchVisitor, PrintVisitor, Visitor};
use crate::{
    AlwaysFalse, AlwaysTrue, Equal, List, ListBuilder, MatcherKind, Prefix, Strategy, Substring,
};
use std::fmt;

#[cfg(feature = "regex")]
use crate::Regex;

/// A string predicate backed by one strategy from a closed set.
///
/// Built once, then called any number of times. It is never mutated by
/// matching, so a shared `&StringMatcher` can be used from many threads.
/// To change the rule, replace the whole value.
///
/// # Example
///
/// ```
/// use strmatch::StringMatcher;
///
/// let highway = StringMatcher::from("highway");
/// assert!(highway.matches("highway"));
/// assert!(!highway.matches("highways"));
///
/// let roads = StringMatcher::from(vec!["primary", "secondary"]);
/// assert!(roads.matches("secondary"));
/// assert_eq!(roads.to_string(), "list[[primary][secondary]]");
///
/// let anything = StringMatcher::from(true);
/// assert!(anything.matches(""));
/// ```
#[derive(Debug, Clone)]
pub enum StringMatcher {
    /// Never matches.
    AlwaysFalse(AlwaysFalse),
    /// Always matches.
    AlwaysTrue(AlwaysTrue),
    /// Exact string equality.
    Equal(Equal),
    /// String prefix match.
    Prefix(Prefix),
    /// Substring match.
    Substring(Substring),
    /// Unanchored regular expression search.
    #[cfg(feature = "regex")]
    Regex(Regex),
    /// Equality against any of a set of strings.
    List(List),
}

impl StringMatcher {
    /// A matcher that always matches.
    #[must_use]
    pub const fn always_true() -> Self {
        Self::AlwaysTrue(AlwaysTrue)
    }

    /// A matcher that never matches.
    #[must_use]
    pub const fn always_false() -> Self {
        Self::AlwaysFalse(AlwaysFalse)
    }

    /// Create an exact match.
    #[must_use]
    pub fn equal(value: impl Into<String>) -> Self {
        Self::Equal(Equal::new(value))
    }

    /// Create a prefix match.
    #[must_use]
    pub fn prefix(value: impl Into<String>) -> Self {
        Self::Prefix(Prefix::new(value))
    }

    /// Create a substring match.
    #[must_use]
    pub fn substring(value: impl Into<String>) -> Self {
        Self::Substring(Substring::new(value))
    }

    /// Create a list match from the given entries.
    #[must_use]
    pub fn list<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(List::new(entries))
    }

    /// Create a regex match.
    ///
    /// The search is unanchored: the pattern may match anywhere in the candidate.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::InvalidPattern`](crate::MatcherError::InvalidPattern)
    /// if the pattern is invalid. No matcher is produced in that case.
    #[cfg(feature = "regex")]
    pub fn regex(pattern: &str) -> Result<Self, crate::MatcherError> {
        Regex::new(pattern).map(Self::Regex)
    }

    /// Apply `visitor` to the active strategy.
    ///
    /// This is the single point of dispatch over the variants.
    pub fn visit<V: Visitor>(&self, visitor: V) -> V::Output {
        match self {
            Self::AlwaysFalse(s) => visitor.visit(s),
            Self::AlwaysTrue(s) => visitor.visit(s),
            Self::Equal(s) => visitor.visit(s),
            Self::Prefix(s) => visitor.visit(s),
            Self::Substring(s) => visitor.visit(s),
            #[cfg(feature = "regex")]
            Self::Regex(s) => visitor.visit(s),
            Self::List(s) => visitor.visit(s),
        }
    }

    /// Check if the candidate matches the active strategy.
    ///
    /// Pure and infallible; repeated calls with the same candidate return the
    /// same result.
    #[inline]
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.visit(MatchVisitor::new(candidate))
    }

    /// Write the debug representation of the active strategy.
    ///
    /// # Errors
    ///
    /// Only propagates errors from `out`.
    pub fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.visit(PrintVisitor::new(out))
    }

    /// Returns the kind of the active strategy.
    #[must_use]
    pub fn kind(&self) -> MatcherKind {
        self.visit(KindVisitor)
    }
}

impl Default for StringMatcher {
    fn default() -> Self {
        Self::always_false()
    }
}

impl fmt::Display for StringMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Conversions
// ═══════════════════════════════════════════════════════════════════════════════

impl From<bool> for StringMatcher {
    fn from(result: bool) -> Self {
        if result {
            Self::always_true()
        } else {
            Self::always_false()
        }
    }
}

impl From<&str> for StringMatcher {
    fn from(value: &str) -> Self {
        Self::equal(value)
    }
}

impl From<String> for StringMatcher {
    fn from(value: String) -> Self {
        Self::equal(value)
    }
}

impl From<&String> for StringMatcher {
    fn from(value: &String) -> Self {
        Self::equal(value.as_str())
    }
}

impl From<Vec<String>> for StringMatcher {
    fn from(entries: Vec<String>) -> Self {
        Self::List(List::from(entries))
    }
}

impl From<Vec<&str>> for StringMatcher {
    fn from(entries: Vec<&str>) -> Self {
        Self::list(entries)
    }
}

impl From<&[&str]> for StringMatcher {
    fn from(entries: &[&str]) -> Self {
        Self::list(entries.iter().copied())
    }
}

#[cfg(feature = "regex")]
impl From<regex::Regex> for StringMatcher {
    fn from(regex: regex::Regex) -> Self {
        Self::Regex(Regex::from(regex))
    }
}

impl From<ListBuilder> for StringMatcher {
    fn from(builder: ListBuilder) -> Self {
        Self::List(builder.build())
    }
}

macro_rules! from_strategy {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for StringMatcher {
                fn from(strategy: $variant) -> Self {
                    Self::$variant(strategy)
                }
            }
        )+
    };
}

from_strategy!(AlwaysFalse, AlwaysTrue, Equal, Prefix, Substring, List);
#[cfg(feature = "regex")]
from_strategy!(Regex);
