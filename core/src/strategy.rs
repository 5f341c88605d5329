//! `Strategy` — The closed set of string matching rules
//!
//! Each strategy is a small, immutable predicate over `&str`. They are the
//! payloads of [`StringMatcher`](crate::StringMatcher) and can also be used
//! on their own.
//!
//! # Available Strategies
//!
//! - [`AlwaysFalse`] — Never matches
//! - [`AlwaysTrue`] — Always matches
//! - [`Equal`] — Exact string equality
//! - [`Prefix`] — String prefix match
//! - [`Substring`] — String contains match
//! - [`Regex`] — Unanchored regular expression search (feature = `"regex"`)
//! - [`List`] — Equality against any of a set of strings

use crate::MatcherKind;
use std::fmt;

mod sealed {
    pub trait Sealed {}
}

/// A string matching rule from the closed strategy set.
///
/// This trait is sealed: the set of strategies is fixed so that
/// [`StringMatcher::visit`](crate::StringMatcher::visit) can handle every one of
/// them exhaustively.
///
/// # Example
///
/// ```
/// use strmatch::{Prefix, Strategy};
///
/// let prefix = Prefix::new("foot");
/// assert!(prefix.matches("footway"));
/// assert!(!prefix.matches("barefoot"));
/// assert_eq!(prefix.to_string(), "prefix[foot]");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a string matching strategy",
    label = "this type cannot be stored in a StringMatcher",
    note = "the strategy set is closed: use AlwaysFalse, AlwaysTrue, Equal, Prefix, Substring, Regex or List"
)]
pub trait Strategy: sealed::Sealed + Send + Sync + fmt::Debug + fmt::Display {
    /// The kind reported by [`StringMatcher::kind`](crate::StringMatcher::kind).
    const KIND: MatcherKind;

    /// Check if the candidate matches.
    ///
    /// Never fails and never mutates the strategy.
    fn matches(&self, candidate: &str) -> bool;

    /// Write the debug representation of this strategy.
    ///
    /// The output is deterministic for a given state but is not meant to be
    /// parsed back.
    ///
    /// # Errors
    ///
    /// Only propagates errors from `out`.
    fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result;
}

// Display goes through `print` so both paths always agree.
macro_rules! strategy_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    self.print(f)
                }
            }
        )+
    };
}

strategy_display!(AlwaysFalse, AlwaysTrue, Equal, Prefix, Substring, List);
#[cfg(feature = "regex")]
strategy_display!(Regex);

// ═══════════════════════════════════════════════════════════════════════════════
// Constant Strategies
// ═══════════════════════════════════════════════════════════════════════════════

/// Never matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AlwaysFalse;

impl Strategy for AlwaysFalse {
    const KIND: MatcherKind = MatcherKind::AlwaysFalse;

    #[inline]
    fn matches(&self, _candidate: &str) -> bool {
        false
    }

    fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_str(Self::KIND.as_str())
    }
}

/// Always matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AlwaysTrue;

impl Strategy for AlwaysTrue {
    const KIND: MatcherKind = MatcherKind::AlwaysTrue;

    #[inline]
    fn matches(&self, _candidate: &str) -> bool {
        true
    }

    fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_str(Self::KIND.as_str())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// String Strategies
// ═══════════════════════════════════════════════════════════════════════════════

/// Exact string equality.
///
/// Matches when the candidate is byte-identical to the stored value.
///
/// # Example
///
/// ```
/// use strmatch::{Equal, Strategy};
///
/// let equal = Equal::new("highway");
/// assert!(equal.matches("highway"));
/// assert!(!equal.matches("Highway")); // case-sensitive
/// assert!(!equal.matches("highways"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Equal {
    value: String,
}

impl Equal {
    /// Create an equality strategy for the given value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns the value compared against.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Strategy for Equal {
    const KIND: MatcherKind = MatcherKind::Equal;

    #[inline]
    fn matches(&self, candidate: &str) -> bool {
        candidate == self.value
    }

    fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{}[{}]", Self::KIND, self.value)
    }
}

/// String prefix match.
///
/// Matches when the candidate starts with the stored value. An empty prefix
/// matches every candidate; a candidate shorter than the prefix never matches.
///
/// # Example
///
/// ```
/// use strmatch::{Prefix, Strategy};
///
/// let prefix = Prefix::new("foot");
/// assert!(prefix.matches("footway"));
/// assert!(prefix.matches("foot"));
/// assert!(!prefix.matches("foo"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prefix {
    value: String,
}

impl Prefix {
    /// Create a prefix strategy.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns the prefix being matched.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Strategy for Prefix {
    const KIND: MatcherKind = MatcherKind::Prefix;

    #[inline]
    fn matches(&self, candidate: &str) -> bool {
        // Slice comparison is bounded by the candidate's length.
        candidate.as_bytes().starts_with(self.value.as_bytes())
    }

    fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{}[{}]", Self::KIND, self.value)
    }
}

/// Substring match.
///
/// Matches when the stored value occurs anywhere in the candidate. An empty
/// value matches every candidate.
///
/// # Example
///
/// ```
/// use strmatch::{Strategy, Substring};
///
/// let substring = Substring::new("way");
/// assert!(substring.matches("highway"));
/// assert!(substring.matches("wayside"));
/// assert!(!substring.matches("road"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Substring {
    value: String,
}

impl Substring {
    /// Create a substring strategy.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns the substring being searched for.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Strategy for Substring {
    const KIND: MatcherKind = MatcherKind::Substring;

    #[inline]
    fn matches(&self, candidate: &str) -> bool {
        candidate.contains(self.value.as_str())
    }

    fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{}[{}]", Self::KIND, self.value)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Regex (feature = "regex")
// ═══════════════════════════════════════════════════════════════════════════════

/// Unanchored regular expression search.
///
/// Matches when the pattern is found anywhere in the candidate; use `^` and
/// `$` to anchor explicitly. Backed by the `regex` crate, so matching time is
/// linear in the candidate length regardless of the pattern (no catastrophic
/// backtracking on untrusted patterns).
///
/// # Example
///
/// ```
/// use strmatch::{Regex, Strategy};
///
/// let regex = Regex::new(r"way\b").unwrap();
/// assert!(regex.matches("highway"));
/// assert!(regex.matches("a footway here"));
/// assert!(!regex.matches("wayside"));
/// ```
#[cfg(feature = "regex")]
#[derive(Debug, Clone)]
pub struct Regex {
    regex: regex::Regex,
}

#[cfg(feature = "regex")]
impl Regex {
    /// Compile a regex strategy.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::InvalidPattern`](crate::MatcherError::InvalidPattern)
    /// if the pattern does not compile.
    pub fn new(pattern: &str) -> Result<Self, crate::MatcherError> {
        regex::Regex::new(pattern)
            .map(Self::from)
            .map_err(|e| invalid_pattern(pattern, &e))
    }

    /// Compile a case-insensitive regex strategy.
    ///
    /// Prepends `(?i)` to the pattern.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::InvalidPattern`](crate::MatcherError::InvalidPattern)
    /// if the pattern does not compile.
    pub fn new_ignore_case(pattern: &str) -> Result<Self, crate::MatcherError> {
        regex::Regex::new(&format!("(?i){pattern}"))
            .map(Self::from)
            .map_err(|e| invalid_pattern(pattern, &e))
    }

    /// Returns the source pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

#[cfg(feature = "regex")]
fn invalid_pattern(pattern: &str, error: &regex::Error) -> crate::MatcherError {
    tracing::debug!(pattern, %error, "regex failed to compile");
    crate::MatcherError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: error.to_string(),
    }
}

#[cfg(feature = "regex")]
impl From<regex::Regex> for Regex {
    fn from(regex: regex::Regex) -> Self {
        Self { regex }
    }
}

#[cfg(feature = "regex")]
impl Strategy for Regex {
    const KIND: MatcherKind = MatcherKind::Regex;

    #[inline]
    fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{}[{}]", Self::KIND, self.regex.as_str())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// List
// ═══════════════════════════════════════════════════════════════════════════════

/// Equality against any entry of a fixed set of strings.
///
/// Entry order and duplicates do not affect the result. An empty list never
/// matches. The entries are frozen once the list exists; use
/// [`ListBuilder`](crate::ListBuilder) to accumulate them incrementally.
///
/// # Example
///
/// ```
/// use strmatch::{List, Strategy};
///
/// let list = List::new(["primary", "secondary"]);
/// assert!(list.matches("secondary"));
/// assert!(!list.matches("tertiary"));
/// assert_eq!(list.to_string(), "list[[primary][secondary]]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct List {
    entries: Box<[String]>,
}

impl List {
    /// Create a list strategy from the given entries.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the stored entries, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for List {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Vec<String>> for List {
    fn from(entries: Vec<String>) -> Self {
        Self {
            entries: entries.into_boxed_slice(),
        }
    }
}

impl Strategy for List {
    const KIND: MatcherKind = MatcherKind::List;

    fn matches(&self, candidate: &str) -> bool {
        self.entries.iter().any(|entry| entry == candidate)
    }

    fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{}[", Self::KIND)?;
        for entry in &*self.entries {
            write!(out, "[{entry}]")?;
        }
        out.write_char(']')
    }
}
