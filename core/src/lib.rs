//! strmatch - String matching strategies behind one value type
//!
//! A [`StringMatcher`] holds exactly one strategy from a closed set and
//! applies it through a uniform call: `matcher.matches(candidate) -> bool`.
//! Typical use is filtering OSM tag keys and values, where a filter is
//! configured once and evaluated millions of times.
//!
//! # Architecture
//!
//! - [`Strategy`] — Sealed trait implemented by every matching rule
//! - [`StringMatcher`] — Enum with one variant per strategy (no trait objects)
//! - [`Visitor`] — Operation applied to the active strategy via [`StringMatcher::visit`]
//! - [`ListBuilder`] — Mutable phase before a [`List`] is frozen
//! - [`StringMatchSpec`] — Config-level intent, compiled and validated into a `StringMatcher`
//!
//! # Key Design Insights
//!
//! 1. **Closed set, static dispatch**: `visit` is the one exhaustive `match`
//!    over the variants. The compiler rejects a strategy without an arm.
//!
//! 2. **Only construction fails**: `matches` and `print` never return errors.
//!    The single fallible step is compiling a regex (or validating a spec).
//!
//! 3. **Immutable after construction**: a `StringMatcher` is `Send + Sync` and
//!    never mutated by matching, so it can be shared freely between threads.
//!
//! # Example
//!
//! ```
//! use strmatch::prelude::*;
//!
//! let highway = StringMatcher::from("highway");
//! let foot = StringMatcher::prefix("foot");
//! let roads = StringMatcher::from(vec!["primary", "secondary"]);
//!
//! assert!(highway.matches("highway"));
//! assert!(foot.matches("footway"));
//! assert!(!foot.matches("barefoot"));
//! assert!(roads.matches("secondary"));
//!
//! assert_eq!(foot.to_string(), "prefix[foot]");
//! ```
//!
//! # Features
//!
//! - `regex` (default) — the [`Regex`] strategy, backed by the linear-time
//!   `regex` crate. Without it the variant and its constructors do not exist.
//! - `serde` — (de)serialization of [`StringMatchSpec`] and [`MatcherKind`].

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod builder;
mod kind;
mod matcher;
mod strategy;
mod string_match;
pub mod visitor;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

pub use builder::ListBuilder;
pub use kind::MatcherKind;
pub use matcher::StringMatcher;
pub use string_match::StringMatchSpec;
pub use visitor::Visitor;

// Concrete strategies
#[cfg(feature = "regex")]
pub use strategy::Regex;
pub use strategy::{AlwaysFalse, AlwaysTrue, Equal, List, Prefix, Strategy, Substring};

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use strmatch::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "regex")]
    pub use crate::Regex;
    pub use crate::{
        // Strategies
        AlwaysFalse,
        AlwaysTrue,
        Equal,
        List,
        // Builder
        ListBuilder,
        // Errors
        MatcherError,
        MatcherKind,
        Prefix,
        // Traits
        Strategy,
        // Config types
        StringMatchSpec,
        // Core types
        StringMatcher,
        Substring,
        Visitor,
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════════════════════════

/// Maximum length for non-regex patterns in a [`StringMatchSpec`] (equal, prefix,
/// substring, and each list entry).
pub const MAX_PATTERN_LENGTH: usize = 8192;

/// Maximum length for regex patterns in a [`StringMatchSpec`].
///
/// Regex compilation is expensive even with the linear-time `regex` crate.
pub const MAX_REGEX_PATTERN_LENGTH: usize = 4096;

/// Maximum number of entries in a list [`StringMatchSpec`].
pub const MAX_LIST_ENTRIES: usize = 4096;

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// Errors from matcher construction.
///
/// Matching itself never fails; these are raised when building a
/// [`StringMatcher`] or compiling a [`StringMatchSpec`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatcherError {
    /// A regex pattern does not compile.
    #[error("invalid pattern \"{pattern}\": {reason}")]
    InvalidPattern {
        /// The pattern that failed to compile.
        pattern: String,
        /// The underlying error message.
        reason: String,
    },
    /// A pattern exceeds the maximum allowed length.
    #[error("pattern length is {len}, but maximum allowed is {max}")]
    PatternTooLong {
        /// Actual length of the pattern.
        len: usize,
        /// Maximum allowed length.
        max: usize,
    },
    /// A list has more entries than allowed.
    #[error("list has {count} entries, but maximum allowed is {max}")]
    TooManyEntries {
        /// Actual number of entries.
        count: usize,
        /// Maximum allowed.
        max: usize,
    },
    /// The strategy is not compiled into this build.
    #[error("{kind} matching is not available in this build, enable the \"{kind}\" feature")]
    UnsupportedStrategy {
        /// The requested strategy.
        kind: MatcherKind,
    },
}
