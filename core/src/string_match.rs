//! `StringMatchSpec` — Config-level string match specification
//!
//! This type represents a user's *intent* for string matching (e.g., "prefix
//! match on `foot`"). It compiles to a runtime [`StringMatcher`] via
//! [`to_matcher()`](StringMatchSpec::to_matcher), which is also where limits
//! are enforced.
//!
//! # Naming: Spec vs Matcher
//!
//! - [`StringMatchSpec`] = config-level specification (what the user wrote)
//! - [`StringMatcher`] = runtime engine (what evaluates at match time)
//!
//! # Wire Shape (feature = `"serde"`)
//!
//! ```yaml
//! { type: equal, value: highway }
//! { type: prefix, value: foot }
//! { type: substring, value: way }
//! { type: regex, pattern: "^high", ignore_case: true }
//! { type: list, values: [primary, secondary] }
//! { type: always_true }
//! ```

use crate::{
    List, MatcherError, MatcherKind, StringMatcher, MAX_LIST_ENTRIES, MAX_PATTERN_LENGTH,
    MAX_REGEX_PATTERN_LENGTH,
};
use std::fmt;

/// A string match specification from user configuration.
///
/// # Example
///
/// ```
/// use strmatch::StringMatchSpec;
///
/// let spec = StringMatchSpec::Prefix { value: "foot".into() };
/// let matcher = spec.to_matcher().unwrap();
/// assert!(matcher.matches("footway"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum StringMatchSpec {
    /// Never matches.
    AlwaysFalse,
    /// Always matches.
    AlwaysTrue,
    /// Exact string equality.
    Equal {
        /// The value compared against.
        value: String,
    },
    /// String starts with prefix.
    Prefix {
        /// The prefix.
        value: String,
    },
    /// String contains substring.
    Substring {
        /// The substring.
        value: String,
    },
    /// Unanchored regular expression search (Rust `regex` crate syntax, linear time).
    Regex {
        /// The regex source.
        pattern: String,
        /// Case-insensitive matching (default: false).
        #[cfg_attr(feature = "serde", serde(default))]
        ignore_case: bool,
    },
    /// String equals one of the values.
    List {
        /// Accepted values.
        values: Vec<String>,
    },
}

impl StringMatchSpec {
    /// The strategy this spec compiles to.
    #[must_use]
    pub fn kind(&self) -> MatcherKind {
        match self {
            Self::AlwaysFalse => MatcherKind::AlwaysFalse,
            Self::AlwaysTrue => MatcherKind::AlwaysTrue,
            Self::Equal { .. } => MatcherKind::Equal,
            Self::Prefix { .. } => MatcherKind::Prefix,
            Self::Substring { .. } => MatcherKind::Substring,
            Self::Regex { .. } => MatcherKind::Regex,
            Self::List { .. } => MatcherKind::List,
        }
    }

    /// Compile this spec into a runtime [`StringMatcher`].
    ///
    /// # Errors
    ///
    /// - [`MatcherError::PatternTooLong`] if a value exceeds [`MAX_PATTERN_LENGTH`]
    ///   or a regex exceeds [`MAX_REGEX_PATTERN_LENGTH`].
    /// - [`MatcherError::TooManyEntries`] if a list exceeds [`MAX_LIST_ENTRIES`].
    /// - [`MatcherError::InvalidPattern`] if the regex is invalid.
    /// - [`MatcherError::UnsupportedStrategy`] for a regex spec when the crate
    ///   is built without the `regex` feature.
    pub fn to_matcher(&self) -> Result<StringMatcher, MatcherError> {
        self.validate().inspect_err(|e| {
            tracing::debug!(kind = %self.kind(), error = %e, "string match spec rejected");
        })?;

        match self {
            Self::AlwaysFalse => Ok(StringMatcher::always_false()),
            Self::AlwaysTrue => Ok(StringMatcher::always_true()),
            Self::Equal { value } => Ok(StringMatcher::equal(value.as_str())),
            Self::Prefix { value } => Ok(StringMatcher::prefix(value.as_str())),
            Self::Substring { value } => Ok(StringMatcher::substring(value.as_str())),
            Self::Regex {
                pattern,
                ignore_case,
            } => compile_regex(pattern, *ignore_case),
            Self::List { values } => Ok(StringMatcher::List(List::new(values.iter().cloned()))),
        }
    }

    fn validate(&self) -> Result<(), MatcherError> {
        match self {
            Self::AlwaysFalse | Self::AlwaysTrue => Ok(()),
            Self::Equal { value } | Self::Prefix { value } | Self::Substring { value } => {
                check_length(value, MAX_PATTERN_LENGTH)
            }
            Self::Regex { pattern, .. } => check_length(pattern, MAX_REGEX_PATTERN_LENGTH),
            Self::List { values } => {
                if values.len() > MAX_LIST_ENTRIES {
                    return Err(MatcherError::TooManyEntries {
                        count: values.len(),
                        max: MAX_LIST_ENTRIES,
                    });
                }
                values
                    .iter()
                    .try_for_each(|v| check_length(v, MAX_PATTERN_LENGTH))
            }
        }
    }
}

fn check_length(value: &str, max: usize) -> Result<(), MatcherError> {
    if value.len() > max {
        return Err(MatcherError::PatternTooLong {
            len: value.len(),
            max,
        });
    }
    Ok(())
}

#[cfg(feature = "regex")]
fn compile_regex(pattern: &str, ignore_case: bool) -> Result<StringMatcher, MatcherError> {
    let regex = if ignore_case {
        crate::Regex::new_ignore_case(pattern)?
    } else {
        crate::Regex::new(pattern)?
    };
    Ok(StringMatcher::Regex(regex))
}

#[cfg(not(feature = "regex"))]
fn compile_regex(_pattern: &str, _ignore_case: bool) -> Result<StringMatcher, MatcherError> {
    Err(MatcherError::UnsupportedStrategy {
        kind: MatcherKind::Regex,
    })
}

impl fmt::Display for StringMatchSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlwaysFalse => f.write_str("AlwaysFalse"),
            Self::AlwaysTrue => f.write_str("AlwaysTrue"),
            Self::Equal { value } => write!(f, "Equal(\"{value}\")"),
            Self::Prefix { value } => write!(f, "Prefix(\"{value}\")"),
            Self::Substring { value } => write!(f, "Substring(\"{value}\")"),
            Self::Regex {
                pattern,
                ignore_case: false,
            } => write!(f, "Regex(\"{pattern}\")"),
            Self::Regex {
                pattern,
                ignore_case: true,
            } => write!(f, "Regex(\"{pattern}\", ignore_case)"),
            Self::List { values } => write!(f, "List({values:?})"),
        }
    }
}
