//! `ListBuilder` — Mutable accumulation phase for [`List`] entries.
//!
//! A [`List`] is frozen as soon as it exists. Entries that arrive one at a
//! time (e.g. while reading a filter definition) are collected here first and
//! frozen with [`build()`](ListBuilder::build) or by converting the builder
//! into a [`StringMatcher`](crate::StringMatcher).

use crate::List;

/// Builder for a [`List`] strategy.
///
/// # Example
///
/// ```
/// use strmatch::{ListBuilder, StringMatcher};
///
/// let mut builder = ListBuilder::new().add("primary");
/// builder.push("secondary");
///
/// let matcher = StringMatcher::from(builder);
/// assert!(matcher.matches("secondary"));
/// assert!(!matcher.matches("tertiary"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListBuilder {
    entries: Vec<String>,
}

impl ListBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append an entry (builder pattern).
    #[must_use]
    pub fn add(mut self, entry: impl Into<String>) -> Self {
        self.entries.push(entry.into());
        self
    }

    /// Append an entry in place.
    pub fn push(&mut self, entry: impl Into<String>) -> &mut Self {
        self.entries.push(entry.into());
        self
    }

    /// Returns the number of entries collected so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freeze the collected entries into a [`List`].
    #[must_use]
    pub fn build(self) -> List {
        tracing::trace!(entries = self.entries.len(), "freezing list");
        List::from(self.entries)
    }
}

impl<S: Into<String>> Extend<S> for ListBuilder {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.entries.extend(iter.into_iter().map(Into::into));
    }
}

impl<S: Into<String>> FromIterator<S> for ListBuilder {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut builder = Self::new();
        builder.extend(iter);
        builder
    }
}

impl From<ListBuilder> for List {
    fn from(builder: ListBuilder) -> Self {
        builder.build()
    }
}
