//! `Visitor` — Uniform operations over whichever strategy is active
//!
//! [`StringMatcher::visit`](crate::StringMatcher::visit) is the only place that
//! matches on the variants. Every cross-cutting operation (matching,
//! printing, anything a caller adds) is a `Visitor` applied through it, so a
//! new strategy needs one new variant and one new arm, not a change at every
//! call site.
//!
//! Dispatch is static: `visit` is monomorphized per visitor and per strategy,
//! there is no trait object involved.

use crate::Strategy;
use std::fmt;

/// An operation that can be applied to any strategy.
///
/// # Example
///
/// ```
/// use strmatch::{Strategy, StringMatcher, Visitor};
///
/// /// Counts bytes of the debug representation.
/// struct PrintedLen;
///
/// impl Visitor for PrintedLen {
///     type Output = usize;
///
///     fn visit<S: Strategy>(self, strategy: &S) -> usize {
///         strategy.to_string().len()
///     }
/// }
///
/// assert_eq!(StringMatcher::equal("abc").visit(PrintedLen), "equal[abc]".len());
/// ```
pub trait Visitor {
    /// Value produced by the visit.
    type Output;

    /// Apply this operation to the active strategy.
    fn visit<S: Strategy>(self, strategy: &S) -> Self::Output;
}

/// Applies [`Strategy::matches`] to a candidate.
#[derive(Debug, Clone, Copy)]
pub struct MatchVisitor<'a> {
    candidate: &'a str,
}

impl<'a> MatchVisitor<'a> {
    /// Create a visitor for the given candidate.
    #[must_use]
    pub fn new(candidate: &'a str) -> Self {
        Self { candidate }
    }
}

impl Visitor for MatchVisitor<'_> {
    type Output = bool;

    #[inline]
    fn visit<S: Strategy>(self, strategy: &S) -> bool {
        strategy.matches(self.candidate)
    }
}

/// Applies [`Strategy::print`] to a sink.
pub struct PrintVisitor<'a> {
    out: &'a mut dyn fmt::Write,
}

impl<'a> PrintVisitor<'a> {
    /// Create a visitor writing to `out`.
    pub fn new(out: &'a mut dyn fmt::Write) -> Self {
        Self { out }
    }
}

impl fmt::Debug for PrintVisitor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrintVisitor").finish_non_exhaustive()
    }
}

impl Visitor for PrintVisitor<'_> {
    type Output = fmt::Result;

    fn visit<S: Strategy>(self, strategy: &S) -> fmt::Result {
        strategy.print(self.out)
    }
}

/// Reports the [`MatcherKind`](crate::MatcherKind) of the active strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct KindVisitor;

impl Visitor for KindVisitor {
    type Output = crate::MatcherKind;

    fn visit<S: Strategy>(self, _strategy: &S) -> crate::MatcherKind {
        S::KIND
    }
}
