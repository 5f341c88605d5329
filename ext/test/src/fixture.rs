//! Conformance test fixture runner
//!
//! Loads YAML fixtures and runs them against the strmatch engine.
//!
//! ```yaml
//! name: prefix_foot
//! description: prefix matches leading bytes only
//! matcher: { type: prefix, value: foot }
//! print: "prefix[foot]"
//! cases:
//!   - { input: footway, expect: true }
//!   - { input: barefoot, expect: false }
//! ---
//! name: regex_unterminated_group
//! description: invalid patterns fail at construction
//! matcher: { type: regex, pattern: "(highway" }
//! expect_error: invalid_pattern
//! ```

use serde::Deserialize;
use strmatch::{MatcherError, StringMatchSpec, StringMatcher};

/// A complete test fixture
#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub matcher: StringMatchSpec,
    /// Expected debug representation of the compiled matcher.
    #[serde(default)]
    pub print: Option<String>,
    /// Construction is expected to fail with this error.
    #[serde(default)]
    pub expect_error: Option<ExpectedError>,
    #[serde(default)]
    pub cases: Vec<TestCase>,
}

/// Test case
#[derive(Debug, Deserialize)]
pub struct TestCase {
    /// Defaults to the input when absent.
    #[serde(default)]
    pub name: Option<String>,
    pub input: String,
    pub expect: bool,
}

impl TestCase {
    fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.input)
    }
}

/// Construction error categories a fixture can expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedError {
    InvalidPattern,
    PatternTooLong,
    TooManyEntries,
    UnsupportedStrategy,
}

impl From<&MatcherError> for ExpectedError {
    fn from(err: &MatcherError) -> Self {
        match err {
            MatcherError::InvalidPattern { .. } => Self::InvalidPattern,
            MatcherError::PatternTooLong { .. } => Self::PatternTooLong,
            MatcherError::TooManyEntries { .. } => Self::TooManyEntries,
            MatcherError::UnsupportedStrategy { .. } => Self::UnsupportedStrategy,
        }
    }
}

/// Why a fixture failed.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("fixture '{fixture}': construction failed unexpectedly: {source}")]
    Construction {
        fixture: String,
        source: MatcherError,
    },
    #[error("fixture '{fixture}': expected {expected:?} error, but construction succeeded")]
    MissingError {
        fixture: String,
        expected: ExpectedError,
    },
    #[error("fixture '{fixture}': expected {expected:?} error, got {actual}")]
    WrongError {
        fixture: String,
        expected: ExpectedError,
        actual: MatcherError,
    },
    #[error("fixture '{fixture}': printed {actual:?}, expected {expected:?}")]
    Print {
        fixture: String,
        expected: String,
        actual: String,
    },
    #[error("fixture '{fixture}' case '{case}': expected {expected}, got {actual}")]
    Case {
        fixture: String,
        case: String,
        expected: bool,
        actual: bool,
    },
}

// ═══════════════════════════════════════════════════════════════════════════════
// Runner
// ═══════════════════════════════════════════════════════════════════════════════

/// Outcome of running a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// All checks passed; carries the number of cases evaluated.
    Passed(usize),
    /// The fixture needs a strategy this build does not include.
    Skipped,
}

impl Fixture {
    /// Parse a fixture from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Parse multiple fixtures from a YAML file with `---` separators
    pub fn from_yaml_multi(yaml: &str) -> Result<Vec<Self>, serde_yaml::Error> {
        let mut fixtures = Vec::new();
        for doc in serde_yaml::Deserializer::from_str(yaml) {
            fixtures.push(Self::deserialize(doc)?);
        }
        Ok(fixtures)
    }

    /// Run all checks, stopping at the first failure.
    pub fn run(&self) -> Result<Outcome, FixtureError> {
        if !self.matcher.kind().is_available() {
            tracing::debug!(fixture = %self.name, kind = %self.matcher.kind(), "skipping fixture");
            return Ok(Outcome::Skipped);
        }

        let matcher = match (self.matcher.to_matcher(), self.expect_error) {
            (Ok(matcher), None) => matcher,
            (Err(actual), Some(expected)) if ExpectedError::from(&actual) == expected => {
                return Ok(Outcome::Passed(0));
            }
            (Err(actual), Some(expected)) => {
                return Err(FixtureError::WrongError {
                    fixture: self.name.clone(),
                    expected,
                    actual,
                });
            }
            (Err(source), None) => {
                return Err(FixtureError::Construction {
                    fixture: self.name.clone(),
                    source,
                });
            }
            (Ok(_), Some(expected)) => {
                return Err(FixtureError::MissingError {
                    fixture: self.name.clone(),
                    expected,
                });
            }
        };

        self.check_print(&matcher)?;
        for case in &self.cases {
            let actual = matcher.matches(&case.input);
            if actual != case.expect {
                return Err(FixtureError::Case {
                    fixture: self.name.clone(),
                    case: case.label().to_string(),
                    expected: case.expect,
                    actual,
                });
            }
        }
        Ok(Outcome::Passed(self.cases.len()))
    }

    fn check_print(&self, matcher: &StringMatcher) -> Result<(), FixtureError> {
        let Some(expected) = &self.print else {
            return Ok(());
        };
        let actual = matcher.to_string();
        if &actual != expected {
            return Err(FixtureError::Print {
                fixture: self.name.clone(),
                expected: expected.clone(),
                actual,
            });
        }
        Ok(())
    }

    /// Run all checks and panic on the first failure
    pub fn run_and_assert(&self) -> Outcome {
        self.run().unwrap_or_else(|e| panic!("{e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_runs_cases() {
        let fixture = Fixture::from_yaml(
            r#"
name: substring_way
matcher: { type: substring, value: way }
print: "substring[way]"
cases:
  - { input: highway, expect: true }
  - { name: no way, input: road, expect: false }
"#,
        )
        .unwrap();
        assert_eq!(fixture.run().unwrap(), Outcome::Passed(2));
    }

    #[test]
    fn reports_failing_case() {
        let fixture = Fixture::from_yaml(
            r#"
name: wrong_expectation
matcher: { type: equal, value: highway }
cases:
  - { input: highways, expect: true }
"#,
        )
        .unwrap();
        let err = fixture.run().unwrap_err();
        assert!(matches!(err, FixtureError::Case { actual: false, .. }));
        assert!(err.to_string().contains("case 'highways'"));
    }

    #[test]
    fn reports_print_mismatch() {
        let fixture = Fixture::from_yaml(
            r#"
name: print_mismatch
matcher: { type: always_true }
print: "always_false"
"#,
        )
        .unwrap();
        assert!(matches!(fixture.run(), Err(FixtureError::Print { .. })));
    }

    #[test]
    fn missing_expected_error_is_reported() {
        let fixture = Fixture::from_yaml(
            r#"
name: not_too_long
matcher: { type: equal, value: "" }
expect_error: pattern_too_long
"#,
        )
        .unwrap();
        assert!(matches!(
            fixture.run(),
            Err(FixtureError::MissingError {
                expected: ExpectedError::PatternTooLong,
                ..
            })
        ));
    }

    #[test]
    fn multi_document_yaml() {
        let fixtures = Fixture::from_yaml_multi(
            "name: a\nmatcher: { type: always_true }\n---\nname: b\nmatcher: { type: always_false }\n",
        )
        .unwrap();
        assert_eq!(fixtures.len(), 2);
        assert_eq!(fixtures[1].name, "b");
    }
}
