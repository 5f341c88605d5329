//! strmatch-test: Conformance fixtures for strmatch
//!
//! Fixtures are YAML documents pairing a [`StringMatchSpec`](strmatch::StringMatchSpec)
//! with candidate strings and the expected outcome. The same corpus can be
//! replayed against any implementation of the matcher.
//!
//! # Example
//!
//! ```
//! use strmatch_test::fixture::{Fixture, Outcome};
//!
//! let fixture = Fixture::from_yaml(r#"
//! name: list_roads
//! matcher: { type: list, values: [primary, secondary] }
//! cases:
//!   - { input: secondary, expect: true }
//!   - { input: tertiary, expect: false }
//! "#).unwrap();
//!
//! assert_eq!(fixture.run_and_assert(), Outcome::Passed(2));
//! ```

pub mod fixture;

use fixture::{Fixture, FixtureError, Outcome};
use std::path::Path;

/// Error loading or running a fixture file.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },
    #[error("{path}: {source}")]
    Fixture { path: String, source: FixtureError },
}

/// Totals from running a corpus directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub fixtures: usize,
    pub cases: usize,
    pub skipped: usize,
}

/// Run every `.yaml`/`.yml` file in `dir`, in file name order.
///
/// Stops at the first failing fixture.
pub fn run_dir(dir: &Path) -> Result<Summary, CorpusError> {
    let io_err = |source| CorpusError::Io {
        path: dir.display().to_string(),
        source,
    };
    let mut paths = std::fs::read_dir(dir)
        .map_err(io_err)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_err)?;
    paths.retain(|p| p.extension().is_some_and(|e| e == "yaml" || e == "yml"));
    paths.sort();

    let mut summary = Summary::default();
    for path in paths {
        let file = path.display().to_string();
        let yaml = std::fs::read_to_string(&path).map_err(|source| CorpusError::Io {
            path: file.clone(),
            source,
        })?;
        let fixtures = Fixture::from_yaml_multi(&yaml).map_err(|source| CorpusError::Parse {
            path: file.clone(),
            source,
        })?;

        for fixture in fixtures {
            tracing::debug!(fixture = %fixture.name, file = %file, "running fixture");
            let outcome = fixture.run().map_err(|source| CorpusError::Fixture {
                path: file.clone(),
                source,
            })?;
            summary.fixtures += 1;
            match outcome {
                Outcome::Passed(cases) => summary.cases += cases,
                Outcome::Skipped => summary.skipped += 1,
            }
        }
    }
    Ok(summary)
}
