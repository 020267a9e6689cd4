//! Corpus loading and execution.
//!
//! Corpus layout:
//!
//! ```json
//! {
//!   "manifest": { "format_version": "1", "description": "..." },
//!   "vectors": [
//!     { "id": "array-basic", "input": "[1, 2, 3]", "expected": { "valid": true } },
//!     { "id": "array-double-comma", "input": "[1,,2]", "config": "strict",
//!       "expected": { "valid": false, "kind": "expected-value", "column": 4 } }
//!   ]
//! }
//! ```

use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::{ConformanceError, ConformanceResult};
use crate::config::Config;
use crate::error::ErrorKind;
use crate::json::check_with_config;

/// Corpus format version this runner understands.
pub const FORMAT_VERSION: &str = "1";

/// Corpus manifest with metadata.
#[derive(Debug, Deserialize)]
pub struct CorpusManifest {
    /// Format version of the corpus file.
    pub format_version: String,
    /// Free-form description of the corpus.
    #[serde(default)]
    pub description: String,
}

/// A corpus containing test vectors.
#[derive(Debug, Deserialize)]
pub struct Corpus {
    /// Corpus metadata.
    pub manifest: CorpusManifest,
    /// List of test vectors.
    pub vectors: Vec<TestVector>,
}

/// Named configuration a vector runs under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// [`Config::compatible`]
    #[default]
    Compatible,
    /// [`Config::strict`]
    Strict,
}

impl Preset {
    /// The configuration this preset names.
    pub fn config(self) -> Config {
        match self {
            Preset::Compatible => Config::compatible(),
            Preset::Strict => Config::strict(),
        }
    }
}

/// Expected verdict for a vector.
#[derive(Debug, Clone, Deserialize)]
pub struct Expected {
    /// Whether the input must be accepted.
    pub valid: bool,
    /// Kebab-case error kind, for rejected inputs.
    #[serde(default)]
    pub kind: Option<String>,
    /// 1-based error column, for rejected inputs.
    #[serde(default)]
    pub column: Option<u32>,
}

/// A single test vector.
#[derive(Debug, Deserialize)]
pub struct TestVector {
    /// Unique identifier for the test.
    pub id: String,
    /// Document to check.
    pub input: String,
    /// Configuration to check under.
    #[serde(default)]
    pub config: Preset,
    /// Expected result.
    pub expected: Expected,
}

/// Result of running a single test vector.
#[derive(Debug, PartialEq, Eq)]
pub enum TestResult {
    /// Test passed.
    Pass,
    /// Test failed with mismatch.
    Fail {
        /// Expected result from the corpus.
        expected: String,
        /// Actual result from the checker.
        actual: String,
    },
    /// The vector itself is malformed.
    Error {
        /// Error message.
        message: String,
    },
}

impl TestResult {
    /// Returns true if this is a passing result.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns true if this is a failing result.
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail { .. })
    }

    /// Returns true if the vector could not be evaluated.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

/// Tally of a corpus run, kept in vector order.
#[derive(Debug, Default)]
pub struct CorpusResults {
    /// Vectors whose verdict matched.
    pub passed: usize,
    /// Vectors whose verdict, kind or column differed.
    pub failed: usize,
    /// Vectors that could not be evaluated.
    pub errors: usize,
    details: Vec<(String, TestResult)>,
}

impl CorpusResults {
    /// Count `result` and keep it under `id`.
    pub fn record(&mut self, id: impl Into<String>, result: TestResult) {
        match result {
            TestResult::Pass => self.passed += 1,
            TestResult::Fail { .. } => self.failed += 1,
            TestResult::Error { .. } => self.errors += 1,
        }
        self.details.push((id.into(), result));
    }

    /// Number of vectors recorded.
    pub fn total(&self) -> usize {
        self.details.len()
    }

    /// True when no vector failed or errored.
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }

    /// One-line tally, e.g. `50 passed, 1 failed, 1 errors (total: 52)`.
    pub fn summary(&self) -> String {
        format!(
            "{} passed, {} failed, {} errors (total: {})",
            self.passed,
            self.failed,
            self.errors,
            self.total()
        )
    }

    /// Vectors whose outcome disagreed with the expectation.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &TestResult)> {
        self.select(TestResult::is_fail)
    }

    /// Vectors that could not be evaluated.
    pub fn error_details(&self) -> impl Iterator<Item = (&str, &TestResult)> {
        self.select(TestResult::is_error)
    }

    fn select(&self, keep: fn(&TestResult) -> bool) -> impl Iterator<Item = (&str, &TestResult)> {
        self.details
            .iter()
            .filter(move |(_, r)| keep(r))
            .map(|(id, r)| (id.as_str(), r))
    }
}

/// Corpus runner that executes test vectors.
pub struct CorpusRunner {
    corpus: Corpus,
}

impl CorpusRunner {
    /// Load corpus from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> ConformanceResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Load corpus from JSON text.
    pub fn from_json(content: &str) -> ConformanceResult<Self> {
        let corpus: Corpus = serde_json::from_str(content)?;
        if corpus.manifest.format_version != FORMAT_VERSION {
            return Err(ConformanceError::UnsupportedFormat(
                corpus.manifest.format_version,
            ));
        }
        Ok(Self { corpus })
    }

    /// Get the corpus manifest.
    pub fn manifest(&self) -> &CorpusManifest {
        &self.corpus.manifest
    }

    /// Get the number of test vectors.
    pub fn vector_count(&self) -> usize {
        self.corpus.vectors.len()
    }

    /// Run all test vectors and return results.
    pub fn run_all(&self) -> CorpusResults {
        let mut results = CorpusResults::default();
        for vector in &self.corpus.vectors {
            let result = run_vector(vector);
            debug!("vector {}: {:?}", vector.id, result);
            results.record(vector.id.as_str(), result);
        }

        results
    }
}

/// Run a single test vector.
pub fn run_vector(vector: &TestVector) -> TestResult {
    let expected_kind = match vector.expected.kind.as_deref() {
        None => None,
        Some(name) => match ErrorKind::from_name(name) {
            Some(kind) => Some(kind),
            None => {
                return TestResult::Error {
                    message: format!("Unknown error kind: {}", name),
                }
            }
        },
    };

    if vector.expected.valid && (expected_kind.is_some() || vector.expected.column.is_some()) {
        return TestResult::Error {
            message: "Valid vector must not name an error".to_string(),
        };
    }

    let result = check_with_config(&vector.input, &vector.config.config());

    match (vector.expected.valid, result) {
        (true, Ok(())) => TestResult::Pass,
        (true, Err(e)) => TestResult::Fail {
            expected: "valid".to_string(),
            actual: format!("{} at column {}", e.kind.name(), e.column),
        },
        (false, Ok(())) => TestResult::Fail {
            expected: describe(expected_kind, vector.expected.column),
            actual: "valid".to_string(),
        },
        (false, Err(e)) => {
            let kind_matches = expected_kind.map_or(true, |kind| kind == e.kind);
            let column_matches = vector.expected.column.map_or(true, |col| col == e.column);
            if kind_matches && column_matches {
                TestResult::Pass
            } else {
                TestResult::Fail {
                    expected: describe(expected_kind, vector.expected.column),
                    actual: format!("{} at column {}", e.kind.name(), e.column),
                }
            }
        }
    }
}

/// Render an expected rejection for failure messages.
fn describe(kind: Option<ErrorKind>, column: Option<u32>) -> String {
    let kind = kind.map_or("invalid", |k| k.name());
    match column {
        Some(col) => format!("{} at column {}", kind, col),
        None => kind.to_string(),
    }
}
