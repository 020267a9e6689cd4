//! Corpus-driven conformance testing.
//!
//! A corpus is a JSON file of test vectors, each an input document with its
//! expected verdict and, for rejections, the expected error kind and column.
//! The runner checks every vector and reports mismatches, so the accept set
//! and the diagnostics can be pinned down independently of the unit tests.

pub mod corpus;

pub use corpus::{
    Corpus, CorpusManifest, CorpusResults, CorpusRunner, Expected, Preset, TestResult,
    TestVector,
};

/// Result type for conformance operations.
pub type ConformanceResult<T> = Result<T, ConformanceError>;

/// Errors that can occur while loading a corpus.
#[derive(Debug, thiserror::Error)]
pub enum ConformanceError {
    /// The corpus file could not be read
    #[error("failed to read corpus file: {0}")]
    Io(#[from] std::io::Error),
    /// The corpus file is not a valid corpus
    #[error("failed to parse corpus JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// The corpus declares a format this runner does not understand
    #[error("unsupported corpus format version '{0}'")]
    UnsupportedFormat(String),
}
