//! jsonv CLI.
//!
//! Checks JSON documents from files or stdin, runs conformance corpora and
//! times repeated validation.

use clap::{Parser, Subcommand};
use jsonv::conformance::{CorpusRunner, TestResult};
use jsonv::{Config, SyntaxError, Validator};
use log::{debug, info};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

/// Document timed by `bench` when no file is given.
const SAMPLE: &str = include_str!("sample.json");

/// Exit code for rejected documents or failing corpora.
const EXIT_INVALID: u8 = 1;
/// Exit code for I/O and usage failures.
const EXIT_ERROR: u8 = 2;

#[derive(Parser)]
#[command(name = "jsonv")]
#[command(about = "Single-pass JSON syntax checker", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check JSON documents (stdin when no file or `-` is given)
    Check {
        /// Files to check
        files: Vec<PathBuf>,

        /// Reject empty input and raw control characters, tighten limits
        #[arg(long)]
        strict: bool,

        /// Maximum object/array nesting depth
        #[arg(long, value_name = "DEPTH")]
        max_depth: Option<u64>,

        /// Emit one JSON report per input
        #[arg(long)]
        json: bool,
    },

    /// Time repeated validation of one document
    Bench {
        /// Document to validate (built-in sample when omitted)
        file: Option<PathBuf>,

        /// Number of validations
        #[arg(short = 'n', long, default_value_t = 100_000)]
        iterations: u32,
    },

    /// Run a conformance corpus
    Corpus {
        /// Path to the corpus JSON file
        path: PathBuf,
    },

    /// Show version information
    Version,
}

/// Machine-readable verdict for one input.
#[derive(Serialize)]
struct Report<'a> {
    input: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorReport>,
}

#[derive(Serialize)]
struct ErrorReport {
    kind: &'static str,
    code: u32,
    column: u32,
}

impl From<SyntaxError> for ErrorReport {
    fn from(e: SyntaxError) -> Self {
        Self {
            kind: e.kind.name(),
            code: e.code(),
            column: e.column,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Check {
            files,
            strict,
            max_depth,
            json,
        }) => {
            let mut config = if strict {
                Config::strict()
            } else {
                Config::compatible()
            };
            if let Some(depth) = max_depth {
                config = config.with_max_depth(depth);
            }
            run_check(&files, Validator::new(config), json)
        }
        Some(Commands::Bench { file, iterations }) => run_bench(file.as_deref(), iterations),
        Some(Commands::Corpus { path }) => run_corpus(&path),
        Some(Commands::Version) => {
            println!("jsonv v{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        None => {
            println!("jsonv v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for usage information");
            ExitCode::SUCCESS
        }
    }
}

/// Read a document from a file, or stdin for `-`.
fn read_input(path: &Path) -> std::io::Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
    }
}

fn run_check(files: &[PathBuf], validator: Validator, json: bool) -> ExitCode {
    let stdin = [PathBuf::from("-")];
    let inputs = if files.is_empty() { &stdin[..] } else { files };

    let mut any_invalid = false;
    let mut any_error = false;

    for path in inputs {
        let name = if path == Path::new("-") {
            "<stdin>".to_string()
        } else {
            path.display().to_string()
        };

        let text = match read_input(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("{}: {}", name, e);
                any_error = true;
                continue;
            }
        };

        debug!("checking {} ({} bytes)", name, text.len());
        let result = validator.check(&text);
        any_invalid |= result.is_err();

        if json {
            let report = Report {
                input: &name,
                valid: result.is_ok(),
                error: result.err().map(ErrorReport::from),
            };
            match serde_json::to_string(&report) {
                Ok(line) => println!("{}", line),
                Err(e) => {
                    eprintln!("{}: failed to serialize report: {}", name, e);
                    any_error = true;
                }
            }
        } else {
            match result {
                Ok(()) => println!("{}: ok", name),
                Err(e) => println!("{}: {} at column {}", name, e.kind.name(), e.column),
            }
        }
    }

    if any_error {
        ExitCode::from(EXIT_ERROR)
    } else if any_invalid {
        ExitCode::from(EXIT_INVALID)
    } else {
        ExitCode::SUCCESS
    }
}

fn run_bench(file: Option<&Path>, iterations: u32) -> ExitCode {
    let text = match file {
        Some(path) => match read_input(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("{}: {}", path.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
        },
        None => SAMPLE.to_string(),
    };

    let validator = Validator::default();
    let valid = validator.validate(&text);
    let start = Instant::now();
    for _ in 0..iterations {
        std::hint::black_box(validator.validate(std::hint::black_box(&text)));
    }
    let elapsed = start.elapsed();

    info!("validated {} bytes {} times", text.len(), iterations);
    println!("valid: {}", valid);
    println!("iterations: {}", iterations);
    println!("elapsed: {} ms", elapsed.as_millis());
    ExitCode::SUCCESS
}

fn run_corpus(path: &Path) -> ExitCode {
    let runner = match CorpusRunner::load(path) {
        Ok(runner) => runner,
        Err(e) => {
            eprintln!("{}: {}", path.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    info!("loaded corpus with {} vectors", runner.vector_count());
    let results = runner.run_all();

    for (id, result) in results.failures() {
        if let TestResult::Fail { expected, actual } = result {
            println!("FAIL {} - expected: {}, actual: {}", id, expected, actual);
        }
    }
    for (id, result) in results.error_details() {
        if let TestResult::Error { message } = result {
            println!("ERROR {} - {}", id, message);
        }
    }
    println!("{}", results.summary());

    if results.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_INVALID)
    }
}
