// Build script that generates the error taxonomy from metadata.
// Build scripts are not on the validation path, so we allow expect() and panic().
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
//
// Consumes `metadata/errors.json` and generates `error_generated.rs`:
// the ErrorKind enum with stable codes and kebab-case names.

use serde::Deserialize;
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct Metadata {
    version: String,
    errors: Vec<ErrorInfo>,
}

#[derive(Debug, Deserialize)]
struct ErrorInfo {
    name: String,
    kind: String,
    code: u32,
    message: String,
}

fn main() {
    println!("cargo:rerun-if-changed=metadata/errors.json");
    println!("cargo:rerun-if-changed=build.rs");

    let metadata_path = Path::new("metadata/errors.json");

    let metadata_content = fs::read_to_string(metadata_path)
        .unwrap_or_else(|e| panic!("Could not read {}: {}", metadata_path.display(), e));

    let metadata: Metadata = serde_json::from_str(&metadata_content)
        .unwrap_or_else(|e| panic!("Could not parse {}: {}", metadata_path.display(), e));

    if metadata.version != "1" {
        panic!(
            "Unexpected error metadata version '{}', expected '1'",
            metadata.version
        );
    }

    check_unique(&metadata.errors);

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    generate_error_rs(Path::new(&out_dir), &metadata.errors);
}

/// Codes and names must identify a kind unambiguously.
fn check_unique(errors: &[ErrorInfo]) {
    let mut codes = HashSet::new();
    let mut kinds = HashSet::new();
    for error in errors {
        if !codes.insert(error.code) {
            panic!("Duplicate error code {}", error.code);
        }
        if !kinds.insert(error.kind.as_str()) {
            panic!("Duplicate error kind '{}'", error.kind);
        }
    }
}

fn generate_error_rs(out_path: &Path, errors: &[ErrorInfo]) {
    let mut code = String::new();

    // Outer doc comments only, for include!() compatibility
    code.push_str(
        r#"// Error kinds generated from metadata/errors.json.
//
// DO NOT EDIT - This file is generated by build.rs

use thiserror::Error;

/// Every way a JSON document can fail validation.
///
/// Each kind carries a stable numeric code and a kebab-case name used in
/// machine-readable reports and conformance corpora.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
"#,
    );

    for error in errors {
        code.push_str(&format!(
            "    /// `{}` (code {})\n    #[error({:?})]\n    {},\n\n",
            error.kind, error.code, error.message, error.name
        ));
    }
    code.push_str("}\n\n");

    code.push_str("impl ErrorKind {\n");
    code.push_str("    /// All error kinds, in code order.\n");
    code.push_str(&format!(
        "    pub const ALL: [ErrorKind; {}] = [\n",
        errors.len()
    ));
    for error in errors {
        code.push_str(&format!("        ErrorKind::{},\n", error.name));
    }
    code.push_str("    ];\n\n");

    code.push_str(
        r#"    /// Get the numeric error code.
    pub const fn code(&self) -> u32 {
        match self {
"#,
    );
    for error in errors {
        code.push_str(&format!(
            "            ErrorKind::{} => {},\n",
            error.name, error.code
        ));
    }
    code.push_str(
        r#"        }
    }

    /// Get the kebab-case name of the kind.
    pub const fn name(&self) -> &'static str {
        match self {
"#,
    );
    for error in errors {
        code.push_str(&format!(
            "            ErrorKind::{} => {:?},\n",
            error.name, error.kind
        ));
    }
    code.push_str(
        r#"        }
    }

    /// Look up a kind by its kebab-case name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
"#,
    );
    for error in errors {
        code.push_str(&format!(
            "            {:?} => Some(ErrorKind::{}),\n",
            error.kind, error.name
        ));
    }
    code.push_str(
        r#"            _ => None,
        }
    }
}
"#,
    );

    fs::write(out_path.join("error_generated.rs"), code)
        .expect("Failed to write error_generated.rs");
}
