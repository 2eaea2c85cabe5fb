//! Sample corpus loader
//!
//! Verified houlang sources live in `samples/` at the workspace root. Each file is named
//! `NNN-name.hou`; the number before the first dash identifies it, so `1-`, `01-` and `001-`
//! all resolve to sample 1. Two files resolving to the same number is an error in the corpus.
//!
//! ```rust,ignore
//! let source = HouSamples::sample(1).source();
//! let file = HouSamples::sample(1).parse();
//! let tokens = HouSamples::sample(3).tokenize();
//! let error = HouSamples::sample(5).parse_error();
//! ```

use crate::houlang::ast::SourceFile;
use crate::houlang::lexing::tokenize;
use crate::houlang::parsing::{parse_document, ParseError};
use crate::houlang::token::Token;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const SAMPLES_DIR: &str = "samples";
const SAMPLE_EXTENSION: &str = "hou";

static NUMBER_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)-").expect("valid regex"));

/// Errors that can occur when finding samples
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("sample #{0} not found in {1}")]
    NotFound(usize, PathBuf),
    #[error("samples #{number} collide: {first} and {second}")]
    DuplicateNumber {
        number: usize,
        first: PathBuf,
        second: PathBuf,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The `samples/` directory of the workspace
pub fn samples_root() -> PathBuf {
    // CARGO_MANIFEST_DIR is houlang-parser/, the corpus sits next to it
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .join(SAMPLES_DIR)
}

/// Sample number encoded in a file name, if any
pub fn sample_number(file_name: &str) -> Option<usize> {
    NUMBER_PREFIX
        .captures(file_name)
        .and_then(|captures| captures[1].parse().ok())
}

/// Map every `.hou` file in `dir` by its number prefix
pub fn list_samples_by_number(dir: &Path) -> Result<BTreeMap<usize, PathBuf>, SampleError> {
    let mut samples = BTreeMap::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(SAMPLE_EXTENSION) {
            continue;
        }
        let Some(number) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(sample_number)
        else {
            continue;
        };

        if let Some(first) = samples.insert(number, path.clone()) {
            return Err(SampleError::DuplicateNumber {
                number,
                first,
                second: path,
            });
        }
    }

    Ok(samples)
}

/// Resolve sample `number` inside `dir`
pub fn find_sample_in(dir: &Path, number: usize) -> Result<PathBuf, SampleError> {
    list_samples_by_number(dir)?
        .remove(&number)
        .ok_or_else(|| SampleError::NotFound(number, dir.to_path_buf()))
}

/// Entry point for the workspace corpus
pub struct HouSamples;

impl HouSamples {
    /// Loader for sample `number`
    pub fn sample(number: usize) -> SampleLoader {
        SampleLoader { number }
    }

    /// Every sample in the corpus, in number order
    pub fn all() -> Result<BTreeMap<usize, PathBuf>, SampleError> {
        list_samples_by_number(&samples_root())
    }
}

/// Fluent loader for one sample. Failures panic with the file name, since a broken corpus
/// means the test itself is wrong.
pub struct SampleLoader {
    number: usize,
}

impl SampleLoader {
    pub fn path(&self) -> PathBuf {
        find_sample_in(&samples_root(), self.number)
            .unwrap_or_else(|e| panic!("Failed to find sample #{}: {}", self.number, e))
    }

    /// Raw source text
    pub fn source(&self) -> String {
        let path = self.path();
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Parse the sample, panicking if it does not parse
    pub fn parse(&self) -> SourceFile {
        let source = self.source();
        parse_document(&source)
            .unwrap_or_else(|e| panic!("Failed to parse sample #{}: {}", self.number, e))
    }

    /// Parse the sample, panicking if it does parse
    pub fn parse_error(&self) -> ParseError {
        match parse_document(&self.source()) {
            Ok(_) => panic!("Sample #{} parsed, expected an error", self.number),
            Err(error) => error,
        }
    }

    /// Tokenize the sample, panicking on a lex error
    pub fn tokenize(&self) -> Vec<Token> {
        let source = self.source();
        tokenize(&source)
            .unwrap_or_else(|e| panic!("Failed to tokenize sample #{}: {}", self.number, e))
    }
}
