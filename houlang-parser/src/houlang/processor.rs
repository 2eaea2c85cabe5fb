//! File processing API
//!
//! Processes houlang sources at a given stage (tokens, AST, outline) into a given format.
//! A processing spec is written `<stage>-<format>`:
//!
//!     token-simple    one `KIND@start..end "text"` line per token
//!     token-json      token records as JSON
//!     ast-tag         XML-like tags, see [tag](crate::houlang::formats::tag)
//!     ast-treeviz     tree drawing, see [treeviz](crate::houlang::formats::treeviz)
//!     ast-json        AST snapshot as JSON
//!     ast-yaml        AST snapshot as YAML
//!     outline-json    week symbols as JSON
//!
//! Rendering options (line numbers, ranges, pretty printing, day symbols) come from
//! [HoulangConfig].

use crate::houlang::ast::snapshot_from_source_file;
use crate::houlang::formats::{serialize_ast_tag, to_treeviz_str_with_line_numbers};
use crate::houlang::lexing::{tokenize, LexError};
use crate::houlang::outline::document_outline;
use crate::houlang::parsing::{parse_document, ParseError};
use crate::houlang::token::{Token, TokenKind};
use houlang_config::HoulangConfig;
use serde::Serialize;
use std::fs;
use std::ops::Range;
use std::path::Path;
use thiserror::Error;

/// What data to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
    Outline,
}

impl ProcessingStage {
    fn name(&self) -> &'static str {
        match self {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
            ProcessingStage::Outline => "outline",
        }
    }
}

/// How to render it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
    Tag,
    Treeviz,
}

impl OutputFormat {
    fn name(&self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Tag => "tag",
            OutputFormat::Treeviz => "treeviz",
        }
    }
}

/// A parsed `<stage>-<format>` string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "ast-treeviz"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            "outline" => ProcessingStage::Outline,
            other => return Err(ProcessingError::InvalidStage(other.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            "tag" => OutputFormat::Tag,
            "treeviz" => OutputFormat::Treeviz,
            other => return Err(ProcessingError::InvalidFormatType(other.to_string())),
        };

        let spec = ProcessingSpec { stage, format };
        if !Self::available_specs().contains(&spec) {
            return Err(ProcessingError::InvalidFormatType(format!(
                "format '{}' is not supported for the {} stage",
                format.name(),
                stage.name()
            )));
        }
        Ok(spec)
    }

    /// All supported stage/format pairings
    pub fn available_specs() -> Vec<ProcessingSpec> {
        use OutputFormat::*;
        use ProcessingStage::*;
        [
            (Token, Simple),
            (Token, Json),
            (Ast, Tag),
            (Ast, Treeviz),
            (Ast, Json),
            (Ast, Yaml),
            (Outline, Json),
        ]
        .into_iter()
        .map(|(stage, format)| ProcessingSpec { stage, format })
        .collect()
    }
}

impl std::fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.stage.name(), self.format.name())
    }
}

/// Errors that can occur during processing
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid stage: {0}")]
    InvalidStage(String),
    #[error("Invalid format type: {0}")]
    InvalidFormatType(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to tokenize: {0}")]
    Lex(#[from] LexError),
    #[error("Failed to parse: {0}")]
    Parse(#[from] ParseError),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Token as written by `token-json`
#[derive(Debug, Serialize)]
struct TokenRecord<'s> {
    kind: TokenKind,
    text: &'s str,
    span: Range<usize>,
}

/// Read a file and render it as `spec` asks
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    config: &HoulangConfig,
) -> Result<String, ProcessingError> {
    let content = fs::read_to_string(file_path.as_ref())?;
    process_source(&content, spec, config)
}

/// Render in-memory source as `spec` asks
pub fn process_source(
    source: &str,
    spec: &ProcessingSpec,
    config: &HoulangConfig,
) -> Result<String, ProcessingError> {
    log::debug!("processing {} bytes as {}", source.len(), spec);

    match spec.stage {
        ProcessingStage::Token => {
            let tokens = tokenize(source)?;
            format_tokens(source, &tokens, spec.format, config)
        }
        ProcessingStage::Ast => {
            let file = parse_document(source)?;
            match spec.format {
                OutputFormat::Tag => Ok(serialize_ast_tag(&file)),
                OutputFormat::Treeviz => Ok(to_treeviz_str_with_line_numbers(
                    &file,
                    config.inspect.ast.show_line_numbers,
                )),
                OutputFormat::Json => {
                    let snapshot =
                        snapshot_from_source_file(&file, config.inspect.ast.include_ranges);
                    to_json(&snapshot, true)
                }
                OutputFormat::Yaml => {
                    let snapshot =
                        snapshot_from_source_file(&file, config.inspect.ast.include_ranges);
                    serde_yaml::to_string(&snapshot)
                        .map_err(|e| ProcessingError::Serialization(e.to_string()))
                }
                OutputFormat::Simple => Err(unsupported(spec)),
            }
        }
        ProcessingStage::Outline => match spec.format {
            OutputFormat::Json => {
                let file = parse_document(source)?;
                to_json(&document_outline(&file, &config.outline), true)
            }
            _ => Err(unsupported(spec)),
        },
    }
}

fn format_tokens(
    source: &str,
    tokens: &[Token],
    format: OutputFormat,
    config: &HoulangConfig,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => Ok(tokens
            .iter()
            .map(|token| format!("{} {:?}\n", token, token.text(source)))
            .collect()),
        OutputFormat::Json => {
            let records: Vec<TokenRecord> = tokens
                .iter()
                .map(|token| TokenRecord {
                    kind: token.kind,
                    text: token.text(source),
                    span: token.span.clone(),
                })
                .collect();
            to_json(&records, config.inspect.tokens.pretty_json)
        }
        other => Err(ProcessingError::InvalidFormatType(format!(
            "format '{}' is not supported for the token stage",
            other.name()
        ))),
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, ProcessingError> {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    result.map_err(|e| ProcessingError::Serialization(e.to_string()))
}

fn unsupported(spec: &ProcessingSpec) -> ProcessingError {
    ProcessingError::InvalidFormatType(format!(
        "format '{}' is not supported for the {} stage",
        spec.format.name(),
        spec.stage.name()
    ))
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ProcessingSpec::to_string)
        .collect()
}
