//! Processing API
//!
//! Drives the front-end up to a chosen stage (token, ast, eval) and renders the result in a
//! chosen format (simple, json, yaml, ...). A processing spec is written `<stage>-<format>`,
//! e.g. `token-simple` or `ast-treeviz`; [available_formats] lists every valid pair.

use crate::munch::ast::Expr;
use crate::munch::config::MunchConfig;
use crate::munch::error::FrontendError;
use crate::munch::formats;
use crate::munch::lexer::{lex, lex_raw, TokenSequence};
use crate::munch::parser;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Represents the processing stage (how far the front-end runs)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
    Eval,
}

impl ProcessingStage {
    pub fn name(&self) -> &'static str {
        match self {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
            ProcessingStage::Eval => "eval",
        }
    }
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
    RawSimple,
    RawJson,
    Tag,
    Treeviz,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::RawSimple => "raw-simple",
            OutputFormat::RawJson => "raw-json",
            OutputFormat::Tag => "tag",
            OutputFormat::Treeviz => "treeviz",
        }
    }
}

/// A stage plus a format, written `<stage>-<format>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "token-raw-simple"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            "eval" => ProcessingStage::Eval,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            "raw-simple" => OutputFormat::RawSimple,
            "raw-json" => OutputFormat::RawJson,
            "tag" => OutputFormat::Tag,
            "treeviz" => OutputFormat::Treeviz,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        let spec = ProcessingSpec { stage, format };
        if !Self::available_specs().contains(&spec) {
            return Err(ProcessingError::IncompatibleFormat {
                stage: stage.name(),
                format: format.name(),
            });
        }

        Ok(spec)
    }

    /// Every valid stage/format pair
    pub fn available_specs() -> Vec<ProcessingSpec> {
        use OutputFormat::*;
        use ProcessingStage::*;

        [
            (Token, Simple),
            (Token, Json),
            (Token, RawSimple),
            (Token, RawJson),
            (Ast, Simple),
            (Ast, Json),
            (Ast, Yaml),
            (Ast, Tag),
            (Ast, Treeviz),
            (Eval, Simple),
            (Eval, Json),
        ]
        .into_iter()
        .map(|(stage, format)| ProcessingSpec { stage, format })
        .collect()
    }
}

impl fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.stage.name(), self.format.name())
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProcessingError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid stage: {0}")]
    InvalidStage(String),
    #[error("Invalid format type: {0}")]
    InvalidFormatType(String),
    #[error("Format '{format}' not supported for {stage} stage")]
    IncompatibleFormat {
        stage: &'static str,
        format: &'static str,
    },
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error(transparent)]
    Frontend(#[from] FrontendError),
}

/// Process source text according to `spec`
pub fn process_source(
    source: &str,
    spec: &ProcessingSpec,
    config: &MunchConfig,
) -> Result<String, ProcessingError> {
    log::debug!("processing {} bytes as {}", source.len(), spec);

    match spec.stage {
        ProcessingStage::Token => {
            let tokens = match spec.format {
                OutputFormat::RawSimple | OutputFormat::RawJson => lex_raw(source),
                _ => lex(source),
            }
            .map_err(FrontendError::from)?;
            format_tokens(&tokens, spec.format, config)
        }
        ProcessingStage::Ast => {
            let expr = parse(source)?;
            format_expr(&expr, spec.format, config)
        }
        ProcessingStage::Eval => {
            let expr = parse(source)?;
            format_value(&expr, spec.format, config)
        }
    }
}

/// Process a file according to `spec`
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    config: &MunchConfig,
) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();
    let content = fs::read_to_string(file_path)
        .map_err(|e| ProcessingError::Io(format!("{}: {}", file_path.display(), e)))?;

    process_source(&content, spec, config)
}

fn parse(source: &str) -> Result<Expr, FrontendError> {
    let tokens = lex(source)?;
    Ok(parser::parse(&tokens)?)
}

/// Format tokens according to the specified format
fn format_tokens(
    tokens: &TokenSequence,
    format: OutputFormat,
    config: &MunchConfig,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple | OutputFormat::RawSimple => {
            Ok(tokens.iter().map(|token| token.to_string()).collect())
        }
        OutputFormat::Json | OutputFormat::RawJson => to_json(tokens, config),
        other => Err(ProcessingError::IncompatibleFormat {
            stage: ProcessingStage::Token.name(),
            format: other.name(),
        }),
    }
}

fn format_expr(
    expr: &Expr,
    format: OutputFormat,
    config: &MunchConfig,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => Ok(expr.to_string()),
        OutputFormat::Json => to_json(expr, config),
        OutputFormat::Yaml => {
            serde_yaml::to_string(expr).map_err(|e| ProcessingError::Serialization(e.to_string()))
        }
        OutputFormat::Tag => Ok(formats::serialize_expr(expr)),
        OutputFormat::Treeviz => Ok(formats::to_treeviz_str(
            expr,
            config.treeviz.max_label_chars,
        )),
        other => Err(ProcessingError::IncompatibleFormat {
            stage: ProcessingStage::Ast.name(),
            format: other.name(),
        }),
    }
}

#[derive(Serialize)]
struct Evaluation {
    expression: String,
    value: f64,
}

fn format_value(
    expr: &Expr,
    format: OutputFormat,
    config: &MunchConfig,
) -> Result<String, ProcessingError> {
    let value = expr.eval();
    match format {
        OutputFormat::Simple => Ok(value.to_string()),
        OutputFormat::Json => to_json(
            &Evaluation {
                expression: expr.to_string(),
                value,
            },
            config,
        ),
        other => Err(ProcessingError::IncompatibleFormat {
            stage: ProcessingStage::Eval.name(),
            format: other.name(),
        }),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, config: &MunchConfig) -> Result<String, ProcessingError> {
    let json = if config.output.pretty_json {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.map_err(|e| ProcessingError::Serialization(e.to_string()))
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .into_iter()
        .map(|spec| spec.to_string())
        .collect()
}
