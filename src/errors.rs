//! Error types with rich diagnostics using miette
//!
//! Ingestion errors carry source spans into the CSV text so a bad header or
//! a rejected row can be pointed at directly.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source (filename or "<input>")
    pub name: String,
    /// The full source text
    pub source: String,
}

impl SourceContext {
    /// Create a new source context
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }

    /// Span of the line starting at byte `offset` (without its line terminator)
    pub fn line_span(&self, offset: usize) -> SourceSpan {
        let offset = offset.min(self.source.len());
        let rest = &self.source[offset..];
        let len = rest
            .find(['\n', '\r'])
            .unwrap_or(rest.len());
        SourceSpan::new(offset.into(), len)
    }
}

// ============================================================================
// Ingestion Errors
// ============================================================================

/// Errors that abort a whole load attempt
#[derive(Error, Diagnostic, Debug)]
pub enum InputError {
    #[error("input has no header row")]
    #[diagnostic(
        code(dispersion::input::empty),
        help("expected a header such as `Club,Carry,Offline`")
    )]
    Empty,

    #[error("missing required column `{column}`")]
    #[diagnostic(
        code(dispersion::input::missing_column),
        help("column names are matched case-insensitively")
    )]
    MissingColumn {
        column: &'static str,
        #[source_code]
        src: NamedSource<String>,
        #[label("header has no `{column}` column")]
        span: SourceSpan,
    },

    #[error("no valid data rows ({skipped} rejected)")]
    #[diagnostic(
        code(dispersion::input::no_valid_rows),
        help("every row needs numeric carry and offline values")
    )]
    NoValidRows {
        skipped: usize,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("could not read CSV input")]
    #[diagnostic(code(dispersion::input::csv))]
    Csv(#[from] csv::Error),

    #[error("could not read {path}")]
    #[diagnostic(code(dispersion::input::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Why a single row was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowProblem {
    /// Row has fewer cells than the header requires
    MissingField(&'static str),
    /// Cell is present but is not a finite number
    NotANumber(&'static str),
    /// Club column exists but the cell is blank
    EmptyLabel,
    /// The CSV reader could not decode the row
    Unreadable,
}

impl std::fmt::Display for RowProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowProblem::MissingField(col) => write!(f, "missing `{}` value", col),
            RowProblem::NotANumber(col) => write!(f, "`{}` is not a number", col),
            RowProblem::EmptyLabel => write!(f, "empty club name"),
            RowProblem::Unreadable => write!(f, "row could not be decoded"),
        }
    }
}

/// Per-row warning; the row is skipped and loading continues
#[derive(Error, Diagnostic, Debug)]
#[error("row {line} skipped: {problem}")]
#[diagnostic(code(dispersion::input::row_skipped), severity(Warning))]
pub struct RowDiagnostic {
    /// 1-based line number in the source
    pub line: u64,
    pub problem: RowProblem,
    #[source_code]
    pub src: NamedSource<String>,
    #[label("{problem}")]
    pub span: SourceSpan,
}

// ============================================================================
// Statistics Errors
// ============================================================================

/// A group without enough points to define spread or orientation
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("group `{label}` has {count} point(s); a dispersion ellipse needs at least 2")]
#[diagnostic(code(dispersion::stats::degenerate_group), severity(Warning))]
pub struct DegenerateGroupError {
    pub label: String,
    pub count: usize,
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Host misconfiguration of canvas or field dimensions
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("{dimension} must be positive, got {value}")]
    #[diagnostic(code(dispersion::config::non_positive))]
    NonPositive { dimension: &'static str, value: f64 },

    #[error("{dimension} must be finite, got {value}")]
    #[diagnostic(code(dispersion::config::not_finite))]
    NotFinite { dimension: &'static str, value: f64 },
}

impl ConfigurationError {
    /// Validate a single dimension, naming it in the error
    pub fn check(dimension: &'static str, value: f64) -> Result<f64, ConfigurationError> {
        if !value.is_finite() {
            Err(ConfigurationError::NotFinite { dimension, value })
        } else if value <= 0.0 {
            Err(ConfigurationError::NonPositive { dimension, value })
        } else {
            Ok(value)
        }
    }
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur while producing output
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("SVG serialization failed: {0}")]
    #[diagnostic(code(dispersion::render::serialize))]
    Serialize(String),

    #[error("SVG document could not be parsed for rasterization")]
    #[diagnostic(code(dispersion::render::invalid_svg))]
    InvalidSvg(#[from] usvg::Error),

    #[error("cannot allocate a {width}x{height} pixmap")]
    #[diagnostic(code(dispersion::render::rasterize))]
    Rasterize { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    #[diagnostic(code(dispersion::render::encode))]
    Encode(String),
}
