//! Output formatting utilities for CLI operations

use crate::annotate::AnnotatedAlteration;
use crate::error::FerroError;
use crate::status::EntityStatus;
use std::io::{self, Write};
use std::str::FromStr;

/// Output format for CLI results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text format (default)
    #[default]
    Text,
    /// JSON format, one object per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = std::convert::Infallible;

    /// Parse an output format from a string
    ///
    /// # Examples
    ///
    /// ```
    /// use ferro_alteration::cli::OutputFormat;
    /// use std::str::FromStr;
    ///
    /// assert!(matches!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json));
    /// assert!(matches!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        })
    }
}

/// Write an annotated alteration to the output
///
/// Text output is `input -> name<TAB>CONSEQUENCE<TAB>start-end`, dropping the
/// `input -> ` part when the name equals the input. A warning adds a
/// `warning:` line; an error status is written as a single `error:` line.
///
/// # Examples
///
/// ```
/// use ferro_alteration::annotate::{annotate_protein_change, AnnotateConfig};
/// use ferro_alteration::cli::{output_annotation, OutputFormat};
/// use std::io::Cursor;
///
/// let annotated = annotate_protein_change("p.V600E", &AnnotateConfig::default()).unwrap();
/// let mut buffer = Cursor::new(Vec::new());
/// output_annotation(&mut buffer, &annotated, OutputFormat::Text).unwrap();
/// let result = String::from_utf8(buffer.into_inner()).unwrap();
/// assert_eq!(result, "p.V600E -> V600E\tMISSENSE_VARIANT\t600-600\n");
/// ```
pub fn output_annotation<W: Write>(
    writer: &mut W,
    annotated: &AnnotatedAlteration,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let line = serde_json::to_string(annotated).map_err(io::Error::other)?;
            writeln!(writer, "{}", line)
        }
        OutputFormat::Text => {
            let message = annotated.status.message.as_deref().unwrap_or_default();
            let Some(alteration) = annotated.status.entity() else {
                return writeln!(writer, "error: {} - {}", annotated.input, message);
            };

            if annotated.input != annotated.name {
                write!(writer, "{} -> ", annotated.input)?;
            }
            let consequence = alteration.consequence.map_or("-", |c| c.term());
            if !alteration.has_positions() {
                writeln!(writer, "{}\t{}\t-", annotated.name, consequence)?;
            } else {
                writeln!(
                    writer,
                    "{}\t{}\t{}-{}",
                    annotated.name, consequence, alteration.start, alteration.end
                )?;
            }

            if annotated.status.status == EntityStatus::Warning {
                writeln!(writer, "warning: {}", message)?;
            }
            Ok(())
        }
    }
}

/// Write an error to the output
///
/// # Examples
///
/// ```
/// use ferro_alteration::cli::{output_error, OutputFormat};
/// use ferro_alteration::FerroError;
/// use std::io::Cursor;
///
/// let mut buffer = Cursor::new(Vec::new());
/// let error = FerroError::Unparseable { input: "BRAF".to_string() };
/// output_error(&mut buffer, "BRAF", &error, OutputFormat::Text).unwrap();
/// let result = String::from_utf8(buffer.into_inner()).unwrap();
/// assert!(result.contains("ERROR: BRAF"));
/// ```
pub fn output_error<W: Write>(
    writer: &mut W,
    input: &str,
    error: &FerroError,
    format: OutputFormat,
) -> io::Result<()> {
    output_error_with_context(writer, input, error, format, None)
}

/// Write an error to the output with optional line number context
///
/// # Arguments
///
/// * `writer` - The output writer (can be stderr, file, or buffer for testing)
/// * `input` - The original input string that caused the error
/// * `error` - The error that occurred
/// * `format` - The output format
/// * `line_number` - Optional line number in the input file
///
/// # Examples
///
/// ```
/// use ferro_alteration::cli::{output_error_with_context, OutputFormat};
/// use ferro_alteration::FerroError;
/// use std::io::Cursor;
///
/// let mut buffer = Cursor::new(Vec::new());
/// output_error_with_context(&mut buffer, "  ", &FerroError::EmptyInput, OutputFormat::Text, Some(42)).unwrap();
/// let result = String::from_utf8(buffer.into_inner()).unwrap();
/// assert!(result.contains("line 42"));
/// ```
pub fn output_error_with_context<W: Write>(
    writer: &mut W,
    input: &str,
    error: &FerroError,
    format: OutputFormat,
    line_number: Option<usize>,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let mut value = serde_json::json!({
                "input": input,
                "error": error.to_string(),
                "code": error.code().as_str(),
                "status": "error",
            });
            if let Some(line) = line_number {
                value["line"] = line.into();
            }
            writeln!(writer, "{}", value)
        }
        OutputFormat::Text => {
            if let Some(line) = line_number {
                writeln!(writer, "ERROR (line {}): {} - {}", line, input, error)
            } else {
                writeln!(writer, "ERROR: {} - {}", input, error)
            }
        }
    }
}
