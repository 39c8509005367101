//! Curator-facing entry point.
//!
//! Curation input is messier than the bare grammars accept: it may carry a
//! `p.` prefix, a trailing `[...]` note, or an exclusion list such as
//! `V600 {excluding V600E}`. [`annotate_protein_change`] strips those, runs
//! the grammars, falls back to categorical alterations, and builds the display
//! name curators see.
//!
//! # Example
//!
//! ```
//! use ferro_alteration::annotate::{annotate_protein_change, AnnotateConfig};
//!
//! let config = AnnotateConfig::default();
//! let annotated = annotate_protein_change("p.V600 {excluding V600E}", &config).unwrap();
//! assert_eq!(annotated.name, "V600 Missense Mutations, excluding V600E");
//! assert_eq!(annotated.excluded.as_deref(), Some("V600E"));
//! ```

use crate::alteration::Alteration;
use crate::consequence::MutationConsequence;
use crate::error::FerroError;
use crate::parser::{self, Grammar};
use crate::status::ParsingStatus;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static EXCLUSION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)^(.*)\{\s*(excluding|exclude)(.*)\}$").unwrap());

static TRUNCATING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i-u)^truncating mutations?$").unwrap());

const PROTEIN_PREFIX: &str = "p.";
const POSITIONED_SUFFIX: &str = "Missense Mutations";

/// Preprocessing switches for [`annotate_protein_change`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotateConfig {
    /// Strip a leading `p.`.
    pub strip_prefix: bool,
    /// Drop everything from the first `[`.
    pub strip_annotation: bool,
    /// Recognise `{exclude ...}` / `{excluding ...}` suffixes.
    pub exclusions: bool,
    /// Fall back to categorical alterations when no grammar matches.
    pub categorical: bool,
}

impl Default for AnnotateConfig {
    fn default() -> Self {
        Self {
            strip_prefix: true,
            strip_annotation: true,
            exclusions: true,
            categorical: true,
        }
    }
}

impl AnnotateConfig {
    /// Hand the input to the grammars untouched.
    pub fn grammars_only() -> Self {
        Self {
            strip_prefix: false,
            strip_annotation: false,
            exclusions: false,
            categorical: false,
        }
    }
}

/// A protein change after preprocessing and parsing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedAlteration {
    /// Input as supplied.
    pub input: String,
    /// Text handed to the grammars.
    pub protein_change: String,
    /// Grammar that recognised the input; `None` for categorical alterations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grammar: Option<Grammar>,
    /// Grammar outcome.
    #[serde(flatten)]
    pub status: ParsingStatus<Alteration>,
    /// Exclusion list from a `{excluding ...}` suffix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded: Option<String>,
    /// Display name.
    pub name: String,
}

/// Input after prefix, annotation and exclusion handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preprocessed {
    pub protein_change: String,
    pub excluded: Option<String>,
}

/// Strip the decorations curators add around a protein change.
pub fn preprocess(input: &str, config: &AnnotateConfig) -> Preprocessed {
    let mut text = input.trim();

    if config.strip_prefix {
        text = text.strip_prefix(PROTEIN_PREFIX).unwrap_or(text);
    }

    if config.strip_annotation {
        if let Some(idx) = text.find('[') {
            text = &text[..idx];
        }
    }

    text = text.trim();
    let mut excluded = None;
    if config.exclusions {
        if let Some(caps) = EXCLUSION_PATTERN.captures(text) {
            excluded = caps.get(3).map(|m| m.as_str().trim().to_string());
            text = caps.get(1).map_or("", |m| m.as_str());
        }
    }

    Preprocessed {
        protein_change: text.trim().to_string(),
        excluded,
    }
}

/// Parse curator input into an annotated alteration.
///
/// Returns [`FerroError::Unparseable`] when neither a grammar nor a
/// categorical alteration recognises the input; an invalid range keyword is
/// *not* an error here but an [`crate::EntityStatus::Error`] status.
pub fn annotate_protein_change(
    input: &str,
    config: &AnnotateConfig,
) -> Result<AnnotatedAlteration, FerroError> {
    let Preprocessed {
        protein_change,
        excluded,
    } = preprocess(input, config);

    if protein_change.is_empty() {
        return Err(FerroError::EmptyInput);
    }

    let (grammar, status) = match parser::parse(&protein_change) {
        Some((grammar, status)) => (Some(grammar), status),
        None => match categorical(&protein_change, config) {
            Some(status) => (None, status),
            None => {
                return Err(FerroError::Unparseable {
                    input: input.to_string(),
                })
            }
        },
    };

    let name = display_name(&protein_change, status.entity(), excluded.as_deref());

    Ok(AnnotatedAlteration {
        input: input.to_string(),
        protein_change,
        grammar,
        status,
        excluded,
        name,
    })
}

/// Categorical alterations that carry no positions.
fn categorical(protein_change: &str, config: &AnnotateConfig) -> Option<ParsingStatus<Alteration>> {
    if !config.categorical || !TRUNCATING_PATTERN.is_match(protein_change) {
        return None;
    }
    let alteration = Alteration {
        protein_change: Some(protein_change.to_string()),
        consequence: Some(MutationConsequence::FeatureTruncation),
        ..Default::default()
    };
    Some(ParsingStatus::ok(alteration))
}

fn display_name(protein_change: &str, alteration: Option<&Alteration>, excluded: Option<&str>) -> String {
    let Some(alteration) = alteration else {
        return protein_change.to_string();
    };
    let canonical = alteration
        .protein_change
        .clone()
        .unwrap_or_else(|| protein_change.to_string());

    if !alteration.is_positioned() {
        return canonical;
    }
    match excluded.filter(|e| !e.is_empty()) {
        Some(excluded) => format!(
            "{} {}, excluding {}",
            protein_change, POSITIONED_SUFFIX, excluded
        ),
        None => format!("{} {}", canonical, POSITIONED_SUFFIX),
    }
}
