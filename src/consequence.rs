//! Mutation consequence terms.
//!
//! Every successfully parsed protein change is classified into exactly one
//! [`MutationConsequence`]. The term strings (`MISSENSE_VARIANT`, ...) are the
//! values curation databases store, so they are also the serde representation.
//!
//! # Example
//!
//! ```
//! use ferro_alteration::MutationConsequence;
//!
//! let term: MutationConsequence = "missense_variant".parse().unwrap();
//! assert_eq!(term, MutationConsequence::MissenseVariant);
//! assert_eq!(term.term(), "MISSENSE_VARIANT");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Molecular consequence of a protein-level change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MutationConsequence {
    /// Amino acid substitution.
    MissenseVariant,
    /// Residue unchanged.
    SynonymousVariant,
    /// Introduces a premature stop codon.
    StopGained,
    /// Stop codon changed to an amino acid.
    StopLost,
    /// Stop codon unchanged.
    StopRetainedVariant,
    /// Initiator methionine changed.
    StartLost,
    /// In-frame insertion of residues.
    InframeInsertion,
    /// In-frame deletion of residues.
    InframeDeletion,
    /// Reading frame shifted.
    FrameshiftVariant,
    /// Change at or near a splice site.
    SpliceRegionVariant,
    /// Truncation of a protein feature.
    FeatureTruncation,
    /// Any change at the position(s).
    Any,
    /// Consequence could not be determined.
    Na,
    /// Consequence is not known.
    Unknown,
}

impl MutationConsequence {
    /// All terms, in declaration order.
    pub const ALL: [MutationConsequence; 14] = [
        MutationConsequence::MissenseVariant,
        MutationConsequence::SynonymousVariant,
        MutationConsequence::StopGained,
        MutationConsequence::StopLost,
        MutationConsequence::StopRetainedVariant,
        MutationConsequence::StartLost,
        MutationConsequence::InframeInsertion,
        MutationConsequence::InframeDeletion,
        MutationConsequence::FrameshiftVariant,
        MutationConsequence::SpliceRegionVariant,
        MutationConsequence::FeatureTruncation,
        MutationConsequence::Any,
        MutationConsequence::Na,
        MutationConsequence::Unknown,
    ];

    /// The stored term, e.g. `"STOP_GAINED"`.
    pub fn term(&self) -> &'static str {
        match self {
            MutationConsequence::MissenseVariant => "MISSENSE_VARIANT",
            MutationConsequence::SynonymousVariant => "SYNONYMOUS_VARIANT",
            MutationConsequence::StopGained => "STOP_GAINED",
            MutationConsequence::StopLost => "STOP_LOST",
            MutationConsequence::StopRetainedVariant => "STOP_RETAINED_VARIANT",
            MutationConsequence::StartLost => "START_LOST",
            MutationConsequence::InframeInsertion => "INFRAME_INSERTION",
            MutationConsequence::InframeDeletion => "INFRAME_DELETION",
            MutationConsequence::FrameshiftVariant => "FRAMESHIFT_VARIANT",
            MutationConsequence::SpliceRegionVariant => "SPLICE_REGION_VARIANT",
            MutationConsequence::FeatureTruncation => "FEATURE_TRUNCATION",
            MutationConsequence::Any => "ANY",
            MutationConsequence::Na => "NA",
            MutationConsequence::Unknown => "UNKNOWN",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            MutationConsequence::MissenseVariant => "Missense Variant",
            MutationConsequence::SynonymousVariant => "Synonymous Variant",
            MutationConsequence::StopGained => "Stop Gained",
            MutationConsequence::StopLost => "Stop Lost",
            MutationConsequence::StopRetainedVariant => "Stop Retained Variant",
            MutationConsequence::StartLost => "Start Lost",
            MutationConsequence::InframeInsertion => "Inframe Insertion",
            MutationConsequence::InframeDeletion => "Inframe Deletion",
            MutationConsequence::FrameshiftVariant => "Frameshift Variant",
            MutationConsequence::SpliceRegionVariant => "Splice Region Variant",
            MutationConsequence::FeatureTruncation => "Feature Truncation",
            MutationConsequence::Any => "Any",
            MutationConsequence::Na => "NA",
            MutationConsequence::Unknown => "Unknown",
        }
    }

    /// Whether this term says something definite about the change.
    ///
    /// `NA` and `UNKNOWN` flag the alteration for curator review.
    pub fn is_determined(&self) -> bool {
        !matches!(self, MutationConsequence::Na | MutationConsequence::Unknown)
    }
}

impl fmt::Display for MutationConsequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.term())
    }
}

/// Error returned when a string is not a known consequence term.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mutation consequence term '{0}'")]
pub struct UnknownTermError(pub String);

impl FromStr for MutationConsequence {
    type Err = UnknownTermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        MutationConsequence::ALL
            .into_iter()
            .find(|c| c.term() == upper)
            .ok_or_else(|| UnknownTermError(s.to_string()))
    }
}
