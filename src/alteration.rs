//! The structured alteration produced by the grammars.

use crate::consequence::MutationConsequence;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed protein change.
///
/// Positions are 1-based and inclusive; `start <= end` always holds for
/// alterations produced by this crate. Position 0 means "no position": the
/// categorical alterations (e.g. `Truncating Mutations`) leave both at 0,
/// and unset positions are left out of serialized output. Residue strings
/// are uppercase and never empty (an absent residue is `None`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Alteration {
    /// First affected protein position, or 0 when unset.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub start: u32,
    /// Last affected protein position, or 0 when unset.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub end: u32,
    /// Reference residues, or `"*"` for a stop codon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_residues: Option<String>,
    /// Variant (or inserted) residues.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_residues: Option<String>,
    /// Canonical notation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_change: Option<String>,
    /// Inferred consequence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consequence: Option<MutationConsequence>,
}

impl Alteration {
    /// Create an alteration spanning `start..=end` with no residues set.
    pub fn new(start: u32, end: u32) -> Self {
        Self {
            start,
            end,
            ..Default::default()
        }
    }

    /// Set the reference residues; empty strings are stored as `None`.
    pub fn with_ref(mut self, residues: impl Into<String>) -> Self {
        self.ref_residues = non_empty(residues.into());
        self
    }

    /// Set the variant residues; empty strings are stored as `None`.
    pub fn with_variant(mut self, residues: impl Into<String>) -> Self {
        self.variant_residues = non_empty(residues.into());
        self
    }

    /// Set the canonical notation.
    pub fn with_protein_change(mut self, protein_change: impl Into<String>) -> Self {
        self.protein_change = Some(protein_change.into());
        self
    }

    /// Set the consequence.
    pub fn with_consequence(mut self, consequence: MutationConsequence) -> Self {
        self.consequence = Some(consequence);
        self
    }

    /// Number of positions covered.
    pub fn length(&self) -> u32 {
        self.end.saturating_sub(self.start).saturating_add(1)
    }

    /// Whether the alteration names protein positions at all.
    pub fn has_positions(&self) -> bool {
        !is_unset(&self.start)
    }

    /// Whether this names a single residue without saying what it becomes
    /// (e.g. `V600`), which curators read as "any missense change here".
    pub fn is_positioned(&self) -> bool {
        self.start == self.end
            && self.ref_residues.as_ref().is_some_and(|r| r.len() == 1)
            && self.variant_residues.is_none()
            && matches!(
                self.consequence,
                Some(MutationConsequence::Na) | Some(MutationConsequence::MissenseVariant)
            )
    }
}

impl fmt::Display for Alteration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.protein_change {
            Some(pc) => write!(f, "{}", pc),
            None if self.start == self.end => write!(f, "{}", self.start),
            None => write!(f, "{}_{}", self.start, self.end),
        }
    }
}

fn is_unset(position: &u32) -> bool {
    *position == 0
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
