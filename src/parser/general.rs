//! Substitution and position notation: `V600E`, `Q61*`, `IK744K`, `V600`.
//!
//! Grammar: optional reference residues (letters or `*`), a position, and
//! optional variant residues (letters, `*` or `?`).

use super::{group, position};
use crate::alteration::Alteration;
use crate::consequence::MutationConsequence;
use crate::status::ParsingStatus;
use once_cell::sync::Lazy;
use regex::Regex;

static GENERAL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i-u)^([A-Z*]+)?([0-9]+)([A-Z*?]*)$").unwrap());

/// Message attached when no consequence rule applies.
pub const UNDETERMINED_MESSAGE: &str = "Unable to determine consequence";

/// Parse substitution-style notation.
///
/// # Examples
///
/// ```
/// use ferro_alteration::parser::parse_general;
/// use ferro_alteration::MutationConsequence;
///
/// let alt = parse_general("v600e").into_entity().unwrap();
/// assert_eq!(alt.protein_change.as_deref(), Some("V600E"));
/// assert_eq!(alt.consequence, Some(MutationConsequence::MissenseVariant));
/// ```
pub fn parse_general(input: &str) -> ParsingStatus<Alteration> {
    let Some(caps) = GENERAL_PATTERN.captures(input) else {
        return ParsingStatus::unset();
    };
    let Some(start) = position(group(&caps, 2)) else {
        return ParsingStatus::unset();
    };

    let reference = group(&caps, 1).to_ascii_uppercase();
    let variant = group(&caps, 3).to_ascii_uppercase();
    let ref_len = reference.len() as u32;
    let var_len = variant.len() as u32;
    let mut end = start;

    let consequence = if reference == "*" {
        Some(MutationConsequence::StopLost)
    } else if variant == "*" {
        Some(MutationConsequence::StopGained)
    } else if reference == variant {
        Some(MutationConsequence::SynonymousVariant)
    } else if start == 1 {
        Some(MutationConsequence::StartLost)
    } else if variant == "?" {
        Some(MutationConsequence::Any)
    } else {
        // Multi-residue reference covers consecutive positions.
        end = start.saturating_add(ref_len.max(1) - 1);
        if ref_len > 1 || var_len > 1 {
            Some(match ref_len.cmp(&var_len) {
                std::cmp::Ordering::Greater => MutationConsequence::InframeDeletion,
                std::cmp::Ordering::Less => MutationConsequence::InframeInsertion,
                std::cmp::Ordering::Equal => MutationConsequence::MissenseVariant,
            })
        } else if ref_len == 1 && var_len == 1 {
            Some(MutationConsequence::MissenseVariant)
        } else {
            None
        }
    };

    let protein_change = format!("{}{}{}", reference, start, variant);
    let alteration = Alteration::new(start, end)
        .with_ref(reference)
        .with_variant(variant)
        .with_protein_change(protein_change);

    match consequence {
        Some(c) => ParsingStatus::ok(alteration.with_consequence(c)),
        None => ParsingStatus::warning(
            alteration.with_consequence(MutationConsequence::Na),
            UNDETERMINED_MESSAGE,
        ),
    }
}
