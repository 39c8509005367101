//! Synonymous notation: `V600=`, `*500=`.

use super::{group, position};
use crate::alteration::Alteration;
use crate::consequence::MutationConsequence;
use crate::status::ParsingStatus;
use once_cell::sync::Lazy;
use regex::Regex;

static SYNONYMOUS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i-u)^([A-Z*])?([0-9]+)=$").unwrap());

/// Parse synonymous notation. The variant residue repeats the reference.
///
/// # Examples
///
/// ```
/// use ferro_alteration::parser::parse_synonymous;
/// use ferro_alteration::MutationConsequence;
///
/// let alt = parse_synonymous("*500=").into_entity().unwrap();
/// assert_eq!(alt.consequence, Some(MutationConsequence::StopRetainedVariant));
/// ```
pub fn parse_synonymous(input: &str) -> ParsingStatus<Alteration> {
    let Some(caps) = SYNONYMOUS_PATTERN.captures(input) else {
        return ParsingStatus::unset();
    };
    let Some(start) = position(group(&caps, 2)) else {
        return ParsingStatus::unset();
    };

    let reference = group(&caps, 1).to_ascii_uppercase();
    let consequence = if reference == "*" {
        MutationConsequence::StopRetainedVariant
    } else {
        MutationConsequence::SynonymousVariant
    };

    let alteration = Alteration::new(start, start)
        .with_protein_change(format!("{}{}=", reference, start))
        .with_ref(reference.clone())
        .with_variant(reference)
        .with_consequence(consequence);
    ParsingStatus::ok(alteration)
}
