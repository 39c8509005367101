//! Frameshift notation: `Y1021fs`, `R248Gfs*10`, `E746_A750fs`.

use super::{group, span};
use crate::alteration::Alteration;
use crate::consequence::MutationConsequence;
use crate::status::ParsingStatus;
use once_cell::sync::Lazy;
use regex::Regex;

static FRAMESHIFT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u)^([A-Z])?([0-9]+)([A-Z])?(_[A-Z]?([0-9]+)[A-Z]?)?fs((?u:.*))$").unwrap()
});

/// Parse frameshift notation.
///
/// Anything after `fs` (e.g. `*10`, `Ter12`) is kept verbatim in the
/// canonical form. For a range, the reference residue is not recorded.
///
/// # Examples
///
/// ```
/// use ferro_alteration::parser::parse_frameshift;
/// use ferro_alteration::MutationConsequence;
///
/// let alt = parse_frameshift("r248gfs*10").into_entity().unwrap();
/// assert_eq!(alt.protein_change.as_deref(), Some("R248Gfs*10"));
/// assert_eq!(alt.consequence, Some(MutationConsequence::FrameshiftVariant));
/// ```
pub fn parse_frameshift(input: &str) -> ParsingStatus<Alteration> {
    let Some(caps) = FRAMESHIFT_PATTERN.captures(input) else {
        return ParsingStatus::unset();
    };
    let Some((start, end)) = span(group(&caps, 2), caps.get(5).map(|m| m.as_str())) else {
        return ParsingStatus::unset();
    };

    let reference = group(&caps, 1).to_ascii_uppercase();
    let protein_change = format!(
        "{}{}{}{}fs{}",
        reference,
        start,
        group(&caps, 3).to_ascii_uppercase(),
        group(&caps, 4).to_ascii_uppercase(),
        group(&caps, 6)
    );

    let mut alteration = Alteration::new(start, end)
        .with_protein_change(protein_change)
        .with_consequence(MutationConsequence::FrameshiftVariant);
    if caps.get(4).is_none() {
        alteration = alteration.with_ref(reference);
    }
    ParsingStatus::ok(alteration)
}
