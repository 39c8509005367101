//! Splice notation: `X100_splice`, `E1000splice`, `100_120splice`.

use super::{group, span};
use crate::alteration::Alteration;
use crate::consequence::MutationConsequence;
use crate::status::ParsingStatus;
use once_cell::sync::Lazy;
use regex::Regex;

static SPLICE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u)^([A-Z]?)([0-9]+)(_[A-Z]?([0-9]+))?(_)?splice$").unwrap()
});

/// Placeholder residue meaning "not specified".
const UNSPECIFIED_RESIDUE: &str = "X";

/// Parse splice notation.
///
/// A reference residue is only recorded for a single position, and the `X`
/// placeholder is dropped. Single positions canonicalize to `<ref><pos>_splice`.
///
/// # Examples
///
/// ```
/// use ferro_alteration::parser::parse_splice;
///
/// let alt = parse_splice("x100splice").into_entity().unwrap();
/// assert_eq!(alt.protein_change.as_deref(), Some("100_splice"));
/// assert_eq!(alt.ref_residues, None);
/// ```
pub fn parse_splice(input: &str) -> ParsingStatus<Alteration> {
    let Some(caps) = SPLICE_PATTERN.captures(input) else {
        return ParsingStatus::unset();
    };
    let Some((start, end)) = span(group(&caps, 2), caps.get(4).map(|m| m.as_str())) else {
        return ParsingStatus::unset();
    };

    let mut alteration = Alteration::new(start, end)
        .with_consequence(MutationConsequence::SpliceRegionVariant);

    let protein_change = match caps.get(3) {
        Some(range) => format!("{}{}splice", start, range.as_str().to_ascii_uppercase()),
        None => {
            let mut reference = group(&caps, 1).to_ascii_uppercase();
            if reference == UNSPECIFIED_RESIDUE {
                reference.clear();
            }
            let protein_change = format!("{}{}_splice", reference, start);
            alteration = alteration.with_ref(reference);
            protein_change
        }
    };

    ParsingStatus::ok(alteration.with_protein_change(protein_change))
}
