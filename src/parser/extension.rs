//! Extension notation.
//!
//! Two forms are recognised:
//! - N-terminal (initiator) extension: `M1ext`, `1ext-5`
//! - C-terminal (stop codon) extension: `*959Qext*14`, `*110Gext*17`,
//!   `*315TextALGT*`, `*327Aext*?`

use super::{group, position};
use crate::alteration::Alteration;
use crate::consequence::MutationConsequence;
use crate::status::ParsingStatus;
use once_cell::sync::Lazy;
use regex::Regex;

static INITIATOR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i-u)^M?1ext(-[0-9]+)?$").unwrap());

static STOP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u)^(\*)?([0-9]+)([A-Z])?ext([A-Z]+)?\*(([0-9]+)?(\?)?)$").unwrap()
});

/// Parse extension notation.
///
/// The initiator form is classified but its notation is left as entered, so
/// `protein_change` is `None` for it.
///
/// # Examples
///
/// ```
/// use ferro_alteration::parser::parse_extension;
/// use ferro_alteration::MutationConsequence;
///
/// let alt = parse_extension("*959qext*14").into_entity().unwrap();
/// assert_eq!(alt.protein_change.as_deref(), Some("*959Qext*14"));
/// assert_eq!(alt.consequence, Some(MutationConsequence::StopLost));
/// ```
pub fn parse_extension(input: &str) -> ParsingStatus<Alteration> {
    if INITIATOR_PATTERN.is_match(input) {
        let alteration =
            Alteration::new(1, 1).with_consequence(MutationConsequence::InframeInsertion);
        return ParsingStatus::ok(alteration);
    }

    let Some(caps) = STOP_PATTERN.captures(input) else {
        return ParsingStatus::unset();
    };
    let Some(start) = position(group(&caps, 2)) else {
        return ParsingStatus::unset();
    };

    let reference = caps.get(1).map_or("*", |m| m.as_str());
    let variant = group(&caps, 3).to_ascii_uppercase();
    let extension = group(&caps, 4).to_ascii_uppercase();
    let suffix = group(&caps, 5);
    let protein_change = format!(
        "{}{}{}ext{}*{}",
        reference, start, variant, extension, suffix
    );

    let alteration = Alteration::new(start, start)
        .with_ref(reference)
        .with_protein_change(protein_change)
        .with_consequence(MutationConsequence::StopLost);
    ParsingStatus::ok(alteration)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(input: &str) -> Alteration {
        parse_extension(input).into_entity().unwrap()
    }

    #[test]
    fn test_initiator_extension() {
        for input in ["M1ext", "1ext", "M1ext-5", "m1EXT-12"] {
            let status = parse_extension(input);
            assert!(status.is_ok(), "input {}", input);
            let alt = status.into_entity().unwrap();
            assert_eq!((alt.start, alt.end), (1, 1));
            assert_eq!(alt.consequence, Some(MutationConsequence::InframeInsertion));
            assert_eq!(alt.protein_change, None);
            assert_eq!(alt.ref_residues, None);
        }
    }

    #[test]
    fn test_stop_extension() {
        let alt = parsed("*959Qext*14");
        assert_eq!((alt.start, alt.end), (959, 959));
        assert_eq!(alt.ref_residues.as_deref(), Some("*"));
        assert_eq!(alt.consequence, Some(MutationConsequence::StopLost));
        assert_eq!(alt.protein_change.as_deref(), Some("*959Qext*14"));
    }

    #[test]
    fn test_stop_extension_forms() {
        assert_eq!(
            parsed("*315TextALGT*").protein_change.as_deref(),
            Some("*315TextALGT*")
        );
        assert_eq!(parsed("*327Aext*?").protein_change.as_deref(), Some("*327Aext*?"));
        assert_eq!(parsed("*110ext*").protein_change.as_deref(), Some("*110ext*"));
    }

    #[test]
    fn test_missing_stop_defaults_reference() {
        let alt = parsed("110Gext*17");
        assert_eq!(alt.ref_residues.as_deref(), Some("*"));
        assert_eq!(alt.protein_change.as_deref(), Some("*110Gext*17"));
    }

    #[test]
    fn test_lowercase_canonicalized() {
        assert_eq!(
            parsed("*315textalgt*").protein_change.as_deref(),
            Some("*315TextALGT*")
        );
    }

    #[test]
    fn test_no_match() {
        assert!(!parse_extension("M2ext").is_parsed());
        assert!(!parse_extension("*959Qext14").is_parsed());
        assert!(!parse_extension("V600E").is_parsed());
    }
}
