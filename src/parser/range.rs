//! Keyword-classified ranges: `600_610mis`, `V600_K601trunc`, `1_100mut`.
//!
//! The text after the second position must be one of the known keywords.
//! Anything else is reported as an error with the closest keyword suggested.

use super::{group, span};
use crate::alteration::Alteration;
use crate::consequence::MutationConsequence;
use crate::status::ParsingStatus;
use crate::suggest::find_most_similar;
use once_cell::sync::Lazy;
use regex::Regex;

static RANGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i-u)^([A-Z]?)([0-9]+)_([A-Z]?)([0-9]+)((?u:.+))$").unwrap());

/// Range keywords and their consequences, in suggestion priority order.
pub const RANGE_KEYWORDS: [(&str, MutationConsequence); 7] = [
    ("mis", MutationConsequence::MissenseVariant),
    ("ins", MutationConsequence::InframeInsertion),
    ("del", MutationConsequence::InframeDeletion),
    ("fs", MutationConsequence::FeatureTruncation),
    ("trunc", MutationConsequence::FeatureTruncation),
    ("dup", MutationConsequence::InframeInsertion),
    ("mut", MutationConsequence::Any),
];

/// Look up a range keyword, ignoring case.
pub fn keyword_consequence(keyword: &str) -> Option<MutationConsequence> {
    RANGE_KEYWORDS
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(keyword))
        .map(|&(_, c)| c)
}

/// Parse keyword-classified range notation.
///
/// # Examples
///
/// ```
/// use ferro_alteration::parser::parse_range;
/// use ferro_alteration::{EntityStatus, MutationConsequence};
///
/// let alt = parse_range("v600_k601trunc").into_entity().unwrap();
/// assert_eq!(alt.protein_change.as_deref(), Some("V600_K601trunc"));
/// assert_eq!(alt.consequence, Some(MutationConsequence::FeatureTruncation));
///
/// let status = parse_range("600_601muts");
/// assert_eq!(status.status, EntityStatus::Error);
/// assert!(status.message.unwrap().contains("600_601mut?"));
/// ```
pub fn parse_range(input: &str) -> ParsingStatus<Alteration> {
    let Some(caps) = RANGE_PATTERN.captures(input) else {
        return ParsingStatus::unset();
    };
    let Some((start, end)) = span(group(&caps, 2), Some(group(&caps, 4))) else {
        return ParsingStatus::unset();
    };
    let keyword = group(&caps, 5);

    match keyword_consequence(keyword) {
        Some(consequence) => {
            let protein_change = format!(
                "{}{}_{}{}{}",
                group(&caps, 1).to_ascii_uppercase(),
                start,
                group(&caps, 3).to_ascii_uppercase(),
                end,
                keyword
            );
            let alteration = Alteration::new(start, end)
                .with_protein_change(protein_change)
                .with_consequence(consequence);
            ParsingStatus::ok(alteration)
        }
        None => {
            let candidates: Vec<&str> = RANGE_KEYWORDS.iter().map(|(k, _)| *k).collect();
            let suggestion = find_most_similar(keyword, &candidates)
                .map_or("", |m| m.candidate);
            tracing::debug!(
                "unknown range keyword '{}' in '{}', closest is '{}'",
                keyword,
                input,
                suggestion
            );
            ParsingStatus::error(format!(
                "The alteration name is invalid, do you mean {}{}_{}{}{}?",
                group(&caps, 1),
                group(&caps, 2),
                group(&caps, 3),
                group(&caps, 4),
                suggestion
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::EntityStatus;

    #[test]
    fn test_known_keywords() {
        for (keyword, consequence) in RANGE_KEYWORDS {
            let input = format!("600_610{}", keyword);
            let alt = parse_range(&input).into_entity().unwrap();
            assert_eq!((alt.start, alt.end), (600, 610));
            assert_eq!(alt.consequence, Some(consequence), "keyword {}", keyword);
            assert_eq!(alt.protein_change.as_deref(), Some(input.as_str()));
        }
    }

    #[test]
    fn test_reference_letters_uppercased() {
        let alt = parse_range("v600_k610mis").into_entity().unwrap();
        assert_eq!(alt.protein_change.as_deref(), Some("V600_K610mis"));
        assert_eq!(alt.ref_residues, None);
    }

    #[test]
    fn test_keyword_lookup_ignores_case() {
        let alt = parse_range("600_610MUT").into_entity().unwrap();
        assert_eq!(alt.consequence, Some(MutationConsequence::Any));
        assert_eq!(alt.protein_change.as_deref(), Some("600_610MUT"));
    }

    #[test]
    fn test_unknown_keyword_suggests() {
        let status = parse_range("600_601xyz");
        assert_eq!(status.status, EntityStatus::Error);
        assert!(status.entity.is_none());
        assert_eq!(
            status.message.as_deref(),
            Some("The alteration name is invalid, do you mean 600_601mis?")
        );

        let status = parse_range("v600_k601trnc");
        assert_eq!(
            status.message.as_deref(),
            Some("The alteration name is invalid, do you mean v600_k601trunc?")
        );
    }

    #[test]
    fn test_no_match() {
        assert!(!parse_range("600_610").is_parsed());
        assert!(!parse_range("V600E").is_parsed());
        assert!(!parse_range("610_600mis").is_parsed());
    }
}
