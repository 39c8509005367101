//! In-frame indel notation: `A146_A152del`, `D770_N771insG`, `A767dup`,
//! `L747_T751delinsP`.

use super::{group, span};
use crate::alteration::Alteration;
use crate::consequence::MutationConsequence;
use crate::status::ParsingStatus;
use once_cell::sync::Lazy;
use regex::Regex;

static INFRAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u)^([A-Z]?)([0-9]+)(_[A-Z]?([0-9]+))?(delins|ins|del|dup)((?u:.*))$").unwrap()
});

static RESIDUES_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]+$").unwrap());

/// In-frame edit operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InframeOperator {
    DelIns,
    Ins,
    Del,
    Dup,
}

impl InframeOperator {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "delins" => Some(InframeOperator::DelIns),
            "ins" => Some(InframeOperator::Ins),
            "del" => Some(InframeOperator::Del),
            "dup" => Some(InframeOperator::Dup),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            InframeOperator::DelIns => "delins",
            InframeOperator::Ins => "ins",
            InframeOperator::Del => "del",
            InframeOperator::Dup => "dup",
        }
    }

    /// Classify the edit given the inserted residues and the span it replaces.
    fn consequence(&self, inserted: &str, start: u32, end: u32) -> MutationConsequence {
        match self {
            InframeOperator::Ins if !inserted.is_empty() => MutationConsequence::InframeInsertion,
            InframeOperator::Ins => MutationConsequence::Unknown,
            InframeOperator::Dup => MutationConsequence::InframeInsertion,
            InframeOperator::Del => MutationConsequence::InframeDeletion,
            InframeOperator::DelIns if inserted.is_empty() => MutationConsequence::Unknown,
            InframeOperator::DelIns => {
                let deleted = (end - start + 1) as usize;
                match inserted.len().cmp(&deleted) {
                    std::cmp::Ordering::Greater => MutationConsequence::InframeInsertion,
                    std::cmp::Ordering::Equal => MutationConsequence::MissenseVariant,
                    std::cmp::Ordering::Less => MutationConsequence::InframeDeletion,
                }
            }
        }
    }
}

/// Parse in-frame insertion, deletion, duplication and delins notation.
///
/// Text after the operator is uppercased into the canonical form, but only
/// counts as inserted residues when it is made of letters alone; anything
/// else (`ins*`, `ins10`) is carried in the notation and otherwise ignored.
///
/// # Examples
///
/// ```
/// use ferro_alteration::parser::parse_inframe;
/// use ferro_alteration::MutationConsequence;
///
/// let alt = parse_inframe("L747_T751delinsP").into_entity().unwrap();
/// assert_eq!((alt.start, alt.end), (747, 751));
/// assert_eq!(alt.consequence, Some(MutationConsequence::InframeDeletion));
/// ```
pub fn parse_inframe(input: &str) -> ParsingStatus<Alteration> {
    let Some(caps) = INFRAME_PATTERN.captures(input) else {
        return ParsingStatus::unset();
    };
    let Some((start, end)) = span(group(&caps, 2), caps.get(4).map(|m| m.as_str())) else {
        return ParsingStatus::unset();
    };
    let Some(operator) = InframeOperator::from_keyword(group(&caps, 5)) else {
        return ParsingStatus::unset();
    };

    let reference = group(&caps, 1).to_ascii_uppercase();
    let trailing = group(&caps, 6).to_ascii_uppercase();
    let protein_change = format!(
        "{}{}{}{}{}",
        reference,
        start,
        group(&caps, 3).to_ascii_uppercase(),
        operator.keyword(),
        trailing
    );

    let inserted = if RESIDUES_PATTERN.is_match(&trailing) {
        trailing
    } else {
        String::new()
    };
    let consequence = operator.consequence(&inserted, start, end);

    let alteration = Alteration::new(start, end)
        .with_ref(reference)
        .with_variant(inserted)
        .with_protein_change(protein_change)
        .with_consequence(consequence);
    ParsingStatus::ok(alteration)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(input: &str) -> Alteration {
        parse_inframe(input).into_entity().unwrap()
    }

    #[test]
    fn test_deletion() {
        let alt = parsed("A146_A152del");
        assert_eq!((alt.start, alt.end), (146, 152));
        assert_eq!(alt.ref_residues.as_deref(), Some("A"));
        assert_eq!(alt.consequence, Some(MutationConsequence::InframeDeletion));
        assert_eq!(alt.protein_change.as_deref(), Some("A146_A152del"));
    }

    #[test]
    fn test_single_position_deletion() {
        let alt = parsed("E746del");
        assert_eq!((alt.start, alt.end), (746, 746));
        assert_eq!(alt.consequence, Some(MutationConsequence::InframeDeletion));
    }

    #[test]
    fn test_insertion() {
        let alt = parsed("D770_N771insG");
        assert_eq!((alt.start, alt.end), (770, 771));
        assert_eq!(alt.variant_residues.as_deref(), Some("G"));
        assert_eq!(alt.consequence, Some(MutationConsequence::InframeInsertion));
    }

    #[test]
    fn test_insertion_without_sequence_is_unknown() {
        let status = parse_inframe("D770_N771ins");
        assert!(status.is_ok());
        let alt = status.into_entity().unwrap();
        assert_eq!(alt.consequence, Some(MutationConsequence::Unknown));
        assert_eq!(alt.variant_residues, None);
    }

    #[test]
    fn test_non_letter_insertion_is_dropped() {
        let alt = parsed("D770_N771ins*");
        assert_eq!(alt.consequence, Some(MutationConsequence::Unknown));
        assert_eq!(alt.variant_residues, None);
        assert_eq!(alt.protein_change.as_deref(), Some("D770_N771ins*"));

        let alt = parsed("D770_N771ins10");
        assert_eq!(alt.consequence, Some(MutationConsequence::Unknown));
        assert_eq!(alt.protein_change.as_deref(), Some("D770_N771ins10"));

        // "ß" would uppercase to "SS" under Unicode rules.
        let alt = parsed("D770_N771ins\u{DF}");
        assert_eq!(alt.consequence, Some(MutationConsequence::Unknown));
        assert_eq!(alt.variant_residues, None);
        assert_eq!(alt.protein_change.as_deref(), Some("D770_N771ins\u{DF}"));
    }

    #[test]
    fn test_duplication() {
        let alt = parsed("A767_V769dup");
        assert_eq!((alt.start, alt.end), (767, 769));
        assert_eq!(alt.consequence, Some(MutationConsequence::InframeInsertion));
    }

    #[test]
    fn test_delins_compares_lengths() {
        let alt = parsed("L747_T751delinsP");
        assert_eq!((alt.start, alt.end), (747, 751));
        assert_eq!(alt.variant_residues.as_deref(), Some("P"));
        assert_eq!(alt.consequence, Some(MutationConsequence::InframeDeletion));

        assert_eq!(
            parsed("L747_E749delinsKRA").consequence,
            Some(MutationConsequence::MissenseVariant)
        );
        assert_eq!(
            parsed("L747delinsKR").consequence,
            Some(MutationConsequence::InframeInsertion)
        );
        assert_eq!(
            parsed("L747_T751delins").consequence,
            Some(MutationConsequence::Unknown)
        );
    }

    #[test]
    fn test_operator_case_insensitive() {
        let alt = parsed("a146_a152DEL");
        assert_eq!(alt.consequence, Some(MutationConsequence::InframeDeletion));
        assert_eq!(alt.protein_change.as_deref(), Some("A146_A152del"));

        let alt = parsed("d770_n771INSgg");
        assert_eq!(alt.consequence, Some(MutationConsequence::InframeInsertion));
        assert_eq!(alt.protein_change.as_deref(), Some("D770_N771insGG"));
    }

    #[test]
    fn test_no_match() {
        assert!(!parse_inframe("V600E").is_parsed());
        assert!(!parse_inframe("600_610mis").is_parsed());
        assert!(!parse_inframe("A152_A146del").is_parsed());
    }
}
