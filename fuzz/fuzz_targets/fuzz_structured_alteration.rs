//! Structured fuzz target for protein change notation
//!
//! Uses the arbitrary crate to assemble notation-shaped strings, which
//! reaches the grammar-specific branches far more often than random bytes.

#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use ferro_alteration::Grammar;
use libfuzzer_sys::fuzz_target;

/// Structured input for generating protein change strings
#[derive(Debug, Arbitrary)]
struct AlterationInput {
    /// Optional reference residue
    reference: Option<Residue>,
    /// Position value
    position: u32,
    /// Optional second position for ranges
    position2: Option<u32>,
    /// Operator or suffix
    edit: EditType,
    /// Optional trailing residue
    trailing: Option<Residue>,
}

#[derive(Debug, Arbitrary)]
enum EditType {
    Substitution,
    Deletion,
    Insertion,
    Duplication,
    Delins,
    Frameshift,
    StopExtension,
    Splice,
    Synonymous,
    RangeKeyword(u8),
}

#[derive(Debug, Arbitrary)]
enum Residue {
    Letter(u8),
    Stop,
    Unknown,
}

impl Residue {
    fn as_string(&self) -> String {
        match self {
            Residue::Letter(b) => char::from(b'A' + b % 26).to_string(),
            Residue::Stop => "*".to_string(),
            Residue::Unknown => "?".to_string(),
        }
    }
}

impl AlterationInput {
    fn to_notation(&self) -> String {
        let residue = |r: &Option<Residue>| r.as_ref().map(Residue::as_string).unwrap_or_default();
        let reference = residue(&self.reference);
        let trailing = residue(&self.trailing);

        // Position 0 and reversed ranges are allowed through on purpose.
        let pos_str = match self.position2 {
            Some(p2) => format!("{}_{}", self.position, p2),
            None => self.position.to_string(),
        };

        let edit_str = match &self.edit {
            EditType::Substitution => trailing,
            EditType::Deletion => "del".to_string(),
            EditType::Insertion => format!("ins{}", trailing),
            EditType::Duplication => "dup".to_string(),
            EditType::Delins => format!("delins{}", trailing),
            EditType::Frameshift => format!("fs{}", trailing),
            EditType::StopExtension => format!("{}ext*{}", trailing, self.position % 100),
            EditType::Splice => "_splice".to_string(),
            EditType::Synonymous => "=".to_string(),
            EditType::RangeKeyword(k) => {
                const KEYWORDS: [&str; 8] = ["mis", "ins", "del", "fs", "trunc", "dup", "mut", "muts"];
                KEYWORDS[*k as usize % KEYWORDS.len()].to_string()
            }
        };

        format!("{}{}{}", reference, pos_str, edit_str)
    }
}

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = AlterationInput::arbitrary(&mut Unstructured::new(data)) {
        let notation = input.to_notation();

        // No grammar should panic, whether or not it accepts the input
        for grammar in Grammar::DISPATCH_ORDER {
            let _ = grammar.parse(&notation);
        }
        let _ = ferro_alteration::parse(&notation);
    }
});
