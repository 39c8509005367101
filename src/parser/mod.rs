//! Protein-change grammars.
//!
//! Each grammar is an independent matcher over the whole input string. A
//! grammar that does not recognise its input returns an unset
//! [`ParsingStatus`]; [`parse`] tries the grammars in [`Grammar::DISPATCH_ORDER`]
//! and keeps the first result that is not unset.
//!
//! The order matters: the general substitution pattern accepts almost any
//! `<letters><digits><letters>` string, so every more specific grammar runs
//! before it.
//!
//! # Example
//!
//! ```
//! use ferro_alteration::parser::{parse, Grammar};
//! use ferro_alteration::MutationConsequence;
//!
//! let (grammar, status) = parse("A146_A152del").unwrap();
//! assert_eq!(grammar, Grammar::Inframe);
//!
//! let alteration = status.into_entity().unwrap();
//! assert_eq!((alteration.start, alteration.end), (146, 152));
//! assert_eq!(alteration.consequence, Some(MutationConsequence::InframeDeletion));
//! ```

pub mod extension;
pub mod frameshift;
pub mod general;
pub mod inframe;
pub mod range;
pub mod splice;
pub mod synonymous;

pub use extension::parse_extension;
pub use frameshift::parse_frameshift;
pub use general::parse_general;
pub use inframe::parse_inframe;
pub use range::parse_range;
pub use splice::parse_splice;
pub use synonymous::parse_synonymous;

use crate::alteration::Alteration;
use crate::status::ParsingStatus;
use regex::Captures;
use serde::Serialize;
use std::fmt;

/// One of the protein-change grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Grammar {
    /// `A146_A152del`, `L747_T751delinsP`, `D770_N771insG`, `A767dup`
    Inframe,
    /// `X100_splice`, `100_120splice`
    Splice,
    /// `Y1021fs`, `R248Gfs*10`
    Frameshift,
    /// `M1ext-5`, `*959Qext*14`
    Extension,
    /// `600_610mis`, `600_610trunc`
    Range,
    /// `V600=`, `*500=`
    Synonymous,
    /// `V600E`, `Q61*`, `IK744K`, `V600`
    General,
}

impl Grammar {
    /// Order in which [`parse`] tries the grammars.
    pub const DISPATCH_ORDER: [Grammar; 7] = [
        Grammar::Inframe,
        Grammar::Splice,
        Grammar::Frameshift,
        Grammar::Extension,
        Grammar::Range,
        Grammar::Synonymous,
        Grammar::General,
    ];

    /// Short lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Grammar::Inframe => "inframe",
            Grammar::Splice => "splice",
            Grammar::Frameshift => "frameshift",
            Grammar::Extension => "extension",
            Grammar::Range => "range",
            Grammar::Synonymous => "synonymous",
            Grammar::General => "general",
        }
    }

    /// Run this grammar, returning its status whatever it is.
    pub fn parse(&self, input: &str) -> ParsingStatus<Alteration> {
        match self {
            Grammar::Inframe => parse_inframe(input),
            Grammar::Splice => parse_splice(input),
            Grammar::Frameshift => parse_frameshift(input),
            Grammar::Extension => parse_extension(input),
            Grammar::Range => parse_range(input),
            Grammar::Synonymous => parse_synonymous(input),
            Grammar::General => parse_general(input),
        }
    }

    /// Run this grammar; `None` if it did not recognise the input.
    pub fn try_parse(&self, input: &str) -> Option<ParsingStatus<Alteration>> {
        let status = self.parse(input);
        status.is_parsed().then_some(status)
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parse `input` with the first grammar that recognises it.
///
/// Returns `None` when no grammar matched. A range with an unknown operator
/// is recognised, so it comes back as `Some` with an error status.
pub fn parse(input: &str) -> Option<(Grammar, ParsingStatus<Alteration>)> {
    for grammar in Grammar::DISPATCH_ORDER {
        tracing::trace!("trying {} grammar on '{}'", grammar, input);
        if let Some(status) = grammar.try_parse(input) {
            tracing::debug!(
                "'{}' matched {} grammar with status {}",
                input,
                grammar,
                status.status
            );
            return Some((grammar, status));
        }
    }
    tracing::debug!("'{}' matched no grammar", input);
    None
}

/// Parse a protein position. Zero and values beyond `u32` are rejected.
pub(crate) fn position(digits: &str) -> Option<u32> {
    digits.parse::<u32>().ok().filter(|&p| p > 0)
}

/// Parse the start position and an optional end position, requiring
/// `start <= end`.
pub(crate) fn span(start: &str, end: Option<&str>) -> Option<(u32, u32)> {
    let start = position(start)?;
    let end = match end {
        Some(digits) => position(digits)?,
        None => start,
    };
    (start <= end).then_some((start, end))
}

/// Capture group `i` as a string slice, empty when it did not participate.
pub(crate) fn group<'h>(caps: &Captures<'h>, i: usize) -> &'h str {
    caps.get(i).map_or("", |m| m.as_str())
}
