// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! ferro-alteration: protein change parser and consequence classifier
//!
//! Part of the ferro bioinformatics toolkit. Parses the short protein change
//! notation used in curation (`V600E`, `A146_A152del`, `Y1021fs`,
//! `*959Qext*14`, ...) into an [`Alteration`] with positions, residues, a
//! canonical form and a [`MutationConsequence`].
//!
//! # Example
//!
//! ```
//! use ferro_alteration::{parse, Grammar, MutationConsequence};
//!
//! let (grammar, status) = parse("Q61*").unwrap();
//! assert_eq!(grammar, Grammar::General);
//!
//! let alteration = status.into_entity().unwrap();
//! assert_eq!(alteration.start, 61);
//! assert_eq!(alteration.consequence, Some(MutationConsequence::StopGained));
//! ```

pub mod alteration;
pub mod annotate;
pub mod cli;
pub mod config;
pub mod consequence;
pub mod error;
pub mod parser;
pub mod status;
pub mod suggest;

// Re-export commonly used types
pub use alteration::Alteration;
pub use annotate::{annotate_protein_change, AnnotateConfig, AnnotatedAlteration};
pub use consequence::MutationConsequence;
pub use error::FerroError;
pub use parser::{parse, Grammar};
pub use status::{EntityStatus, ParsingStatus};

/// Result type alias for ferro-alteration operations
pub type Result<T> = std::result::Result<T, FerroError>;
