//! Fuzz target for the protein change entry points
//!
//! This target feeds arbitrary byte strings to the grammars and the
//! annotation front door to find crashes or panics.

#![no_main]

use ferro_alteration::annotate::{annotate_protein_change, AnnotateConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Don't fuzz extremely long inputs - diminishing returns
        if input.len() > 256 {
            return;
        }

        // Neither entry point should panic on any input
        if let Some((_, status)) = ferro_alteration::parse(input) {
            if let Some(alteration) = status.entity() {
                assert!(alteration.start <= alteration.end);
            }
        }
        let _ = annotate_protein_change(input, &AnnotateConfig::default());
    }
});
