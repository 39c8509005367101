//! Annotation tests: curator input through preprocessing, dispatch and naming
//!
//! Test categories:
//! - Decorated input: `p.` prefixes, trailing `[...]` notes, exclusion lists
//! - Display names for positioned alterations
//! - Categorical fallback and unparseable input
//! - Configuration file driven behavior

use ferro_alteration::annotate::{annotate_protein_change, preprocess, AnnotateConfig};
use ferro_alteration::config::FerroConfig;
use ferro_alteration::{EntityStatus, FerroError, Grammar, MutationConsequence};
use rstest::rstest;
use std::fs;

fn annotate(input: &str) -> ferro_alteration::AnnotatedAlteration {
    annotate_protein_change(input, &AnnotateConfig::default())
        .unwrap_or_else(|e| panic!("'{}' failed: {}", input, e))
}

// =============================================================================
// Decorated input
// =============================================================================

#[rstest]
#[case("V600E")]
#[case("p.V600E")]
#[case("V600E [somatic]")]
#[case("  p.V600E[note]  ")]
fn test_decorations_do_not_change_the_alteration(#[case] input: &str) {
    let annotated = annotate(input);
    assert_eq!(annotated.protein_change, "V600E");
    assert_eq!(annotated.grammar, Some(Grammar::General));
    assert_eq!(annotated.name, "V600E");
    let alt = annotated.status.entity().unwrap();
    assert_eq!(alt.consequence, Some(MutationConsequence::MissenseVariant));
}

#[rstest]
#[case("V600 {excluding V600E}", "V600", Some("V600E"))]
#[case("V600 {exclude V600E; V600K}", "V600", Some("V600E; V600K"))]
#[case("V600 {EXCLUDING   V600E }", "V600", Some("V600E"))]
#[case("V600 {including V600E}", "V600 {including V600E}", None)]
fn test_exclusion_parsing(
    #[case] input: &str,
    #[case] protein_change: &str,
    #[case] excluded: Option<&str>,
) {
    let pre = preprocess(input, &AnnotateConfig::default());
    assert_eq!(pre.protein_change, protein_change);
    assert_eq!(pre.excluded.as_deref(), excluded);
}

// =============================================================================
// Display names
// =============================================================================

#[rstest]
#[case("V600", "V600 Missense Mutations")]
#[case("v600", "V600 Missense Mutations")]
#[case("V600 {excluding V600E}", "V600 Missense Mutations, excluding V600E")]
#[case("V600E", "V600E")]
#[case("A146_A152del", "A146_A152del")]
#[case("M1ext-5", "M1ext-5")]
#[case("600", "600")]
fn test_display_name(#[case] input: &str, #[case] name: &str) {
    assert_eq!(annotate(input).name, name);
}

#[test]
fn test_positioned_alteration_is_a_warning() {
    let annotated = annotate("V600");
    assert_eq!(annotated.status.status, EntityStatus::Warning);
    assert!(annotated.status.entity().unwrap().is_positioned());
}

// =============================================================================
// Categorical and unparseable input
// =============================================================================

#[rstest]
#[case("Truncating Mutations")]
#[case("truncating mutation")]
fn test_categorical_truncating(#[case] input: &str) {
    let annotated = annotate(input);
    assert_eq!(annotated.grammar, None);
    assert!(annotated.status.is_ok());
    let alt = annotated.status.entity().unwrap();
    assert_eq!(alt.consequence, Some(MutationConsequence::FeatureTruncation));
    assert!(!alt.has_positions());
    assert_eq!((alt.start, alt.end), (0, 0));

    let json = serde_json::to_value(alt).unwrap();
    assert!(json.get("start").is_none());
    assert!(json.get("end").is_none());
}

#[rstest]
#[case("foo")]
#[case("BRAF V600E")]
#[case("Oncogenic Mutations")]
fn test_unparseable(#[case] input: &str) {
    let err = annotate_protein_change(input, &AnnotateConfig::default()).unwrap_err();
    assert_eq!(
        err,
        FerroError::Unparseable {
            input: input.to_string()
        }
    );
}

#[test]
fn test_error_status_is_not_an_err() {
    let annotated = annotate("600_601xyz");
    assert_eq!(annotated.grammar, Some(Grammar::Range));
    assert!(annotated.status.is_error());
    assert!(annotated.status.entity().is_none());
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_config_file_disables_prefix_stripping() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".ferro.toml");
    fs::write(
        &path,
        "# curation settings\n[protein-change]\nstrip-prefix = false\n",
    )
    .unwrap();

    let config = FerroConfig::load_from_path(&path).unwrap().to_annotate_config();
    assert!(!config.strip_prefix);
    assert!(matches!(
        annotate_protein_change("p.V600E", &config),
        Err(FerroError::Unparseable { .. })
    ));
    assert!(annotate_protein_change("V600E", &config).is_ok());
}

#[test]
fn test_config_file_disables_categorical() {
    let config = FerroConfig::parse("[protein-change]\ncategorical = false\n")
        .unwrap()
        .to_annotate_config();
    assert!(annotate_protein_change("Truncating Mutations", &config).is_err());
}

#[test]
fn test_cli_flags_override_config() {
    let config = FerroConfig::parse("[protein-change]\nstrip-prefix = true\n").unwrap();
    let merged = config.merge_with_cli(true, false);
    assert!(!merged.strip_prefix);
    assert!(merged.categorical);
}
