//! "Did you mean?" lookup for mistyped keywords.
//!
//! Candidates are ranked by Jaro–Winkler similarity, which favours shared
//! prefixes and suits the short operator keywords used in range notation.

/// A candidate with its similarity to the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarMatch<'a> {
    /// The matched candidate.
    pub candidate: &'a str,
    /// Jaro–Winkler similarity in `[0, 1]`.
    pub similarity: f64,
}

/// Find the candidate most similar to `input`.
///
/// Comparison is case-insensitive. On equal similarity the candidate listed
/// first wins. Returns `None` only when `candidates` is empty.
///
/// # Examples
///
/// ```
/// use ferro_alteration::suggest::find_most_similar;
///
/// let m = find_most_similar("trnc", &["mis", "del", "trunc"]).unwrap();
/// assert_eq!(m.candidate, "trunc");
/// ```
pub fn find_most_similar<'a>(input: &str, candidates: &[&'a str]) -> Option<SimilarMatch<'a>> {
    let input = input.to_lowercase();
    let mut best: Option<SimilarMatch<'a>> = None;

    for &candidate in candidates {
        let similarity = strsim::jaro_winkler(&input, &candidate.to_lowercase());
        if best.map_or(true, |b| similarity > b.similarity) {
            best = Some(SimilarMatch {
                candidate,
                similarity,
            });
        }
    }

    best
}
