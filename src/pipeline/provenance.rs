//! Sentence-level provenance: which parts of the note the summaries lean on.
//!
//! Naive by construction. Sentences are cut on terminal punctuation (so
//! decimals such as `15.2` split a sentence), flagged by four trigger
//! keywords, and located by a forward search for their first occurrence.
//! A sentence repeated verbatim therefore always points at its first copy.

use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;

use super::types::{ProvenanceItem, SourceSpan};

/// Keywords that make a sentence citable. Deliberately narrower than the
/// extractor vocabulary and not the same set the summary templates gate on.
pub const PROVENANCE_TRIGGERS: [&str; 4] = ["chest pain", "troponin", "diabetes", "hypertension"];

/// Lower bound of the synthetic confidence score (inclusive).
pub const CONFIDENCE_MIN: f64 = 0.75;
/// Upper bound of the synthetic confidence score (exclusive).
pub const CONFIDENCE_MAX: f64 = 0.95;

static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("Invalid sentence break regex"));

/// Non-blank sentence fragments in input order, untrimmed.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(text)
        .filter(|fragment| !fragment.trim().is_empty())
        .collect()
}

/// Whether a sentence mentions any provenance trigger (case-insensitive).
pub fn is_triggered(sentence: &str) -> bool {
    let lowered = sentence.to_lowercase();
    PROVENANCE_TRIGGERS.iter().any(|kw| lowered.contains(kw))
}

/// Span of the first occurrence of `needle` in `text`, in characters.
fn first_occurrence(text: &str, needle: &str) -> Option<SourceSpan> {
    let byte_start = text.find(needle)?;
    let start = text[..byte_start].chars().count();
    Some(SourceSpan {
        start,
        end: start + needle.chars().count(),
    })
}

/// Build provenance items for every triggered sentence of `text`.
///
/// Sentence indices count all non-blank fragments, cited or not, so ids are
/// sparse (`prov_1`, `prov_4`, ...). Confidence comes from `rng`.
pub fn build_provenance<R: Rng>(text: &str, rng: &mut R) -> Vec<ProvenanceItem> {
    let mut items = Vec::new();

    for (index, fragment) in split_sentences(text).into_iter().enumerate() {
        if !is_triggered(fragment) {
            continue;
        }

        let sentence = fragment.trim();
        let Some(position) = first_occurrence(text, sentence) else {
            // Unreachable: the sentence is a slice of `text`.
            tracing::warn!(index, "Provenance sentence not found in source text");
            continue;
        };

        items.push(ProvenanceItem {
            id: format!("prov_{index}"),
            text: sentence.to_string(),
            source: format!("Clinical Note Section {}", index + 1),
            confidence: rng.gen_range(CONFIDENCE_MIN..CONFIDENCE_MAX),
            position,
        });
    }

    tracing::debug!(cited = items.len(), "Provenance built");
    items
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::pipeline::samples::SAMPLE_CASES;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn split_drops_blank_fragments() {
        let parts = split_sentences("One.  Two!!?  ...Three?");
        assert_eq!(parts, vec!["One", "  Two", "Three"]);
    }

    #[test]
    fn trigger_check_is_case_insensitive() {
        assert!(is_triggered("History of HYPERTENSION"));
        assert!(is_triggered("troponin I elevated"));
        assert!(!is_triggered("Shortness of breath and fatigue"));
    }

    #[test]
    fn ids_and_sources_use_sentence_index() {
        let text = "Vitals stable. Chest pain since morning. Denies nausea! History of hypertension?";
        let items = build_provenance(text, &mut seeded());

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "prov_1");
        assert_eq!(items[0].text, "Chest pain since morning");
        assert_eq!(items[0].source, "Clinical Note Section 2");
        assert_eq!(items[0].position, SourceSpan { start: 15, end: 39 });

        assert_eq!(items[1].id, "prov_3");
        assert_eq!(items[1].text, "History of hypertension");
        assert_eq!(items[1].source, "Clinical Note Section 4");
        assert_eq!(items[1].position, SourceSpan { start: 56, end: 79 });
    }

    #[test]
    fn span_matches_trimmed_sentence_length() {
        let text = "  Known diabetes   .\n\nTroponin trending up ! ";
        for item in build_provenance(text, &mut seeded()) {
            assert_eq!(item.position.len(), item.text.chars().count());
            let quoted: String = text
                .chars()
                .skip(item.position.start)
                .take(item.position.len())
                .collect();
            assert_eq!(quoted, item.text);
        }
    }

    #[test]
    fn repeated_sentence_points_at_first_occurrence() {
        let text = "Patient has diabetes. Patient has diabetes.";
        let items = build_provenance(text, &mut seeded());

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "prov_0");
        assert_eq!(items[1].id, "prov_1");
        // Known imprecision: both cite the first copy.
        assert_eq!(items[0].position, SourceSpan { start: 0, end: 20 });
        assert_eq!(items[1].position, SourceSpan { start: 0, end: 20 });
    }

    #[test]
    fn offsets_count_characters_not_bytes() {
        let text = "Temp 99.1°F. Patient has diabetes.";
        let items = build_provenance(text, &mut seeded());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "prov_2");
        assert_eq!(items[0].position, SourceSpan { start: 13, end: 33 });
    }

    #[test]
    fn confidence_stays_in_range() {
        let text = "Chest pain. Troponin up. Diabetes. Hypertension.";
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            for item in build_provenance(text, &mut rng) {
                assert!(
                    (CONFIDENCE_MIN..CONFIDENCE_MAX).contains(&item.confidence),
                    "seed {seed}: {}",
                    item.confidence
                );
            }
        }
    }

    #[test]
    fn same_seed_same_confidence() {
        let text = "Chest pain at rest. Hx diabetes.";
        let a = build_provenance(text, &mut StdRng::seed_from_u64(42));
        let b = build_provenance(text, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn every_sample_has_provenance() {
        for case in SAMPLE_CASES {
            let items = build_provenance(case.text, &mut seeded());
            assert!(!items.is_empty(), "no provenance for {}", case.title);
        }
    }

    #[test]
    fn blank_input_has_no_provenance() {
        assert!(build_provenance("", &mut seeded()).is_empty());
        assert!(build_provenance("  \n ", &mut seeded()).is_empty());
        assert!(build_provenance("...!?", &mut seeded()).is_empty());
    }
}
