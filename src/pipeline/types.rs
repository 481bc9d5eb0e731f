use serde::{Deserialize, Serialize};
use thiserror::Error;

// ═══════════════════════════════════════════════════════════
// Conditions
// ═══════════════════════════════════════════════════════════

/// A medical term from the extractor's closed vocabulary.
///
/// Variant order is vocabulary order; extraction output follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    #[serde(rename = "chest pain")]
    ChestPain,
    #[serde(rename = "shortness of breath")]
    ShortnessOfBreath,
    #[serde(rename = "elevated troponin")]
    ElevatedTroponin,
    #[serde(rename = "diabetes")]
    Diabetes,
    #[serde(rename = "hypertension")]
    Hypertension,
    #[serde(rename = "fatigue")]
    Fatigue,
    #[serde(rename = "infection")]
    Infection,
}

impl Condition {
    /// Full extractor vocabulary, in match order.
    pub const ALL: [Condition; 7] = [
        Condition::ChestPain,
        Condition::ShortnessOfBreath,
        Condition::ElevatedTroponin,
        Condition::Diabetes,
        Condition::Hypertension,
        Condition::Fatigue,
        Condition::Infection,
    ];

    /// Lower-case vocabulary term.
    pub fn term(self) -> &'static str {
        match self {
            Condition::ChestPain => "chest pain",
            Condition::ShortnessOfBreath => "shortness of breath",
            Condition::ElevatedTroponin => "elevated troponin",
            Condition::Diabetes => "diabetes",
            Condition::Hypertension => "hypertension",
            Condition::Fatigue => "fatigue",
            Condition::Infection => "infection",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.term())
    }
}

// ═══════════════════════════════════════════════════════════
// Vital signs
// ═══════════════════════════════════════════════════════════

/// Which fixed pattern produced a vital-sign match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalKind {
    BloodPressure,
    HeartRate,
    Temperature,
    Troponin,
}

/// A raw labelled value pulled out of the note. No unit normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitalSign {
    pub kind: VitalKind,
    /// The whole matched substring, label included (e.g. `"HR 102"`).
    pub matched: String,
}

// ═══════════════════════════════════════════════════════════
// Provenance
// ═══════════════════════════════════════════════════════════

/// Character offsets (Unicode scalar values) into the submitted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpan {
    pub start: usize,
    pub end: usize,
}

impl SourceSpan {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A sentence of the input cited as support for the summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceItem {
    /// `prov_<sentence index>`; positional, not stable across edits.
    pub id: String,
    /// Trimmed sentence text.
    pub text: String,
    /// Synthetic label, `Clinical Note Section <index + 1>`.
    pub source: String,
    /// Pseudo-random score in `[0.75, 0.95)`.
    pub confidence: f64,
    /// First occurrence of `text` in the input.
    pub position: SourceSpan,
}

// ═══════════════════════════════════════════════════════════
// Result
// ═══════════════════════════════════════════════════════════

/// Everything one summarization request produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    pub patient_summary: String,
    pub clinician_summary: String,
    pub provenance: Vec<ProvenanceItem>,
}

impl SummaryResult {
    pub fn find_provenance(&self, id: &str) -> Option<&ProvenanceItem> {
        self.provenance.iter().find(|item| item.id == id)
    }
}

// ═══════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════

/// Summarization pipeline errors. Every failure is terminal for its request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummaryError {
    #[error("Summarizer internal error: {0}")]
    Internal(String),
}
