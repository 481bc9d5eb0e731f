//! Closed display vocabularies: confidence badges and architecture layers.
//!
//! Every variant maps to its attributes through one `match`, so adding a
//! variant fails to compile until it has a color, icon and label.

use serde::Serialize;

// ═══════════════════════════════════════════════════════════
// Shared attributes
// ═══════════════════════════════════════════════════════════

/// Terminal color family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Green,
    Yellow,
    Red,
    Blue,
    Pink,
    Purple,
}

impl Tone {
    /// ANSI SGR foreground code.
    pub fn ansi_code(self) -> u8 {
        match self {
            Tone::Red => 31,
            Tone::Green => 32,
            Tone::Yellow => 33,
            Tone::Blue => 34,
            Tone::Purple => 35,
            Tone::Pink => 95,
        }
    }

    /// Wrap `text` in this tone when `enabled`, otherwise return it unchanged.
    pub fn paint(self, text: &str, enabled: bool) -> String {
        if enabled {
            format!("\x1b[{}m{text}\x1b[0m", self.ansi_code())
        } else {
            text.to_string()
        }
    }
}

/// How a variant is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayAttrs {
    pub label: &'static str,
    pub tone: Tone,
    pub icon: &'static str,
}

// ═══════════════════════════════════════════════════════════
// Confidence
// ═══════════════════════════════════════════════════════════

/// Confidence thresholds for citation badges
pub mod thresholds {
    /// At or above: high.
    pub const HIGH: f64 = 0.80;

    /// At or above (and below HIGH): medium. Below: low.
    pub const MEDIUM: f64 = 0.60;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBucket {
    High,
    Medium,
    Low,
}

impl ConfidenceBucket {
    pub fn from_score(confidence: f64) -> Self {
        if confidence >= thresholds::HIGH {
            ConfidenceBucket::High
        } else if confidence >= thresholds::MEDIUM {
            ConfidenceBucket::Medium
        } else {
            ConfidenceBucket::Low
        }
    }

    pub fn display(self) -> DisplayAttrs {
        match self {
            ConfidenceBucket::High => DisplayAttrs {
                label: "High",
                tone: Tone::Green,
                icon: "●",
            },
            ConfidenceBucket::Medium => DisplayAttrs {
                label: "Medium",
                tone: Tone::Yellow,
                icon: "◐",
            },
            ConfidenceBucket::Low => DisplayAttrs {
                label: "Low",
                tone: Tone::Red,
                icon: "○",
            },
        }
    }
}

/// Badge text such as `High (87%)`.
pub fn confidence_badge(confidence: f64) -> String {
    let attrs = ConfidenceBucket::from_score(confidence).display();
    format!("{} ({}%)", attrs.label, (confidence * 100.0).round() as i64)
}

// ═══════════════════════════════════════════════════════════
// Architecture diagram
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Embedding,
    Encoder,
    PatientDecoder,
    ClinicianDecoder,
    Attention,
    Output,
}

impl LayerKind {
    pub fn display(self) -> DisplayAttrs {
        match self {
            LayerKind::Embedding => DisplayAttrs {
                label: "Embedding",
                tone: Tone::Blue,
                icon: "≡",
            },
            LayerKind::Encoder => DisplayAttrs {
                label: "Encoder",
                tone: Tone::Green,
                icon: "◉",
            },
            LayerKind::PatientDecoder => DisplayAttrs {
                label: "Patient decoder",
                tone: Tone::Pink,
                icon: "◎",
            },
            LayerKind::ClinicianDecoder => DisplayAttrs {
                label: "Clinician decoder",
                tone: Tone::Purple,
                icon: "◎",
            },
            LayerKind::Attention => DisplayAttrs {
                label: "Attention",
                tone: Tone::Yellow,
                icon: "⚡",
            },
            LayerKind::Output => DisplayAttrs {
                label: "Output",
                tone: Tone::Red,
                icon: "→",
            },
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            LayerKind::Embedding => "Converts input tokens to high-dimensional vectors",
            LayerKind::Encoder => "Processes contextual relationships in medical text",
            LayerKind::PatientDecoder => "Generates patient-friendly summaries",
            LayerKind::ClinicianDecoder => "Generates clinician-focused summaries",
            LayerKind::Attention => "Cross-attention mechanism between decoders",
            LayerKind::Output => "Final text generation and formatting",
        }
    }
}

/// One node of the static architecture diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArchitectureLayer {
    pub name: &'static str,
    pub kind: LayerKind,
}

/// Diagram nodes in drawing order. Purely illustrative: nothing runs them.
pub const ARCHITECTURE_LAYERS: [ArchitectureLayer; 7] = [
    ArchitectureLayer { name: "Input Embedding", kind: LayerKind::Embedding },
    ArchitectureLayer { name: "Encoder Layer 1", kind: LayerKind::Encoder },
    ArchitectureLayer { name: "Encoder Layer 2", kind: LayerKind::Encoder },
    ArchitectureLayer { name: "Patient Decoder", kind: LayerKind::PatientDecoder },
    ArchitectureLayer { name: "Clinician Decoder", kind: LayerKind::ClinicianDecoder },
    ArchitectureLayer { name: "Cross Attention", kind: LayerKind::Attention },
    ArchitectureLayer { name: "Output Generation", kind: LayerKind::Output },
];

/// Nodes per diagram row.
pub const DIAGRAM_COLUMNS: usize = 3;
