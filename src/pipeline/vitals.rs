use std::sync::LazyLock;

use regex::Regex;

use super::types::{VitalKind, VitalSign};

/// A compiled vital-sign pattern and the kind it reports.
struct VitalPattern {
    regex: Regex,
    kind: VitalKind,
}

/// Label, optional `:`/whitespace run, then the value. Checked in this order.
static VITAL_PATTERNS: LazyLock<Vec<VitalPattern>> = LazyLock::new(|| {
    vec![
        pattern(
            r"(?i)(?:blood pressure|\bbp\b)[:\s]*\d+/\d+",
            VitalKind::BloodPressure,
        ),
        pattern(r"(?i)(?:heart rate|\bhr\b)[:\s]*\d+", VitalKind::HeartRate),
        pattern(r"(?i)temperature[:\s]*\d+\.?\d*", VitalKind::Temperature),
        pattern(r"(?i)troponin[:\s]*\d+\.?\d*", VitalKind::Troponin),
    ]
});

fn pattern(regex_str: &str, kind: VitalKind) -> VitalPattern {
    VitalPattern {
        regex: Regex::new(regex_str).expect("Invalid vital-sign regex pattern"),
        kind,
    }
}

/// First match of each vital-sign pattern, in pattern order.
///
/// Later matches of the same pattern are ignored; values are not validated.
pub fn extract_vitals(text: &str) -> Vec<VitalSign> {
    VITAL_PATTERNS
        .iter()
        .filter_map(|vp| {
            vp.regex.find(text).map(|mat| VitalSign {
                kind: vp.kind,
                matched: mat.as_str().to_string(),
            })
        })
        .collect()
}
