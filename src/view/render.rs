//! Plain-text rendering of view state for the terminal front-end.
//!
//! Renderers are pure `-> String` functions; `color` toggles ANSI escapes.

use super::controller::{ViewPhase, ViewState};
use super::display::{confidence_badge, ConfidenceBucket, Tone, ARCHITECTURE_LAYERS, DIAGRAM_COLUMNS};
use super::progress::progress_bar;
use crate::pipeline::samples::{QUICK_SAMPLES, SAMPLE_CASES};
use crate::pipeline::types::{ProvenanceItem, SourceSpan, SummaryResult};

const PROGRESS_BAR_WIDTH: usize = 30;

pub const DISCLAIMER: &str = "\
Medical AI Safety Disclaimer

Educational use only: this summarization tool is designed for educational and research \
purposes only. It should not be used as a substitute for professional medical advice, \
diagnosis, or treatment.

For healthcare professionals: while this tool can assist in summarizing medical information, \
all clinical decisions should be based on your professional judgment and current medical \
guidelines.

For patients: patient-friendly summaries are simplified interpretations. Always consult with \
your healthcare provider for accurate medical information and treatment decisions.

Privacy: this tool processes data locally. However, avoid entering personally identifiable \
information (PII) or sensitive patient data.

In case of medical emergencies, immediately contact emergency services or your local \
emergency number. Do not rely on AI tools for urgent medical decisions.

Dual-decoder architecture demonstration • Not FDA approved • Research prototype only";

/// One status line for the current phase; empty when idle.
pub fn render_status(state: &ViewState, color: bool) -> String {
    match state.phase {
        ViewPhase::Idle => String::new(),
        ViewPhase::Processing { progress } => format!(
            "{} {}",
            Tone::Blue.paint(progress.label, color),
            progress_bar(progress.percent, PROGRESS_BAR_WIDTH)
        ),
    }
}

/// Both summary cards, patient first.
pub fn render_summaries(result: &SummaryResult, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        Tone::Pink.paint("== Patient-Friendly Summary ==", color)
    ));
    out.push_str(&format!("{}\n\n", result.patient_summary));
    out.push_str(&format!(
        "{}\n",
        Tone::Blue.paint("== Clinician-Focused Summary ==", color)
    ));
    out.push_str(&format!("{}\n", result.clinician_summary));
    out
}

/// Citation list with badges; `selected` marks one item.
pub fn render_provenance(items: &[ProvenanceItem], selected: Option<&str>, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        Tone::Purple.paint("== Provenance Tracker ==", color)
    ));

    if items.is_empty() {
        out.push_str("No provenance data available\n");
        out.push_str("Generate summaries to see source citations\n");
        return out;
    }

    let plural = if items.len() == 1 { "" } else { "s" };
    out.push_str(&format!("{} source{plural} identified\n\n", items.len()));

    for (index, item) in items.iter().enumerate() {
        let attrs = ConfidenceBucket::from_score(item.confidence).display();
        let marker = if selected == Some(item.id.as_str()) { ">" } else { " " };
        let badge = format!("{} {}", attrs.icon, confidence_badge(item.confidence));
        out.push_str(&format!(
            "{marker} Source {}  {}\n",
            index + 1,
            attrs.tone.paint(&badge, color)
        ));
        out.push_str(&format!("    \"{}\"\n", item.text));
        out.push_str(&format!(
            "    {} | Position: {}-{}\n",
            item.source, item.position.start, item.position.end
        ));
    }
    out
}

/// The submitted text with `span` bracketed (or colored).
///
/// Offsets are in characters; a span past the end is clamped.
pub fn highlight_span(text: &str, span: SourceSpan, color: bool) -> String {
    let total = text.chars().count();
    let start = span.start.min(total);
    let end = span.end.clamp(start, total);

    let before: String = text.chars().take(start).collect();
    let cited: String = text.chars().skip(start).take(end - start).collect();
    let after: String = text.chars().skip(end).collect();

    let cited = if color {
        Tone::Yellow.paint(&cited, true)
    } else {
        format!("[[{cited}]]")
    };
    format!("{before}{cited}{after}")
}

/// Static architecture diagram, `DIAGRAM_COLUMNS` nodes per row.
pub fn render_architecture(active: bool, color: bool) -> String {
    let mut out = String::new();
    let title = "== Dual-Decoder Transformer Architecture ==";
    out.push_str(&format!("{}\n", Tone::Green.paint(title, color)));
    if active {
        out.push_str("Live Processing\n");
    }

    for row in ARCHITECTURE_LAYERS.chunks(DIAGRAM_COLUMNS) {
        let cells: Vec<String> = row
            .iter()
            .map(|layer| {
                let attrs = layer.kind.display();
                let cell = format!("{} {:<18}", attrs.icon, layer.name);
                attrs.tone.paint(&cell, color)
            })
            .collect();
        out.push_str(&cells.join(" -> "));
        out.push('\n');
    }

    out.push('\n');
    for layer in &ARCHITECTURE_LAYERS {
        out.push_str(&format!(
            "{:<18} {:<18} {}\n",
            layer.name,
            layer.kind.display().label,
            layer.kind.description()
        ));
    }
    out
}

/// Bundled sample cases and quick starters.
pub fn render_samples() -> String {
    let mut out = String::new();
    for (index, case) in SAMPLE_CASES.iter().enumerate() {
        out.push_str(&format!("Sample case {}: {}\n", index + 1, case.title));
        out.push_str(&format!("  {}\n\n", case.text));
    }
    out.push_str("Quick samples:\n");
    for (index, snippet) in QUICK_SAMPLES.iter().enumerate() {
        out.push_str(&format!("  Sample {}: {snippet}\n", index + 1));
    }
    out
}

/// Everything the view shows for `state` after a request.
pub fn render_view(state: &ViewState, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} characters\n\n", state.char_count()));

    let Some(result) = state.summary.as_ref() else {
        out.push_str("No summary available.\n");
        return out;
    };

    out.push_str(&render_summaries(result, color));
    out.push('\n');
    out.push_str(&render_provenance(
        &result.provenance,
        state.selected_provenance.as_deref(),
        color,
    ));

    if let Some(item) = state
        .selected_provenance
        .as_deref()
        .and_then(|id| result.find_provenance(id))
    {
        out.push_str(&format!("\nSelected {} in context:\n", item.id));
        out.push_str(&format!("{}\n", highlight_span(&state.input, item.position, color)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::progress::ProgressStage;

    fn item(id: &str, confidence: f64, start: usize, end: usize) -> ProvenanceItem {
        ProvenanceItem {
            id: id.into(),
            text: "Patient has diabetes".into(),
            source: "Clinical Note Section 1".into(),
            confidence,
            position: SourceSpan { start, end },
        }
    }

    #[test]
    fn status_empty_when_idle() {
        assert_eq!(render_status(&ViewState::default(), false), "");
    }

    #[test]
    fn status_shows_stage_and_bar() {
        let state = ViewState::default()
            .with_input("x")
            .begin_processing()
            .advance(ProgressStage::Analysis);
        let line = render_status(&state, false);
        assert!(line.starts_with("Running AI analysis..."));
        assert!(line.ends_with("50%"));
    }

    #[test]
    fn summaries_plain_layout() {
        let result = SummaryResult {
            patient_summary: "P".into(),
            clinician_summary: "C".into(),
            provenance: vec![],
        };
        assert_eq!(
            render_summaries(&result, false),
            "== Patient-Friendly Summary ==\nP\n\n== Clinician-Focused Summary ==\nC\n"
        );
    }

    #[test]
    fn empty_provenance_message() {
        let out = render_provenance(&[], None, false);
        assert!(out.contains("No provenance data available"));
    }

    #[test]
    fn provenance_count_and_badges() {
        let items = [item("prov_0", 0.9, 0, 20), item("prov_2", 0.77, 30, 50)];
        let out = render_provenance(&items, Some("prov_2"), false);
        assert!(out.contains("2 sources identified"));
        assert!(out.contains("  Source 1  ● High (90%)"));
        assert!(out.contains("> Source 2  ◐ Medium (77%)"));
        assert!(out.contains("Position: 30-50"));
    }

    #[test]
    fn single_source_is_singular() {
        let out = render_provenance(&[item("prov_0", 0.8, 0, 20)], None, false);
        assert!(out.contains("1 source identified"));
    }

    #[test]
    fn highlight_brackets_character_span() {
        let text = "Temp 99.1°F. Patient has diabetes.";
        let out = highlight_span(text, SourceSpan { start: 13, end: 33 }, false);
        assert_eq!(out, "Temp 99.1°F. [[Patient has diabetes]].");
    }

    #[test]
    fn highlight_clamps_out_of_range() {
        let out = highlight_span("abc", SourceSpan { start: 2, end: 10 }, false);
        assert_eq!(out, "ab[[c]]");
    }

    #[test]
    fn architecture_lists_every_layer() {
        let out = render_architecture(false, false);
        for layer in &ARCHITECTURE_LAYERS {
            assert!(out.contains(layer.name), "missing {}", layer.name);
        }
        assert!(!out.contains("Live Processing"));
        assert!(render_architecture(true, false).contains("Live Processing"));
    }

    #[test]
    fn view_without_summary() {
        let state = ViewState::default().with_input("abc");
        let out = render_view(&state, false);
        assert!(out.starts_with("3 characters"));
        assert!(out.contains("No summary available."));
    }

    #[test]
    fn view_with_selected_citation() {
        let input = "Patient has diabetes. Stable.";
        let state = ViewState::default()
            .with_input(input)
            .finish(Some(SummaryResult {
                patient_summary: "P".into(),
                clinician_summary: "C".into(),
                provenance: vec![item("prov_0", 0.85, 0, 20)],
            }))
            .toggle_provenance("prov_0");
        let out = render_view(&state, false);
        assert!(out.contains("== Patient-Friendly Summary =="));
        assert!(out.contains("Selected prov_0 in context:"));
        assert!(out.contains("[[Patient has diabetes]]. Stable."));
    }

    #[test]
    fn samples_listing() {
        let out = render_samples();
        assert!(out.contains("Sample case 1: Cardiac Case"));
        assert!(out.contains("Sample 3: Post-operative complications"));
    }
}
