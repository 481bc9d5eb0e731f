//! Scripted progress shown while a request is in flight.
//!
//! Cosmetic only: steps advance on a timer and say nothing about how far the
//! service has actually got.

use serde::Serialize;

/// Label shown before the first scripted step.
pub const INITIAL_LABEL: &str = "Initializing...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStage {
    Preprocessing,
    Analysis,
    PatientSummary,
    ClinicianSummary,
    Finalizing,
}

impl ProgressStage {
    /// Steps in the order they are shown.
    pub const SCRIPT: [ProgressStage; 5] = [
        ProgressStage::Preprocessing,
        ProgressStage::Analysis,
        ProgressStage::PatientSummary,
        ProgressStage::ClinicianSummary,
        ProgressStage::Finalizing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProgressStage::Preprocessing => "Preprocessing medical text...",
            ProgressStage::Analysis => "Running AI analysis...",
            ProgressStage::PatientSummary => "Generating patient summary...",
            ProgressStage::ClinicianSummary => "Generating clinician summary...",
            ProgressStage::Finalizing => "Finalizing results...",
        }
    }

    pub fn percent(self) -> u8 {
        match self {
            ProgressStage::Preprocessing => 20,
            ProgressStage::Analysis => 50,
            ProgressStage::PatientSummary => 75,
            ProgressStage::ClinicianSummary => 90,
            ProgressStage::Finalizing => 100,
        }
    }
}

/// What the progress indicator shows at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressSnapshot {
    pub label: &'static str,
    pub percent: u8,
}

impl ProgressSnapshot {
    pub fn initial() -> Self {
        Self {
            label: INITIAL_LABEL,
            percent: 0,
        }
    }

    pub fn at(stage: ProgressStage) -> Self {
        Self {
            label: stage.label(),
            percent: stage.percent(),
        }
    }
}

/// Text progress bar, e.g. `[██████░░░░] 60%`.
pub fn progress_bar(percent: u8, width: usize) -> String {
    let percent = percent.min(100) as usize;
    let filled = percent * width / 100;
    format!(
        "[{}{}] {percent}%",
        "█".repeat(filled),
        "░".repeat(width - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_is_monotonic_and_ends_at_100() {
        let percents: Vec<u8> = ProgressStage::SCRIPT.iter().map(|s| s.percent()).collect();
        assert_eq!(percents, vec![20, 50, 75, 90, 100]);
    }

    #[test]
    fn labels_match_script() {
        assert_eq!(ProgressStage::SCRIPT[0].label(), "Preprocessing medical text...");
        assert_eq!(ProgressStage::SCRIPT[4].label(), "Finalizing results...");
    }

    #[test]
    fn initial_snapshot() {
        let snap = ProgressSnapshot::initial();
        assert_eq!(snap.label, "Initializing...");
        assert_eq!(snap.percent, 0);
    }

    #[test]
    fn bar_rendering() {
        assert_eq!(progress_bar(0, 4), "[░░░░] 0%");
        assert_eq!(progress_bar(50, 4), "[██░░] 50%");
        assert_eq!(progress_bar(100, 4), "[████] 100%");
        assert_eq!(progress_bar(255, 4), "[████] 100%");
    }
}
