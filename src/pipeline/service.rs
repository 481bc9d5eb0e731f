//! Summarization facade: artificial delay, then extract → compose → cite.
//!
//! The service owns a `Summarizer` collaborator. `TemplateSummarizer` is the
//! keyword/template implementation; a real inference backend would implement
//! the same trait and leave the facade and the view untouched.

use std::sync::Mutex;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use uuid::Uuid;

use super::compose::{compose_clinician_summary, compose_patient_summary};
use super::conditions::extract_conditions;
use super::provenance::build_provenance;
use super::types::{SummaryError, SummaryResult};
use super::vitals::extract_vitals;
use crate::config::SummarizerConfig;

// ═══════════════════════════════════════════════════════════
// Summarizer seam
// ═══════════════════════════════════════════════════════════

/// Produces a full `SummaryResult` for one note, synchronously.
pub trait Summarizer {
    fn summarize(&self, text: &str) -> Result<SummaryResult, SummaryError>;
}

/// Keyword extraction plus fixed templates. Only provenance confidence is random.
pub struct TemplateSummarizer {
    rng: Mutex<StdRng>,
}

impl TemplateSummarizer {
    /// Confidence scores seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible confidence scores.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for TemplateSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer for TemplateSummarizer {
    fn summarize(&self, text: &str) -> Result<SummaryResult, SummaryError> {
        let conditions = extract_conditions(text);
        let vitals = extract_vitals(text);
        tracing::debug!(
            conditions = conditions.len(),
            vitals = vitals.len(),
            "Extraction complete"
        );

        let patient_summary = compose_patient_summary(&conditions);
        let clinician_summary = compose_clinician_summary(&conditions, &vitals);

        let provenance = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|_| SummaryError::Internal("confidence source lock poisoned".into()))?;
            build_provenance(text, &mut *rng)
        };

        Ok(SummaryResult {
            patient_summary,
            clinician_summary,
            provenance,
        })
    }
}

// ═══════════════════════════════════════════════════════════
// Facade
// ═══════════════════════════════════════════════════════════

/// Lifecycle of the most recent request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceState {
    Idle,
    Processing,
    Complete,
    Failed,
}

/// Wraps a `Summarizer` behind a fixed, uncancellable delay.
pub struct SummaryService {
    summarizer: Box<dyn Summarizer + Send + Sync>,
    processing_delay: Duration,
    state: ServiceState,
}

impl SummaryService {
    pub fn new(summarizer: Box<dyn Summarizer + Send + Sync>, config: &SummarizerConfig) -> Self {
        Self {
            summarizer,
            processing_delay: config.processing_delay,
            state: ServiceState::Idle,
        }
    }

    /// Service backed by [`TemplateSummarizer`].
    pub fn with_templates(config: &SummarizerConfig) -> Self {
        Self::new(Box::new(TemplateSummarizer::new()), config)
    }

    pub fn state(&self) -> ServiceState {
        self.state
    }

    /// Wait out the simulated delay, then summarize `text`.
    ///
    /// Errors are logged and returned as-is: no retry, no partial result.
    pub async fn generate_summaries(&mut self, text: &str) -> Result<SummaryResult, SummaryError> {
        let request_id = Uuid::new_v4();
        self.state = ServiceState::Processing;
        tracing::info!(
            %request_id,
            chars = text.chars().count(),
            delay = ?self.processing_delay,
            "Summarization started"
        );

        tokio::time::sleep(self.processing_delay).await;

        match self.summarizer.summarize(text) {
            Ok(result) => {
                self.state = ServiceState::Complete;
                tracing::info!(
                    %request_id,
                    citations = result.provenance.len(),
                    "Summarization complete"
                );
                Ok(result)
            }
            Err(e) => {
                self.state = ServiceState::Failed;
                tracing::error!(%request_id, error = %e, "Summarization failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::samples::CARDIAC_CASE;

    struct FailingSummarizer;

    impl Summarizer for FailingSummarizer {
        fn summarize(&self, _text: &str) -> Result<SummaryResult, SummaryError> {
            Err(SummaryError::Internal("backend unavailable".into()))
        }
    }

    fn seeded_service(delay_ms: u64) -> SummaryService {
        let config = SummarizerConfig {
            processing_delay: Duration::from_millis(delay_ms),
            ..SummarizerConfig::default()
        };
        SummaryService::new(Box::new(TemplateSummarizer::with_seed(1)), &config)
    }

    #[test]
    fn template_summaries_are_reproducible() {
        let a = TemplateSummarizer::new().summarize(CARDIAC_CASE.text).unwrap();
        let b = TemplateSummarizer::new().summarize(CARDIAC_CASE.text).unwrap();
        assert_eq!(a.patient_summary, b.patient_summary);
        assert_eq!(a.clinician_summary, b.clinician_summary);
        let ids_a: Vec<&str> = a.provenance.iter().map(|p| p.id.as_str()).collect();
        let ids_b: Vec<&str> = b.provenance.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids_a, ids_b);
    }

    #[test]
    fn cardiac_case_end_to_end() {
        let result = TemplateSummarizer::with_seed(3).summarize(CARDIAC_CASE.text).unwrap();
        assert!(result.patient_summary.contains("chest discomfort"));
        assert!(result.patient_summary.contains("Your diabetes management"));
        assert!(!result.patient_summary.contains("protein called troponin"));
        assert!(result.clinician_summary.contains("Dyspnea noted"));
        assert!(result.clinician_summary.contains("• Vital signs: BP 160/95, HR 102\n"));
        assert!(!result.provenance.is_empty());
    }

    #[test]
    fn blank_text_yields_boilerplate_only() {
        let summarizer = TemplateSummarizer::with_seed(0);
        let result = summarizer.summarize("   \n").unwrap();
        assert!(result.provenance.is_empty());
        assert_eq!(result.patient_summary, compose_patient_summary(&[]));
        assert_eq!(result.clinician_summary, compose_clinician_summary(&[], &[]));
    }

    #[tokio::test(start_paused = true)]
    async fn service_waits_for_delay_then_completes() {
        let mut service = seeded_service(2000);
        assert_eq!(service.state(), ServiceState::Idle);

        let started = tokio::time::Instant::now();
        let result = service.generate_summaries(CARDIAC_CASE.text).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(2000));
        assert_eq!(service.state(), ServiceState::Complete);
        assert!(!result.provenance.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn service_failure_propagates() {
        let mut service =
            SummaryService::new(Box::new(FailingSummarizer), &SummarizerConfig::default());
        let started = tokio::time::Instant::now();

        let err = service.generate_summaries("chest pain").await.unwrap_err();

        assert_eq!(err, SummaryError::Internal("backend unavailable".into()));
        assert_eq!(service.state(), ServiceState::Failed);
        // The delay runs to completion before the failure is observable.
        assert!(started.elapsed() >= Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn service_handles_follow_up_request() {
        let mut service = seeded_service(0);
        service.generate_summaries("").await.unwrap();
        assert_eq!(service.state(), ServiceState::Complete);
        let again = service.generate_summaries("Hx hypertension.").await.unwrap();
        assert_eq!(again.provenance.len(), 1);
    }

    #[test]
    fn service_state_serializes() {
        let json = serde_json::to_string(&ServiceState::Processing).unwrap();
        assert_eq!(json, "\"processing\"");
    }
}
