//! Single owner of view state.
//!
//! `ViewState` is a plain value. Every user action is a method that consumes
//! the current state and returns the next one; `SummaryController` holds the
//! only copy and reports each new state to an observer.

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use super::progress::{ProgressSnapshot, ProgressStage};
use crate::config::SummarizerConfig;
use crate::pipeline::service::SummaryService;
use crate::pipeline::types::SummaryResult;

// ═══════════════════════════════════════════════════════════
// State
// ═══════════════════════════════════════════════════════════

/// Page section currently in focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Input,
    Output,
    Provenance,
    Model,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum ViewPhase {
    #[default]
    Idle,
    Processing { progress: ProgressSnapshot },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewState {
    pub input: String,
    pub phase: ViewPhase,
    pub summary: Option<SummaryResult>,
    pub selected_provenance: Option<String>,
    pub active_section: Section,
    pub disclaimer_open: bool,
}

impl ViewState {
    pub fn is_processing(&self) -> bool {
        matches!(self.phase, ViewPhase::Processing { .. })
    }

    /// Input counter shown under the text box.
    pub fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Submit is offered only for non-blank input while idle.
    pub fn can_submit(&self) -> bool {
        !self.input.trim().is_empty() && !self.is_processing()
    }

    pub fn with_input(self, input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..self
        }
    }

    /// Clear the previous result and show the output section at 0 %.
    pub fn begin_processing(self) -> Self {
        Self {
            phase: ViewPhase::Processing {
                progress: ProgressSnapshot::initial(),
            },
            summary: None,
            selected_provenance: None,
            active_section: Section::Output,
            ..self
        }
    }

    pub fn advance(self, stage: ProgressStage) -> Self {
        Self {
            phase: ViewPhase::Processing {
                progress: ProgressSnapshot::at(stage),
            },
            ..self
        }
    }

    /// Leave processing with whatever the service produced, if anything.
    pub fn finish(self, summary: Option<SummaryResult>) -> Self {
        Self {
            phase: ViewPhase::Idle,
            summary,
            ..self
        }
    }

    /// Select a citation; selecting the selected one again clears it.
    pub fn toggle_provenance(self, id: &str) -> Self {
        let selected_provenance = match self.selected_provenance.as_deref() {
            Some(current) if current == id => None,
            _ => Some(id.to_string()),
        };
        Self {
            selected_provenance,
            ..self
        }
    }

    pub fn navigate(self, section: Section) -> Self {
        Self {
            active_section: section,
            ..self
        }
    }

    pub fn set_disclaimer(self, open: bool) -> Self {
        Self {
            disclaimer_open: open,
            ..self
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Controller
// ═══════════════════════════════════════════════════════════

/// Why a submission was not started.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("Nothing to summarize: input is empty")]
    EmptyInput,

    #[error("A summary is already being generated")]
    AlreadyProcessing,
}

pub struct SummaryController {
    state: ViewState,
    service: SummaryService,
    step_interval: Duration,
}

impl SummaryController {
    pub fn new(service: SummaryService, config: &SummarizerConfig) -> Self {
        Self {
            state: ViewState::default(),
            service,
            step_interval: config.step_interval,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    fn transition(&mut self, next: impl FnOnce(ViewState) -> ViewState) {
        let current = std::mem::take(&mut self.state);
        self.state = next(current);
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        let input = input.into();
        self.transition(|s| s.with_input(input));
    }

    pub fn select_provenance(&mut self, id: &str) {
        self.transition(|s| s.toggle_provenance(id));
    }

    pub fn navigate(&mut self, section: Section) {
        self.transition(|s| s.navigate(section));
    }

    pub fn open_disclaimer(&mut self) {
        self.transition(|s| s.set_disclaimer(true));
    }

    pub fn close_disclaimer(&mut self) {
        self.transition(|s| s.set_disclaimer(false));
    }

    /// Play the progress script, then await the service.
    ///
    /// `on_change` sees every intermediate state. A service failure is logged
    /// and leaves `summary` unset; it is not an error of the submission.
    /// Dropping the future partway leaves the controller idle with no result.
    pub async fn submit(&mut self, mut on_change: impl FnMut(&ViewState)) -> Result<(), ViewError> {
        if self.state.is_processing() {
            return Err(ViewError::AlreadyProcessing);
        }
        if !self.state.can_submit() {
            return Err(ViewError::EmptyInput);
        }

        let text = self.state.input.clone();
        let mut run = ProcessingGuard::begin(self);
        on_change(&run.controller.state);

        for stage in ProgressStage::SCRIPT {
            run.controller.transition(|s| s.advance(stage));
            on_change(&run.controller.state);
            tokio::time::sleep(run.controller.step_interval).await;
        }

        let summary = match run.controller.service.generate_summaries(&text).await {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::error!(error = %e, "Error processing text");
                None
            }
        };

        run.complete(summary);
        on_change(&self.state);
        Ok(())
    }
}

/// Holds the controller while a submission is in flight.
///
/// Dropped without `complete`, it returns the state to idle.
struct ProcessingGuard<'a> {
    controller: &'a mut SummaryController,
    finished: bool,
}

impl<'a> ProcessingGuard<'a> {
    fn begin(controller: &'a mut SummaryController) -> Self {
        controller.transition(ViewState::begin_processing);
        Self {
            controller,
            finished: false,
        }
    }

    fn complete(mut self, summary: Option<SummaryResult>) {
        self.controller.transition(|s| s.finish(summary));
        self.finished = true;
    }
}

impl Drop for ProcessingGuard<'_> {
    fn drop(&mut self) {
        if !self.finished {
            tracing::warn!("Summary request abandoned before completion");
            self.controller.transition(|s| s.finish(None));
        }
    }
}
