pub mod types;
pub mod conditions; // Closed-vocabulary condition scan
pub mod vitals; // First-match vital-sign patterns
pub mod provenance; // Sentence citations with first-occurrence spans
pub mod compose; // Patient and clinician templates
pub mod samples;
pub mod service; // Summarization facade + Summarizer seam
