//! Template summaries. The patient and clinician variants share nothing but
//! their inputs; each gates its own paragraphs on the extracted conditions.

pub mod clinician;
pub mod patient;

pub use clinician::compose_clinician_summary;
pub use patient::compose_patient_summary;
