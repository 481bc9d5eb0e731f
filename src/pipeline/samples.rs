//! Bundled clinical notes for demos and tests.

/// A titled sample note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleCase {
    pub title: &'static str,
    pub text: &'static str,
}

pub const CARDIAC_CASE: SampleCase = SampleCase {
    title: "Cardiac Case",
    text: "45-year-old male presents to ED with acute onset chest pain radiating to left arm, \
           associated with shortness of breath and diaphoresis. Patient has history of diabetes \
           mellitus type 2 and hypertension. Vital signs: BP 160/95, HR 102, RR 22, O2 sat 96% on \
           room air. ECG shows ST elevation in leads II, III, aVF. Troponin I elevated at 15.2 \
           ng/mL (normal <0.04). Patient appears anxious but cooperative.",
};

pub const POST_OPERATIVE_CASE: SampleCase = SampleCase {
    title: "Post-Operative Case",
    text: "Post-operative day 3 following laparoscopic appendectomy. Patient reports moderate \
           incisional pain (6/10) and mild nausea. Surgical sites appear clean and dry without \
           signs of infection. Patient has been ambulating and tolerating clear liquids well. \
           Temperature 99.1°F, other vital signs stable. Patient has history of hypertension, \
           well-controlled on lisinopril. Ready for discharge with follow-up instructions.",
};

pub const DIABETES_CASE: SampleCase = SampleCase {
    title: "Diabetes Management",
    text: "62-year-old female with poorly controlled diabetes mellitus type 2 presents for \
           routine follow-up. HbA1c 9.8%, fasting glucose 245 mg/dL. Patient reports increased \
           fatigue, frequent urination, and blurred vision over past month. Current medications \
           include metformin 1000mg BID. Blood pressure 145/88. Microalbumin positive. Diabetic \
           retinopathy screening due. Patient counseled on importance of medication compliance \
           and dietary modifications.",
};

/// All bundled cases, in display order.
pub const SAMPLE_CASES: [SampleCase; 3] = [CARDIAC_CASE, POST_OPERATIVE_CASE, DIABETES_CASE];

/// One-line starters offered next to the input box.
pub const QUICK_SAMPLES: [&str; 3] = [
    "Patient presents with chest pain, shortness of breath, and elevated troponin levels...",
    "45-year-old male with diabetes mellitus type 2, hypertension, and recent onset of fatigue...",
    "Post-operative complications following appendectomy include wound infection and delayed healing...",
];

/// Look up a bundled case by 1-based position.
pub fn sample_case(number: usize) -> Option<SampleCase> {
    number
        .checked_sub(1)
        .and_then(|index| SAMPLE_CASES.get(index))
        .copied()
}
