use crate::pipeline::types::{Condition, VitalSign};

const RECOMMENDATIONS: [&str; 6] = [
    "Continue cardiac monitoring and serial troponin levels",
    "Consider echocardiogram and stress testing if indicated",
    "Optimize medical therapy for comorbid conditions",
    "Patient education regarding symptoms requiring immediate attention",
    "Follow-up in cardiology clinic within 1-2 weeks",
    "Discharge planning with appropriate medications and instructions",
];

const DISPOSITION: &str = "DISPOSITION: Stable for discharge with close outpatient follow-up";

/// Section layout: header, then the gated bullet lines it may hold.
struct Section {
    header: &'static str,
    lines: &'static [(Condition, &'static str)],
}

const CHIEF_COMPLAINT: Section = Section {
    header: "CHIEF COMPLAINT & HISTORY:",
    lines: &[
        (Condition::ChestPain, "Patient presents with chest pain, requires cardiac workup"),
        (Condition::ShortnessOfBreath, "Dyspnea noted, consider cardiopulmonary etiology"),
    ],
};

const DIAGNOSTICS: Section = Section {
    header: "LABORATORY/DIAGNOSTIC FINDINGS:",
    lines: &[(
        Condition::ElevatedTroponin,
        "Troponin elevation suggests myocardial injury - recommend serial monitoring",
    )],
};

const COMORBIDITIES: Section = Section {
    header: "COMORBIDITIES:",
    lines: &[
        (Condition::Diabetes, "Diabetes mellitus - ensure optimal glycemic control"),
        (
            Condition::Hypertension,
            "Hypertension - monitor BP, adjust antihypertensive therapy as needed",
        ),
    ],
};

fn push_bullet(summary: &mut String, line: &str) {
    summary.push_str("• ");
    summary.push_str(line);
    summary.push('\n');
}

fn push_gated_lines(summary: &mut String, section: &Section, conditions: &[Condition]) {
    for (condition, line) in section.lines {
        if conditions.contains(condition) {
            push_bullet(summary, line);
        }
    }
}

/// Structured assessment for the clinician. Pure and deterministic.
///
/// Vitals are listed verbatim, comma-separated, under diagnostics.
pub fn compose_clinician_summary(conditions: &[Condition], vitals: &[VitalSign]) -> String {
    let mut summary = String::from("CLINICAL ASSESSMENT SUMMARY\n\n");

    summary.push_str(CHIEF_COMPLAINT.header);
    summary.push('\n');
    push_gated_lines(&mut summary, &CHIEF_COMPLAINT, conditions);

    summary.push('\n');
    summary.push_str(DIAGNOSTICS.header);
    summary.push('\n');
    push_gated_lines(&mut summary, &DIAGNOSTICS, conditions);
    if !vitals.is_empty() {
        let listed: Vec<&str> = vitals.iter().map(|v| v.matched.as_str()).collect();
        push_bullet(&mut summary, &format!("Vital signs: {}", listed.join(", ")));
    }

    summary.push('\n');
    summary.push_str(COMORBIDITIES.header);
    summary.push('\n');
    push_gated_lines(&mut summary, &COMORBIDITIES, conditions);

    summary.push_str("\nCLINICAL RECOMMENDATIONS:\n");
    for line in RECOMMENDATIONS {
        push_bullet(&mut summary, line);
    }
    summary.push('\n');

    summary.push_str(DISPOSITION);
    summary
}
