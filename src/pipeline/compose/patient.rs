use crate::pipeline::types::Condition;

const OPENING: &str = "Your recent medical evaluation shows some important findings that your \
                       healthcare team wants to discuss with you.\n\n";

/// Conditions that add a paragraph, with the paragraph they add. Checked in order.
const CONDITION_PARAGRAPHS: [(Condition, &str); 4] = [
    (
        Condition::ChestPain,
        "You mentioned experiencing chest discomfort. This is something we take seriously \
         and want to investigate further to make sure your heart is healthy.\n\n",
    ),
    (
        Condition::ElevatedTroponin,
        "Your blood tests show elevated levels of a protein called troponin, which can \
         indicate that your heart muscle has been under stress.\n\n",
    ),
    (
        Condition::Diabetes,
        "Your diabetes management is an important part of your overall health. We'll work \
         together to keep your blood sugar levels in a healthy range.\n\n",
    ),
    (
        Condition::Hypertension,
        "Your blood pressure readings are higher than we'd like to see. This is manageable \
         with the right treatment plan.\n\n",
    ),
];

const WHAT_THIS_MEANS: &str = "What this means for you:\n\
    • Your doctor will explain these findings in detail during your visit\n\
    • We may recommend some additional tests to get a complete picture\n\
    • There are effective treatments available to help manage your condition\n\
    • Following your treatment plan will help improve your health outcomes\n\n";

const REASSURANCE: &str = "Remember: Having these findings doesn't mean you can't live a full, \
                           healthy life. Many people successfully manage similar conditions \
                           with proper care and lifestyle adjustments.";

/// Plain-language summary for the patient. Pure and deterministic.
pub fn compose_patient_summary(conditions: &[Condition]) -> String {
    let mut summary = String::from(OPENING);

    for (condition, paragraph) in CONDITION_PARAGRAPHS {
        if conditions.contains(&condition) {
            summary.push_str(paragraph);
        }
    }

    summary.push_str(WHAT_THIS_MEANS);
    summary.push_str(REASSURANCE);
    summary
}
