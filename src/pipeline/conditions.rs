use super::types::Condition;

/// Every vocabulary term present in `text` as a case-insensitive substring.
///
/// Output follows [`Condition::ALL`] order and holds each term at most once.
/// No negation handling: "denies chest pain" still yields `ChestPain`.
pub fn extract_conditions(text: &str) -> Vec<Condition> {
    let lowered = text.to_lowercase();
    Condition::ALL
        .into_iter()
        .filter(|condition| lowered.contains(condition.term()))
        .collect()
}
