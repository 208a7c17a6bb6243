use super::types::{ResourceSet, TriageSignal};
use crate::models::{PrimarySymptom, RedFlag};

/// Opening assistant message for a fresh session.
pub const GREETING: &str = "Hello! I'm here to help with your mental health triage assessment. \
     Please describe how you're feeling or any concerns you have.";

/// "Mental Health - <SYMPTOM>" label for the triage panel.
pub fn category_label(symptom: PrimarySymptom) -> String {
    format!("Mental Health - {}", symptom.label().to_uppercase())
}

/// Assistant chat message summarising the turn.
pub fn assistant_reply(signal: &TriageSignal, resources: &ResourceSet) -> String {
    let mut reply = format!(
        "Thank you for sharing that with me. Based on your message, I've identified \"{}\" as the primary concern. ",
        signal.primary_symptom.label()
    );

    if !signal.red_flags.is_empty() {
        let flags: Vec<&str> = signal.red_flags.iter().map(RedFlag::as_str).collect();
        reply.push_str("I've also noted some important flags: ");
        reply.push_str(&flags.join(", "));
        reply.push_str(". ");
    }

    reply.push_str("Let me provide you with an appropriate assessment and recommendations.");

    if !resources.is_empty() {
        reply.push_str(" I've also found some relevant resources that might help.");
    }

    reply
}
